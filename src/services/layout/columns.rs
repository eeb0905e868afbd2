//! First-fit column assignment within one overlap group.

use crate::models::event::Event;
use crate::models::layout::ColumnAssignment;

use super::overlap::{chronological, events_overlap};

/// Assign each event of `group` to the leftmost column it fits in.
///
/// Events are placed in chronological order. Every member gets the final column
/// count of the group. Output is ordered by column, then by placement.
pub fn assign_columns<'a>(group: &[&'a Event]) -> Vec<ColumnAssignment<'a>> {
    let mut sorted = group.to_vec();
    sorted.sort_by(|a, b| chronological(a, b));

    let mut columns: Vec<Vec<&'a Event>> = Vec::new();
    for event in sorted {
        let free = columns
            .iter_mut()
            .find(|column| column.iter().all(|placed| !events_overlap(placed, event)));
        match free {
            Some(column) => column.push(event),
            None => columns.push(vec![event]),
        }
    }

    let total_columns = columns.len() as u32;
    columns
        .into_iter()
        .enumerate()
        .flat_map(|(column, members)| {
            members.into_iter().map(move |event| ColumnAssignment {
                event,
                column: column as u32,
                total_columns,
            })
        })
        .collect()
}

/// Column count of an assigned group; 1 for an empty group.
pub fn group_width(assignments: &[ColumnAssignment<'_>]) -> u32 {
    assignments.first().map_or(1, |a| a.total_columns)
}
