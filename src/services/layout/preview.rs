//! Injects the draft event of an active gesture into a day's events.

use std::borrow::Cow;

use crate::models::event::Event;
use crate::models::preview::{preview_id, DragPreview, PreviewPolicy};

/// Events to lay out while `preview` is active.
///
/// Without a preview, or when the preview targets an event that is not in
/// `events` (deleted mid-gesture), the input is returned as is.
pub fn inject_preview<'a>(
    events: &'a [Event],
    preview: Option<&DragPreview>,
    policy: PreviewPolicy,
) -> Cow<'a, [Event]> {
    let Some(preview) = preview else {
        return Cow::Borrowed(events);
    };

    let Some(original) = events.iter().find(|event| preview.targets(event)) else {
        log::debug!(
            "Preview targets unknown event {}, laying out without it",
            preview.event_id
        );
        return Cow::Borrowed(events);
    };

    let injected = match policy {
        PreviewPolicy::Ghost => {
            let draft = original.with_times(
                ghost_id(events, &original.id),
                preview.temp_start,
                preview.temp_end,
            );
            let mut all = events.to_vec();
            all.push(draft);
            all
        }
        PreviewPolicy::Replace => {
            let draft =
                original.with_times(original.id.clone(), preview.temp_start, preview.temp_end);
            let mut all: Vec<Event> = events
                .iter()
                .filter(|event| !preview.targets(event))
                .cloned()
                .collect();
            all.push(draft);
            all
        }
    };

    Cow::Owned(injected)
}

/// `<id>-preview`, extended with further suffixes until no event in `events` has it.
fn ghost_id(events: &[Event], id: &str) -> String {
    let mut candidate = preview_id(id);
    while events.iter().any(|event| event.id == candidate) {
        log::debug!("Ghost id {} is taken, extending it", candidate);
        candidate = preview_id(&candidate);
    }
    candidate
}
