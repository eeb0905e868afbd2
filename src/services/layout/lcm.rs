//! Least-common-multiple normalisation of group widths for track layout.

pub fn gcd(mut left: u32, mut right: u32) -> u32 {
    while right != 0 {
        let rem = left % right;
        left = right;
        right = rem;
    }
    left
}

/// Least common multiple; 0 if either side is 0, `None` if it does not fit in a `u32`.
pub fn checked_lcm(left: u32, right: u32) -> Option<u32> {
    if left == 0 || right == 0 {
        return Some(0);
    }
    let product = u64::from(left / gcd(left, right)).checked_mul(u64::from(right))?;
    u32::try_from(product).ok()
}

/// Exact common track count that every group width divides.
///
/// An empty day has a single track. `None` when the multiple overflows `u32`.
pub fn try_calculate_lcm(counts: &[u32]) -> Option<u32> {
    match counts {
        [] => Some(1),
        [only] => Some(*only),
        _ => counts
            .iter()
            .try_fold(1, |acc, &count| checked_lcm(acc, count)),
    }
}

/// Common track count for a day's group widths.
///
/// When the exact multiple does not fit in a `u32` the widest group is used
/// instead; narrower groups then get spans rounded down and leave trailing
/// tracks empty.
pub fn calculate_lcm(counts: &[u32]) -> u32 {
    try_calculate_lcm(counts).unwrap_or_else(|| {
        let widest = counts.iter().copied().max().unwrap_or(1).max(1);
        log::warn!(
            "Track count for group widths {:?} overflows, using {} tracks",
            counts,
            widest
        );
        widest
    })
}
