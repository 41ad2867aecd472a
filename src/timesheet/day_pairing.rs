//! The fixed day-of-month pairing of the timesheet template.
//!
//! The template prints two half-months side by side: days 1-16 on the left,
//! days 17-31 on the right of the same physical row. Day 16 has no partner.

/// Partner of each day of month, indexed by day. Index 0 is unused.
pub const DAY_PAIRING: [Option<u32>; 32] = [
    None,
    Some(17),
    Some(18),
    Some(19),
    Some(20),
    Some(21),
    Some(22),
    Some(23),
    Some(24),
    Some(25),
    Some(26),
    Some(27),
    Some(28),
    Some(29),
    Some(30),
    Some(31),
    None,
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(13),
    Some(14),
    Some(15),
];

/// Returns the day printed on the same physical row as `day`.
///
/// `None` for day 16 and for anything outside 1..=31.
///
/// # Examples
///
/// ```
/// use timesheet_engine::timesheet::pair_day;
///
/// assert_eq!(pair_day(5), Some(21));
/// assert_eq!(pair_day(21), Some(5));
/// assert_eq!(pair_day(16), None);
/// ```
pub fn pair_day(day: u32) -> Option<u32> {
    DAY_PAIRING.get(day as usize).copied().flatten()
}
