//! Step cursor arithmetic.
//!
//! The cursor advances one column at a time, left to right. `column` is the
//! column being revealed and `round` counts how many times the cursor has
//! passed over it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub column: usize,
    pub round: usize,
}

/// Split a cursor value into column index and round. `columns` must be at
/// least one.
pub fn step_info(step: usize, columns: usize) -> StepInfo {
    debug_assert!(columns > 0, "step_info requires at least one column");
    StepInfo {
        column: step % columns,
        round: step / columns,
    }
}

/// Length of one full cycle: every column shows each photo of the longest
/// column once.
pub fn max_steps<I>(photo_counts: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut columns = 0;
    let mut longest = 0;
    for count in photo_counts {
        columns += 1;
        longest = longest.max(count);
    }
    columns * longest
}

pub fn step_forward(step: usize, max: usize) -> usize {
    if step + 1 >= max { 0 } else { step + 1 }
}

pub fn step_back(step: usize, max: usize) -> usize {
    if step == 0 {
        max.saturating_sub(1)
    } else {
        step - 1
    }
}

/// Round a column should be showing while the cursor sits at `current`.
///
/// Columns up to and including the current one are on the current round;
/// later columns have not been reached yet and still show the previous round,
/// or nothing when the cursor is still on its first pass.
pub fn column_round(column: usize, current: StepInfo) -> Option<usize> {
    if column <= current.column {
        Some(current.round)
    } else {
        current.round.checked_sub(1)
    }
}
