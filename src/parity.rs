// Copyright 2024 Martin Pool

//! Even or odd.

/// True if `number` is divisible by two.
///
/// The remainder of a negative odd number is -1, but it's still nonzero, so
/// negatives work the same as positives.
pub fn is_even(number: i32) -> bool {
    number % 2 == 0
}
