// Copyright 2024 Martin Pool

//! Primality by trial division.

/// True if `number` is prime.
///
/// Numbers below 2, including all negative numbers, are not prime. Otherwise
/// every candidate divisor from 2 up to and including the integer square root
/// is tried, stopping at the first one that divides evenly.
pub fn is_prime(number: i32) -> bool {
    if number <= 1 {
        return false;
    }
    // Widen so that `i * i` can't overflow near i32::MAX.
    let n = i64::from(number);
    (2i64..)
        .take_while(|i| i * i <= n)
        .all(|i| n % i != 0)
}
