// Copyright 2024 Martin Pool

//! Say hello.

/// Return a greeting for `name`, like `"Hello, Alice!"`.
///
/// Any name is accepted, including an empty one.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
