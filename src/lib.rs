mod common;
mod error;
mod index;
mod sequence;

pub use {
    common::set_debug,
    error::Error,
    index::{Index, DEFAULT_INDEX},
    sequence::{fibonacci, fibonacci_or_default, MAX_INDEX},
};
