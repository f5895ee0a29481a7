use crate::{common::indented_println, index::DEFAULT_INDEX};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: i64 = 93;

/// Computes the n-th Fibonacci number with `F(0) = 0` and `F(1) = 1`.
///
/// Indices below zero clamp to `0`. The recursion is the plain doubly
/// recursive definition, so the running time grows as roughly `φ^n`.
pub fn fibonacci(n: i64) -> u64 {
    fibonacci_at_depth(n, 0)
}

/// Same as [`fibonacci`], treating a missing index as [`DEFAULT_INDEX`].
pub fn fibonacci_or_default(n: Option<i64>) -> u64 {
    fibonacci(n.unwrap_or(DEFAULT_INDEX))
}

fn fibonacci_at_depth(n: i64, depth: usize) -> u64 {
    if n <= 1 {
        let value = n.max(0) as u64;
        indented_println!(depth, "fib({n}) = {value}");
        return value;
    }
    indented_println!(depth, "fib({n})");
    let value = fibonacci_at_depth(n - 1, depth + 1) + fibonacci_at_depth(n - 2, depth + 1);
    indented_println!(depth, "=> {value}");
    value
}
