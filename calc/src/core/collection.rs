//! Higher-order operations over integer sequences.
//!
//! Every function borrows its input and returns a fresh value; the source
//! slice is never reordered or mutated.

use std::cmp::Ordering;

/// Keep elements with a nonzero remainder modulo 2 (negatives included).
pub fn filter_odd(numbers: &[i64]) -> Vec<i64> {
    filter(numbers, |n| n % 2 != 0)
}

/// Keep elements with a zero remainder modulo 2.
pub fn filter_even(numbers: &[i64]) -> Vec<i64> {
    filter(numbers, |n| n % 2 == 0)
}

/// Keep elements matching `predicate`, preserving relative order.
pub fn filter<P>(numbers: &[i64], mut predicate: P) -> Vec<i64>
where
    P: FnMut(i64) -> bool,
{
    numbers.iter().copied().filter(|&n| predicate(n)).collect()
}

/// Sorted copy, ascending or descending.
pub fn sort(numbers: &[i64], ascending: bool) -> Vec<i64> {
    if ascending {
        sort_by(numbers, |a, b| a.cmp(b))
    } else {
        sort_by(numbers, |a, b| b.cmp(a))
    }
}

/// Sorted copy ordered by `comparator`. Stable: equal elements keep input order.
pub fn sort_by<C>(numbers: &[i64], comparator: C) -> Vec<i64>
where
    C: FnMut(&i64, &i64) -> Ordering,
{
    let mut sorted = numbers.to_vec();
    sorted.sort_by(comparator);
    sorted
}

/// One output per input, in input order.
pub fn map<T, F>(numbers: &[i64], transform: F) -> Vec<T>
where
    F: FnMut(i64) -> T,
{
    numbers.iter().copied().map(transform).collect()
}

/// Strict left fold starting from `initial`.
pub fn reduce<T, F>(numbers: &[i64], initial: T, operation: F) -> T
where
    F: FnMut(T, i64) -> T,
{
    numbers.iter().copied().fold(initial, operation)
}
