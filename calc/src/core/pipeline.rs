//! Chained collection pipeline: evens, squared, thresholded, top-N.

use crate::core::collection::{filter_even, map};

/// Squares of the even values that exceed `threshold`, largest first, at most `limit`.
///
/// Squares are computed in `i128`, which holds the square of any `i64`.
pub fn top_even_squares(numbers: &[i64], threshold: i64, limit: usize) -> Vec<i128> {
    let threshold = i128::from(threshold);
    let mut ranked: Vec<i128> = map(&filter_even(numbers), |n| i128::from(n) * i128::from(n))
        .into_iter()
        .filter(|&sq| sq > threshold)
        .collect();
    ranked.sort_by(|a, b| b.cmp(a));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_ten() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(top_even_squares(&numbers, 10, 3), vec![100, 64, 36]);
    }

    #[test]
    fn fewer_than_limit() {
        assert_eq!(top_even_squares(&[2, 4, 5], 10, 3), vec![16]);
        assert!(top_even_squares(&[1, 3, 5], 0, 3).is_empty());
    }

    #[test]
    fn negative_evens_square_positive() {
        assert_eq!(top_even_squares(&[-6, 2, 4], 10, 5), vec![36, 16]);
    }

    #[test]
    fn zero_limit_is_empty() {
        assert!(top_even_squares(&[2, 4, 6], 0, 0).is_empty());
    }

    /// Squares beyond `i64::MAX` are exact instead of overflowing.
    #[test]
    fn large_evens_do_not_overflow() {
        assert_eq!(
            top_even_squares(&[4_000_000_000, 2], 10, 3),
            vec![16_000_000_000_000_000_000]
        );
        let min_even = i64::MIN;
        assert_eq!(
            top_even_squares(&[min_even], i64::MAX, 1),
            vec![i128::from(i64::MIN) * i128::from(i64::MIN)]
        );
    }
}
