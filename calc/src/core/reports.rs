//! Domain reports built from the collection primitives.

use serde::Serialize;

use crate::core::records::{ShoppingItem, StudentRecord};

/// Items whose total is strictly above this land in `expensive_names`.
pub const EXPENSIVE_ABOVE: f64 = 100.0;
/// Items whose total is at or below this land in `cheap_names`.
pub const CHEAP_AT_MOST: f64 = 50.0;

/// Cart totals plus the two price tiers.
///
/// The tiers leave a gap: a total in `(50, 100]` is in neither list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub total: f64,
    pub expensive_names: Vec<String>,
    pub cheap_names: Vec<String>,
}

/// Passing students, best average first.
///
/// The sort is stable, so students with equal averages keep input order.
pub fn passing_students_by_average(students: &[StudentRecord]) -> Vec<&StudentRecord> {
    let mut passing: Vec<&StudentRecord> = students.iter().filter(|s| s.passed()).collect();
    passing.sort_by(|a, b| b.average().total_cmp(&a.average()));
    passing
}

/// Render one ranking line: `name: LG (avg)` with one decimal.
pub fn format_student(student: &StudentRecord) -> String {
    format!(
        "{}: {} ({:.1})",
        student.name,
        student.letter_grade(),
        student.average()
    )
}

/// Ranked, formatted lines for every passing student.
pub fn rank_passing_students(students: &[StudentRecord]) -> Vec<String> {
    passing_students_by_average(students)
        .into_iter()
        .map(format_student)
        .collect()
}

pub fn summarize_cart(items: &[ShoppingItem]) -> CartSummary {
    let total = items.iter().map(ShoppingItem::total_price).sum();
    CartSummary {
        total,
        expensive_names: names_where(items, |price| price > EXPENSIVE_ABOVE),
        cheap_names: names_where(items, |price| price <= CHEAP_AT_MOST),
    }
}

fn names_where(items: &[ShoppingItem], keep: impl Fn(f64) -> bool) -> Vec<String> {
    items
        .iter()
        .filter(|item| keep(item.total_price()))
        .map(|item| item.name.clone())
        .collect()
}
