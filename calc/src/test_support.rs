//! Test-only helpers for constructing report inputs.

use crate::core::records::{ShoppingItem, StudentRecord};
use crate::io::config::DemoConfig;

/// Student with the given grades.
pub fn student(name: &str, grades: &[f64]) -> StudentRecord {
    StudentRecord::new(name, grades.to_vec())
}

pub fn item(name: &str, unit_price: f64, quantity: u32) -> ShoppingItem {
    ShoppingItem::new(name, unit_price, quantity)
}

/// The five built-in students (averages 86.8, 80.8, 46.6, 96.0, 70.6).
pub fn sample_students() -> Vec<StudentRecord> {
    DemoConfig::default().students
}

/// The five built-in cart items (totals 2500, 50, 150, 105, 50).
pub fn sample_cart() -> Vec<ShoppingItem> {
    DemoConfig::default().cart
}
