//! Value records consumed by the domain reports.

use serde::{Deserialize, Serialize};

use crate::core::grade::{LetterGrade, letter_grade};

/// Minimum average for a passing student.
pub const PASS_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(default)]
    pub grades: Vec<f64>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grades: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    /// Arithmetic mean of the grades; `0.0` when there are none.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    pub fn passed(&self) -> bool {
        self.average() >= PASS_THRESHOLD
    }

    pub fn letter_grade(&self) -> LetterGrade {
        letter_grade(self.average())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
