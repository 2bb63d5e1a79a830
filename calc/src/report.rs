//! Rendering for `calc students` and `calc cart`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::grade::LetterGrade;
use crate::core::records::{ShoppingItem, StudentRecord};
use crate::core::reports::{format_student, passing_students_by_average, summarize_cart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per entry.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON shape of a ranked student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStudent {
    pub rank: usize,
    pub name: String,
    pub average: f64,
    pub letter_grade: LetterGrade,
}

pub fn render_students(students: &[StudentRecord], format: OutputFormat) -> Result<String> {
    let ranked = passing_students_by_average(students);
    match format {
        OutputFormat::Text => Ok(join_lines(ranked.into_iter().map(format_student))),
        OutputFormat::Json => {
            let rows: Vec<RankedStudent> = ranked
                .into_iter()
                .enumerate()
                .map(|(index, student)| RankedStudent {
                    rank: index + 1,
                    name: student.name.clone(),
                    average: student.average(),
                    letter_grade: student.letter_grade(),
                })
                .collect();
            to_json(&rows)
        }
    }
}

pub fn render_cart(items: &[ShoppingItem], format: OutputFormat) -> Result<String> {
    let summary = summarize_cart(items);
    match format {
        OutputFormat::Text => Ok(join_lines([
            format!("total: {:.2}", summary.total),
            format!("expensive: {}", summary.expensive_names.join(", ")),
            format!("cheap: {}", summary.cheap_names.join(", ")),
        ])),
        OutputFormat::Json => to_json(&summary),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
    payload.push('\n');
    Ok(payload)
}

fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
