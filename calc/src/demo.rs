//! Walkthrough for `calc demo`.
//!
//! Builds the full report as lines so the binary only has to print them.

use tracing::debug;

use crate::core::collection::{filter, filter_even, filter_odd, map, reduce, sort, sort_by};
use crate::core::dispatcher::{
    Operation, calculate, calculate_with_strategy, fold_with_strategy, try_fold_with_strategy,
};
use crate::core::pipeline::top_even_squares;
use crate::core::reports::{CHEAP_AT_MOST, EXPENSIVE_ABOVE, rank_passing_students, summarize_cart};
use crate::io::config::DemoConfig;

/// Fixed input for the absolute-value sort, chosen to include negatives.
const SIGNED_SAMPLE: [i64; 5] = [-5, 3, -2, 8, -1];

pub fn demo_lines(cfg: &DemoConfig) -> Vec<String> {
    let mut lines = Vec::new();
    calculator_section(cfg, &mut lines);
    strategy_section(cfg, &mut lines);
    array_section(&cfg.numbers, &mut lines);
    reports_section(cfg, &mut lines);
    pipeline_section(cfg, &mut lines);
    debug!(lines = lines.len(), "demo rendered");
    lines
}

fn calculator_section(cfg: &DemoConfig, lines: &mut Vec<String>) {
    let (a, b) = (cfg.operands.a, cfg.operands.b);
    lines.push("== Calculator".to_string());
    lines.push(format!("Numbers: {a} and {b}"));
    for op in Operation::ALL {
        let label = capitalize(&op.to_string());
        let line = match calculate(a, b, op) {
            Ok(value) if op == Operation::Division => {
                format!("{label}: {a} {} {b} = {value:.2}", op.symbol())
            }
            Ok(value) => format!("{label}: {a} {} {b} = {value}", op.symbol()),
            Err(err) => format!("{label} error: {err}"),
        };
        lines.push(line);
    }
    if let Err(err) = calculate(a, 0.0, Operation::Division) {
        lines.push(format!("Error caught: {a} ÷ 0: {err}"));
    }
}

fn strategy_section(cfg: &DemoConfig, lines: &mut Vec<String>) {
    let (a, b) = (cfg.operands.a, cfg.operands.b);
    lines.push("== Strategies".to_string());
    lines.push(format!(
        "Strategy addition: {}",
        calculate_with_strategy(a, b, |x, y| x + y)
    ));
    lines.push(format!(
        "Strategy multiplication: {}",
        calculate_with_strategy(a, b, |x, y| x * y)
    ));

    let as_real: Vec<f64> = cfg.numbers.iter().map(|&n| n as f64).collect();
    lines.push(format!(
        "Fold addition: {}",
        describe_fold(fold_with_strategy(&as_real, |x, y| x + y))
    ));
    let folded_division =
        try_fold_with_strategy(&as_real, |x, y| calculate(x, y, Operation::Division));
    lines.push(match folded_division {
        Ok(value) => format!("Fold division: {}", describe_fold(value)),
        Err(err) => format!("Fold division error: {err}"),
    });
    lines.push(format!(
        "Fold over empty input: {}",
        describe_fold(fold_with_strategy(&[], |x, y| x + y))
    ));
}

fn array_section(numbers: &[i64], lines: &mut Vec<String>) {
    lines.push("== Array operations".to_string());
    lines.push(format!("Original array: {numbers:?}"));
    lines.push(format!("Odd numbers: {:?}", filter_odd(numbers)));
    lines.push(format!("Even numbers: {:?}", filter_even(numbers)));
    lines.push(format!(
        "Numbers greater than 10: {:?}",
        filter(numbers, |n| n > 10)
    ));
    lines.push(format!("Ascending order: {:?}", sort(numbers, true)));
    lines.push(format!("Descending order: {:?}", sort(numbers, false)));
    lines.push(format!(
        "Sorting by absolute value: {:?}",
        sort_by(&SIGNED_SAMPLE, |x, y| x.abs().cmp(&y.abs()))
    ));
    let squares: Option<Vec<i64>> = map(numbers, |n| n.checked_mul(n)).into_iter().collect();
    lines.push(format!("Squares: {}", describe_checked(squares)));
    let labels = map(numbers, |n| format!("Number: {n}"));
    lines.push(format!(
        "String conversion: {:?}...",
        &labels[..labels.len().min(3)]
    ));
    let sum = reduce(numbers, Some(0_i64), |acc, n| acc?.checked_add(n));
    lines.push(format!("Sum: {}", describe_checked(sum)));
    lines.push(format!(
        "Product (1-5): {}",
        reduce(&[1, 2, 3, 4, 5], 1, |acc, n| acc * n)
    ));
}

fn reports_section(cfg: &DemoConfig, lines: &mut Vec<String>) {
    lines.push("== Student grades".to_string());
    let ranked = rank_passing_students(&cfg.students);
    if ranked.is_empty() {
        lines.push("   (no passing students)".to_string());
    }
    lines.extend(ranked.into_iter().map(|line| format!("   {line}")));

    lines.push("== Shopping cart".to_string());
    let summary = summarize_cart(&cfg.cart);
    lines.push(format!("   Total: {:.2}", summary.total));
    lines.push(format!(
        "   Expensive items (>{EXPENSIVE_ABOVE}): {:?}",
        summary.expensive_names
    ));
    lines.push(format!(
        "   Cheap items (<={CHEAP_AT_MOST}): {:?}",
        summary.cheap_names
    ));
}

fn pipeline_section(cfg: &DemoConfig, lines: &mut Vec<String>) {
    let pipeline = &cfg.pipeline;
    lines.push("== Pipeline".to_string());
    lines.push(format!(
        "even -> square -> >{} -> descending -> first {}: {:?}",
        pipeline.threshold,
        pipeline.limit,
        top_even_squares(&pipeline.numbers, pipeline.threshold, pipeline.limit)
    ));
}

fn describe_fold(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn describe_checked<T: std::fmt::Debug>(value: Option<T>) -> String {
    value.map_or_else(|| "overflow".to_string(), |v| format!("{v:?}"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
