//! Demonstration inputs stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::records::{ShoppingItem, StudentRecord};

/// Inputs for `calc demo`, `calc students` and `calc cart`.
///
/// Every section is optional; missing fields fall back to the built-in
/// sample data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Integer sequence for the array operations.
    pub numbers: Vec<i64>,

    /// Operands for the arithmetic walkthrough.
    pub operands: Operands,

    pub students: Vec<StudentRecord>,

    pub cart: Vec<ShoppingItem>,

    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Default for Operands {
    fn default() -> Self {
        Self { a: 15.5, b: 4.2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input sequence for the even-squares pipeline.
    pub numbers: Vec<i64>,
    /// Squares must be strictly greater than this.
    pub threshold: i64,
    /// Keep at most this many results.
    pub limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            numbers: (1..=10).collect(),
            threshold: 10,
            limit: 3,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 23, 42, 7, 3],
            operands: Operands::default(),
            students: vec![
                StudentRecord::new("Ahmet", vec![85.0, 92.0, 78.0, 88.0, 91.0]),
                StudentRecord::new("Ayşe", vec![76.0, 81.0, 85.0, 79.0, 83.0]),
                StudentRecord::new("Mehmet", vec![45.0, 52.0, 48.0, 41.0, 47.0]),
                StudentRecord::new("Fatma", vec![95.0, 98.0, 92.0, 96.0, 99.0]),
                StudentRecord::new("Ali", vec![67.0, 72.0, 69.0, 74.0, 71.0]),
            ],
            cart: vec![
                ShoppingItem::new("Laptop", 2500.0, 1),
                ShoppingItem::new("Mouse", 25.0, 2),
                ShoppingItem::new("Klavye", 150.0, 1),
                ShoppingItem::new("Kitap", 35.0, 3),
                ShoppingItem::new("Kalem", 5.0, 10),
            ],
            pipeline: PipelineConfig::default(),
        }
    }
}

/// Largest magnitude allowed in `numbers`; its square still fits in `i64`.
pub const MAX_NUMBER_MAGNITUDE: i64 = 3_037_000_499;

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        for (index, n) in self.numbers.iter().enumerate() {
            if n.unsigned_abs() > MAX_NUMBER_MAGNITUDE.unsigned_abs() {
                bail!(
                    "numbers[{}] = {} exceeds +/-{}",
                    index,
                    n,
                    MAX_NUMBER_MAGNITUDE
                );
            }
        }
        for (index, student) in self.students.iter().enumerate() {
            if student.name.trim().is_empty() {
                bail!("students[{}].name must be non-empty", index);
            }
        }
        for (index, item) in self.cart.iter().enumerate() {
            if item.name.trim().is_empty() {
                bail!("cart[{}].name must be non-empty", index);
            }
        }
        if self.pipeline.limit == 0 {
            bail!("pipeline.limit must be > 0");
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DemoConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DemoConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = parse_config(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        students = cfg.students.len(),
        cart = cfg.cart.len(),
        "config loaded"
    );
    Ok(cfg)
}

/// Parse and validate config from TOML text.
pub fn parse_config(contents: &str) -> Result<DemoConfig> {
    let cfg: DemoConfig = toml::from_str(contents).context("parse config toml")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Write the default config to `path` for `calc init`.
///
/// Leaves an existing file untouched unless `force` is set. Returns whether
/// the file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, skipping init");
        return Ok(false);
    }
    write_config(path, &DemoConfig::default())?;
    Ok(true)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DemoConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
