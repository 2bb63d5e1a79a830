//! Deterministic, pure logic shared by the calculator.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod arithmetic;
pub mod collection;
pub mod dispatcher;
pub mod grade;
pub mod pipeline;
pub mod records;
pub mod reports;
