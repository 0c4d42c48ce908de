//! Benchmark utilities for the message hub.
//!
//! - **Publish benchmarks**: fan-out cost per listener count and the full
//!   text-then-string delivery of a received message
//! - **Strip benchmarks**: `strip_formatting` over plain and heavily
//!   formatted input
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_bench
//!
//! # Run specific benchmark group
//! cargo bench -p rusty_bench -- fan_out
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports.

pub mod messages;
