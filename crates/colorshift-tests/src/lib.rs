//! Integration tests for colorshift crates.
//!
//! End-to-end checks that decode, transform and encode agree with each
//! other on real files.

pub mod golden;
