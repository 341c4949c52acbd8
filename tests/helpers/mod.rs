//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
