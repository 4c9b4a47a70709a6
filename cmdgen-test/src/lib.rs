//! Test utilities for `cmdgen`.
//!
//! This crate provides utilities to facilitate testing of the command file generator. See the
//! modules for all available utilities.

pub mod files;
pub mod tracing;
