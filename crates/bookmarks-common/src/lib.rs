//! Common utilities for the bookmark file tools.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for lenient-mode parse issues

pub mod warning;
