//! Problem codes for the instruction list translator.
//!
//! The definitions are generated from `resources/problem-codes.csv` so that
//! codes remain stable between releases.

include!(concat!(env!("OUT_DIR"), "/problems.rs"));
