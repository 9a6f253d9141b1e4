//! Command line front-end for translating instruction list files into
//! Structured Text.

extern crate ladderst_dsl as dsl;

pub mod cli;
pub mod logger;
pub mod source;
