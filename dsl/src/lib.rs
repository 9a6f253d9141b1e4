//! Provides definitions of instruction list (IL) rungs, the Structured Text
//! (ST) produced from them and the diagnostics that describe problems
//! found along the way.

pub mod core;
pub mod diagnostic;
pub mod il;
pub mod st;
