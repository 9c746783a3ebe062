//! Command parsing: a strict date leaf parser and per-command token
//! grammars that turn raw token slices into typed argument structs.

pub mod command;
pub mod date;
