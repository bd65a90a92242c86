//! Core types and trait definitions for the matchday warehouse.
//!
//! This crate is deliberately free of database and CSV dependencies.
//! All other crates depend on it; it depends only on `chrono`.

pub mod dimension;
pub mod fact;
pub mod store;
