//! Common constants shared across the codecrypt crates

pub mod hash;
