//! Constants for post-quantum cryptographic algorithms

pub mod gf2m;
