//! Constant values for codecrypt cryptographic operations
//!
//! This crate is a dependency-free collection of the fixed tables the
//! rest of the library keys off: PKCS#1 v1.5 DigestInfo prefixes,
//! primitive polynomials for binary extension fields, and hash function
//! sizes. Nothing in here allocates or computes at runtime.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod pkcs1;
pub mod pqc;
pub mod utils;
