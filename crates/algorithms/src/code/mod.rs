//! Code-Based Cryptography Primitives
//!
//! Mathematical primitives required by code-based cryptosystems like
//! Classic McEliece: arithmetic over the binary extension fields
//! GF(2^m) that Goppa-code polynomial and matrix routines run on.

pub mod gf2m;
