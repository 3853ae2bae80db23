//! Cryptographic primitive engines with exact-layout guarantees
//!
//! This crate implements the two most failure-sensitive layers of the
//! codecrypt library: EMSA-PKCS1-v1.5 signature padding/verification and
//! arithmetic over binary extension fields GF(2^m). Both encode exact
//! byte layouts and algebraic identities; a subtle mistake in either
//! produces a silent security failure rather than a crash, so the code
//! here favors strict reconstruction and table-driven arithmetic over
//! anything flexible.
//!
//! # Security Features
//!
//! - Signature padding is rebuilt from scratch on every verification and
//!   compared in constant time; the padding of a received block is never
//!   parsed
//! - Buffered message data is zeroized when engines are dropped
//! - No `unsafe` anywhere in the crate

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Fixed-size value types
pub mod types;
pub use types::Digest;

// Hash function abstraction and adapters
pub mod hash;
pub use hash::{
    HashAlgorithm, HashFunction, Sha1, Sha224, Sha256, Sha384, Sha512, Sha3_256, Sha3_384,
    Sha3_512,
};

// Signature padding schemes
pub mod pad;
pub use pad::pkcs1::{EmsaPkcs1v15, EmsaPkcs1v15Raw};
pub use pad::SignaturePadding;

// Code-based cryptography primitives
pub mod code;
pub use code::gf2m::{
    decode_gf2m, encode_gf2m, Gf2m, Gf2mField, ReducedLog, GF2M_ENCODING_LEN,
};
