//! # codecrypt
//!
//! Pure Rust building blocks for RSA-style signatures and code-based
//! public-key schemes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! codecrypt = "0.3"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - `codecrypt-params`: Constant tables (PKCS#1 DigestInfo prefixes,
//!   GF(2^m) primitive polynomials, hash sizes)
//! - `codecrypt-algorithms`: The primitive engines (EMSA-PKCS1-v1.5
//!   padding/verification, GF(2^m) arithmetic, hash adapters)

#![forbid(unsafe_code)]

pub use codecrypt_algorithms as algorithms;
pub use codecrypt_params as params;

// Support crates that appear in public signatures or that callers need
// version-matched copies of
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for codecrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::error::{Error, Result};

    // Re-export the padding engines and their trait
    pub use crate::algorithms::pad::pkcs1::{EmsaPkcs1v15, EmsaPkcs1v15Raw};
    pub use crate::algorithms::pad::SignaturePadding;

    // Re-export the field engine and element codec
    pub use crate::algorithms::code::gf2m::{
        decode_gf2m, encode_gf2m, Gf2m, Gf2mField, ReducedLog, GF2M_ENCODING_LEN,
    };

    // Re-export the hash abstraction and the common adapters
    pub use crate::algorithms::hash::{
        HashAlgorithm, HashFunction, Sha1, Sha224, Sha256, Sha384, Sha512,
    };
}
