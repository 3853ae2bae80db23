//! Signature padding schemes
//!
//! A padding scheme turns a message (or its digest) into the fixed-width
//! block an RSA-style private-key operation is applied to. Verification
//! never parses a received block; it rebuilds the expected block and
//! compares, which removes the lenient-parsing forgery surface entirely.

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod pkcs1;

/// Interface shared by signature padding schemes
///
/// A signer streams message bytes in with [`update`](Self::update), pulls
/// the accumulated data back out with [`raw_data`](Self::raw_data), and
/// asks for an encoded block sized to the key. A verifier streams the
/// received message the same way and calls [`verify`](Self::verify) with
/// the block recovered from the signature.
pub trait SignaturePadding {
    /// Append message bytes to the pending input
    fn update(&mut self, input: &[u8]) -> Result<()>;

    /// Consume and return the pending input (a digest for hashing
    /// schemes, the accumulated bytes for raw schemes), resetting the
    /// engine for the next operation
    fn raw_data(&mut self) -> Result<Vec<u8>>;

    /// Build the encoded block for a key of `output_bits` bits
    ///
    /// The RNG parameter exists for interface uniformity with randomized
    /// schemes; deterministic schemes ignore it.
    fn encoding_of<R: CryptoRng + RngCore>(
        &self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut R,
    ) -> Result<Vec<u8>>;

    /// Check `coded` against the expected encoding of `raw` for a key of
    /// `key_bits` bits
    ///
    /// Returns `false` on any mismatch, including blocks the scheme could
    /// not even have produced; rejection is never an error.
    fn verify(&self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool;

    /// Canonical scheme name, e.g. `"EMSA3(SHA-256)"`
    fn name(&self) -> String;

    /// Name of the hash this scheme encodes for, empty if none
    fn hash_function(&self) -> String;
}
