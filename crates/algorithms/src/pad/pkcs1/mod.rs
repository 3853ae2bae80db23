//! EMSA-PKCS1-v1.5 signature padding (PKCS#1 block type 1, EMSA3 in
//! IEEE 1363 terms)
//!
//! The encoded block is `00 01 FF..FF 00 <DigestInfo DER prefix>
//! <digest>`, always exactly `ceil(output_bits / 8)` bytes with at least
//! eight `FF` padding bytes. Historical PKCS#1 forgeries came from
//! verifiers that re-parsed this structure leniently; here verification
//! rebuilds the block byte for byte and compares in constant time.

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::pad::SignaturePadding;
use codecrypt_params::pkcs1::pkcs1_digest_info;

/// Minimum number of 0xFF padding bytes required by PKCS#1
const MIN_PAD_LEN: usize = 8;

/// Build the EMSA-PKCS1-v1.5 encoded block for `msg` (already hashed by
/// the caller, or raw for the hashless variant).
///
/// Fails when `ceil(output_bits / 8)` cannot hold the DigestInfo plus
/// the three structural bytes and the minimum padding string.
fn emsa3_encoding(msg: &[u8], output_bits: usize, hash_id: &[u8]) -> Result<Vec<u8>> {
    let output_length = (output_bits + 7) / 8;
    let digest_info_len = hash_id.len() + msg.len();

    if output_length < digest_info_len + MIN_PAD_LEN + 3 {
        return Err(Error::Encoding {
            scheme: "EMSA3",
            details: "output length too small for digest and padding",
        });
    }

    let pad_len = output_length - digest_info_len - 3;

    let mut coded = vec![0u8; output_length];
    coded[1] = 0x01;
    for byte in &mut coded[2..2 + pad_len] {
        *byte = 0xFF;
    }
    // coded[2 + pad_len] is the 0x00 separator
    coded[3 + pad_len..3 + pad_len + hash_id.len()].copy_from_slice(hash_id);
    coded[3 + pad_len + hash_id.len()..].copy_from_slice(msg);

    Ok(coded)
}

/// Compare a received block against the rebuilt one, examining every
/// byte of the expected block regardless of where a mismatch occurs.
fn constant_time_compare(coded: &[u8], expected: &[u8]) -> bool {
    let mut diff = 0u8;
    for (i, byte) in expected.iter().enumerate() {
        diff |= byte ^ coded.get(i).copied().unwrap_or(0);
    }

    let lengths_match = (coded.len() as u64).ct_eq(&(expected.len() as u64));
    (diff.ct_eq(&0) & lengths_match).unwrap_u8() == 1
}

/// EMSA-PKCS1-v1.5 padding over a hash function
///
/// Owns the hash; the DigestInfo prefix for it is resolved once at
/// construction. Not safe for concurrent use; give each signing or
/// verification operation its own instance.
#[derive(Clone)]
pub struct EmsaPkcs1v15<H: HashFunction> {
    hash: H,
    hash_id: &'static [u8],
}

impl<H: HashFunction> EmsaPkcs1v15<H> {
    /// Create a padding engine for the hash `H`
    ///
    /// Fails with a parameter error when no DigestInfo prefix is known
    /// for the hash.
    pub fn new() -> Result<Self> {
        let info = pkcs1_digest_info(&H::name()).ok_or_else(|| {
            Error::param("hash", "no PKCS#1 v1.5 DigestInfo known for this hash")
        })?;

        Ok(Self {
            hash: H::new(),
            hash_id: info.der_prefix,
        })
    }
}

impl<H: HashFunction> SignaturePadding for EmsaPkcs1v15<H> {
    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.hash.update(input).map(|_| ())
    }

    fn raw_data(&mut self) -> Result<Vec<u8>> {
        // finalize resets the hash, so the engine is immediately reusable
        self.hash.finalize().map(|digest| digest.as_ref().to_vec())
    }

    fn encoding_of<R: CryptoRng + RngCore>(
        &self,
        msg: &[u8],
        output_bits: usize,
        _rng: &mut R,
    ) -> Result<Vec<u8>> {
        crate::error::validate::length("EMSA3 message digest", msg.len(), H::output_size())?;
        emsa3_encoding(msg, output_bits, self.hash_id)
    }

    fn verify(&self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        // same digest-length rule as encoding_of; a block embedding the
        // right DigestInfo prefix around a short digest is not valid
        if raw.len() != H::output_size() {
            return false;
        }
        match emsa3_encoding(raw, key_bits, self.hash_id) {
            Ok(expected) => constant_time_compare(coded, &expected),
            // a key too small to hold this digest verifies nothing
            Err(_) => false,
        }
    }

    fn name(&self) -> String {
        format!("EMSA3({})", H::name())
    }

    fn hash_function(&self) -> String {
        H::name()
    }
}

/// EMSA-PKCS1-v1.5 padding without internal hashing
///
/// The caller supplies the digest bytes directly; `update` accumulates
/// them verbatim. Constructed with a hash name, the engine still embeds
/// that hash's DigestInfo prefix and enforces the digest length, it just
/// never hashes anything itself.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EmsaPkcs1v15Raw {
    message: Vec<u8>,
    hash_name: String,
    #[zeroize(skip)]
    hash_id: &'static [u8],
    #[zeroize(skip)]
    hash_output_len: usize,
}

impl EmsaPkcs1v15Raw {
    /// Create a raw padding engine with no DigestInfo and no length check
    pub fn new() -> Self {
        Self {
            message: Vec::new(),
            hash_name: String::new(),
            hash_id: &[],
            hash_output_len: 0,
        }
    }

    /// Create a raw padding engine that embeds `hash_name`'s DigestInfo
    /// prefix and requires the accumulated input to be exactly that
    /// hash's digest length
    pub fn with_hash(hash_name: &str) -> Result<Self> {
        let info = pkcs1_digest_info(hash_name).ok_or_else(|| {
            Error::param("hash", "no PKCS#1 v1.5 DigestInfo known for this hash")
        })?;

        Ok(Self {
            message: Vec::new(),
            hash_name: info.name.to_string(),
            hash_id: info.der_prefix,
            hash_output_len: info.digest_length,
        })
    }
}

impl Default for EmsaPkcs1v15Raw {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePadding for EmsaPkcs1v15Raw {
    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.message.extend_from_slice(input);
        Ok(())
    }

    fn raw_data(&mut self) -> Result<Vec<u8>> {
        // the terminal call always consumes the buffer, error or not
        let message = std::mem::take(&mut self.message);

        if self.hash_output_len > 0 {
            crate::error::validate::length(
                "EMSA3 raw message",
                message.len(),
                self.hash_output_len,
            )?;
        }

        Ok(message)
    }

    fn encoding_of<R: CryptoRng + RngCore>(
        &self,
        msg: &[u8],
        output_bits: usize,
        _rng: &mut R,
    ) -> Result<Vec<u8>> {
        if self.hash_output_len > 0 {
            crate::error::validate::length("EMSA3 raw message", msg.len(), self.hash_output_len)?;
        }
        emsa3_encoding(msg, output_bits, self.hash_id)
    }

    fn verify(&self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        if self.hash_output_len > 0 && raw.len() != self.hash_output_len {
            return false;
        }
        match emsa3_encoding(raw, key_bits, self.hash_id) {
            Ok(expected) => constant_time_compare(coded, &expected),
            Err(_) => false,
        }
    }

    fn name(&self) -> String {
        if self.hash_name.is_empty() {
            "EMSA3(Raw)".to_string()
        } else {
            format!("EMSA3(Raw,{})", self.hash_name)
        }
    }

    fn hash_function(&self) -> String {
        self.hash_name.clone()
    }
}
