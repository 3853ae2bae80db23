//! Hash function abstraction
//!
//! The padding engines consume hashes through the [`HashFunction`]
//! trait; the digests themselves come from the RustCrypto `sha1`,
//! `sha2` and `sha3` crates and are adapted here rather than
//! reimplemented. Each adapter finalizes with a state reset, so one
//! instance can be reused across signing operations.

use sha2::digest::Digest as RustCryptoDigest;

use crate::error::Result;
use crate::types::Digest;
use codecrypt_params::utils::hash::{
    SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE, SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE,
    SHA384_OUTPUT_SIZE, SHA3_256_BLOCK_SIZE, SHA3_256_OUTPUT_SIZE, SHA3_384_BLOCK_SIZE,
    SHA3_384_OUTPUT_SIZE, SHA3_512_BLOCK_SIZE, SHA3_512_OUTPUT_SIZE, SHA512_BLOCK_SIZE,
    SHA512_OUTPUT_SIZE,
};

/// Marker trait describing a hash algorithm's fixed properties
pub trait HashAlgorithm {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block length in bytes
    const BLOCK_SIZE: usize;
    /// Canonical algorithm name, e.g. `"SHA-256"`
    const ALGORITHM_ID: &'static str;
}

/// Trait for incremental cryptographic hash functions
pub trait HashFunction: Clone {
    /// The algorithm this hash function implements
    type Algorithm: HashAlgorithm;
    /// The digest type produced by [`finalize`](Self::finalize)
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh instance
    fn new() -> Self;

    /// Absorb more message bytes
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset to the fresh state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest length in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block length in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Canonical algorithm name
    fn name() -> String {
        Self::Algorithm::ALGORITHM_ID.to_string()
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output>
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}

macro_rules! hash_adapter {
    ($(#[$doc:meta])* $name:ident, $algorithm:ident, $inner:ty, $id:literal,
     $output_size:expr, $block_size:expr) => {
        /// Marker type for the algorithm
        pub enum $algorithm {}

        impl HashAlgorithm for $algorithm {
            const OUTPUT_SIZE: usize = $output_size;
            const BLOCK_SIZE: usize = $block_size;
            const ALGORITHM_ID: &'static str = $id;
        }

        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            inner: $inner,
        }

        impl HashFunction for $name {
            type Algorithm = $algorithm;
            type Output = Digest<{ $output_size }>;

            fn new() -> Self {
                Self {
                    inner: <$inner as RustCryptoDigest>::new(),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                RustCryptoDigest::update(&mut self.inner, data);
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let bytes =
                    <$inner as RustCryptoDigest>::finalize_reset(&mut self.inner);
                let mut out = [0u8; $output_size];
                out.copy_from_slice(&bytes);
                Ok(Digest::new(out))
            }
        }
    };
}

hash_adapter!(
    /// SHA-1 (legacy, kept for PKCS#1 interoperability)
    Sha1, Sha1Algorithm, sha1::Sha1, "SHA-1", SHA1_OUTPUT_SIZE, SHA1_BLOCK_SIZE
);

hash_adapter!(
    /// SHA-224
    Sha224, Sha224Algorithm, sha2::Sha224, "SHA-224", SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE
);

hash_adapter!(
    /// SHA-256
    Sha256, Sha256Algorithm, sha2::Sha256, "SHA-256", SHA256_OUTPUT_SIZE, SHA256_BLOCK_SIZE
);

hash_adapter!(
    /// SHA-384
    Sha384, Sha384Algorithm, sha2::Sha384, "SHA-384", SHA384_OUTPUT_SIZE, SHA512_BLOCK_SIZE
);

hash_adapter!(
    /// SHA-512
    Sha512, Sha512Algorithm, sha2::Sha512, "SHA-512", SHA512_OUTPUT_SIZE, SHA512_BLOCK_SIZE
);

hash_adapter!(
    /// SHA3-256
    Sha3_256, Sha3_256Algorithm, sha3::Sha3_256, "SHA3-256", SHA3_256_OUTPUT_SIZE,
    SHA3_256_BLOCK_SIZE
);

hash_adapter!(
    /// SHA3-384
    Sha3_384, Sha3_384Algorithm, sha3::Sha3_384, "SHA3-384", SHA3_384_OUTPUT_SIZE,
    SHA3_384_BLOCK_SIZE
);

hash_adapter!(
    /// SHA3-512
    Sha3_512, Sha3_512Algorithm, sha3::Sha3_512, "SHA3-512", SHA3_512_OUTPUT_SIZE,
    SHA3_512_BLOCK_SIZE
);
