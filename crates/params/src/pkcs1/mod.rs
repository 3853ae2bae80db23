//! Constants for EMSA-PKCS1-v1.5 signature encoding
//!
//! The DigestInfo prefix for each supported hash is the DER encoding of
//! the AlgorithmIdentifier sequence from RFC 8017 section 9.2, note 1.
//! The digest bytes are appended directly after this prefix, so the
//! encoder never has to run a DER serializer.

/// One entry of the PKCS#1 v1.5 DigestInfo table
pub struct Pkcs1DigestInfo {
    /// Canonical hash name, e.g. `"SHA-256"`
    pub name: &'static str,

    /// DER-encoded AlgorithmIdentifier prefix for this hash
    pub der_prefix: &'static [u8],

    /// Digest length in bytes
    pub digest_length: usize,
}

/// DigestInfo prefixes for every hash usable with EMSA-PKCS1-v1.5
pub const PKCS1_DIGEST_INFO: &[Pkcs1DigestInfo] = &[
    Pkcs1DigestInfo {
        name: "SHA-1",
        der_prefix: &[
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2B, 0x0E, 0x03, 0x02, 0x1A, 0x05, 0x00, 0x04,
            0x14,
        ],
        digest_length: 20,
    },
    Pkcs1DigestInfo {
        name: "SHA-224",
        der_prefix: &[
            0x30, 0x2D, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x04, 0x05, 0x00, 0x04, 0x1C,
        ],
        digest_length: 28,
    },
    Pkcs1DigestInfo {
        name: "SHA-256",
        der_prefix: &[
            0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x01, 0x05, 0x00, 0x04, 0x20,
        ],
        digest_length: 32,
    },
    Pkcs1DigestInfo {
        name: "SHA-384",
        der_prefix: &[
            0x30, 0x41, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x02, 0x05, 0x00, 0x04, 0x30,
        ],
        digest_length: 48,
    },
    Pkcs1DigestInfo {
        name: "SHA-512",
        der_prefix: &[
            0x30, 0x51, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x03, 0x05, 0x00, 0x04, 0x40,
        ],
        digest_length: 64,
    },
    Pkcs1DigestInfo {
        name: "SHA3-256",
        der_prefix: &[
            0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x08, 0x05, 0x00, 0x04, 0x20,
        ],
        digest_length: 32,
    },
    Pkcs1DigestInfo {
        name: "SHA3-384",
        der_prefix: &[
            0x30, 0x41, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x09, 0x05, 0x00, 0x04, 0x30,
        ],
        digest_length: 48,
    },
    Pkcs1DigestInfo {
        name: "SHA3-512",
        der_prefix: &[
            0x30, 0x51, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x0A, 0x05, 0x00, 0x04, 0x40,
        ],
        digest_length: 64,
    },
];

/// Look up the DigestInfo entry for a hash by its canonical name
pub fn pkcs1_digest_info(name: &str) -> Option<&'static Pkcs1DigestInfo> {
    PKCS1_DIGEST_INFO.iter().find(|entry| entry.name == name)
}
