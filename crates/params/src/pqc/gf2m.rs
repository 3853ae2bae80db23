//! Constants for binary extension fields GF(2^m)
//!
//! Code-based schemes (McEliece over Goppa codes) do their polynomial and
//! matrix arithmetic in GF(2^m) for small m. Each supported degree has a
//! fixed primitive polynomial; the field's log/antilog tables are derived
//! from it at first use.

/// Smallest supported extension degree
pub const MIN_EXTENSION_DEGREE: usize = 2;

/// Largest supported extension degree
///
/// Field elements are 16-bit and each table holds 2^m entries, so
/// degrees beyond 16 are neither representable nor practical.
pub const MAX_EXTENSION_DEGREE: usize = 16;

/// Primitive polynomial for GF(2^m), indexed by extension degree m
///
/// Each value is the polynomial's coefficient bitmap including the
/// leading x^m term, e.g. `0x13` = x^4 + x + 1 for m = 4. The entries
/// for degrees 0 and 1 are placeholders and never used.
pub const GF2M_PRIMITIVE_POLYS: [u32; MAX_EXTENSION_DEGREE + 1] = [
    0x1,     // degree 0, unused
    0x3,     // degree 1, unused
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x83,    // x^7 + x + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x221,   // x^9 + x^5 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];
