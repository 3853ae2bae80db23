//! Arithmetic over binary extension fields GF(2^m), m in [2, 16]
//!
//! Every operation is a table lookup plus a reduction of the exponent:
//! with `ord = 2^m - 1` an all-ones modulus, `d mod ord` collapses to
//! `(d & ord) + (d >> m)` for the intermediate values these operations
//! produce, so there is no general division anywhere on the hot path.
//!
//! # Representations and preconditions
//!
//! Elements travel either in normal form ([`Gf2m`], may be zero) or as
//! discrete logarithms ([`ReducedLog`], only defined for non-zero
//! elements). Operations whose names mention `log`, and the `*_nonzero`
//! element operations, require non-zero operands: zero has no logarithm
//! and its log-table entry is garbage. These preconditions are
//! `debug_assert!`ed and *undefined behavior at the API contract level*
//! in release builds; callers that cannot rule zero out must use the
//! zero-safe entry points ([`Gf2mField::mul`], [`Gf2mField::square`],
//! [`Gf2mField::sqrt`], ...), which special-case zero before touching
//! any table.

use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder};

use crate::error::{validate, Result};
use codecrypt_params::pqc::gf2m::{MAX_EXTENSION_DEGREE, MIN_EXTENSION_DEGREE};

mod tables;
use tables::GfTables;

/// A field element of GF(2^m), valid values in `[0, 2^m - 1]`
pub type Gf2m = u16;

/// Serialized size of a field element in bytes
pub const GF2M_ENCODING_LEN: usize = 2;

/// The discrete logarithm of a non-zero field element, reduced into
/// `[0, ord]`
///
/// The closed upper end is deliberate: a single repunit reduction of a
/// sum of two reduced logs can land exactly on `ord`, and the antilog
/// table's final entry wraps to `alpha^0 = 1` to absorb that. Values are
/// only ever produced by [`Gf2mField`] methods, which keeps the
/// invariant out of callers' hands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReducedLog(u16);

impl ReducedLog {
    /// The raw exponent value
    pub fn value(self) -> u16 {
        self.0
    }
}

/// An immutable GF(2^m) field instance
///
/// Construction resolves the shared log/antilog tables for the degree
/// from a process-wide cache; cloning a field, or constructing a second
/// one of the same degree, reuses the same table allocation. Fields are
/// safe to share across threads.
#[derive(Clone)]
pub struct Gf2mField {
    extension_degree: usize,
    cardinality: u32,
    order: u16,
    tables: Arc<GfTables>,
}

impl Gf2mField {
    /// Create a field of the given extension degree (2 through 16)
    pub fn new(extension_degree: usize) -> Result<Self> {
        validate::parameter(
            (MIN_EXTENSION_DEGREE..=MAX_EXTENSION_DEGREE).contains(&extension_degree),
            "extension_degree",
            "supported GF(2^m) degrees are 2 through 16",
        )?;

        Ok(Self {
            extension_degree,
            cardinality: 1u32 << extension_degree,
            order: ((1u32 << extension_degree) - 1) as u16,
            tables: tables::get(extension_degree),
        })
    }

    /// The extension degree m
    pub fn extension_degree(&self) -> usize {
        self.extension_degree
    }

    /// Number of field elements, 2^m
    pub fn cardinality(&self) -> u32 {
        self.cardinality
    }

    /// Order of the multiplicative group, 2^m - 1
    pub fn order(&self) -> u16 {
        self.order
    }

    /// Reduce an exponent-domain intermediate modulo `ord`.
    ///
    /// `ord` is all-ones in m bits, so `(d & ord) + (d >> m)` is a full
    /// reduction for every intermediate this module produces: sums and
    /// doublings of reduced logs, signed differences in `(-ord, ord)`
    /// (the arithmetic shift contributes the wrap-around term), and the
    /// square-root scaling `log << (m - 1)`.
    #[inline]
    fn modq1(&self, d: i32) -> u16 {
        ((d & i32::from(self.order)) + (d >> self.extension_degree)) as u16
    }

    /// alpha^l
    #[inline]
    pub fn exp(&self, l: ReducedLog) -> Gf2m {
        self.tables.exp[usize::from(l.0)]
    }

    /// Discrete log of a non-zero element
    ///
    /// Zero input is a precondition violation: it has no logarithm.
    #[inline]
    pub fn log(&self, x: Gf2m) -> ReducedLog {
        debug_assert!(x != 0, "zero has no discrete logarithm");
        ReducedLog(self.tables.log[usize::from(x)])
    }

    /// Multiply, either operand may be zero
    #[inline]
    pub fn mul(&self, x: Gf2m, y: Gf2m) -> Gf2m {
        if x == 0 {
            0
        } else {
            self.mul_nonzero(x, y)
        }
    }

    /// Multiply with `x` known non-zero (`y` may still be zero)
    #[inline]
    pub fn mul_nonzero(&self, x: Gf2m, y: Gf2m) -> Gf2m {
        debug_assert!(x != 0, "mul_nonzero requires a non-zero first operand");
        if y == 0 {
            0
        } else {
            let l = i32::from(self.tables.log[usize::from(x)])
                + i32::from(self.tables.log[usize::from(y)]);
            self.tables.exp[usize::from(self.modq1(l))]
        }
    }

    /// Square, zero-safe
    #[inline]
    pub fn square(&self, x: Gf2m) -> Gf2m {
        if x == 0 {
            0
        } else {
            let l = i32::from(self.tables.log[usize::from(x)]) << 1;
            self.tables.exp[usize::from(self.modq1(l))]
        }
    }

    /// Square root, zero-safe
    ///
    /// Squaring is a bijection in characteristic 2; the inverse is the
    /// Frobenius map applied m - 1 times, i.e. scaling the log by
    /// 2^(m-1).
    #[inline]
    pub fn sqrt(&self, x: Gf2m) -> Gf2m {
        if x == 0 {
            0
        } else {
            let l = i32::from(self.tables.log[usize::from(x)]) << (self.extension_degree - 1);
            self.tables.exp[usize::from(self.modq1(l))]
        }
    }

    /// Divide `x` by non-zero `y` (`x` may be zero)
    ///
    /// Zero `y` is a precondition violation.
    #[inline]
    pub fn div(&self, x: Gf2m, y: Gf2m) -> Gf2m {
        debug_assert!(y != 0, "division by zero");
        if x == 0 {
            0
        } else {
            let l = i32::from(self.tables.log[usize::from(x)])
                - i32::from(self.tables.log[usize::from(y)]);
            self.tables.exp[usize::from(self.modq1(l))]
        }
    }

    /// Multiplicative inverse of a non-zero element
    ///
    /// Zero input is a precondition violation.
    #[inline]
    pub fn inv(&self, x: Gf2m) -> Gf2m {
        debug_assert!(x != 0, "zero has no multiplicative inverse");
        self.tables.exp[usize::from(self.order - self.tables.log[usize::from(x)])]
    }

    /// The log of the inverse of a non-zero element
    #[inline]
    pub fn inv_log(&self, x: Gf2m) -> ReducedLog {
        debug_assert!(x != 0, "zero has no multiplicative inverse");
        ReducedLog(self.order - self.tables.log[usize::from(x)])
    }

    /// `x` raised to `exponent`, zero-safe (`0^0` is defined as 1)
    ///
    /// All arithmetic is already in the log domain, so the power is a
    /// single scale-and-reduce rather than a square-and-multiply loop.
    /// An arbitrary scale factor outgrows the single-shot repunit
    /// identity, so this one operation reduces with a plain modulo.
    pub fn pow(&self, x: Gf2m, exponent: u64) -> Gf2m {
        if exponent == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }

        let ord = u64::from(self.order);
        let scaled = u64::from(self.tables.log[usize::from(x)]) * (exponent % ord);
        self.tables.exp[(scaled % ord) as usize]
    }

    // --- log-domain operations ---

    /// Product of two elements given by their logs, as a log
    #[inline]
    pub fn mul_log(&self, a: ReducedLog, b: ReducedLog) -> ReducedLog {
        ReducedLog(self.modq1(i32::from(a.0) + i32::from(b.0)))
    }

    /// Quotient of two elements given by their logs, as a log
    #[inline]
    pub fn div_log(&self, a: ReducedLog, b: ReducedLog) -> ReducedLog {
        ReducedLog(self.modq1(i32::from(a.0) - i32::from(b.0)))
    }

    /// Log of the square of the element with log `a`
    #[inline]
    pub fn square_log(&self, a: ReducedLog) -> ReducedLog {
        ReducedLog(self.modq1(i32::from(a.0) << 1))
    }

    /// Log of the inverse of the element with log `a`
    #[inline]
    pub fn neg_log(&self, a: ReducedLog) -> ReducedLog {
        ReducedLog(self.order - a.0)
    }

    // --- mixed-representation operations ---

    /// Log of `alpha^a * y` for non-zero `y`
    #[inline]
    pub fn log_mul_elem(&self, a: ReducedLog, y: Gf2m) -> ReducedLog {
        debug_assert!(y != 0, "zero has no discrete logarithm");
        ReducedLog(self.modq1(i32::from(a.0) + i32::from(self.tables.log[usize::from(y)])))
    }

    /// `alpha^a * y` for non-zero `y`
    #[inline]
    pub fn mul_by_log(&self, y: Gf2m, a: ReducedLog) -> Gf2m {
        debug_assert!(y != 0, "mul_by_log requires a non-zero element operand");
        self.tables.exp[usize::from(
            self.modq1(i32::from(a.0) + i32::from(self.tables.log[usize::from(y)])),
        )]
    }

    /// `alpha^a * y`, zero-safe in `y`
    #[inline]
    pub fn mul_by_log_zero(&self, y: Gf2m, a: ReducedLog) -> Gf2m {
        if y == 0 {
            0
        } else {
            self.mul_by_log(y, a)
        }
    }

    /// `alpha^(a - b)`, the quotient of two elements given by their logs
    #[inline]
    pub fn exp_div_log(&self, a: ReducedLog, b: ReducedLog) -> Gf2m {
        self.tables.exp[usize::from(self.modq1(i32::from(a.0) - i32::from(b.0)))]
    }

    /// Log of `x / alpha^b` for non-zero `x`
    #[inline]
    pub fn div_elem_by_log(&self, x: Gf2m, b: ReducedLog) -> ReducedLog {
        debug_assert!(x != 0, "zero has no discrete logarithm");
        ReducedLog(self.modq1(i32::from(self.tables.log[usize::from(x)]) - i32::from(b.0)))
    }

    /// `x / alpha^b`, zero-safe in `x`
    #[inline]
    pub fn div_zero_elem_by_log(&self, x: Gf2m, b: ReducedLog) -> Gf2m {
        if x == 0 {
            0
        } else {
            self.tables.exp[usize::from(
                self.modq1(i32::from(self.tables.log[usize::from(x)]) - i32::from(b.0)),
            )]
        }
    }

    /// Whether this field shares its tables with `other`
    ///
    /// True exactly when the degrees match; exposed mostly so callers
    /// (and tests) can confirm the construct-once, share-forever table
    /// discipline.
    pub fn shares_tables_with(&self, other: &Gf2mField) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }
}

/// Serialize a field element as 2 big-endian bytes into `buffer`,
/// returning the number of bytes written
///
/// The codec does no range checking against any particular field's
/// cardinality; that remains the caller's contract.
///
/// # Panics
///
/// Panics if `buffer` is shorter than [`GF2M_ENCODING_LEN`].
pub fn encode_gf2m(elem: Gf2m, buffer: &mut [u8]) -> usize {
    BigEndian::write_u16(&mut buffer[..GF2M_ENCODING_LEN], elem);
    GF2M_ENCODING_LEN
}

/// Deserialize a field element from 2 big-endian bytes
///
/// # Panics
///
/// Panics if `buffer` is shorter than [`GF2M_ENCODING_LEN`].
pub fn decode_gf2m(buffer: &[u8]) -> Gf2m {
    BigEndian::read_u16(&buffer[..GF2M_ENCODING_LEN])
}

#[cfg(test)]
mod tests;
