//! Process-wide cache of GF(2^m) log/antilog tables
//!
//! Tables are built once per extension degree, behind a mutex, and handed
//! out as `Arc`s. Every field instance of a degree shares one allocation;
//! entries are never evicted, so a handed-out table outlives any field
//! that references it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use codecrypt_params::pqc::gf2m::GF2M_PRIMITIVE_POLYS;

/// Discrete log and antilog tables for one extension degree
pub(crate) struct GfTables {
    /// log[x] for x != 0 is the exponent of the generator producing x;
    /// log[0] is meaningless and must never be read
    pub(crate) log: Vec<u16>,
    /// exp[i] = alpha^i for i in [0, 2^m - 1]; the final entry wraps to
    /// exp[0] so that a single repunit reduction landing on `ord` still
    /// reads the right value
    pub(crate) exp: Vec<u16>,
}

static CACHE: OnceLock<Mutex<HashMap<usize, Arc<GfTables>>>> = OnceLock::new();

/// Fetch (building on first use) the shared tables for a degree.
///
/// The degree must already be validated by the caller.
pub(crate) fn get(extension_degree: usize) -> Arc<GfTables> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(extension_degree)
        .or_insert_with(|| Arc::new(build(extension_degree)))
        .clone()
}

fn build(extension_degree: usize) -> GfTables {
    let q = 1usize << extension_degree;
    let poly = GF2M_PRIMITIVE_POLYS[extension_degree];
    let high_bit = 1u32 << (extension_degree - 1);

    // exp[i + 1] = exp[i] * alpha, reducing by the primitive polynomial
    // whenever the multiplication carries out of the field
    let mut exp = vec![0u16; q];
    exp[0] = 1;
    for i in 1..q {
        let prev = u32::from(exp[i - 1]);
        let mut next = prev << 1;
        if prev & high_bit != 0 {
            next ^= poly;
        }
        exp[i] = next as u16;
    }

    // alpha is primitive, so its order is exactly q - 1 and the table
    // wraps: exp[q - 1] == exp[0] == 1
    debug_assert_eq!(exp[q - 1], 1);

    let mut log = vec![0u16; q];
    for (i, &value) in exp.iter().take(q - 1).enumerate() {
        log[value as usize] = i as u16;
    }
    // log[0] keeps its placeholder; zero has no logarithm

    GfTables { log, exp }
}
