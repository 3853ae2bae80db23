//! Fixed-size value types used across the primitive engines

mod digest;

pub use digest::Digest;
