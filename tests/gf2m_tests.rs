//! Facade-level tests for the GF(2^m) engine

use codecrypt::prelude::*;

#[test]
fn field_arithmetic_through_prelude() {
    // McEliece-sized field
    let field = Gf2mField::new(11).unwrap();
    assert_eq!(field.cardinality(), 2048);
    assert_eq!(field.order(), 2047);

    let x: Gf2m = 0x2A5;
    let y: Gf2m = 0x13C;

    let product = field.mul(x, y);
    assert_eq!(field.div(product, y), x);
    assert_eq!(field.mul(x, field.inv(x)), 1);
    assert_eq!(field.sqrt(field.square(x)), x);
}

#[test]
fn serialized_coefficients_round_trip() {
    // polynomial coefficients persisted to a byte stream, two bytes each
    let field = Gf2mField::new(11).unwrap();
    let coefficients: Vec<Gf2m> = (0..field.cardinality() as Gf2m).step_by(97).collect();

    let mut stream = vec![0u8; coefficients.len() * GF2M_ENCODING_LEN];
    let mut offset = 0;
    for &c in &coefficients {
        offset += encode_gf2m(c, &mut stream[offset..]);
    }
    assert_eq!(offset, stream.len());

    let decoded: Vec<Gf2m> = stream
        .chunks_exact(GF2M_ENCODING_LEN)
        .map(decode_gf2m)
        .collect();
    assert_eq!(decoded, coefficients);
}
