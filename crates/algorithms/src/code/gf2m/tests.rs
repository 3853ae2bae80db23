use super::*;

fn all_elements(field: &Gf2mField) -> impl Iterator<Item = Gf2m> {
    0..field.cardinality() as Gf2m
}

fn nonzero_elements(field: &Gf2mField) -> impl Iterator<Item = Gf2m> {
    1..field.cardinality() as Gf2m
}

#[test]
fn test_degree_validation() {
    assert!(Gf2mField::new(0).is_err());
    assert!(Gf2mField::new(1).is_err());
    assert!(Gf2mField::new(17).is_err());

    for degree in 2..=16 {
        let field = Gf2mField::new(degree).unwrap();
        assert_eq!(field.extension_degree(), degree);
        assert_eq!(field.cardinality(), 1u32 << degree);
        assert_eq!(u32::from(field.order()), (1u32 << degree) - 1);
    }
}

#[test]
fn test_tables_are_shared_per_degree() {
    let a = Gf2mField::new(11).unwrap();
    let b = Gf2mField::new(11).unwrap();
    let c = Gf2mField::new(12).unwrap();

    assert!(a.shares_tables_with(&b));
    assert!(a.shares_tables_with(&a.clone()));
    assert!(!a.shares_tables_with(&c));
}

#[test]
fn test_exp_table_is_a_permutation_m4() {
    // Exhaustive structural check for GF(2^4): every non-zero element
    // appears exactly once among alpha^0 .. alpha^14, and the log table
    // is the inverse permutation.
    let field = Gf2mField::new(4).unwrap();
    let mut seen = [false; 16];

    for i in 0..15u16 {
        let x = field.exp(field.log(field.exp(ReducedLog(i))));
        let elem = field.exp(ReducedLog(i));
        assert_ne!(elem, 0, "alpha^{} must be non-zero", i);
        assert!(!seen[elem as usize], "alpha^{} repeats element {}", i, elem);
        seen[elem as usize] = true;

        // log is the inverse of exp on the non-zero domain
        assert_eq!(x, elem);
        assert_eq!(field.log(elem).value(), i);
    }

    assert!(!seen[0]);
    assert!(seen[1..].iter().all(|&s| s));
}

#[test]
fn test_exp_table_wraps_at_order() {
    // The closed-range convention: exp[ord] == exp[0] == 1
    let field = Gf2mField::new(8).unwrap();
    assert_eq!(field.exp(ReducedLog(field.order())), 1);
    assert_eq!(field.exp(ReducedLog(0)), 1);
}

#[test]
fn test_mul_laws_exhaustive_m4() {
    let field = Gf2mField::new(4).unwrap();

    for x in all_elements(&field) {
        assert_eq!(field.mul(x, 1), x);
        assert_eq!(field.mul(1, x), x);
        assert_eq!(field.mul(x, 0), 0);
        assert_eq!(field.mul(0, x), 0);

        for y in all_elements(&field) {
            assert_eq!(field.mul(x, y), field.mul(y, x));

            for z in all_elements(&field) {
                assert_eq!(
                    field.mul(x, field.mul(y, z)),
                    field.mul(field.mul(x, y), z)
                );
            }
        }
    }
}

#[test]
fn test_distributivity_over_xor_m4() {
    // Addition in GF(2^m) is xor; multiplication must distribute over it
    let field = Gf2mField::new(4).unwrap();

    for x in all_elements(&field) {
        for y in all_elements(&field) {
            for z in all_elements(&field) {
                assert_eq!(
                    field.mul(x, y ^ z),
                    field.mul(x, y) ^ field.mul(x, z)
                );
            }
        }
    }
}

#[test]
fn test_inverse_exhaustive_m8() {
    let field = Gf2mField::new(8).unwrap();

    for x in nonzero_elements(&field) {
        let inv = field.inv(x);
        assert_ne!(inv, 0);
        assert_eq!(field.mul(x, inv), 1);
        assert_eq!(field.exp(field.inv_log(x)), inv);
    }
}

#[test]
fn test_square_and_sqrt_exhaustive_m8() {
    let field = Gf2mField::new(8).unwrap();

    assert_eq!(field.square(0), 0);
    assert_eq!(field.sqrt(0), 0);

    for x in nonzero_elements(&field) {
        assert_eq!(field.square(x), field.mul(x, x));
        assert_eq!(field.sqrt(field.square(x)), x);
        // squaring is a bijection, so the other composition holds too
        assert_eq!(field.square(field.sqrt(x)), x);
    }
}

#[test]
fn test_div_consistent_with_mul_m6() {
    let field = Gf2mField::new(6).unwrap();

    for x in all_elements(&field) {
        for y in nonzero_elements(&field) {
            let q = field.div(x, y);
            assert_eq!(field.mul(q, y), x);
        }
    }

    // division agrees with multiplication by the inverse
    for x in nonzero_elements(&field) {
        for y in nonzero_elements(&field) {
            assert_eq!(field.div(x, y), field.mul(x, field.inv(y)));
        }
    }
}

#[test]
fn test_pow() {
    let field = Gf2mField::new(11).unwrap();

    assert_eq!(field.pow(0, 0), 1);
    assert_eq!(field.pow(0, 5), 0);
    assert_eq!(field.pow(7, 0), 1);

    for x in [1u16, 2, 3, 0x1F, 0x2A5, 0x7FF] {
        assert_eq!(field.pow(x, 1), x);
        assert_eq!(field.pow(x, 2), field.square(x));
        assert_eq!(field.pow(x, 3), field.mul(x, field.square(x)));

        // Lagrange: x^ord == 1 for non-zero x, and exponents wrap mod ord
        let ord = u64::from(field.order());
        assert_eq!(field.pow(x, ord), 1);
        assert_eq!(field.pow(x, ord + 5), field.pow(x, 5));
    }
}

#[test]
fn test_log_domain_operations_match_element_domain_m5() {
    let field = Gf2mField::new(5).unwrap();

    for x in nonzero_elements(&field) {
        for y in nonzero_elements(&field) {
            let lx = field.log(x);
            let ly = field.log(y);

            assert_eq!(field.exp(field.mul_log(lx, ly)), field.mul(x, y));
            assert_eq!(field.exp(field.div_log(lx, ly)), field.div(x, y));
            assert_eq!(field.exp_div_log(lx, ly), field.div(x, y));
            assert_eq!(field.exp(field.square_log(lx)), field.square(x));
            assert_eq!(field.exp(field.neg_log(lx)), field.inv(x));

            assert_eq!(field.mul_by_log(y, lx), field.mul(x, y));
            assert_eq!(field.exp(field.log_mul_elem(lx, y)), field.mul(x, y));
            assert_eq!(field.exp(field.div_elem_by_log(x, ly)), field.div(x, y));
            assert_eq!(field.div_zero_elem_by_log(x, ly), field.div(x, y));
        }

        let lx = field.log(x);
        assert_eq!(field.mul_by_log_zero(0, lx), 0);
        assert_eq!(field.div_zero_elem_by_log(0, lx), 0);
    }
}

#[test]
fn test_codec_round_trip_full_range() {
    let mut buffer = [0u8; GF2M_ENCODING_LEN];

    for value in 0..=u16::MAX {
        let written = encode_gf2m(value, &mut buffer);
        assert_eq!(written, GF2M_ENCODING_LEN);
        assert_eq!(decode_gf2m(&buffer), value);
    }
}

#[test]
fn test_codec_is_big_endian() {
    let mut buffer = [0u8; GF2M_ENCODING_LEN];
    encode_gf2m(0x1234, &mut buffer);
    assert_eq!(buffer, [0x12, 0x34]);

    assert_eq!(decode_gf2m(&[0xAB, 0xCD]), 0xABCD);
}

#[test]
fn test_codec_writes_into_larger_buffer_prefix() {
    let mut buffer = [0xFFu8; 4];
    let written = encode_gf2m(0x0102, &mut buffer);
    assert_eq!(written, 2);
    assert_eq!(buffer, [0x01, 0x02, 0xFF, 0xFF]);
}

#[test]
fn test_frobenius_is_additive_m8() {
    // (x + y)^2 == x^2 + y^2 in characteristic 2
    let field = Gf2mField::new(8).unwrap();

    for x in all_elements(&field) {
        for y in all_elements(&field) {
            assert_eq!(field.square(x ^ y), field.square(x) ^ field.square(y));
        }
    }
}
