use super::*;

#[test]
fn test_parameter_error_display() {
    let err = Error::param("extension_degree", "supported GF(2^m) degrees are 2 through 16");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'extension_degree': supported GF(2^m) degrees are 2 through 16"
    );
}

#[test]
fn test_length_error_display() {
    let err = Error::Length {
        context: "EMSA3 raw message",
        expected: 32,
        actual: 20,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for EMSA3 raw message: expected 32, got 20"
    );
}

#[test]
fn test_encoding_error_display() {
    let err = Error::Encoding {
        scheme: "EMSA3",
        details: "output length too small for digest and padding",
    };
    assert_eq!(
        err.to_string(),
        "Encoding failure in EMSA3: output length too small for digest and padding"
    );
}

#[test]
fn test_validate_parameter() {
    assert!(validate::parameter(true, "x", "must hold").is_ok());
    assert!(validate::parameter(false, "x", "must hold").is_err());
}

#[test]
fn test_validate_length() {
    assert!(validate::length("buf", 2, 2).is_ok());
    let err = validate::length("buf", 1, 2).unwrap_err();
    assert!(matches!(err, Error::Length { expected: 2, actual: 1, .. }));
}
