use crate::{DecodeError, decode, encode, encoded_len};

#[test]
fn test_encode_decode_empty() {
    assert_eq!(encode(b"", false), b"");
    assert_eq!(decode(b"", true).unwrap(), b"");
}

#[test]
fn test_encode_decode_hello_world() {
    let data = b"Hello, World!";
    let encoded = encode(data, true);
    assert_eq!(encoded, b"48656C6C6F2C20576F726C6421");
    let decoded = decode(&encoded, false).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_roundtrip_all_bytes_both_cases() {
    let data: Vec<u8> = (0..=255).collect();
    for uppercase in [false, true] {
        let encoded = encode(&data, uppercase);
        assert_eq!(decode(&encoded, false).unwrap(), data);
    }
}

#[test]
fn test_roundtrip_binary() {
    let data = &[0u8, 0, 1, 2, 3, 255, 254, 253, 0];
    let encoded = encode(data, false);
    assert_eq!(decode(&encoded, false).unwrap(), data);
}

#[test]
fn test_length_laws() {
    for len in [0usize, 1, 2, 7, 64, 1000] {
        let data = vec![0x5Au8; len];
        let encoded = encode(&data, false);
        assert_eq!(Some(encoded.len()), encoded_len(len));
        assert_eq!(decode(&encoded, false).unwrap().len(), len);
    }
}

#[test]
fn test_case_insensitive_decode() {
    let lower = decode(b"4a", false).unwrap();
    let upper = decode(b"4A", false).unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, [0x4A]);
}

#[test]
fn test_odd_length_regardless_of_policy() {
    assert!(matches!(decode(b"abc", true), Err(DecodeError::OddLength { length: 3 })));
    assert!(matches!(decode(b"abc", false), Err(DecodeError::OddLength { length: 3 })));
}

#[test]
fn test_invalid_symbol_strict() {
    let err = decode(b"zz", false).unwrap_err();
    assert_eq!(err.symbol(), Some(b'z'));
}

#[test]
fn test_invalid_symbol_tolerant() {
    let decoded = decode(b"zz", true).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded, [0xFF]);
}

#[test]
fn test_strict_discards_partial_output() {
    // valid pairs before the failure are not returned
    assert!(decode(b"414243zz", false).is_err());
}
