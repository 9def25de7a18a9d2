use huffman_coder::huffman::{CodeTable, FrequencyMap, HuffmanCodec};
use huffman_coder::Error;

const SAMPLE_INPUTS: &[&[u8]] = &[
    b"abbccda",
    b"aaaa",
    b"ab",
    b"abracadabra",
    b"mississippi",
    b"the quick brown fox jumps over the lazy dog",
    b"\x00\x01\x02\x00\xff\xff\xff\x80",
];

fn create_codec(input: &[u8]) -> HuffmanCodec {
    HuffmanCodec::new(input).expect("Codec construction failed")
}

fn code_length(table: &CodeTable, symbol: u8) -> usize {
    table.code(symbol).expect("Symbol has no code").len()
}

#[test]
fn test_round_trip_of_sample_inputs() {
    for &input in SAMPLE_INPUTS {
        let codec = create_codec(input);
        let encoded = codec.encode(input).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, input, "Round-trip failed for {:?}", input);
    }
}

#[test]
fn test_round_trip_of_every_byte_value() {
    let input: Vec<u8> = (0..=u8::MAX)
        .flat_map(|symbol| std::iter::repeat(symbol).take(symbol as usize / 16 + 1))
        .rev()
        .collect();
    let codec = create_codec(&input);
    let encoded = codec.encode(&input).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), input);
}

#[test]
fn test_independent_constructions_round_trip_equivalently() {
    for &input in SAMPLE_INPUTS {
        let first = create_codec(input);
        let second = create_codec(input);
        let first_encoded = first.encode(input).unwrap();
        let second_encoded = second.encode(input).unwrap();
        assert_eq!(first.decode(&first_encoded).unwrap(), input);
        assert_eq!(second.decode(&second_encoded).unwrap(), input);
        assert_eq!(first_encoded.len(), second_encoded.len());
    }
}

#[test]
fn test_code_tables_are_prefix_free() {
    for &input in SAMPLE_INPUTS {
        let codec = create_codec(input);
        let codes: Vec<&str> = codec.code_table().iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
        assert!(codec.code_table().is_prefix_free());
    }
}

#[test]
fn test_every_code_has_at_least_one_bit() {
    for &input in SAMPLE_INPUTS {
        let codec = create_codec(input);
        assert!(codec.code_table().iter().all(|(_, code)| !code.is_empty()));
    }
}

#[test]
fn test_frequency_faithfulness() {
    for &input in SAMPLE_INPUTS {
        let codec = create_codec(input);
        let expected: usize = FrequencyMap::count(input)
            .iter()
            .map(|(symbol, frequency)| frequency * code_length(codec.code_table(), symbol))
            .sum();
        let encoded = codec.encode(input).unwrap();
        assert_eq!(encoded.len(), expected);
        assert_eq!(codec.encoded_bit_count(), expected);
    }
}

#[test]
fn test_code_table_covers_frequency_map() {
    for &input in SAMPLE_INPUTS {
        let codec = create_codec(input);
        let map_symbols: Vec<u8> = codec.frequencies().iter().map(|(s, _)| s).collect();
        let table_symbols: Vec<u8> = codec.code_table().iter().map(|(s, _)| s).collect();
        assert_eq!(map_symbols, table_symbols);
        assert_eq!(codec.frequencies().total(), input.len());
    }
}

#[test]
fn test_abbccda() {
    let codec = create_codec(b"abbccda");
    let encoded = codec.encode(b"abbccda").unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), b"abbccda");
    assert!(
        (14..=16).contains(&encoded.len()),
        "Unexpected encoded length {}",
        encoded.len()
    );
}

#[test]
fn test_single_symbol_input() {
    let codec = create_codec(b"aaaa");
    assert_eq!(codec.code_table().len(), 1);
    assert_eq!(codec.code_table().code(b'a'), Some("0"));
    assert_eq!(codec.encode(b"aaaa").unwrap(), "0000");
    assert_eq!(codec.decode("0000").unwrap(), b"aaaa");
    assert!(matches!(codec.decode("01"), Err(Error::InvalidBit('1', 1))));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(HuffmanCodec::new(b""), Err(Error::EmptyInput)));
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let codec = create_codec(b"xyz");
    assert!(matches!(
        codec.encode(b"xyw"),
        Err(Error::UnknownSymbol(b'w', 2))
    ));
}

#[test]
fn test_abracadabra_gives_most_frequent_symbol_shortest_code() {
    let input = b"abracadabra";
    let codec = create_codec(input);
    let encoded = codec.encode(input).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), input);
    let table = codec.code_table();
    assert!(code_length(table, b'a') <= code_length(table, b'b'));
    assert!(code_length(table, b'a') <= code_length(table, b'r'));
}

#[test]
fn test_two_symbols_get_complementary_codes() {
    let codec = create_codec(b"ab");
    let table = codec.code_table();
    let a = table.code(b'a').unwrap();
    let b = table.code(b'b').unwrap();
    assert!(
        (a, b) == ("0", "1") || (a, b) == ("1", "0"),
        "Unexpected codes a={} b={}",
        a,
        b
    );
}

#[test]
fn test_invalid_bit_is_rejected() {
    let codec = create_codec(b"abbccda");
    assert!(matches!(codec.decode("01a0"), Err(Error::InvalidBit('a', 2))));
}

#[test]
fn test_truncated_code_is_rejected() {
    let codec = create_codec(b"abbccda");
    let mut encoded = codec.encode(b"abbccda").unwrap();
    encoded.pop();
    assert!(matches!(codec.decode(&encoded), Err(Error::TruncatedCode(_))));
}

#[test]
fn test_codec_shared_between_threads() {
    let input: &[u8] = b"concurrent readers share one immutable codec";
    let codec = std::sync::Arc::new(create_codec(input));
    let expected = codec.encode(input).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || {
                let encoded = codec.encode(input).unwrap();
                let decoded = codec.decode(&encoded).unwrap();
                (encoded, decoded)
            })
        })
        .collect();
    for handle in handles {
        let (encoded, decoded) = handle.join().unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(decoded, input);
    }
}
