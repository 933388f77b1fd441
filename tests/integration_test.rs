//! End-to-end checks through the public API: count -> build -> generate -> encode ->
//! decode, including the packed byte form.

use huffman::{
    build, count, decode, decode_bits, decode_with_table, encode, generate, BitString,
    HuffmanError,
};
use huffman::bitstream::bitreader::BitReader;

const SAMPLES: [&str; 6] = [
    "a",
    "aaaa",
    "aabb",
    "abracadabra",
    "The quick brown fox jumps over the lazy dog. ",
    "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzy",
];

/// Every sample decodes back to itself by tree walk, table lookup and packed bytes.
#[test]
fn test_round_trip() {
    for sample in SAMPLES {
        let input = sample.chars().collect::<Vec<_>>();
        let tree = build(&count(input.iter().copied())).expect("build failed");
        let table = generate(&tree);
        let stream = encode(&input, &table).expect("encode failed");

        assert_eq!(decode(&stream, &tree).unwrap(), input, "tree walk: {}", sample);
        assert_eq!(decode_with_table(&stream, &table).unwrap(), input, "table: {}", sample);

        let (bytes, padding) = stream.to_bytes();
        assert_eq!(bytes.len() * 8 - padding as usize, stream.len());
        let reader = BitReader::new(&bytes, stream.len());
        assert_eq!(decode_bits(reader, &tree).unwrap(), input, "packed: {}", sample);
    }
}

/// Round trip over bytes rather than chars, including every byte value.
#[test]
fn test_byte_symbols() {
    let input = (0..=255u8).chain(b"hello world".iter().copied()).collect::<Vec<u8>>();
    let freqs = count(input.iter().copied());
    assert_eq!(freqs.len(), 256);
    let tree = build(&freqs).unwrap();
    let table = generate(&tree);
    assert!(table.is_prefix_free());
    let stream = encode(&input, &table).unwrap();
    assert_eq!(table.encoded_len(&freqs).unwrap(), stream.len());
    assert_eq!(decode(&stream, &tree).unwrap(), input);
}

/// Building twice from the same table gives the same tree and the same codes.
#[test]
fn test_deterministic() {
    let freqs = count("she sells sea shells by the sea shore".chars());
    let first = build(&freqs).unwrap();
    let second = build(&freqs).unwrap();
    assert_eq!(first, second);
    let a = generate(&first).iter().map(|(s, c)| (*s, c.clone())).collect::<Vec<_>>();
    let b = generate(&second).iter().map(|(s, c)| (*s, c.clone())).collect::<Vec<_>>();
    assert_eq!(a, b);
}

/// abracadabra: prefix-free, shorter codes for more frequent symbols, under 88 bits.
#[test]
fn test_abracadabra() {
    let input = "abracadabra".chars().collect::<Vec<_>>();
    let freqs = count(input.iter().copied());
    let table = generate(&build(&freqs).unwrap());
    assert!(table.is_prefix_free());

    let len = |c: char| table.get(&c).unwrap().len();
    assert!(len('a') <= len('b'));
    assert!(len('b') <= len('c'));
    assert!(len('r') <= len('d'));

    let stream = encode(&input, &table).unwrap();
    assert!(stream.len() < 88);
}

#[test]
fn test_empty_input() {
    let freqs = count("".chars());
    assert!(freqs.is_empty());
    assert_eq!(build(&freqs).unwrap_err(), HuffmanError::EmptyAlphabet);
}

#[test]
fn test_truncated() {
    let tree = build(&count("abcdefgh".chars())).unwrap();
    // Eight equally weighted symbols get 3 bit codes, so 2 bits cannot finish one.
    let bits: BitString = "01".parse().unwrap();
    assert_eq!(
        decode(&bits, &tree),
        Err(HuffmanError::TruncatedStream { consumed: 2 })
    );
}
