//! Misuse of the token API must panic rather than hand back a bogus value.

use parsed_token::{Arena, TokenType};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[should_panic(expected = "token kind mismatch: expected SINT, found BYTES")]
fn cast_bytes_as_sint() {
    let mut arena = Arena::new();
    let bytes = arena.make_bytes(8);
    arena.cast_sint(bytes);
}

#[rstest]
#[should_panic(expected = "expected UINT, found SINT")]
fn cast_sint_as_uint() {
    let mut arena = Arena::new();
    let s = arena.make_sint(1);
    arena.cast_uint(s);
}

#[rstest]
#[should_panic(expected = "expected BYTES, found SEQUENCE")]
fn cast_sequence_as_bytes() {
    let mut arena = Arena::new();
    let seq = arena.make_seq();
    arena.cast_bytes(seq);
}

#[rstest]
#[should_panic(expected = "expected SEQUENCE, found UINT")]
fn length_of_scalar() {
    let mut arena = Arena::new();
    let u = arena.make_uint(1);
    arena.seq_len(u);
}

#[rstest]
#[case(0)]
#[case(3)]
#[should_panic(expected = "out of bounds for sequence of length 0")]
fn index_on_empty_sequence(#[case] index: usize) {
    let mut arena = Arena::new();
    let seq = arena.make_seq();
    arena.seq_index(seq, index);
}

#[rstest]
#[should_panic(expected = "index 2 out of bounds for sequence of length 2")]
fn index_one_past_end() {
    let mut arena = Arena::new();
    let seq = arena.import_json(&json!([1, 2])).unwrap();
    arena.seq_index(seq, 2);
}

#[rstest]
#[should_panic(expected = "out of bounds")]
fn index_path_past_end() {
    let mut arena = Arena::new();
    let seq = arena.import_json(&json!([[1]])).unwrap();
    arena.seq_index_path(seq, &[0, 1]);
}

#[rstest]
#[case(TokenType::BYTES)]
#[case(TokenType::SEQUENCE)]
#[case(TokenType(63))]
#[should_panic(expected = "reserved for built-in kinds")]
fn make_user_with_reserved_tag(#[case] tag: TokenType) {
    let mut arena = Arena::new();
    arena.make_user(tag, 0u8);
}

#[rstest]
#[should_panic(expected = "reserved for built-in kinds")]
fn cast_user_with_builtin_tag() {
    let mut arena = Arena::new();
    let s = arena.make_sint(1);
    arena.cast_user::<i64>(TokenType::SINT, s);
}

#[rstest]
#[should_panic(expected = "is not a")]
fn cast_user_to_wrong_type() {
    let mut arena = Arena::new();
    let user = arena.make_user(TokenType::USER, 1u16);
    arena.cast_user::<u32>(TokenType::USER, user);
}
