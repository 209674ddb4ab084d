use parsed_token::{Arena, TokenId};
use rstest::rstest;
use serde_json::{json, Value};

fn leaf_ids(arena: &Arena, flat: TokenId) -> Vec<TokenId> {
    arena.seq_elements(flat).to_vec()
}

#[rstest]
#[case(json!("a"))]
#[case(json!(-7))]
#[case(json!(42))]
fn flatten_non_sequence_is_singleton_of_itself(#[case] input: Value) {
    let mut arena = Arena::new();
    let token = arena.import_json(&input).unwrap();
    let flat = arena.seq_flatten(token);
    assert_eq!(arena.seq_len(flat), 1);
    assert_eq!(arena.seq_index(flat, 0), token);
}

#[rstest]
fn flatten_user_token_is_singleton() {
    let mut arena = Arena::new();
    let token = arena.make_user(parsed_token::TokenType::USER, vec![1u8, 2]);
    let flat = arena.seq_flatten(token);
    assert_eq!(arena.seq_elements(flat), &[token]);
}

#[rstest]
#[case(json!([]), "()")]
#[case(json!([[]]), "()")]
#[case(json!([["a", "b"], "c", [["d"]]]), "(<61> <62> <63> <64>)")]
#[case(json!([1, [2, [3, [4, [5]]]]]), "(u0x1 u0x2 u0x3 u0x4 u0x5)")]
#[case(json!([[], "x", [[], []]]), "(<78>)")]
fn flatten_removes_all_nesting(#[case] input: Value, #[case] expected: &str) {
    let mut arena = Arena::new();
    let token = arena.import_json(&input).unwrap();
    let flat = arena.seq_flatten(token);
    assert_eq!(arena.view(flat).to_string(), expected);
}

#[rstest]
fn flatten_keeps_leaf_identity_and_order() {
    let mut arena = Arena::new();
    let root = arena.import_json(&json!([["a", "b"], "c", [["d"]]])).unwrap();
    let expected = vec![
        arena.seq_index_path(root, &[0, 0]),
        arena.seq_index_path(root, &[0, 1]),
        arena.seq_index_path(root, &[1]),
        arena.seq_index_path(root, &[2, 0, 0]),
    ];

    let flat = arena.seq_flatten(root);
    assert_eq!(leaf_ids(&arena, flat), expected);
}

#[rstest]
#[case(json!([["a"], [["b", "c"]], "d"]))]
#[case(json!(["already", "flat"]))]
#[case(json!([]))]
fn flatten_is_idempotent_but_allocates(#[case] input: Value) {
    let mut arena = Arena::new();
    let root = arena.import_json(&input).unwrap();
    let once = arena.seq_flatten(root);
    let twice = arena.seq_flatten(once);

    assert_ne!(once, root);
    assert_ne!(twice, once);
    assert_eq!(leaf_ids(&arena, once), leaf_ids(&arena, twice));
}

#[rstest]
fn flatten_does_not_modify_input() {
    let mut arena = Arena::new();
    let root = arena.import_json(&json!([["a"], "b"])).unwrap();
    let before = arena.view(root).to_string();
    arena.seq_flatten(root);
    assert_eq!(arena.view(root).to_string(), before);
}

#[rstest]
fn flatten_shared_subtree_appears_each_time() {
    let mut arena = Arena::new();
    let shared = arena.import_json(&json!(["x", "y"])).unwrap();
    let root = arena.make_seq();
    arena.seq_snoc(root, shared);
    arena.seq_snoc(root, shared);

    let flat = arena.seq_flatten(root);
    let x = arena.seq_index(shared, 0);
    let y = arena.seq_index(shared, 1);
    assert_eq!(leaf_ids(&arena, flat), vec![x, y, x, y]);
}
