use parsed_token::{action, Arena, ArenaOptions, ParseResult, PrintOptions};
use rstest::rstest;

/// Builds `[A, [B, C], D]` the way a grammar engine would while matching,
/// then runs one flatten action over it.
#[rstest]
fn nested_tokens_flatten_to_original_leaves() {
    let mut arena = Arena::with_options(&ArenaOptions::new().with_token_capacity(16));
    let a = arena.make_bytes_from(b"A");
    let b = arena.make_bytes_from(b"B");
    let c = arena.make_bytes_from(b"C");
    let d = arena.make_bytes_from(b"D");

    let inner = arena.make_seq();
    arena.seq_snoc(inner, b);
    arena.seq_snoc(inner, c);

    let root = arena.make_seq();
    arena.seq_snoc(root, a);
    arena.seq_snoc(root, inner);
    arena.seq_snoc(root, d);

    let mut result = ParseResult::new(arena, Some(root));
    let flat = result.apply(&action::flatten).unwrap();

    assert_eq!(result.arena.seq_elements(flat), &[a, b, c, d]);
    assert_eq!(result.arena.view(flat).to_string(), "(<41> <42> <43> <44>)");
    assert_eq!(
        result.arena.view(flat).to_pretty_string(&PrintOptions::default()),
        "SEQUENCE[4]\n  BYTES \"A\"\n  BYTES \"B\"\n  BYTES \"C\"\n  BYTES \"D\""
    );
}

#[rstest]
fn arena_reuse_after_clear() {
    let mut arena = Arena::new();
    let first = arena.make_seq();
    let x = arena.make_uint(1);
    arena.seq_snoc(first, x);
    assert_eq!(arena.stats().tokens, 2);

    arena.clear();
    assert_eq!(arena.stats().tokens, 0);
    assert_eq!(arena.stats().arrays, 0);

    let second = arena.make_seq();
    assert_eq!(arena.seq_len(second), 0);

    let (arena, ast) = ParseResult::new(arena, Some(second)).into_parts();
    assert_eq!(ast, Some(second));
    assert_eq!(arena.stats().tokens, 1);
}
