pub const DEFAULT_INDENT: usize = 2;

pub const MAX_DEPTH: usize = 256;

/// Inline capacity of a counted array before it spills to the heap.
pub const INLINE_ELEMENTS: usize = 4;

pub(crate) const ELIDED: &str = "...";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Indent, PrintOptions};

    #[rstest::rstest]
    fn test_defaults_agree_with_options() {
        let options = PrintOptions::default();
        assert_eq!(options.indent, Indent::Spaces(DEFAULT_INDENT));
        assert_eq!(options.max_depth, MAX_DEPTH);
    }
}
