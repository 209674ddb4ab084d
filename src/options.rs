#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn get_spaces(self) -> usize {
        let Indent::Spaces(count) = self;
        count
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(crate::constants::DEFAULT_INDENT)
    }
}

/// Initial capacities for the arena stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaOptions {
    pub token_capacity: usize,
    pub array_capacity: usize,
    pub byte_capacity: usize,
}

impl ArenaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_capacity(mut self, token_capacity: usize) -> Self {
        self.token_capacity = token_capacity;
        self
    }

    pub fn with_array_capacity(mut self, array_capacity: usize) -> Self {
        self.array_capacity = array_capacity;
        self
    }

    pub fn with_byte_capacity(mut self, byte_capacity: usize) -> Self {
        self.byte_capacity = byte_capacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub indent: Indent,
    /// Sequences nested deeper than this render as `...`.
    pub max_depth: usize,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            max_depth: crate::constants::MAX_DEPTH,
        }
    }
}
