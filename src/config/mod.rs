/// How much checking happens after the structural decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Structural mapping only; missing required fields become empty values.
    #[default]
    Lenient,
    /// Decode, then reject feeds that break the format's rules.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub mode: DecodeMode,
    /// Upper bound on bytes read from the source. `None` reads to the end.
    pub max_bytes: Option<u64>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::default().with_mode(DecodeMode::Strict)
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }
}
