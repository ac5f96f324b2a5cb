/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched from the root, counting the root move itself.
    pub depth: u32,
}

impl SearchParams {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchParams { depth }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams { depth: 4 }
    }
}
