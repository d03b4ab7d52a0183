/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Re-check every store invariant on the working copy before a move is
    /// committed. A violation aborts the commit.
    pub verify_invariants: bool,
}

impl EngineConfig {
    // ===== compile-time limits =====
    /// Widest internal grid a container definition may declare.
    pub const MAX_GRID_WIDTH: u16 = 16;
    /// Tallest internal grid a container definition may declare.
    pub const MAX_GRID_HEIGHT: u16 = 16;
    /// Largest stack limit a definition may declare.
    pub const MAX_STACK_LIMIT: u16 = 999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VERIFY_INVARIANTS: bool = true;

    pub fn new() -> Self {
        Self {
            verify_invariants: Self::DEFAULT_VERIFY_INVARIANTS,
        }
    }

    pub fn with_verify_invariants(verify_invariants: bool) -> Self {
        Self { verify_invariants }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
