use crate::state::StateDelta;

/// Which of the move rules a request was resolved under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Scenario {
    /// A worn or lying block dropped into a grid cell.
    SlotToGrid,
    /// A grid item put on through an equipment slot.
    GridToSlot,
    /// An item re-anchored or rotated on its own cells.
    Replace,
    /// An item moved onto free cells.
    Move,
    /// Two items trading places.
    Swap,
}

/// Complete outcome of a committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub scenario: Scenario,
    /// Store changes caused by the move.
    pub delta: StateDelta,
}
