//! Placement checks against an occupancy grid.

use super::{Footprint, Grid};
use crate::env::ItemDefinition;
use crate::state::ItemId;

/// Why a footprint cannot be anchored at a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    #[error("footprint {width}x{height} is larger than the {grid_width}x{grid_height} grid")]
    TooLarge {
        width: usize,
        height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("footprint anchored at slot {slot} crosses the grid edge")]
    OutOfBounds { slot: usize },

    #[error("cell {cell} is already taken by {occupant}")]
    Collision { cell: usize, occupant: ItemId },
}

impl Grid {
    /// Checks whether `id` with `footprint` may be anchored at `slot`.
    ///
    /// Cells already holding `id` itself do not count as collisions, so an
    /// item can be re-validated against a grid that still contains it.
    pub fn check(
        &self,
        id: ItemId,
        footprint: Footprint,
        slot: usize,
    ) -> Result<(), PlacementError> {
        let (width, height) = (self.width, self.height);

        if footprint.is_empty() || footprint.width > width || footprint.height > height {
            return Err(PlacementError::TooLarge {
                width: footprint.width,
                height: footprint.height,
                grid_width: width,
                grid_height: height,
            });
        }

        if !self.contains_slot(slot) {
            return Err(PlacementError::OutOfBounds { slot });
        }
        // Column range must stay on the anchor row; no wrapping into the next one.
        if slot % width + footprint.width > width {
            return Err(PlacementError::OutOfBounds { slot });
        }
        if slot / width + footprint.height > height {
            return Err(PlacementError::OutOfBounds { slot });
        }

        for cell in footprint.cells(slot, width) {
            match self.cells[cell] {
                Some(occupant) if occupant != id => {
                    return Err(PlacementError::Collision { cell, occupant });
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn can_place(&self, id: ItemId, footprint: Footprint, slot: usize) -> bool {
        self.check(id, footprint, slot).is_ok()
    }

    /// Checks, then stamps the footprint on success. Used by multi-step
    /// simulations on grid copies.
    pub fn place(
        &mut self,
        id: ItemId,
        footprint: Footprint,
        slot: usize,
    ) -> Result<(), PlacementError> {
        self.check(id, footprint, slot)?;
        self.stamp(id, footprint, slot);
        Ok(())
    }

    /// Clears the cells of `id`'s footprint at `slot`.
    ///
    /// Only cells that currently hold `id` are cleared; another occupant's
    /// cells survive even if the ranges overlap.
    pub fn remove_footprint(&mut self, id: ItemId, footprint: Footprint, slot: usize) {
        for cell in footprint.cells(slot, self.width) {
            if let Some(entry) = self.cells.get_mut(cell) {
                if *entry == Some(id) {
                    *entry = None;
                }
            }
        }
    }

    /// First anchor, in row-major order, where `definition` fits. Unrotated
    /// placements are preferred over rotated ones at the same slot.
    pub fn first_fit(&self, id: ItemId, definition: &ItemDefinition) -> Option<(usize, bool)> {
        (0..self.len()).find_map(|slot| {
            [false, true]
                .into_iter()
                .find(|&rotated| self.can_place(id, Footprint::of(definition, rotated), slot))
                .map(|rotated| (slot, rotated))
        })
    }
}
