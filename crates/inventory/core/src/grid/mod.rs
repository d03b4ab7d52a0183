//! Occupancy projection of a block's contents.
//!
//! A [`Grid`] is a row-major buffer of `width × height` cells, each holding the
//! id of the item covering it. Grids are derived from blocks on demand and are
//! the only thing placement checks and move simulations ever mutate; the
//! authoritative [`Block`] is never touched here.
mod placement;

pub use placement::PlacementError;

use crate::env::{GridCapacity, ItemDefinition, ItemOracle, OracleError};
use crate::state::{Block, ItemId};

/// Effective width and height of an item on a grid.
///
/// Rotation swaps the two axes; every footprint computation goes through
/// [`Footprint::of`] so the swap is applied the same way everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn of(definition: &ItemDefinition, rotated: bool) -> Self {
        let base = Self::new(usize::from(definition.width), usize::from(definition.height));
        if rotated { base.rotated() } else { base }
    }

    pub const fn rotated(self) -> Self {
        Self::new(self.height, self.width)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Linear indices covered when anchored at `anchor` on a grid `grid_width`
    /// cells wide. Grid bounds are not checked; indices past `usize::MAX` are
    /// skipped.
    pub fn cells(self, anchor: usize, grid_width: usize) -> impl Iterator<Item = usize> {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| {
                row.checked_mul(grid_width)
                    .and_then(|offset| offset.checked_add(col))
                    .and_then(|offset| anchor.checked_add(offset))
            })
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<ItemId>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn for_capacity(capacity: GridCapacity) -> Self {
        Self::new(usize::from(capacity.width), usize::from(capacity.height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Option<ItemId>] {
        &self.cells
    }

    /// Item covering `slot`, `None` when empty or outside the grid.
    pub fn occupant_at(&self, slot: usize) -> Option<ItemId> {
        self.cells.get(slot).copied().flatten()
    }

    pub fn contains_slot(&self, slot: usize) -> bool {
        slot < self.cells.len()
    }

    /// Cells currently holding `id`.
    pub fn cells_of(&self, id: ItemId) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(id))
            .map(|(slot, _)| slot)
    }

    /// Writes `id` into every in-range cell of the footprint, unconditionally.
    pub(crate) fn stamp(&mut self, id: ItemId, footprint: Footprint, anchor: usize) {
        for slot in footprint.cells(anchor, self.width) {
            if let Some(cell) = self.cells.get_mut(slot) {
                *cell = Some(id);
            }
        }
    }
}

/// Projects `block` onto a fresh occupancy grid.
///
/// Items listed in `excluding` are left out, which is how move simulations
/// vacate the cells of the item being moved.
///
/// # Errors
///
/// Returns `OracleError::ItemNotFound` if the block or any stamped item refers
/// to a definition the catalog does not know.
pub fn build_grid<I>(block: &Block, items: &I, excluding: &[ItemId]) -> Result<Grid, OracleError>
where
    I: ItemOracle + ?Sized,
{
    let container = items.lookup(block.definition)?;
    let mut grid = Grid::for_capacity(container.grid_capacity());

    for item in block.items.iter().filter(|item| !excluding.contains(&item.id)) {
        let definition = items.lookup(item.definition)?;
        grid.stamp(item.id, Footprint::of(&definition, item.rotated), item.slot);
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClothingKind, ItemKind};
    use crate::state::{BlockId, Item, ItemDefId};
    use crate::testing::StubItems;

    fn vest_block() -> Block {
        Block::new(BlockId(1), ItemDefId(1)).with_items(vec![
            Item::new(ItemId(10), ItemDefId(6), 1, 0, false),
            Item::new(ItemId(11), ItemDefId(7), 5, 8, false),
        ])
    }

    #[test]
    fn footprint_rotation_swaps_axes() {
        let kind = ItemKind::Clothing(ClothingKind::TopFirstLayer);
        let coat = ItemDefinition::new(ItemDefId(2), "coat", 4, 3, kind);
        assert_eq!(Footprint::of(&coat, false), Footprint::new(4, 3));
        assert_eq!(Footprint::of(&coat, true), Footprint::new(3, 4));
        let cells: Vec<_> = Footprint::new(2, 2).cells(1, 4).collect();
        assert_eq!(cells, vec![1, 2, 5, 6]);
    }

    #[test]
    fn build_grid_stamps_every_item() {
        let items = StubItems::standard();
        let grid = build_grid(&vest_block(), &items, &[]).unwrap();

        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.occupant_at(0), Some(ItemId(10)));
        assert_eq!(grid.occupant_at(4), Some(ItemId(10)));
        assert_eq!(grid.occupant_at(8), Some(ItemId(11)));
        assert_eq!(grid.occupant_at(1), None);
        assert_eq!(grid.cells().iter().flatten().count(), 3);
    }

    #[test]
    fn build_grid_honours_exclusions_and_leaves_block_alone() {
        let items = StubItems::standard();
        let block = vest_block();
        let before = block.clone();

        let grid = build_grid(&block, &items, &[ItemId(10)]).unwrap();
        assert_eq!(grid.occupant_at(0), None);
        assert_eq!(grid.occupant_at(8), Some(ItemId(11)));
        assert_eq!(block, before);
    }

    #[test]
    fn build_grid_reports_unknown_definitions() {
        let items = StubItems::standard();
        let block = Block::new(BlockId(1), ItemDefId(1))
            .with_items(vec![Item::new(ItemId(10), ItemDefId(99), 1, 0, false)]);
        assert_eq!(
            build_grid(&block, &items, &[]),
            Err(OracleError::ItemNotFound(ItemDefId(99)))
        );
    }

    #[test]
    fn non_container_projects_to_empty_grid() {
        let items = StubItems::standard();
        let rifle = Block::new(BlockId(2), ItemDefId(5));
        let grid = build_grid(&rifle, &items, &[]).unwrap();
        assert!(grid.is_empty());
    }
}
