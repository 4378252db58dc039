//! Pair-sorting tile game.
//!
//! Each catalog item appears twice. Slots `(2k, 2k+1)` form a pair-slot and the
//! board is solved when every pair-slot holds two tiles of the same item.
//! Any swap is legal; the solved check is recomputed in full after each one.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::content::MatchItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("slot {index} is out of range for a board of {len} tiles")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub item: MatchItem,
    /// Unique per tile, stable across swaps.
    pub instance_id: usize,
}

#[derive(Clone, Debug)]
pub struct MatchingBoard {
    tiles: Vec<Tile>,
    dragged: Option<usize>,
    complete: bool,
}

impl MatchingBoard {
    /// Duplicate the catalog and shuffle it.
    pub fn new<R: Rng + ?Sized>(catalog: &[MatchItem], rng: &mut R) -> Self {
        let mut tiles = paired_tiles(catalog);
        tiles.shuffle(rng);
        Self::from_tiles(tiles)
    }

    /// Board in the given slot order.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let complete = all_pairs_matched(&tiles);
        MatchingBoard {
            tiles,
            dragged: None,
            complete,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles
            .chunks_exact(2)
            .filter(|p| p[0].item.id == p[1].item.id)
            .count()
    }

    /// Whether slot `i` and its pair partner hold the same item.
    pub fn is_slot_matched(&self, i: usize) -> bool {
        let partner = i ^ 1;
        match (self.tiles.get(i), self.tiles.get(partner)) {
            (Some(a), Some(b)) => a.item.id == b.item.id,
            _ => false,
        }
    }

    fn check(&self, index: usize) -> Result<(), MatchError> {
        if index < self.tiles.len() {
            Ok(())
        } else {
            Err(MatchError::OutOfRange {
                index,
                len: self.tiles.len(),
            })
        }
    }

    /// Swap two slots and return the new solved state.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<bool, MatchError> {
        self.check(a)?;
        self.check(b)?;
        if a != b {
            self.tiles.swap(a, b);
        }
        self.complete = all_pairs_matched(&self.tiles);
        Ok(self.complete)
    }

    pub fn begin_drag(&mut self, index: usize) -> Result<(), MatchError> {
        self.check(index)?;
        self.dragged = Some(index);
        Ok(())
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Drop the dragged tile on `target`. Without a drag in progress, or when
    /// dropped on itself, nothing changes.
    pub fn drop_on(&mut self, target: usize) -> Result<bool, MatchError> {
        self.check(target)?;
        match self.dragged.take() {
            Some(from) if from != target => self.swap(from, target),
            Some(from) => {
                // dropped onto itself: the drag stays active
                self.dragged = Some(from);
                Ok(self.complete)
            }
            None => Ok(self.complete),
        }
    }

    pub fn end_drag(&mut self) {
        self.dragged = None;
    }
}

fn paired_tiles(catalog: &[MatchItem]) -> Vec<Tile> {
    catalog
        .iter()
        .chain(catalog.iter())
        .enumerate()
        .map(|(instance_id, item)| Tile {
            item: item.clone(),
            instance_id,
        })
        .collect()
}

fn all_pairs_matched(tiles: &[Tile]) -> bool {
    !tiles.is_empty()
        && tiles.len() % 2 == 0
        && tiles.chunks_exact(2).all(|p| p[0].item.id == p[1].item.id)
}
