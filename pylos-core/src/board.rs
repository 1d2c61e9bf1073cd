//! Pyramid occupancy and the support / square relations between cells.

use crate::{Coord, Player, PylosResult, CELLS, LAYERS, LAYER_OFFSET, LAYER_SIDE};

/// Number of 2x2 blocks: 9 on layer 0, 4 on layer 1, 1 on layer 2.
const SQUARE_COUNT: usize = 14;

/// Mask of all 30 cells.
const ALL_CELLS: u32 = (1 << CELLS) - 1;

const fn cell_bit(layer: usize, row: usize, col: usize) -> u32 {
    1 << (LAYER_OFFSET[layer] as usize + row * LAYER_SIDE[layer] as usize + col)
}

/// SUPPORT[i]: the four cells directly beneath cell i (0 on layer 0).
const fn build_support() -> [u32; CELLS] {
    let mut table = [0u32; CELLS];
    let mut layer = 1;
    while layer < LAYERS {
        let side = LAYER_SIDE[layer] as usize;
        let mut row = 0;
        while row < side {
            let mut col = 0;
            while col < side {
                let idx = LAYER_OFFSET[layer] as usize + row * side + col;
                table[idx] = cell_bit(layer - 1, row, col)
                    | cell_bit(layer - 1, row + 1, col)
                    | cell_bit(layer - 1, row + 1, col + 1)
                    | cell_bit(layer - 1, row, col + 1);
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }
    table
}

/// RESTING[i]: the cells one layer up that rest on cell i.
const fn build_resting() -> [u32; CELLS] {
    let mut table = [0u32; CELLS];
    let mut above = 0;
    while above < CELLS {
        let mut below = 0;
        while below < CELLS {
            if SUPPORT[above] & (1 << below) != 0 {
                table[below] |= 1 << above;
            }
            below += 1;
        }
        above += 1;
    }
    table
}

/// Every 2x2 block of cells on layers 0-2.
const fn build_squares() -> [u32; SQUARE_COUNT] {
    let mut table = [0u32; SQUARE_COUNT];
    let mut n = 0;
    let mut layer = 0;
    while layer < LAYERS - 1 {
        let side = LAYER_SIDE[layer] as usize;
        let mut row = 0;
        while row + 1 < side {
            let mut col = 0;
            while col + 1 < side {
                table[n] = cell_bit(layer, row, col)
                    | cell_bit(layer, row + 1, col)
                    | cell_bit(layer, row + 1, col + 1)
                    | cell_bit(layer, row, col + 1);
                n += 1;
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }
    table
}

const SUPPORT: [u32; CELLS] = build_support();
const RESTING: [u32; CELLS] = build_resting();
const SQUARES: [u32; SQUARE_COUNT] = build_squares();

/// Compact pyramid state: one occupancy mask per player.
///
/// See crate documentation for the cell indexing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    masks: [u32; 2],
}

impl Board {
    /// Create an empty pyramid.
    #[inline]
    pub fn new() -> Board {
        Board { masks: [0, 0] }
    }

    /// Owner of the sphere on a cell, `None` if empty.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<Player> {
        let bit = coord.bit();
        if self.masks[0] & bit != 0 {
            Some(Player::Light)
        } else if self.masks[1] & bit != 0 {
            Some(Player::Dark)
        } else {
            None
        }
    }

    /// Look up a cell from raw indices, failing if they are off the board.
    pub fn cell_at(&self, layer: i64, row: i64, col: i64) -> PylosResult<Option<Player>> {
        Ok(self.cell(Coord::checked(layer, row, col)?))
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.occupied_mask() & coord.bit() == 0
    }

    /// Occupancy mask of one player.
    #[inline]
    pub fn mask(&self, player: Player) -> u32 {
        self.masks[player.index()]
    }

    /// Occupancy mask of both players.
    #[inline]
    pub fn occupied_mask(&self) -> u32 {
        self.masks[0] | self.masks[1]
    }

    /// Put a sphere on a cell, replacing whatever was there.
    /// Does NOT validate - use `validate_placement` first.
    #[inline]
    pub fn set(&mut self, coord: Coord, player: Player) {
        let bit = coord.bit();
        self.masks[player.opponent().index()] &= !bit;
        self.masks[player.index()] |= bit;
    }

    /// Empty a cell.
    /// Does NOT validate - use `validate_removal` first.
    #[inline]
    pub fn clear(&mut self, coord: Coord) {
        let bit = !coord.bit();
        self.masks[0] &= bit;
        self.masks[1] &= bit;
    }

    /// True if the cell is on the base or all four cells beneath it are occupied.
    #[inline]
    pub fn is_supported(&self, coord: Coord) -> bool {
        let support = SUPPORT[coord.index()];
        self.occupied_mask() & support == support
    }

    /// True if any sphere rests on this cell.
    #[inline]
    pub fn is_pinned(&self, coord: Coord) -> bool {
        self.occupied_mask() & RESTING[coord.index()] != 0
    }

    /// Cells one layer up that rest on this cell.
    pub fn resting_on(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let mask = RESTING[coord.index()];
        Coord::all().filter(move |c| mask & c.bit() != 0)
    }

    /// True if the sphere on this cell is a corner of a 2x2 block of its own color.
    pub fn forms_square(&self, coord: Coord) -> bool {
        let Some(owner) = self.cell(coord) else {
            return false;
        };
        let own = self.mask(owner);
        SQUARES
            .iter()
            .any(|&square| square & coord.bit() != 0 && own & square == square)
    }

    /// Number of spheres a player has on the board.
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.mask(player).count_ones()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied(&self) -> u32 {
        self.occupied_mask().count_ones()
    }

    /// Check the support invariant on every occupied cell.
    pub fn is_stable(&self) -> bool {
        let occupied = self.occupied_mask();
        occupied & !ALL_CELLS == 0
            && self.masks[0] & self.masks[1] == 0
            && Coord::all().all(|c| occupied & c.bit() == 0 || self.is_supported(c))
    }
}
