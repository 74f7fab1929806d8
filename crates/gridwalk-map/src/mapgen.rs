//! Random map generation.
//!
//! [`MapGen::random_map`] scatters walls independently over a square grid;
//! [`MapGen::carve_path`] then optionally digs a random right/down walk from
//! the start corner to the goal corner so the map is always solvable.

use gridwalk_core::Point;
use rand::Rng;

use crate::cell::MapCell;
use crate::charmap::{CharMap, square_cells};
use crate::error::MapError;

/// Map generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A `side` × `side` map where each cell is a wall with probability
    /// `wall_pct` (0.0–1.0). The start marker goes in the top-left cell and
    /// the goal marker in the bottom-right one.
    pub fn random_map(&mut self, side: usize, wall_pct: f64) -> Result<CharMap, MapError> {
        if !(0.0..=1.0).contains(&wall_pct) {
            return Err(MapError::WallPct(wall_pct));
        }
        let cells = (0..square_cells(side)?)
            .map(|_| {
                if self.rng.random_bool(wall_pct) {
                    MapCell::Wall
                } else {
                    MapCell::Open
                }
            })
            .collect();
        let mut map = CharMap::from_cells(cells)?;
        if let Some(last) = map.len().checked_sub(1) {
            map.set(0, MapCell::Start);
            map.set(last, MapCell::Goal);
        }
        Ok(map)
    }

    /// Open every wall on a random monotone walk from the top-left cell to
    /// the bottom-right cell.
    ///
    /// The walk only steps right or down, so the result is solvable even
    /// with one-directional grid edges. Returns the number of walls opened.
    pub fn carve_path(&mut self, map: &mut CharMap) -> usize {
        let side = map.side() as i32;
        if side == 0 {
            return 0;
        }
        let goal = Point::new(side - 1, side - 1);
        let mut pos = Point::ZERO;
        let mut carved = 0;

        loop {
            if let Some(idx) = map.range().index_of(pos) {
                if map.cell(idx) == Some(MapCell::Wall) {
                    map.set(idx, MapCell::Open);
                    carved += 1;
                }
            }
            if pos == goal {
                break;
            }
            let right = if pos.x == goal.x {
                false
            } else if pos.y == goal.y {
                true
            } else {
                self.rng.random_bool(0.5)
            };
            pos = if right { pos.shift(1, 0) } else { pos.shift(0, 1) };
        }

        carved
    }
}
