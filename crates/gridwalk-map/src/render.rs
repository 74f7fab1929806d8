//! Drawing a found path back onto its map for console display.

use std::fmt;

use gridwalk_core::{Point, Range};
use gridwalk_search::{NodeIndex, Path, SearchError, Searcher};

use crate::cell::MapCell;
use crate::charmap::CharMap;

/// Glyph for cells that are neither walls nor on the path.
pub const BACKGROUND: char = '_';
/// Glyph for wall cells off the path.
pub const WALL: char = 'X';
/// Glyph for intermediate path cells.
pub const PATH: char = '*';
/// Glyph for the path's first cell.
pub const START: char = 'S';
/// Glyph for the path's last cell.
pub const GOAL: char = 'G';

/// A rendered grid: one glyph per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathView {
    range: Range,
    glyphs: Vec<char>,
}

impl PathView {
    /// The glyph drawn at `p`.
    pub fn glyph(&self, p: Point) -> Option<char> {
        self.range.index_of(p).map(|i| self.glyphs[i])
    }

    /// Rows of glyphs, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.range.width().max(1) as usize)
    }
}

/// Glyphs separated by single spaces, one row per line.
impl fmt::Display for PathView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, g) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{g}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draw `path` over `map`.
///
/// Start and goal come from the path's endpoints, not from the map's own
/// markers. Path nodes outside the map are ignored.
pub fn render_path(map: &CharMap, path: &Path) -> PathView {
    let mut glyphs: Vec<char> = map
        .cells()
        .iter()
        .map(|&c| if c == MapCell::Wall { WALL } else { BACKGROUND })
        .collect();

    let mut mark = |idx: NodeIndex, glyph: char| {
        if let Some(g) = glyphs.get_mut(idx) {
            *g = glyph;
        }
    };
    for &idx in path {
        mark(idx, PATH);
    }
    mark(path.start(), START);
    mark(path.end(), GOAL);

    PathView {
        range: map.range(),
        glyphs,
    }
}

/// Reconstruct the path `searcher` found from `start` to `end` and draw it.
pub fn render_search(
    map: &CharMap,
    searcher: &Searcher,
    start: NodeIndex,
    end: NodeIndex,
) -> Result<PathView, SearchError> {
    let path = searcher.path(start, end)?;
    Ok(render_path(map, &path))
}
