//! A square map of [`MapCell`]s read from marker characters.

use std::fs;
use std::path::Path;

use gridwalk_core::{Point, Range};
use gridwalk_search::NodeIndex;

use crate::cell::{Alphabet, MapCell};
use crate::error::MapError;

/// Cell count of a default map: a 20 × 20 grid.
pub const DEFAULT_MAX_CELLS: usize = 400;

/// How map text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    /// Exact number of cells in a parsed map. Must be a perfect square.
    pub max_cells: usize,
    /// Marker characters; everything else in the text is skipped.
    pub alphabet: Alphabet,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
            alphabet: Alphabet::default(),
        }
    }
}

impl MapConfig {
    /// Side length of the square grid `max_cells` describes.
    pub fn side(&self) -> Result<usize, MapError> {
        square_side(self.max_cells)
    }
}

/// Integer square root of `cells`, if `cells` is a perfect square whose side
/// fits a grid coordinate.
fn square_side(cells: usize) -> Result<usize, MapError> {
    let side = cells.isqrt();
    if side * side == cells && i32::try_from(side).is_ok() {
        Ok(side)
    } else {
        Err(MapError::MalformedGrid { cells })
    }
}

/// Cell count of a `side` × `side` grid, if that grid can be represented.
pub(crate) fn square_cells(side: usize) -> Result<usize, MapError> {
    match side.checked_mul(side) {
        Some(cells) if i32::try_from(side).is_ok() => Ok(cells),
        _ => Err(MapError::GridTooLarge { side }),
    }
}

/// A square grid of cells stored row-major.
///
/// Cell `i` sits at column `i % side`, row `i / side`, and becomes node `i`
/// of the graph built from the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    cells: Vec<MapCell>,
    range: Range,
}

impl CharMap {
    /// Wrap `cells`, which must form a square.
    pub fn from_cells(cells: Vec<MapCell>) -> Result<Self, MapError> {
        let side = square_side(cells.len())?;
        Ok(Self {
            cells,
            range: Range::square(side as i32),
        })
    }

    /// A `side` × `side` map with every cell set to `cell`.
    pub fn filled(side: usize, cell: MapCell) -> Result<Self, MapError> {
        let cells = square_cells(side)?;
        Ok(Self {
            cells: vec![cell; cells],
            range: Range::square(side as i32),
        })
    }

    /// Parse map text.
    ///
    /// Only characters of `config.alphabet` are kept, in reading order, and
    /// only the first `config.max_cells` of them. A map that runs short is
    /// padded with walls, so the result always has exactly `max_cells` cells.
    pub fn parse(text: &str, config: &MapConfig) -> Result<Self, MapError> {
        let side = config.side()?;
        let mut cells: Vec<MapCell> = text
            .chars()
            .filter_map(|c| config.alphabet.cell(c))
            .take(config.max_cells)
            .collect();
        if cells.len() < config.max_cells {
            log::debug!(
                "map supplied {} of {} cells, padding with walls",
                cells.len(),
                config.max_cells
            );
            cells.resize(config.max_cells, MapCell::Wall);
        }
        Ok(Self {
            cells,
            range: Range::square(side as i32),
        })
    }

    /// Read and parse a map file.
    pub fn read(path: impl AsRef<Path>, config: &MapConfig) -> Result<Self, MapError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&String::from_utf8_lossy(&bytes), config)
    }

    /// Read a map file, falling back to an all-wall map if it cannot be read.
    ///
    /// An unreadable file is logged and never fatal. A `config` that cannot
    /// describe a square grid still fails.
    pub fn load(path: impl AsRef<Path>, config: &MapConfig) -> Result<Self, MapError> {
        match Self::read(path, config) {
            Err(MapError::Io { path, source }) => {
                log::warn!("failed to open map file {}: {}", path.display(), source);
                Self::parse("", config)
            }
            other => other,
        }
    }

    /// Side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.range.width() as usize
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the map has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[MapCell] {
        &self.cells
    }

    /// The cell at node index `idx`.
    #[inline]
    pub fn cell(&self, idx: NodeIndex) -> Option<MapCell> {
        self.cells.get(idx).copied()
    }

    /// The cell at `p`, or `None` if `p` lies outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<MapCell> {
        self.range.index_of(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `idx`. Does nothing if `idx` is out of range.
    pub fn set(&mut self, idx: NodeIndex, cell: MapCell) {
        if let Some(c) = self.cells.get_mut(idx) {
            *c = cell;
        }
    }

    /// Grid position of node `idx`.
    #[inline]
    pub fn point(&self, idx: NodeIndex) -> Option<Point> {
        self.range.point_at(idx)
    }

    /// Node index of the first start marker.
    pub fn start(&self) -> Option<NodeIndex> {
        self.cells.iter().position(|&c| c == MapCell::Start)
    }

    /// Node index of the first goal marker.
    pub fn goal(&self) -> Option<NodeIndex> {
        self.cells.iter().position(|&c| c == MapCell::Goal)
    }

    /// Write the map to `path` in `alphabet`.
    pub fn save(&self, path: impl AsRef<Path>, alphabet: &Alphabet) -> Result<(), MapError> {
        let path = path.as_ref();
        fs::write(path, self.to_text(alphabet)).map_err(|source| MapError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the map back out in `alphabet`, one row per line.
    pub fn to_text(&self, alphabet: &Alphabet) -> String {
        let side = self.side();
        let mut out = String::with_capacity(self.cells.len() + side);
        for row in self.cells.chunks(side.max(1)) {
            out.extend(row.iter().map(|&c| alphabet.symbol(c)));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small(cells: usize) -> MapConfig {
        MapConfig {
            max_cells: cells,
            ..MapConfig::default()
        }
    }

    #[test]
    fn default_config_is_twenty_square() {
        assert_eq!(MapConfig::default().side().unwrap(), 20);
    }

    #[test]
    fn parse_skips_noise_and_keeps_order() {
        let map = CharMap::parse("S o\nX-G\n??", &small(4)).unwrap();
        assert_eq!(
            map.cells(),
            &[MapCell::Start, MapCell::Open, MapCell::Wall, MapCell::Goal]
        );
        assert_eq!(map.side(), 2);
        assert_eq!(map.start(), Some(0));
        assert_eq!(map.goal(), Some(3));
    }

    #[test]
    fn parse_truncates_extra_cells() {
        let map = CharMap::parse("ooooXXXX", &small(4)).unwrap();
        assert_eq!(map.len(), 4);
        assert!(map.cells().iter().all(|&c| c == MapCell::Open));
    }

    #[test]
    fn parse_pads_with_walls() {
        let map = CharMap::parse("So", &small(9)).unwrap();
        assert_eq!(map.len(), 9);
        assert_eq!(map.cell(1), Some(MapCell::Open));
        assert_eq!(map.cell(2), Some(MapCell::Wall));
        assert_eq!(map.at(Point::new(2, 2)), Some(MapCell::Wall));
        assert_eq!(map.goal(), None);
    }

    #[test]
    fn non_square_config_is_malformed() {
        assert!(matches!(
            CharMap::parse("oooo", &small(5)),
            Err(MapError::MalformedGrid { cells: 5 })
        ));
        assert!(matches!(
            CharMap::from_cells(vec![MapCell::Open; 8]),
            Err(MapError::MalformedGrid { cells: 8 })
        ));
    }

    #[test]
    fn square_side_handles_large_values() {
        assert_eq!(square_side(0).unwrap(), 0);
        assert_eq!(square_side(1).unwrap(), 1);
        assert_eq!(square_side(1_000_000).unwrap(), 1000);
        assert!(square_side(999_999).is_err());
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert!(matches!(
            square_side(usize::MAX),
            Err(MapError::MalformedGrid { .. })
        ));
        // A perfect square whose side does not fit a grid coordinate.
        let side = i32::MAX as usize + 1;
        if let Some(cells) = side.checked_mul(side) {
            assert!(square_side(cells).is_err());
        }
        assert!(matches!(
            square_cells(usize::MAX),
            Err(MapError::GridTooLarge { .. })
        ));
        assert!(matches!(
            CharMap::filled(usize::MAX / 2, MapCell::Open),
            Err(MapError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn save_writes_text_and_names_failed_path() {
        let dir = tempfile::tempdir().unwrap();
        let map = CharMap::parse("SoXG", &small(4)).unwrap();
        let out = dir.path().join("out.txt");
        map.save(&out, &Alphabet::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "So\nXG\n");

        let bad = dir.path().join("no-such-dir").join("out.txt");
        let err = map.save(&bad, &Alphabet::default()).unwrap_err();
        assert!(matches!(err, MapError::Write { .. }));
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn text_round_trip() {
        let a = Alphabet::default();
        let map = CharMap::parse("SoX\nooo\nXoG\n", &small(9)).unwrap();
        assert_eq!(map.to_text(&a), "SoX\nooo\nXoG\n");
        assert_eq!(CharMap::parse(&map.to_text(&a), &small(9)).unwrap(), map);
    }

    #[test]
    fn points_follow_row_major_order() {
        let map = CharMap::filled(3, MapCell::Open).unwrap();
        assert_eq!(map.point(5), Some(Point::new(2, 1)));
        assert_eq!(map.point(9), None);
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "S o\no G").unwrap();
        let map = CharMap::read(file.path(), &small(4)).unwrap();
        assert_eq!(map.goal(), Some(3));
    }

    #[test]
    fn load_missing_file_degrades_to_walls() {
        let dir = tempfile::tempdir().unwrap();
        let map = CharMap::load(dir.path().join("missing.txt"), &MapConfig::default()).unwrap();
        assert_eq!(map.len(), DEFAULT_MAX_CELLS);
        assert!(map.cells().iter().all(|&c| c == MapCell::Wall));

        assert!(matches!(
            CharMap::read(dir.path().join("missing.txt"), &MapConfig::default()),
            Err(MapError::Io { .. })
        ));
    }

    #[test]
    fn load_empty_file_is_all_walls() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let map = CharMap::load(file.path(), &small(16)).unwrap();
        assert_eq!(map.len(), 16);
        assert_eq!(map.start(), None);
        assert!(map.cells().iter().all(|&c| !c.is_passable()));
    }
}
