//! **gridwalk-core**: geometry primitives for square search grids.
//!
//! [`Point`] names a cell by column and row. [`Range`] gives a grid's
//! dimensions and converts between points and the dense row-major node
//! indices used by the search engine.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
