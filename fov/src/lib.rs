//! Symmetric shadowcasting field of view.
//!
//! The four quadrants around the origin are scanned row by row, with the lit
//! sector of each row bounded by exact fractional slopes. Walls are seen if
//! any part of them falls in the sector, floor cells only if their center
//! does. Mirroring or rotating the map mirrors or rotates the field of view
//! with it.
//!
//! What counts as a wall is decided by the caller.

mod fov;
pub use crate::fov::Fov;
