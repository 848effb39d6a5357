use std::ops::{Index, IndexMut};

use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};

/// Dense rectangular array of cells with the origin at (0, 0).
///
/// Used for per-cell map layers like terrain, transparency and visibility.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        assert!(width >= 0 && height >= 0, "Grid: negative dimensions");
        Grid {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Create a new grid with cell values produced by a function of the
    /// cell position.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(IVec2) -> T,
    ) -> Self {
        assert!(width >= 0 && height >= 0, "Grid: negative dimensions");
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| ivec2(x, y)))
            .map(&mut f)
            .collect();
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        let p = p.into();
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    fn idx(&self, p: IVec2) -> Option<usize> {
        self.contains(p)
            .then(|| (p.x + p.y * self.width) as usize)
    }

    pub fn get(&self, p: impl Into<IVec2>) -> Option<&T> {
        self.idx(p.into()).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: impl Into<IVec2>) -> Option<&mut T> {
        self.idx(p.into()).map(|i| &mut self.cells[i])
    }

    /// Set a cell value, return whether the position was inside the grid.
    pub fn set(&mut self, p: impl Into<IVec2>, value: T) -> bool {
        if let Some(c) = self.get_mut(p) {
            *c = value;
            true
        } else {
            false
        }
    }

    /// Iterate all cell positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = IVec2> + 'static {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| ivec2(x, y)))
    }

    /// Iterate cell positions and values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// Build a new grid of the same size by mapping over cell values.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }
}

impl Grid<bool> {
    /// Return whether the cell is set, positions outside the grid are never
    /// set.
    pub fn is_set(&self, p: impl Into<IVec2>) -> bool {
        self.get(p).copied().unwrap_or(false)
    }

    /// Iterate the positions of set cells.
    pub fn set_points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.iter().filter_map(|(p, &b)| b.then_some(p))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

impl<T> Index<IVec2> for Grid<T> {
    type Output = T;

    fn index(&self, p: IVec2) -> &Self::Output {
        self.get(p).expect("Grid: index out of bounds")
    }
}

impl<T> IndexMut<IVec2> for Grid<T> {
    fn index_mut(&mut self, p: IVec2) -> &mut Self::Output {
        self.get_mut(p).expect("Grid: index out of bounds")
    }
}
