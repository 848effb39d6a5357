use glam::{ivec2, IVec2};

/// 8 directions, clock face order.
pub const DIR_8: [IVec2; 8] = [
    IVec2::from_array([0, -1]),
    IVec2::from_array([1, -1]),
    IVec2::from_array([1, 0]),
    IVec2::from_array([1, 1]),
    IVec2::from_array([0, 1]),
    IVec2::from_array([-1, 1]),
    IVec2::from_array([-1, 0]),
    IVec2::from_array([-1, -1]),
];

pub trait VecExt: Sized + Default {
    /// Absolute size of vector in taxicab metric.
    fn taxi_len(&self) -> i32;

    /// Absolute size of vector in Chebyshev metric, the number of 8-way
    /// steps needed to cover the vector.
    fn cheb_len(&self) -> i32;

    /// Squared Euclidean length.
    fn len_sq(&self) -> i32;

    /// Vec points to one of the 8 cells surrounding the origin.
    fn is_adjacent(&self) -> bool {
        self.cheb_len() == 1
    }

    /// Vec is a diagonal step.
    fn is_diagonal(&self) -> bool {
        self.taxi_len() == 2 && self.cheb_len() == 1
    }
}

impl VecExt for IVec2 {
    fn taxi_len(&self) -> i32 {
        self[0].abs() + self[1].abs()
    }

    fn cheb_len(&self) -> i32 {
        self[0].abs().max(self[1].abs())
    }

    fn len_sq(&self) -> i32 {
        self.dot(*self)
    }
}

/// Iterate the cells on a line from `a` towards `b`.
///
/// The start point is included and the end point is not.
///
/// ```
/// use glam::ivec2;
/// use util::bresenham_line;
///
/// let line: Vec<_> = bresenham_line(ivec2(0, 0), ivec2(3, 1)).collect();
/// assert_eq!(line.len(), 3);
/// assert_eq!(line[0], ivec2(0, 0));
/// ```
pub fn bresenham_line(
    a: impl Into<IVec2>,
    b: impl Into<IVec2>,
) -> impl Iterator<Item = IVec2> {
    let (a, b): (IVec2, IVec2) = (a.into(), b.into());

    let d = b - a;
    let step = d.signum();
    let d = d.abs() * ivec2(1, -1);
    let mut p = a;
    let mut err = d.x + d.y;

    std::iter::from_fn(move || {
        if p == b {
            None
        } else {
            let ret = p;

            let e2 = 2 * err;
            if e2 >= d.y {
                err += d.y;
                p.x += step.x;
            }
            if e2 <= d.x {
                err += d.x;
                p.y += step.y;
            }
            Some(ret)
        }
    })
}
