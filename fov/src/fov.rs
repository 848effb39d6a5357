use std::marker::PhantomData;

/// Exact slope `num / den` with `den > 0`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    const fn new(num: i32, den: i32) -> Self {
        Slope { num, den }
    }

    /// Slope through the edge between cells `col - 1` and `col` on row
    /// `depth`.
    fn edge(depth: i32, col: i32) -> Self {
        Slope::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::North,
        Quadrant::East,
        Quadrant::South,
        Quadrant::West,
    ];

    /// Offset from origin of cell `col` on row `depth`.
    fn transform(self, depth: i32, col: i32) -> [i32; 2] {
        match self {
            Quadrant::North => [col, -depth],
            Quadrant::East => [depth, col],
            Quadrant::South => [col, depth],
            Quadrant::West => [-depth, col],
        }
    }
}

/// Lit sector of one row of a quadrant.
#[derive(Copy, Clone, Debug)]
struct Row {
    quadrant: Quadrant,
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    fn new(quadrant: Quadrant) -> Self {
        Row {
            quadrant,
            depth: 1,
            start: Slope::new(-1, 1),
            end: Slope::new(1, 1),
        }
    }

    fn next(&self) -> Self {
        Row {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// First column touched by the sector, `depth * start` rounded with ties
    /// going up.
    fn min_col(&self) -> i32 {
        let Slope { num, den } = self.start;
        (2 * self.depth * num + den).div_euclid(2 * den)
    }

    /// Last column touched by the sector, `depth * end` rounded with ties
    /// going down.
    fn max_col(&self) -> i32 {
        let Slope { num, den } = self.end;
        -(den - 2 * self.depth * num).div_euclid(2 * den)
    }

    /// Whether the center of cell `col` is inside the sector, edges
    /// included.
    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

/// Iterator over the cells seen from the origin.
///
/// Yields offsets from the origin, the origin itself first. Rows go out to
/// Chebyshev distance `radius`, the caller trims the view further if it
/// wants a round one. Cells on the quadrant diagonals may be yielded twice.
pub struct Fov<V, F> {
    is_opaque: F,
    radius: i32,
    rows: Vec<Row>,
    /// Cells seen on the last scanned row, not yet yielded.
    seen: Vec<[i32; 2]>,
    origin_done: bool,
    phantom: PhantomData<V>,
}

impl<V, F> Fov<V, F>
where
    V: From<[i32; 2]> + Copy,
    F: FnMut(V) -> bool,
{
    /// Field of view out to `radius` where `is_opaque` tells whether the
    /// cell at an offset from the origin blocks sight.
    pub fn new(radius: i32, is_opaque: F) -> Self {
        let rows = if radius > 0 {
            Quadrant::ALL.into_iter().map(Row::new).collect()
        } else {
            Vec::new()
        };

        Fov {
            is_opaque,
            radius,
            rows,
            seen: Vec::new(),
            origin_done: false,
            phantom: PhantomData,
        }
    }

    fn push_row(&mut self, row: Row) {
        if row.depth <= self.radius {
            self.rows.push(row);
        }
    }

    fn scan(&mut self, mut row: Row) {
        // Opacity of the previous cell on the row.
        let mut prev = None;

        for col in row.min_col()..=row.max_col() {
            let v = row.quadrant.transform(row.depth, col);
            let opaque = (self.is_opaque)(V::from(v));

            if opaque || row.is_symmetric(col) {
                self.seen.push(v);
            }

            match prev {
                Some(true) if !opaque => {
                    row.start = Slope::edge(row.depth, col);
                }
                Some(false) if opaque => {
                    let mut next = row.next();
                    next.end = Slope::edge(row.depth, col);
                    self.push_row(next);
                }
                _ => {}
            }
            prev = Some(opaque);
        }

        if prev == Some(false) {
            self.push_row(row.next());
        }
    }
}

impl<V, F> Iterator for Fov<V, F>
where
    V: From<[i32; 2]> + Copy,
    F: FnMut(V) -> bool,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.origin_done {
            self.origin_done = true;
            return Some(V::from([0, 0]));
        }

        loop {
            if let Some(v) = self.seen.pop() {
                return Some(V::from(v));
            }
            let row = self.rows.pop()?;
            self.scan(row);
        }
    }
}
