use glam::{ivec2, IVec2};

use crate::IndexMap;

/// Character map of a level with an optional legend for special glyphs.
///
/// Leading blank lines and common indentation are stripped, so maps can be
/// written as indented string literals.
#[derive(Clone, Default, Debug)]
pub struct AsciiMap<T> {
    map: String,
    legend: IndexMap<char, T>,
}

impl<T> AsciiMap<T> {
    pub fn new(map: impl AsRef<str>, legend: IndexMap<char, T>) -> Self {
        let map = map.as_ref().trim_end();

        let x_skip = map
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let mut trimmed = String::new();
        for line in map.lines().skip_while(|line| line.trim().is_empty()) {
            trimmed.extend(line.chars().skip(x_skip));
            trimmed.push('\n');
        }

        AsciiMap {
            map: trimmed,
            legend,
        }
    }

    /// Width and height of the bounding rectangle of the map.
    pub fn dim(&self) -> IVec2 {
        let w = self
            .map
            .lines()
            .map(|line| line.trim_end().chars().count())
            .max()
            .unwrap_or(0);
        ivec2(w as i32, self.map.lines().count() as i32)
    }

    /// Iterate the points and legend entries (if present) on the map.
    ///
    /// Whitespace characters are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, char, Option<&T>)> + '_ {
        self.map.lines().enumerate().flat_map(move |(y, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(move |(x, c)| {
                    (ivec2(x as i32, y as i32), c, self.legend.get(&c))
                })
        })
    }
}
