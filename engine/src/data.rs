use serde::Deserialize;
use util::IndexMap;

use crate::{ConeParams, FOV_RADIUS};

/// Game content, the player and the hostile archetypes.
///
/// The default value is the built-in content set, data files only need to
/// specify what they want to change.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Data {
    pub settings: Settings,
    pub player: Monster,
    pub bestiary: IndexMap<String, Monster>,
    /// Which bestiary entry each map glyph spawns.
    pub legend: IndexMap<char, String>,
}

impl Default for Data {
    fn default() -> Self {
        let guard = Monster {
            icon: 'g',
            power: 3,
            defense: 0,
            hp: 10,
            archetype: Default::default(),
        };

        Data {
            settings: Default::default(),
            player: Monster {
                icon: '@',
                power: 5,
                defense: 2,
                hp: 30,
                archetype: Default::default(),
            },
            bestiary: [("guard".to_owned(), guard)].into_iter().collect(),
            legend: [('g', "guard".to_owned())].into_iter().collect(),
        }
    }
}

impl Data {
    /// Bestiary entry spawned by map glyph `c`.
    pub fn spawn_for(&self, c: char) -> Option<(&str, &Monster)> {
        let name = self.legend.get(&c)?;
        let monster = self.bestiary.get(name)?;
        Some((name.as_str(), monster))
    }
}

/// Game-wide general settings.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Radius of the player's all-around field of view.
    pub player_fov_radius: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            player_fov_radius: FOV_RADIUS,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Monster {
    pub icon: char,
    pub power: i32,
    pub defense: i32,
    pub hp: i32,
    pub archetype: Archetype,
}

impl Default for Monster {
    fn default() -> Self {
        Monster {
            icon: '?',
            power: 1,
            defense: 0,
            hp: 1,
            archetype: Default::default(),
        }
    }
}

/// How a hostile sees and engages.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Archetype {
    pub cone: ConeParams,
    /// Farthest Chebyshev distance the hostile locks on and fires from.
    pub engagement_range: i32,
    /// Chebyshev distance at which the hostile drops its lock instead.
    pub close_range: i32,
}

impl Default for Archetype {
    fn default() -> Self {
        Archetype {
            cone: Default::default(),
            engagement_range: 5,
            close_range: 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_content() {
        let data = Data::default();
        let (name, guard) = data.spawn_for('g').unwrap();
        assert_eq!(name, "guard");
        assert_eq!(guard.archetype.engagement_range, 5);
        assert_eq!(guard.archetype.close_range, 1);
        assert_eq!(guard.archetype.cone, ConeParams::default());
        assert!(data.spawn_for('x').is_none());
        assert_eq!(data.settings.player_fov_radius, FOV_RADIUS);
    }
}
