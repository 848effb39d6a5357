pub use crate::{msg, Action, Entity, Facing, Runtime};
pub use glam::{ivec2, IVec2};
pub use util::{Grid, HashMap, HashSet, IndexMap, IndexSet, VecExt, DIR_8};
