//! Derived registry views:
//!
//! 1. Counts are always computed from the dogs, never tracked separately
//! 2. The query only narrows the visible list, never the counts
//! 3. Favorites come first in the visible list

pub mod entity;

pub use entity::{favorite_count, visible_dogs, RegistrySnapshot};
