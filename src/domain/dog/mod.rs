pub mod entity;
pub mod invariants;

pub use entity::{Dog, DogKey};
pub use invariants::{validate_dog, validate_dog_name};
