use serde::{Deserialize, Serialize};

/// A dog registered by the user
/// The name is the identity of the dog and never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Display name, stored exactly as entered
    name: String,

    /// Whether the user marked this dog as a favorite
    is_favorite: bool,
}

/// Case-insensitive storage key derived from a dog name
///
/// Two names that differ only in letter case map to the same key, which is
/// what makes duplicate detection a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DogKey(String);

impl Dog {
    /// Create a new Dog
    /// New dogs are never favorites
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_favorite: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Storage key for this dog
    pub fn key(&self) -> DogKey {
        DogKey::from_name(&self.name)
    }

    /// Flip the favorite flag and return the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Case-insensitive substring match against a search query
    /// An empty query matches every dog
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || fold_case(&self.name).contains(&fold_case(query))
    }
}

impl DogKey {
    pub fn from_name(name: &str) -> Self {
        Self(fold_case(name))
    }
}

/// Per-character case fold: upper then lower, with no context rules, so
/// `Σ`, `σ` and `ς` all fold to the same letter.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Dog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Display for DogKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dog_is_not_favorite() {
        let dog = Dog::new("Rex");
        assert_eq!(dog.name(), "Rex");
        assert!(!dog.is_favorite());
    }

    #[test]
    fn test_toggle_favorite_flips_flag() {
        let mut dog = Dog::new("Rex");
        assert!(dog.toggle_favorite());
        assert!(dog.is_favorite());
        assert!(!dog.toggle_favorite());
        assert!(!dog.is_favorite());
    }

    #[test]
    fn test_key_ignores_case() {
        assert_eq!(Dog::new("Fido").key(), Dog::new("fIDO").key());
        assert_ne!(Dog::new("Fido").key(), Dog::new("Rex").key());
        assert_eq!(DogKey::from_name("Burek"), DogKey::from_name("burek"));
    }

    #[test]
    fn test_key_folds_each_character() {
        assert_eq!(DogKey::from_name("ΟΣ"), DogKey::from_name("οσ"));
        assert_eq!(DogKey::from_name("οσ"), DogKey::from_name("ος"));
        assert_eq!(DogKey::from_name("STRASSE"), DogKey::from_name("strasse"));
    }

    #[test]
    fn test_matches_query_folds_each_character() {
        let dog = Dog::new("ΟΣ");
        assert!(dog.matches_query("σ"));
        assert!(dog.matches_query("ος"));
    }

    #[test]
    fn test_matches_query() {
        let dog = Dog::new("Rex");
        assert!(dog.matches_query(""));
        assert!(dog.matches_query("re"));
        assert!(dog.matches_query("EX"));
        assert!(!dog.matches_query("fi"));
    }
}
