//! Gif library: links grouped by category, loaded from a JSON file.
//!
//! The file is an object of `{"category": ["https://...", ...]}`.

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use tracing::{info, warn};

/// Result of asking the library for a gif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GifPick {
    Gif(String),
    EmptyLibrary,
    UnknownCategory(String),
}

impl GifPick {
    /// Message to post for this pick.
    pub fn into_message(self) -> String {
        match self {
            Self::Gif(url) => url,
            Self::EmptyLibrary => "No gifs available!".to_string(),
            Self::UnknownCategory(category) => format!("No gifs for {}!", category),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GifLibrary {
    categories: BTreeMap<String, Vec<String>>,
}

impl GifLibrary {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            categories: serde_json::from_str(json)?,
        })
    }

    /// Load the library, falling back to an empty one if the file is missing
    /// or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("No gif library at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&content) {
            Ok(library) => {
                info!(
                    "Loaded {} gif categories from {}",
                    library.categories.len(),
                    path.display()
                );
                library
            }
            Err(e) => {
                warn!("Ignoring malformed gif library {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Pick a gif from `category`, or from a random category when none is given.
    ///
    /// Category names are matched lowercased with spaces as underscores.
    pub fn pick(&self, category: Option<&str>, rng: &mut impl Rng) -> GifPick {
        if self.is_empty() {
            return GifPick::EmptyLibrary;
        }

        match category {
            None => self
                .categories
                .values()
                .filter(|gifs| !gifs.is_empty())
                .choose(rng)
                .and_then(|gifs| gifs.choose(rng))
                .map(|url| GifPick::Gif(url.clone()))
                .unwrap_or(GifPick::EmptyLibrary),
            Some(category) => {
                let category = normalize_category(category);
                match self.categories.get(&category).and_then(|gifs| gifs.choose(rng)) {
                    Some(url) => GifPick::Gif(url.clone()),
                    None => GifPick::UnknownCategory(category),
                }
            }
        }
    }
}

/// `"Happy Dance"` -> `"happy_dance"`.
pub fn normalize_category(category: &str) -> String {
    category.to_lowercase().replace(' ', "_")
}
