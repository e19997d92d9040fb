use std::collections::BTreeMap;
use std::future::Future;

use roomkit_base::{Error, Result};
use roomkit_geometry::Aabb;

/// What a model fetch yields: the model's bounds in its own coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelAsset {
    pub bounds: Aabb,
}

/// Retrieves a model from wherever the catalog points. Resolves exactly once,
/// with the asset or with [`Error::ModelLoad`].
pub trait ModelSource {
    fn fetch(&self, location: &str) -> impl Future<Output = Result<ModelAsset>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: BTreeMap<String, String>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::from_entries([("Chair", "chair.obj")])
    }
}

impl ModelCatalog {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, location)| (name.into(), location.into()))
                .collect(),
        }
    }

    pub fn location(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
