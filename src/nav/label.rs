use std::collections::HashMap;

use super::{
    error::NavError,
    page::{COLLECTION, PLAYING, PageSet, VISUALIZATION},
};

/// Explicit symbolic name → tab title table.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    titles: HashMap<String, String>,
}

impl LabelResolver {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            titles: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&str, NavError> {
        self.titles
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| NavError::MissingLabel {
                name: name.to_string(),
            })
    }

    /// Resolves every name up front so a bad set is rejected before any tab
    /// is registered.
    pub fn validate(&self, page_set: &PageSet) -> Result<Vec<String>, NavError> {
        page_set
            .iter()
            .map(|name| self.resolve(name).map(str::to_string))
            .collect()
    }
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::new([
            (COLLECTION, "Collection"),
            (PLAYING, "Now Playing"),
            (VISUALIZATION, "Visualization"),
        ])
    }
}
