//! Paths listing in reported order
//!
//! Components are visited in the order bower lists them, and the default
//! ordering of the bundle depends on that input order. The listing is
//! therefore kept as a sequence of entries rather than a sorted map.

use std::fmt;
#[cfg(test)]
use std::ops::Index;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::config::OneOrMany;

/// Paths listing: component name → one or many paths, in reported order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathsListing {
    entries: Vec<(String, OneOrMany<String>)>,
}

impl PathsListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component, or replace its paths in place if already listed
    pub fn insert(&mut self, name: String, paths: OneOrMany<String>) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = paths,
            None => self.entries.push((name, paths)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&OneOrMany<String>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, paths)| paths)
    }

    #[cfg(test)]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, OneOrMany<String>)> {
        self.entries.iter()
    }
}

#[cfg(test)]
impl Index<&str> for PathsListing {
    type Output = OneOrMany<String>;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(paths) => paths,
            None => panic!("component '{name}' not in paths listing"),
        }
    }
}

impl<'a> IntoIterator for &'a PathsListing {
    type Item = &'a (String, OneOrMany<String>);
    type IntoIter = std::slice::Iter<'a, (String, OneOrMany<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for PathsListing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathsListingVisitor;

        impl<'de> Visitor<'de> for PathsListingVisitor {
            type Value = PathsListing;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of component names to paths")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<PathsListing, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut listing = PathsListing::new();
                while let Some((name, paths)) = map.next_entry::<String, OneOrMany<String>>()? {
                    listing.insert(name, paths);
                }
                Ok(listing)
            }
        }

        deserializer.deserialize_map(PathsListingVisitor)
    }
}
