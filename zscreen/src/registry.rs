use std::collections::{hash_map, HashMap};

use log::debug;

use crate::{Error, Result};

/// Named items with one of them marked as current.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: HashMap<String, T>,
    current: Option<String>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            current: None,
        }
    }

    /// Inserts or replaces the item stored under `name`.
    ///
    /// With `starts_first` only the very first registration picks the
    /// current item, otherwise every registration does.
    pub fn register(&mut self, name: String, item: T, starts_first: bool) {
        if !starts_first || self.current.is_none() {
            debug!("Registry: current = '{}'", name);
            self.current = Some(name.clone());
        }
        self.items.insert(name, item);
    }

    pub fn lookup(&self, name: &str) -> Result<&T> {
        self.items
            .get(name)
            .ok_or_else(|| Error::ScreenNotFound(name.into()))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut T> {
        self.items
            .get_mut(name)
            .ok_or_else(|| Error::ScreenNotFound(name.into()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Makes `name` current and returns the previous current name.
    pub fn set_current(&mut self, name: &str) -> Result<String> {
        let old = self.current.clone().ok_or(Error::NoScreens)?;
        if !self.contains(name) {
            return Err(Error::ScreenNotFound(name.into()));
        }
        self.current = Some(name.into());
        Ok(old)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> hash_map::Keys<'_, String, T> {
        self.items.keys()
    }

    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, String, T> {
        self.items.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Error;

    use super::Registry;

    fn registry(names: &[&str], starts_first: bool) -> Registry<usize> {
        let mut registry = Registry::new();
        for (i, name) in names.iter().enumerate() {
            registry.register(name.to_string(), i, starts_first);
        }
        registry
    }

    #[test]
    fn empty() {
        let registry: Registry<usize> = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.current_name(), None);
    }

    #[test]
    fn starts_with_first() {
        let registry = registry(&["a", "b", "c"], true);
        assert_eq!(registry.current_name(), Some("a"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn starts_with_last() {
        let registry = registry(&["a", "b", "c"], false);
        assert_eq!(registry.current_name(), Some("c"));
    }

    #[test]
    fn reregister_replaces_item() {
        let mut registry = registry(&["a", "b"], true);
        registry.register("a".into(), 10, true);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.current_name(), Some("a"));
        assert_eq!(*registry.lookup("a").unwrap(), 10);
    }

    #[test]
    fn lookup_missing() {
        let mut registry = registry(&["a"], true);
        assert_eq!(
            registry.lookup("x").unwrap_err(),
            Error::ScreenNotFound("x".into())
        );
        assert!(registry.lookup_mut("x").is_err());
    }

    #[test]
    fn set_current() {
        let mut registry = registry(&["a", "b"], true);
        assert_eq!(registry.set_current("b").unwrap(), "a".to_string());
        assert_eq!(registry.current_name(), Some("b"));
    }

    #[test]
    fn set_current_missing_keeps_current() {
        let mut registry = registry(&["a", "b"], true);
        assert_eq!(
            registry.set_current("x").unwrap_err(),
            Error::ScreenNotFound("x".into())
        );
        assert_eq!(registry.current_name(), Some("a"));
    }

    #[test]
    fn set_current_without_items() {
        let mut registry: Registry<usize> = Registry::new();
        assert_eq!(registry.set_current("a").unwrap_err(), Error::NoScreens);
    }

    #[test]
    fn names() {
        let registry = registry(&["b", "a"], true);
        let mut names: Vec<_> = registry.names().cloned().collect();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }
}
