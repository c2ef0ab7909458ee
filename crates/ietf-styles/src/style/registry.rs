use super::traits::Style;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to a registered style
pub type SharedStyle = Arc<dyn Style>;

/// Style registration errors
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("style '{name}' is already registered")]
    DuplicateName { name: String },
}

/// Name-keyed set of styles, in registration order
pub struct StyleRegistry {
    styles: Vec<SharedStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Register a style. Names must be unique.
    pub fn register<S: Style + 'static>(&mut self, style: S) -> Result<(), StyleError> {
        if self.get(style.name()).is_some() {
            return Err(StyleError::DuplicateName {
                name: style.name().to_string(),
            });
        }
        self.styles.push(Arc::new(style));
        Ok(())
    }

    /// Look up a style by name
    pub fn get(&self, name: &str) -> Option<SharedStyle> {
        self.styles.iter().find(|s| s.name() == name).cloned()
    }

    /// Registered style names
    pub fn names(&self) -> Vec<&str> {
        self.styles.iter().map(|s| s.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedStyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
