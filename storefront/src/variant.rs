//! Exclusive color/size choice groups.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use crate::consts::{DEFAULT_COLOR, DEFAULT_SIZE};

/// A radio-style group: a fixed option list with at most one checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    name: String,
    options: Vec<String>,
    checked: Option<usize>,
    fallback: String,
}

impl ChoiceGroup {
    /// A group with nothing checked.
    pub fn new(name: impl Into<String>, options: Vec<String>, fallback: impl Into<String>) -> Self {
        Self { name: name.into(), options, checked: None, fallback: fallback.into() }
    }

    /// Input `name` attribute shared by the group's radios.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check `value`. Values outside the option list are ignored.
    pub fn check(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.checked = Some(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.and_then(|i| self.options.get(i)).is_some_and(|o| o == value)
    }

    /// The checked value, or the fallback when nothing is checked.
    #[must_use]
    pub fn selected(&self) -> &str {
        self.checked
            .and_then(|i| self.options.get(i))
            .map_or(self.fallback.as_str(), String::as_str)
    }
}

/// The color and size groups for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelector {
    pub color: ChoiceGroup,
    pub size: ChoiceGroup,
}

impl VariantSelector {
    /// Groups that fall back to `Sand` / `M`, with those pre-checked when offered.
    #[must_use]
    pub fn new(colors: Vec<String>, sizes: Vec<String>) -> Self {
        let mut color = ChoiceGroup::new("color", colors, DEFAULT_COLOR);
        let mut size = ChoiceGroup::new("size", sizes, DEFAULT_SIZE);
        color.check(DEFAULT_COLOR);
        size.check(DEFAULT_SIZE);
        Self { color, size }
    }

    #[must_use]
    pub fn color(&self) -> &str {
        self.color.selected()
    }

    #[must_use]
    pub fn size(&self) -> &str {
        self.size.selected()
    }
}
