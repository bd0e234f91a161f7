//! Parser configuration.
//!
//! [`ParserConfig`] is the single well-typed record the engine is built from.
//! The flexible argument forms accepted at the API boundary
//! ([`crate::input::ParseArg`]) are resolved into one of these.

use crate::extension::Extension;
use crate::input::UA_MAX_LENGTH;

/// Configuration for building a [`crate::UaEngine`].
///
/// # Examples
///
/// ```rust
/// use ua_engine::{Category, Extension, ParserConfig};
/// use ua_engine::ir::{Binding, Field, Rule};
///
/// let rule = Rule::new(&["(mybrowser)/([\\w.]+)"], vec![
///     Binding::Capture(Field::Name),
///     Binding::Capture(Field::Version),
/// ])?;
///
/// let config = ParserConfig::default()
///     .with_extension(Extension::new().with_rule(Category::Browser, rule))
///     .with_max_ua_length(256);
///
/// assert_eq!(config.effective_max_ua_length(), 256);
/// assert_eq!(config.extensions.len(), 1);
/// # Ok::<(), ua_engine::UaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Inputs longer than this many characters are truncated. 0 selects the default.
    pub max_ua_length: usize,
    /// Extensions in precedence order, all ahead of the built-ins.
    pub extensions: Vec<Extension>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_ua_length: UA_MAX_LENGTH,
            extensions: Vec::new(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn with_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extensions.extend(extensions);
        self
    }

    pub fn with_max_ua_length(mut self, max_ua_length: usize) -> Self {
        self.max_ua_length = max_ua_length;
        self
    }

    /// Truncation limit actually applied.
    pub fn effective_max_ua_length(&self) -> usize {
        if self.max_ua_length == 0 {
            UA_MAX_LENGTH
        } else {
            self.max_ua_length
        }
    }

    /// Whether this configuration behaves exactly like the built-in default.
    pub fn is_default(&self) -> bool {
        self.effective_max_ua_length() == UA_MAX_LENGTH
            && self.extensions.iter().all(Extension::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Binding, Category, Field, Rule};

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.max_ua_length, 500);
        assert!(config.extensions.is_empty());
        assert!(config.is_default());
    }

    #[test]
    fn test_zero_length_means_default() {
        let config = ParserConfig::new().with_max_ua_length(0);
        assert_eq!(config.effective_max_ua_length(), UA_MAX_LENGTH);
        assert!(config.is_default());
    }

    #[test]
    fn test_builder_keeps_extension_order() {
        let rule = |name: &'static str| {
            Rule::new(&["x"], vec![Binding::fixed(Field::Name, name)]).unwrap()
        };
        let config = ParserConfig::new()
            .with_extension(Extension::new().with_rule(Category::Os, rule("a")))
            .with_extensions(vec![
                Extension::new().with_rule(Category::Os, rule("b")),
                Extension::new(),
            ]);

        assert_eq!(config.extensions.len(), 3);
        assert!(!config.is_default());
        assert_eq!(config.extensions[1].rules(Category::Os).len(), 1);
    }

    #[test]
    fn test_empty_extensions_keep_default() {
        let config = ParserConfig::new().with_extension(Extension::new());
        assert!(config.is_default());
    }
}
