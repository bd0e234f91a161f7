//! Primary classification engine.
//!
//! This module provides the `UaEngine` struct: the process-wide compiled
//! built-in tables, optional extension-only tables evaluated ahead of them,
//! and the truncation limit. It is immutable once built and shared between
//! parsers through `Arc`.

use crate::config::ParserConfig;
use crate::extension::extension_rules;
use crate::input::sanitize;
use crate::ir::Category;
use crate::matcher::{extract, Fields, RuleMatch, RuleTable};
use crate::model::{Browser, CategoryResult, Cpu, Device, Engine, Os, UaResult};
use crate::rules::builtin_rules;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::sync::Arc;

static BUILTIN_TABLES: Lazy<Arc<[RuleTable; 5]>> = Lazy::new(|| {
    Arc::new(Category::ALL.map(|category| RuleTable::new(category, builtin_rules(category).to_vec())))
});

static BUILTIN_ENGINE: Lazy<Arc<UaEngine>> =
    Lazy::new(|| Arc::new(UaEngine::build(&ParserConfig::default())));

/// Compiled, immutable user-agent classifier.
///
/// `UaEngine` evaluates each category independently: the first rule in the
/// category's effective table whose pattern matches decides every field of
/// that category. Classification is total; unmatched categories simply come
/// back with all fields unset.
///
/// The effective table is the extension rules (in supplied order) followed by
/// the built-ins. Built-in tables are compiled once per process and shared by
/// every engine; an engine built from extensions only compiles the extension
/// rules.
///
/// # Usage Patterns
///
/// ## Single Input
/// ```rust
/// use ua_engine::UaEngine;
///
/// let engine = UaEngine::builtin();
/// let result = engine.classify(
///     "Mozilla/5.0 (Windows NT 6.2) AppleWebKit/536.6 (KHTML, like Gecko) Chrome/20.0.1090.0 Safari/536.6",
/// );
/// assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
/// assert_eq!(result.os.version.as_deref(), Some("8"));
/// ```
///
/// ## Batch Processing
/// ```rust
/// use ua_engine::UaEngine;
///
/// let uas = ["Dillo/1.0", "Links (2.1; Linux 2.6 i686; 80x25)"];
/// let results = UaEngine::builtin().classify_batch(&uas);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].browser.name.as_deref(), Some("Dillo"));
/// ```
#[derive(Debug)]
pub struct UaEngine {
    builtin: Arc<[RuleTable; 5]>,
    /// Present only for categories that have extension rules.
    extensions: [Option<RuleTable>; 5],
    max_ua_length: usize,
}

impl UaEngine {
    /// The shared engine over the built-in rules only.
    ///
    /// Built once per process on first use.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_ENGINE)
    }

    /// Build an engine for a configuration.
    ///
    /// # Arguments
    /// * `config` - Extensions and truncation limit
    ///
    /// # Returns
    /// The shared built-in engine when the configuration adds nothing,
    /// otherwise a new engine that compiles only the extension rules and
    /// reuses the shared built-in tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ua_engine::{Category, Extension, ParserConfig, UaEngine};
    /// use ua_engine::ir::{Binding, Field, Rule};
    ///
    /// let rule = Rule::new(&["(myownbrowser)/([\\w.]+)"], vec![
    ///     Binding::Capture(Field::Name),
    ///     Binding::Capture(Field::Version),
    /// ])?;
    /// let config = ParserConfig::default()
    ///     .with_extension(Extension::new().with_rule(Category::Browser, rule));
    ///
    /// let engine = UaEngine::from_config(&config);
    /// let result = engine.classify("Mozilla/5.0 MyOwnBrowser/1.3");
    /// assert_eq!(result.browser.major.as_deref(), Some("1"));
    /// # Ok::<(), ua_engine::UaError>(())
    /// ```
    pub fn from_config(config: &ParserConfig) -> Arc<Self> {
        if config.is_default() {
            return Self::builtin();
        }
        Arc::new(Self::build(config))
    }

    fn build(config: &ParserConfig) -> Self {
        let extensions = Category::ALL.map(|category| {
            let rules = extension_rules(&config.extensions, category);
            (!rules.is_empty()).then(|| RuleTable::new(category, rules))
        });

        if !config.extensions.is_empty() {
            tracing::debug!(
                "Built engine with {} extension(s): {}",
                config.extensions.len(),
                extensions
                    .iter()
                    .flatten()
                    .map(|t| format!("{}={}", t.category(), t.len()))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Self {
            builtin: Arc::clone(&BUILTIN_TABLES),
            extensions,
            max_ua_length: config.effective_max_ua_length(),
        }
    }

    /// The shared compiled built-in table for a category.
    pub fn builtin_table(&self, category: Category) -> &RuleTable {
        &self.builtin[category.index()]
    }

    /// Extension rules for a category, if any were configured.
    pub fn extension_table(&self, category: Category) -> Option<&RuleTable> {
        self.extensions[category.index()].as_ref()
    }

    /// First match in the effective table: extensions, then built-ins.
    pub fn find<'r, 't>(&'r self, category: Category, ua: &'t str) -> Option<RuleMatch<'r, 't>> {
        self.extension_table(category)
            .and_then(|table| table.find(ua))
            .or_else(|| self.builtin_table(category).find(ua))
    }

    pub fn max_ua_length(&self) -> usize {
        self.max_ua_length
    }

    /// Apply this engine's truncation limit.
    pub fn sanitize(&self, ua: Option<&str>) -> String {
        sanitize(ua, self.max_ua_length)
    }

    /// Raw extracted fields for one category, before result post-processing.
    ///
    /// `ua` is expected to be sanitized already.
    pub fn fields(&self, category: Category, ua: &str) -> Fields {
        match self.find(category, ua) {
            Some(found) => {
                tracing::trace!(
                    "{} matched rule {} pattern {}",
                    category,
                    found.rule_index,
                    found.pattern_index
                );
                extract(found.rule, &found.captures)
            }
            None => Fields::default(),
        }
    }

    /// Classify a sanitized string for a single category.
    pub fn classify_as<T: CategoryResult>(&self, ua: &str) -> T {
        T::from_fields(self.fields(T::CATEGORY, ua))
    }

    /// Classify all five categories.
    ///
    /// # Arguments
    /// * `ua` - The raw user-agent string; it is truncated first
    ///
    /// # Returns
    /// A `UaResult` carrying the sanitized string and one result per category.
    pub fn classify(&self, ua: &str) -> UaResult {
        let ua = self.sanitize(Some(ua));
        UaResult {
            browser: self.classify_as::<Browser>(&ua),
            cpu: self.classify_as::<Cpu>(&ua),
            device: self.classify_as::<Device>(&ua),
            engine: self.classify_as::<Engine>(&ua),
            os: self.classify_as::<Os>(&ua),
            ua,
        }
    }

    /// Classify many strings in parallel.
    ///
    /// Results are returned in input order.
    pub fn classify_batch<S>(&self, uas: &[S]) -> Vec<UaResult>
    where
        S: AsRef<str> + Sync,
    {
        uas.par_iter().map(|ua| self.classify(ua.as_ref())).collect()
    }
}
