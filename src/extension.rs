//! Caller-supplied rule fragments evaluated ahead of the built-in tables.
//!
//! An [`Extension`] holds extra rules for any subset of the five categories.
//! Its rules are always evaluated ahead of the built-ins for the same
//! category; several extensions concatenate in the order they were supplied.
//!
//! Extensions can be built in code or decoded with serde from any
//! self-describing format:
//!
//! ```rust
//! use ua_engine::{Category, ExtensionSpec};
//!
//! let spec: ExtensionSpec = serde_json::from_str(r#"{
//!     "browser": [
//!         { "patterns": ["(mybrowser)/([\\w.]+)"], "fields": ["name", "version", { "field": "type", "value": "bot" }] }
//!     ]
//! }"#)?;
//! let extension = spec.compile()?;
//! assert_eq!(extension.rules(Category::Browser).len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Result, UaError};
use crate::ir::{Binding, Category, Field, Pattern, Rule};
use crate::normalize::NormalizationTable;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Extra rules for one or more categories.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    rules: [Vec<Arc<Rule>>; 5],
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for `category`, after any already added.
    pub fn with_rule(mut self, category: Category, rule: Rule) -> Self {
        self.rules[category.index()].push(Arc::new(rule));
        self
    }

    pub fn with_rules(mut self, category: Category, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules[category.index()].extend(rules.into_iter().map(Arc::new));
        self
    }

    pub fn rules(&self, category: Category) -> &[Arc<Rule>] {
        &self.rules[category.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(Vec::is_empty)
    }

    /// Decode an [`ExtensionSpec`] from any serde deserializer and compile it.
    pub fn from_deserializer<'de, D>(deserializer: D) -> Result<Self>
    where
        D: Deserializer<'de>,
    {
        ExtensionSpec::deserialize(deserializer)
            .map_err(|e| UaError::Deserialize(e.to_string()))?
            .compile()
    }
}

/// Extension rules for `category`, concatenated in supplied order.
///
/// The engine evaluates these ahead of the built-in table for the same
/// category. No deduplication takes place.
pub fn extension_rules(extensions: &[Extension], category: Category) -> Vec<Arc<Rule>> {
    extensions
        .iter()
        .flat_map(|extension| extension.rules(category).iter())
        .cloned()
        .collect()
}

/// Serialized form of an [`Extension`]: category name to rule list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExtensionSpec(pub BTreeMap<String, Vec<RuleSpec>>);

#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    pub patterns: Vec<String>,
    pub fields: Vec<BindingSpec>,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BindingSpec {
    Capture(Field),
    Fixed {
        field: Field,
        value: String,
    },
    Mapped {
        field: Field,
        map: Vec<MapEntrySpec>,
        #[serde(default)]
        fallback: Option<String>,
    },
    Replace {
        field: Field,
        pattern: String,
        replace: String,
    },
    Lowercase {
        field: Field,
        lowercase: bool,
    },
}

/// One normalization entry; a missing `canonical` maps the variants to unset.
#[derive(Debug, Clone, Deserialize)]
pub struct MapEntrySpec {
    #[serde(default)]
    pub canonical: Option<String>,
    pub variants: Vec<String>,
}

/// One extension object or an ordered list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExtensionsSpec {
    Many(Vec<ExtensionSpec>),
    One(ExtensionSpec),
}

impl ExtensionSpec {
    pub fn compile(&self) -> Result<Extension> {
        let mut extension = Extension::new();

        for (key, rules) in &self.0 {
            let Ok(category) = key.parse::<Category>() else {
                tracing::debug!("Ignoring extension rules for unknown category {:?}", key);
                continue;
            };
            for spec in rules {
                extension = extension.with_rule(category, spec.compile()?);
            }
        }

        Ok(extension)
    }
}

impl RuleSpec {
    pub fn compile(&self) -> Result<Rule> {
        if self.patterns.is_empty() {
            return Err(UaError::InvalidExtension(
                "rule without patterns".to_string(),
            ));
        }

        let patterns = self
            .patterns
            .iter()
            .map(|source| {
                if self.case_sensitive {
                    Pattern::case_sensitive(source.clone())
                } else {
                    Pattern::new(source.clone())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let bindings = self
            .fields
            .iter()
            .map(BindingSpec::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Rule::from_patterns(patterns, bindings))
    }
}

impl BindingSpec {
    pub fn compile(&self) -> Result<Binding> {
        match self {
            BindingSpec::Capture(field) => Ok(Binding::Capture(*field)),
            BindingSpec::Fixed { field, value } => Ok(Binding::fixed(*field, value.clone())),
            BindingSpec::Mapped {
                field,
                map,
                fallback,
            } => {
                let mut table = NormalizationTable::new();
                for entry in map {
                    table.add_entry(entry.canonical.clone().map(Cow::Owned), &entry.variants);
                }
                if let Some(fallback) = fallback {
                    table = table.with_fallback(fallback.clone());
                }
                Ok(Binding::mapped(*field, &Arc::new(table)))
            }
            BindingSpec::Replace {
                field,
                pattern,
                replace,
            } => Binding::replace(*field, pattern, replace.clone()),
            BindingSpec::Lowercase { field, lowercase } => Ok(if *lowercase {
                Binding::Lowercase(*field)
            } else {
                Binding::Capture(*field)
            }),
        }
    }
}

impl ExtensionsSpec {
    /// Compile every object, keeping the supplied order.
    pub fn compile(&self) -> Result<Vec<Extension>> {
        match self {
            ExtensionsSpec::One(spec) => Ok(vec![spec.compile()?]),
            ExtensionsSpec::Many(specs) => specs.iter().map(ExtensionSpec::compile).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_rule(pattern: &str, name: &'static str) -> Rule {
        Rule::new(&[pattern], vec![Binding::fixed(Field::Name, name)]).unwrap()
    }

    fn names(rules: &[Arc<Rule>]) -> Vec<String> {
        rules
            .iter()
            .map(|rule| match &rule.bindings[0] {
                Binding::Fixed(_, value) => value.to_string(),
                other => panic!("unexpected binding {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_extension_rules_concatenate_in_order() {
        let first = Extension::new().with_rule(Category::Browser, name_rule("a", "first"));
        let second = Extension::new()
            .with_rule(Category::Browser, name_rule("b", "second"))
            .with_rule(Category::Os, name_rule("c", "other"));

        let rules = extension_rules(&[first, second], Category::Browser);
        assert_eq!(names(&rules), vec!["first", "second"]);
    }

    #[test]
    fn test_extension_rules_for_untouched_category() {
        let extension = Extension::new().with_rule(Category::Browser, name_rule("x", "x"));
        assert!(extension_rules(&[extension], Category::Os).is_empty());
    }

    #[test]
    fn test_compile_binding_shapes() {
        let spec: RuleSpec = serde_json::from_value(serde_json::json!({
            "patterns": ["(\\w+)/([\\w_]+) (\\w+) (\\w+) (\\w+)"],
            "fields": [
                "name",
                { "field": "version", "pattern": "_", "replace": "." },
                { "field": "vendor", "map": [{ "canonical": "Acme", "variants": ["acm"] }] },
                { "field": "architecture", "lowercase": true },
                { "field": "model", "lowercase": false },
                { "field": "type", "value": "mobile" }
            ]
        }))
        .unwrap();
        let rule = spec.compile().unwrap();

        assert!(matches!(rule.bindings[0], Binding::Capture(Field::Name)));
        assert!(matches!(rule.bindings[1], Binding::Replace { field: Field::Version, .. }));
        assert!(matches!(rule.bindings[2], Binding::Mapped(Field::Vendor, _)));
        assert!(matches!(rule.bindings[3], Binding::Lowercase(Field::Architecture)));
        assert!(matches!(rule.bindings[4], Binding::Capture(Field::Model)));
        assert!(matches!(rule.bindings[5], Binding::Fixed(Field::Type, _)));
        assert_eq!(rule.capture_count(), 5);
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let spec: ExtensionSpec = serde_json::from_value(serde_json::json!({
            "platform": [{ "patterns": ["x"], "fields": [] }]
        }))
        .unwrap();
        let extension = spec.compile().unwrap();
        assert!(extension.is_empty());
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let spec: ExtensionSpec = serde_json::from_value(serde_json::json!({
            "browser": [{ "patterns": ["(unclosed"], "fields": ["name"] }]
        }))
        .unwrap();
        assert!(matches!(spec.compile(), Err(UaError::InvalidRegex { .. })));
    }

    #[test]
    fn test_rule_without_patterns_is_rejected() {
        let spec = RuleSpec {
            patterns: Vec::new(),
            fields: vec![BindingSpec::Capture(Field::Name)],
            case_sensitive: false,
        };
        assert!(matches!(spec.compile(), Err(UaError::InvalidExtension(_))));
    }

    #[test]
    fn test_extensions_spec_accepts_one_or_many() {
        let one: ExtensionsSpec = serde_json::from_value(serde_json::json!({
            "os": [{ "patterns": ["myos"], "fields": [{ "field": "name", "value": "MyOS" }] }]
        }))
        .unwrap();
        assert_eq!(one.compile().unwrap().len(), 1);

        let many: ExtensionsSpec = serde_json::from_value(serde_json::json!([
            { "os": [{ "patterns": ["a"], "fields": [] }] },
            { "cpu": [{ "patterns": ["b"], "fields": [] }] }
        ]))
        .unwrap();
        let compiled = many.compile().unwrap();
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[1].rules(Category::Cpu).len(), 1);
    }

    #[test]
    fn test_from_deserializer_reports_shape_errors() {
        let value = serde_json::json!({ "browser": "not a list" });
        let err = Extension::from_deserializer(value).unwrap_err();
        assert!(matches!(err, UaError::Deserialize(_)));
    }

    #[test]
    fn test_case_sensitive_rule_spec() {
        let spec: RuleSpec = serde_json::from_value(serde_json::json!({
            "patterns": ["Exact"],
            "fields": [],
            "case_sensitive": true
        }))
        .unwrap();
        let rule = spec.compile().unwrap();
        assert!(rule.patterns[0].is_case_sensitive());
        assert!(!rule.patterns[0].regex().is_match("exact"));
    }
}
