//! Intermediate Representation (IR) for user-agent rules.
//!
//! This module defines the core data structures shared by the built-in rule
//! tables, caller-supplied extensions and the matcher.

use crate::error::{Result, UaError};
use crate::normalize::NormalizationTable;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// One of the five classification axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Browser,
    Cpu,
    Device,
    Engine,
    Os,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Browser,
        Category::Cpu,
        Category::Device,
        Category::Engine,
        Category::Os,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Browser => "browser",
            Category::Cpu => "cpu",
            Category::Device => "device",
            Category::Engine => "engine",
            Category::Os => "os",
        }
    }

    /// Position of this category inside per-category arrays.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UaError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UaError::InvalidExtension(format!("unknown category: {s}")))
    }
}

/// Output field a binding writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Version,
    Major,
    Type,
    Architecture,
    Vendor,
    Model,
}

impl Field {
    pub(crate) const COUNT: usize = 7;

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Version => "version",
            Field::Major => "major",
            Field::Type => "type",
            Field::Architecture => "architecture",
            Field::Vendor => "vendor",
            Field::Model => "model",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extraction descriptor: how one output field is populated from a match.
///
/// Every variant except [`Binding::Fixed`] consumes the next capture group,
/// left to right.
#[derive(Debug, Clone)]
pub enum Binding {
    /// Bind the next capture group verbatim.
    Capture(Field),
    /// Bind a constant; no capture group is consumed.
    Fixed(Field, Cow<'static, str>),
    /// Bind the next capture group after looking it up in a normalization table.
    Mapped(Field, Arc<NormalizationTable>),
    /// Bind the next capture group with every match of `pattern` replaced.
    Replace {
        field: Field,
        pattern: Regex,
        replacement: Cow<'static, str>,
    },
    /// Bind the next capture group lower-cased.
    Lowercase(Field),
}

impl Binding {
    pub fn fixed(field: Field, value: impl Into<Cow<'static, str>>) -> Self {
        Binding::Fixed(field, value.into())
    }

    pub fn mapped(field: Field, table: &Arc<NormalizationTable>) -> Self {
        Binding::Mapped(field, Arc::clone(table))
    }

    pub fn replace(
        field: Field,
        pattern: &str,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| UaError::invalid_regex(pattern, &e))?;
        Ok(Binding::Replace {
            field,
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn field(&self) -> Field {
        match self {
            Binding::Capture(field)
            | Binding::Fixed(field, _)
            | Binding::Mapped(field, _)
            | Binding::Lowercase(field) => *field,
            Binding::Replace { field, .. } => *field,
        }
    }

    pub fn consumes_capture(&self) -> bool {
        !matches!(self, Binding::Fixed(..))
    }
}

/// A compiled pattern together with the source it was built from.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Cow<'static, str>,
    case_sensitive: bool,
    regex: Regex,
}

impl Pattern {
    /// Compile a case-insensitive pattern.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Result<Self> {
        Self::build(source.into(), false)
    }

    /// Compile a pattern that keeps its literal casing.
    pub fn case_sensitive(source: impl Into<Cow<'static, str>>) -> Result<Self> {
        Self::build(source.into(), true)
    }

    fn build(source: Cow<'static, str>, case_sensitive: bool) -> Result<Self> {
        let effective = effective_source(&source, case_sensitive);
        let regex = Regex::new(&effective).map_err(|e| UaError::invalid_regex(&source, &e))?;
        Ok(Self {
            source,
            case_sensitive,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Source with the case-insensitivity flag applied, as fed to the regex engine.
    pub(crate) fn effective_source(&self) -> Cow<'_, str> {
        effective_source(&self.source, self.case_sensitive)
    }
}

fn effective_source(source: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(format!("(?i){source}"))
    }
}

/// A pattern list plus its extraction spec, evaluated as one unit.
#[derive(Debug, Clone)]
pub struct Rule {
    pub patterns: Vec<Pattern>,
    pub bindings: Vec<Binding>,
}

impl Rule {
    /// Compile a rule from case-insensitive pattern sources.
    pub fn new(patterns: &[&str], bindings: Vec<Binding>) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|source| Pattern::new(source.to_string()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_patterns(patterns, bindings))
    }

    pub fn from_patterns(patterns: Vec<Pattern>, bindings: Vec<Binding>) -> Self {
        Self { patterns, bindings }
    }

    /// Number of capture groups the extraction spec expects.
    pub fn capture_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.consumes_capture()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!("OS".parse::<Category>().unwrap(), Category::Os);
        assert!("platform".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_indices_are_dense() {
        let indices: Vec<usize> = Category::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pattern_defaults_to_case_insensitive() {
        let pattern = Pattern::new("(chrome)/([\\w.]+)").unwrap();
        assert!(!pattern.is_case_sensitive());
        assert!(pattern.regex().is_match("CHROME/1.0"));
        assert_eq!(pattern.source(), "(chrome)/([\\w.]+)");
    }

    #[test]
    fn test_case_sensitive_pattern() {
        let pattern = Pattern::case_sensitive("(Chrome)/").unwrap();
        assert!(pattern.regex().is_match("Chrome/1"));
        assert!(!pattern.regex().is_match("chrome/1"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Pattern::new("(broken").unwrap_err();
        assert!(matches!(err, UaError::InvalidRegex { ref pattern, .. } if pattern == "(broken"));
    }

    #[test]
    fn test_fixed_binding_consumes_no_capture() {
        let rule = Rule::new(
            &["(mybrowser)/([\\w.]+)"],
            vec![
                Binding::Capture(Field::Name),
                Binding::Capture(Field::Version),
                Binding::fixed(Field::Type, "bot"),
            ],
        )
        .unwrap();
        assert_eq!(rule.capture_count(), 2);
        assert_eq!(rule.bindings[2].field(), Field::Type);
    }
}
