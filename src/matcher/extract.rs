//! Field extraction from a winning match.

use crate::ir::{Binding, Field, Rule};
use regex::{Captures, NoExpand};
use std::borrow::Cow;

/// Field values bound by one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: [Option<String>; Field::COUNT],
}

impl Fields {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.values[field.index()] = value;
    }

    pub fn take(&mut self, field: Field) -> Option<String> {
        self.values[field.index()].take()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Apply a rule's bindings to the capture groups of its winning pattern.
///
/// Capture-consuming bindings take groups 1, 2, ... in order. A group that did
/// not participate or matched the empty string leaves the field unset.
pub fn extract(rule: &Rule, captures: &Captures<'_>) -> Fields {
    let mut fields = Fields::default();
    let mut group = 0;

    for binding in &rule.bindings {
        let raw = if binding.consumes_capture() {
            group += 1;
            captures
                .get(group)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        } else {
            None
        };

        let value = match binding {
            Binding::Capture(_) => raw.map(str::to_string),
            Binding::Fixed(_, value) => Some(value.to_string()),
            Binding::Mapped(_, table) => raw.and_then(|r| table.normalize(r)).map(Cow::into_owned),
            Binding::Replace {
                pattern,
                replacement,
                ..
            } => raw.map(|r| {
                pattern
                    .replace_all(r, NoExpand(replacement.as_ref()))
                    .into_owned()
            }),
            Binding::Lowercase(_) => raw.map(str::to_lowercase),
        };

        fields.set(binding.field(), value);
    }

    fields
}
