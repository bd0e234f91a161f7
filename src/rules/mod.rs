//! Built-in rule tables.
//!
//! Rules are listed in evaluation order; moving one changes results. The
//! `regex` crate has no look-around, so exclusions that other engines express
//! with look-ahead are encoded by placing the more specific rule first.

mod browser;
mod cpu;
mod device;
mod engine;
mod os;

use crate::ir::{Binding, Category, Field, Rule};
use crate::normalize::NormalizationTable;
use once_cell::sync::Lazy;
use std::sync::Arc;

static BUILTIN_RULES: Lazy<[Vec<Arc<Rule>>; 5]> = Lazy::new(|| {
    [
        browser::rules(),
        cpu::rules(),
        device::rules(),
        engine::rules(),
        os::rules(),
    ]
});

/// Built-in rules for a category, shared process-wide.
pub fn builtin_rules(category: Category) -> &'static [Arc<Rule>] {
    &BUILTIN_RULES[category.index()]
}

fn rule(patterns: &[&'static str], bindings: Vec<Binding>) -> Arc<Rule> {
    match Rule::new(patterns, bindings) {
        Ok(rule) => Arc::new(rule),
        Err(e) => panic!("built-in rule failed to compile: {e}"),
    }
}

fn capture(field: Field) -> Binding {
    Binding::Capture(field)
}

fn fixed(field: Field, value: &'static str) -> Binding {
    Binding::fixed(field, value)
}

fn mapped(field: Field, table: &Lazy<Arc<NormalizationTable>>) -> Binding {
    Binding::mapped(field, table)
}

fn lowercase(field: Field) -> Binding {
    Binding::Lowercase(field)
}

fn replace(field: Field, pattern: &'static str, replacement: &'static str) -> Binding {
    match Binding::replace(field, pattern, replacement) {
        Ok(binding) => binding,
        Err(e) => panic!("built-in binding failed to compile: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_table_compiles() {
        for category in Category::ALL {
            assert!(
                !builtin_rules(category).is_empty(),
                "{category} has no built-in rules"
            );
        }
    }

    #[test]
    fn test_builtin_rules_have_enough_groups() {
        for category in Category::ALL {
            for (index, rule) in builtin_rules(category).iter().enumerate() {
                let widest = rule
                    .patterns
                    .iter()
                    .map(|pattern| pattern.regex().captures_len() - 1)
                    .max()
                    .unwrap_or(0);
                assert!(
                    widest >= rule.capture_count(),
                    "{category} rule {index} has at most {widest} groups, needs {}",
                    rule.capture_count()
                );
            }
        }
    }
}
