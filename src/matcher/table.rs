//! Compiled rule table with first-match-wins lookup.

use crate::ir::{Category, Rule};
use regex::{Captures, RegexSet, RegexSetBuilder};
use std::sync::Arc;

/// Compiled size budget for the per-table prefilter.
const PREFILTER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// The winning rule entry for one input.
#[derive(Debug)]
pub struct RuleMatch<'r, 't> {
    pub rule_index: usize,
    pub pattern_index: usize,
    pub rule: &'r Rule,
    pub captures: Captures<'t>,
}

/// Ordered rules for one category.
///
/// Table order is the only precedence: the first rule (and within it, the
/// first pattern) that matches anywhere in the input wins, regardless of how
/// much text a later rule would cover.
///
/// All patterns are also compiled into one [`RegexSet`] so a lookup runs a
/// single pass to find the lowest matching pattern and only extracts captures
/// from that one. When the set cannot be built the table scans sequentially,
/// which yields the same result.
#[derive(Debug, Clone)]
pub struct RuleTable {
    category: Category,
    rules: Vec<Arc<Rule>>,
    /// Set index -> (rule index, pattern index).
    slots: Vec<(usize, usize)>,
    prefilter: Option<RegexSet>,
}

impl RuleTable {
    pub fn new(category: Category, rules: Vec<Arc<Rule>>) -> Self {
        let slots: Vec<(usize, usize)> = rules
            .iter()
            .enumerate()
            .flat_map(|(rule_index, rule)| {
                (0..rule.patterns.len()).map(move |pattern_index| (rule_index, pattern_index))
            })
            .collect();

        let prefilter = build_prefilter(category, &rules);

        Self {
            category,
            rules,
            slots,
            prefilter,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.slots.len()
    }

    pub fn has_prefilter(&self) -> bool {
        self.prefilter.is_some()
    }

    /// Find the first matching (rule, pattern) pair.
    pub fn find<'r, 't>(&'r self, ua: &'t str) -> Option<RuleMatch<'r, 't>> {
        let Some(prefilter) = &self.prefilter else {
            return self.scan(ua);
        };

        let slot = prefilter.matches(ua).into_iter().next()?;
        let (rule_index, pattern_index) = self.slots[slot];
        let rule = self.rules[rule_index].as_ref();

        match rule.patterns[pattern_index].regex().captures(ua) {
            Some(captures) => Some(RuleMatch {
                rule_index,
                pattern_index,
                rule,
                captures,
            }),
            None => self.scan(ua),
        }
    }

    /// Sequential evaluation in table order.
    pub fn scan<'r, 't>(&'r self, ua: &'t str) -> Option<RuleMatch<'r, 't>> {
        for (rule_index, rule) in self.rules.iter().enumerate() {
            for (pattern_index, pattern) in rule.patterns.iter().enumerate() {
                if let Some(captures) = pattern.regex().captures(ua) {
                    return Some(RuleMatch {
                        rule_index,
                        pattern_index,
                        rule: rule.as_ref(),
                        captures,
                    });
                }
            }
        }
        None
    }
}

fn build_prefilter(category: Category, rules: &[Arc<Rule>]) -> Option<RegexSet> {
    if rules.is_empty() {
        return None;
    }

    let sources: Vec<String> = rules
        .iter()
        .flat_map(|rule| rule.patterns.iter())
        .map(|pattern| pattern.effective_source().into_owned())
        .collect();

    match RegexSetBuilder::new(&sources)
        .size_limit(PREFILTER_SIZE_LIMIT)
        .dfa_size_limit(PREFILTER_SIZE_LIMIT)
        .build()
    {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::warn!(
                "Prefilter for {} rules unavailable, using sequential scan: {}",
                category,
                e
            );
            None
        }
    }
}
