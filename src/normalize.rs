//! Normalization tables mapping raw matched tokens to canonical display strings.
//!
//! A [`NormalizationTable`] is an ordered list of `(canonical, variants)`
//! entries. A raw value normalizes to the canonical form of the first entry
//! with a variant contained in it (ASCII case-insensitive). Values with no hit
//! pass through verbatim unless the table carries a fallback.
//!
//! # Examples
//!
//! ```rust
//! use ua_engine::normalize::NormalizationTable;
//!
//! let table = NormalizationTable::new()
//!     .with_entry("XP", &["NT 5.1", "NT 5.2"])
//!     .with_entry("8", &["NT 6.2"]);
//!
//! assert_eq!(table.normalize("NT 6.2").as_deref(), Some("8"));
//! assert_eq!(table.normalize("nt 5.2").as_deref(), Some("XP"));
//! assert_eq!(table.normalize("CE 6.0").as_deref(), Some("CE 6.0"));
//! ```

use aho_corasick::AhoCorasick;
use once_cell::sync::{Lazy, OnceCell};
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Entry {
    /// `None` marks the variants as "unknown": they normalize to unset.
    canonical: Option<Cow<'static, str>>,
    /// Stored lower-cased.
    variants: Vec<String>,
}

/// Variant automaton plus the entry each automaton pattern belongs to.
#[derive(Debug, Clone)]
struct VariantMatcher {
    automaton: AhoCorasick,
    owners: Vec<usize>,
}

/// Ordered lookup from raw tokens to canonical names.
#[derive(Debug, Clone, Default)]
pub struct NormalizationTable {
    entries: Vec<Entry>,
    fallback: Option<Cow<'static, str>>,
    /// Built on first lookup; `None` inside means the automaton failed to build.
    matcher: OnceCell<Option<VariantMatcher>>,
}

impl NormalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry mapping every variant to `canonical`.
    pub fn with_entry<S>(mut self, canonical: impl Into<Cow<'static, str>>, variants: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        self.add_entry(Some(canonical.into()), variants);
        self
    }

    /// Append an entry whose variants normalize to unset.
    pub fn with_unknown<S: AsRef<str>>(mut self, variants: &[S]) -> Self {
        self.add_entry(None, variants);
        self
    }

    /// Value returned when no entry matches, instead of the raw input.
    pub fn with_fallback(mut self, fallback: impl Into<Cow<'static, str>>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn add_entry<S: AsRef<str>>(
        &mut self,
        canonical: Option<Cow<'static, str>>,
        variants: &[S],
    ) -> &mut Self {
        self.entries.push(Entry {
            canonical,
            variants: variants
                .iter()
                .map(|v| v.as_ref().to_ascii_lowercase())
                .collect(),
        });
        self.matcher = OnceCell::new();
        self
    }

    /// Normalize a raw token.
    ///
    /// Returns `None` only when the token hits an "unknown" entry.
    pub fn normalize<'a>(&'a self, raw: &'a str) -> Option<Cow<'a, str>> {
        if let Some(entry) = self.lookup(raw) {
            return self.entries[entry].canonical.as_deref().map(Cow::Borrowed);
        }

        match &self.fallback {
            Some(fallback) => Some(Cow::Borrowed(fallback.as_ref())),
            None => Some(Cow::Borrowed(raw)),
        }
    }

    /// Index of the first entry with a variant contained in `raw`.
    fn lookup(&self, raw: &str) -> Option<usize> {
        match self.matcher.get_or_init(|| self.build_matcher()) {
            Some(matcher) => matcher
                .automaton
                .find_overlapping_iter(raw)
                .map(|m| matcher.owners[m.pattern().as_usize()])
                .min(),
            None => {
                let lowered = raw.to_ascii_lowercase();
                self.entries.iter().position(|entry| {
                    entry
                        .variants
                        .iter()
                        .any(|variant| lowered.contains(variant.as_str()))
                })
            }
        }
    }

    fn build_matcher(&self) -> Option<VariantMatcher> {
        let mut patterns = Vec::new();
        let mut owners = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            for variant in &entry.variants {
                patterns.push(variant.as_str());
                owners.push(index);
            }
        }

        match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
        {
            Ok(automaton) => Some(VariantMatcher { automaton, owners }),
            Err(e) => {
                tracing::warn!("Normalization automaton unavailable, using linear lookup: {}", e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Windows NT kernel tokens to marketing versions.
pub static WINDOWS_VERSIONS: Lazy<Arc<NormalizationTable>> = Lazy::new(|| {
    Arc::new(
        NormalizationTable::new()
            .with_entry("ME", &["4.90"])
            .with_entry("NT 3.11", &["NT3.51"])
            .with_entry("NT 4.0", &["NT4.0"])
            .with_entry("2000", &["NT 5.0"])
            .with_entry("XP", &["NT 5.1", "NT 5.2"])
            .with_entry("Vista", &["NT 6.0"])
            .with_entry("7", &["NT 6.1"])
            .with_entry("8", &["NT 6.2"])
            .with_entry("8.1", &["NT 6.3"])
            .with_entry("10", &["NT 6.4", "NT 10.0"])
            .with_entry("RT", &["ARM"]),
    )
});

pub static ENGINE_NAMES: Lazy<Arc<NormalizationTable>> = Lazy::new(|| {
    Arc::new(
        NormalizationTable::new()
            .with_entry("WebKit", &["webkit"])
            .with_entry("Trident", &["trident"])
            .with_entry("Presto", &["presto"])
            .with_entry("KHTML", &["khtml"])
            .with_entry("NetFront", &["netfront"])
            .with_entry("NetSurf", &["netsurf"])
            .with_entry("Goanna", &["goanna"])
            .with_entry("Gecko", &["gecko"])
            .with_entry("Servo", &["servo"])
            .with_entry("Amaya", &["amaya"])
            .with_entry("Lynx", &["lynx"])
            .with_entry("w3m", &["w3m"])
            .with_entry("Flow", &["flow"])
            .with_entry("Tasman", &["tasman"])
            .with_entry("Links", &["links"])
            .with_entry("iCab", &["icab"])
            .with_entry("LibWeb", &["libweb"]),
    )
});

pub static OS_NAMES: Lazy<Arc<NormalizationTable>> = Lazy::new(|| {
    Arc::new(
        NormalizationTable::new()
            .with_entry("Chrome OS", &["cros", "chromium os", "chrome os"])
            .with_entry("macOS", &["mac os", "macos", "macintosh", "mac_powerpc"])
            .with_entry("Red Hat", &["redhat", "red hat"])
            .with_entry("OpenSolaris", &["opensolaris"])
            .with_entry("Solaris", &["sunos", "solaris"])
            .with_entry("webOS", &["webos", "web0s"]),
    )
});

pub static DEVICE_VENDORS: Lazy<Arc<NormalizationTable>> = Lazy::new(|| {
    Arc::new(
        NormalizationTable::new()
            .with_entry("Apple", &["apple"])
            .with_entry("Samsung", &["samsung"])
            .with_entry("Nokia", &["nokia"])
            .with_entry("HTC", &["htc"])
            .with_entry("Sony", &["sony"])
            .with_entry("Huawei", &["huawei"])
            .with_entry("Honor", &["honor"])
            .with_entry("Xiaomi", &["xiaomi"])
            .with_entry("Lenovo", &["lenovo"])
            .with_entry("Motorola", &["motorola"])
            .with_entry("BlackBerry", &["blackberry"])
            .with_entry("Nintendo", &["nintendo"])
            .with_entry("Roku", &["roku"])
            .with_entry("Tesla", &["tesla"])
            .with_entry("Pebble", &["pebble"])
            .with_entry("LG", &["lge", "lg"]),
    )
});
