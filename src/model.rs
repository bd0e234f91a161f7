//! Externally visible classification results.
//!
//! Each category has its own result type populated from the [`Fields`] the
//! extractor produced. All of them implement [`CategoryResult`], which adds
//! the `is` predicate and the display summary.

use crate::ir::{Category, Field};
use crate::matcher::Fields;
use serde::Serialize;
use std::fmt;

/// Device `type` values used by the built-in rules.
pub mod device_type {
    pub const CONSOLE: &str = "console";
    pub const EMBEDDED: &str = "embedded";
    pub const MOBILE: &str = "mobile";
    pub const SMARTTV: &str = "smarttv";
    pub const TABLET: &str = "tablet";
    pub const WEARABLE: &str = "wearable";
    pub const XR: &str = "xr";
}

/// Browser `type` values used by the built-in rules.
pub mod browser_type {
    pub const CLI: &str = "cli";
    pub const CRAWLER: &str = "crawler";
    pub const EMAIL: &str = "email";
    pub const FETCHER: &str = "fetcher";
    pub const INAPP: &str = "inapp";
    pub const LIBRARY: &str = "library";
    pub const MEDIAPLAYER: &str = "mediaplayer";
}

/// Shared behaviour of the five per-category results.
pub trait CategoryResult: Sized {
    const CATEGORY: Category;

    /// Suffix ignored on both sides by [`CategoryResult::is`].
    const IGNORED_SUFFIX: Option<&'static str> = None;

    fn from_fields(fields: Fields) -> Self;

    /// Fields consulted by [`CategoryResult::is`], in order.
    fn identity(&self) -> Vec<Option<&str>>;

    /// Fields joined by [`CategoryResult::summary`], in order.
    fn display_parts(&self) -> Vec<Option<&str>>;

    /// Case-insensitive check of `candidate` against the identifying fields.
    ///
    /// `is(None)` asks whether every identifying field is unset; the literal
    /// string `"undefined"` is compared like any other value.
    fn is(&self, candidate: Option<&str>) -> bool {
        let identity = self.identity();
        match candidate {
            None => identity.iter().all(Option::is_none),
            Some(candidate) => {
                let wanted = comparable(candidate, Self::IGNORED_SUFFIX);
                identity
                    .into_iter()
                    .flatten()
                    .any(|value| comparable(value, Self::IGNORED_SUFFIX) == wanted)
            }
        }
    }

    /// Display fields joined with a single space; `None` when all are unset.
    fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = self.display_parts().into_iter().flatten().collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Lower-case `value` and drop a trailing `suffix` with at most one
/// whitespace character before it.
fn comparable(value: &str, suffix: Option<&str>) -> String {
    let lowered = value.to_lowercase();
    let Some(suffix) = suffix else {
        return lowered;
    };

    match lowered.strip_suffix(suffix) {
        Some(rest) => {
            let mut chars = rest.chars();
            match chars.next_back() {
                Some(c) if c.is_whitespace() => chars.as_str().to_string(),
                _ => rest.to_string(),
            }
        }
        None => lowered,
    }
}

/// Leading run of ASCII digits of a version string.
pub(crate) fn major_of(version: &str) -> Option<String> {
    let major: String = version.chars().take_while(char::is_ascii_digit).collect();
    (!major.is_empty()).then_some(major)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Browser {
    pub name: Option<String>,
    pub version: Option<String>,
    pub major: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CategoryResult for Browser {
    const CATEGORY: Category = Category::Browser;
    const IGNORED_SUFFIX: Option<&'static str> = Some("browser");

    fn from_fields(mut fields: Fields) -> Self {
        let version = fields.take(Field::Version);
        Self {
            name: fields.take(Field::Name),
            major: version.as_deref().and_then(major_of),
            version,
            kind: fields.take(Field::Type),
        }
    }

    fn identity(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.kind.as_deref()]
    }

    fn display_parts(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.version.as_deref()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cpu {
    pub architecture: Option<String>,
}

impl CategoryResult for Cpu {
    const CATEGORY: Category = Category::Cpu;

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            architecture: fields.take(Field::Architecture),
        }
    }

    fn identity(&self) -> Vec<Option<&str>> {
        vec![self.architecture.as_deref()]
    }

    fn display_parts(&self) -> Vec<Option<&str>> {
        vec![self.architecture.as_deref()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Device {
    pub vendor: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CategoryResult for Device {
    const CATEGORY: Category = Category::Device;

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            vendor: fields.take(Field::Vendor),
            model: fields.take(Field::Model),
            kind: fields.take(Field::Type),
        }
    }

    fn identity(&self) -> Vec<Option<&str>> {
        vec![
            self.vendor.as_deref(),
            self.model.as_deref(),
            self.kind.as_deref(),
        ]
    }

    fn display_parts(&self) -> Vec<Option<&str>> {
        vec![self.vendor.as_deref(), self.model.as_deref()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Engine {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl CategoryResult for Engine {
    const CATEGORY: Category = Category::Engine;
    const IGNORED_SUFFIX: Option<&'static str> = Some("browser");

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            name: fields.take(Field::Name),
            version: fields.take(Field::Version),
        }
    }

    fn identity(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref()]
    }

    fn display_parts(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.version.as_deref()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Os {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl CategoryResult for Os {
    const CATEGORY: Category = Category::Os;
    const IGNORED_SUFFIX: Option<&'static str> = Some("os");

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            name: fields.take(Field::Name),
            version: fields.take(Field::Version),
        }
    }

    fn identity(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref()]
    }

    fn display_parts(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.version.as_deref()]
    }
}

fn write_summary<T: CategoryResult>(result: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match result.summary() {
        Some(summary) => f.write_str(&summary),
        None => Ok(()),
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

/// All five category results plus the sanitized input they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UaResult {
    pub ua: String,
    pub browser: Browser,
    pub cpu: Cpu,
    pub device: Device,
    pub engine: Engine,
    pub os: Os,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(Field, &str)]) -> Fields {
        let mut fields = Fields::default();
        for (field, value) in pairs {
            fields.set(*field, Some(value.to_string()));
        }
        fields
    }

    #[test]
    fn test_major_of() {
        assert_eq!(major_of("20.0.1090.0").as_deref(), Some("20"));
        assert_eq!(major_of("1.3").as_deref(), Some("1"));
        assert_eq!(major_of("11").as_deref(), Some("11"));
        assert_eq!(major_of("beta"), None);
        assert_eq!(major_of(""), None);
    }

    #[test]
    fn test_browser_major_follows_version() {
        let browser = Browser::from_fields(fields(&[
            (Field::Name, "Chrome"),
            (Field::Version, "20.0.1090.0"),
            (Field::Major, "99"),
        ]));
        assert_eq!(browser.major.as_deref(), Some("20"));
    }

    #[test]
    fn test_comparable_strips_one_suffix() {
        assert_eq!(comparable("IEMobile Browser", Some("browser")), "iemobile");
        assert_eq!(comparable("UCBrowser", Some("browser")), "uc");
        assert_eq!(comparable("Mac OS OS", Some("os")), "mac os");
        assert_eq!(comparable("Chrome", None), "chrome");
    }

    #[test]
    fn test_device_is_checks_every_identity_field() {
        let device = Device::from_fields(fields(&[
            (Field::Vendor, "Nokia"),
            (Field::Model, "Lumia 635"),
            (Field::Type, "mobile"),
        ]));
        assert!(device.is(Some("nokia")));
        assert!(device.is(Some("LUMIA 635")));
        assert!(device.is(Some("Mobile")));
        assert!(!device.is(Some("tablet")));
        assert!(!device.is(None));
    }

    #[test]
    fn test_unset_result() {
        let device = Device::default();
        assert!(device.is(None));
        assert!(!device.is(Some("undefined")));
        assert_eq!(device.summary(), None);
        assert_eq!(device.to_string(), "");
    }

    #[test]
    fn test_summary_skips_unset_parts() {
        let os = Os::from_fields(fields(&[(Field::Name, "Linux")]));
        assert_eq!(os.summary().as_deref(), Some("Linux"));

        let device = Device::from_fields(fields(&[(Field::Model, "iPad")]));
        assert_eq!(device.to_string(), "iPad");
    }

    #[test]
    fn test_cpu_has_no_aliases() {
        let cpu = Cpu::from_fields(fields(&[(Field::Architecture, "ia32")]));
        assert!(cpu.is(Some("IA32")));
        assert!(!cpu.is(Some("x86")));
    }

    #[test]
    fn test_fields_outside_category_are_ignored() {
        let cpu = Cpu::from_fields(fields(&[(Field::Name, "x"), (Field::Architecture, "arm")]));
        assert_eq!(cpu, Cpu { architecture: Some("arm".to_string()) });
    }
}
