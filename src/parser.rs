//! Parser instances and the stateless entry points.
//!
//! A [`UaParser`] owns one sanitized input string and memoizes each category
//! result the first time it is asked for. Reassigning the string clears the
//! memo. The rule tables live in a shared [`UaEngine`] and never change.

use crate::config::ParserConfig;
use crate::engine::UaEngine;
use crate::input::{resolve, ParseArg};
use crate::model::{Browser, CategoryResult, Cpu, Device, Engine, Os, UaResult};
use std::cell::OnceCell;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Memo {
    browser: OnceCell<Browser>,
    cpu: OnceCell<Cpu>,
    device: OnceCell<Device>,
    engine: OnceCell<Engine>,
    os: OnceCell<Os>,
}

/// A user-agent parser bound to one input string.
///
/// # Examples
///
/// ```rust
/// use ua_engine::{CategoryResult, UaParser};
///
/// let mut parser = UaParser::with_ua("Mozilla/5.0 (X11; Ubuntu; Linux i686; rv:19.0) Gecko/20100101 Firefox/19.0");
/// assert_eq!(parser.browser().name.as_deref(), Some("Firefox"));
/// assert!(parser.cpu().is(Some("ia32")));
///
/// parser.set_ua("Opera/9.80 (X11; Linux x86_64; U; en) Presto/2.2.15 Version/10.10");
/// assert_eq!(parser.cpu().architecture.as_deref(), Some("amd64"));
/// ```
#[derive(Debug)]
pub struct UaParser {
    ua: String,
    engine: Arc<UaEngine>,
    memo: Memo,
}

impl UaParser {
    /// Parser over the built-in rules with an empty input.
    pub fn new() -> Self {
        Self::with_engine(UaEngine::builtin(), None)
    }

    pub fn with_ua(ua: &str) -> Self {
        Self::with_engine(UaEngine::builtin(), Some(ua))
    }

    /// Parser over the rules described by `config`.
    pub fn with_config(ua: Option<&str>, config: &ParserConfig) -> Self {
        Self::with_engine(UaEngine::from_config(config), ua)
    }

    /// Parser sharing an already built engine.
    pub fn with_engine(engine: Arc<UaEngine>, ua: Option<&str>) -> Self {
        Self {
            ua: engine.sanitize(ua),
            engine,
            memo: Memo::default(),
        }
    }

    /// Build from flexible arguments, given in any order.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use ua_engine::{ParseArg, UaParser};
    ///
    /// let headers = HashMap::from([("User-Agent", "Dillo/1.0")]);
    /// let parser = UaParser::from_args([ParseArg::headers(&headers)]);
    /// assert_eq!(parser.ua(), "Dillo/1.0");
    /// ```
    pub fn from_args(args: impl IntoIterator<Item = ParseArg>) -> Self {
        let (ua, config) = resolve(args);
        Self::with_config(ua.as_deref(), &config)
    }

    /// Replace the input string and drop every memoized result.
    pub fn set_ua(&mut self, ua: &str) -> &mut Self {
        self.set_ua_opt(Some(ua))
    }

    /// Like [`UaParser::set_ua`]; `None` resets the input to `""`.
    pub fn set_ua_opt(&mut self, ua: Option<&str>) -> &mut Self {
        self.ua = self.engine.sanitize(ua);
        self.memo = Memo::default();
        self
    }

    /// The current sanitized input.
    pub fn ua(&self) -> &str {
        &self.ua
    }

    pub fn ua_engine(&self) -> &Arc<UaEngine> {
        &self.engine
    }

    pub fn browser(&self) -> &Browser {
        self.memo.browser.get_or_init(|| self.compute())
    }

    pub fn cpu(&self) -> &Cpu {
        self.memo.cpu.get_or_init(|| self.compute())
    }

    pub fn device(&self) -> &Device {
        self.memo.device.get_or_init(|| self.compute())
    }

    pub fn engine(&self) -> &Engine {
        self.memo.engine.get_or_init(|| self.compute())
    }

    pub fn os(&self) -> &Os {
        self.memo.os.get_or_init(|| self.compute())
    }

    /// All five results together with the sanitized input.
    pub fn result(&self) -> UaResult {
        UaResult {
            ua: self.ua.clone(),
            browser: self.browser().clone(),
            cpu: self.cpu().clone(),
            device: self.device().clone(),
            engine: self.engine().clone(),
            os: self.os().clone(),
        }
    }

    fn compute<T: CategoryResult>(&self) -> T {
        self.engine.classify_as::<T>(&self.ua)
    }
}

impl Default for UaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify `ua` with the built-in rules in one call.
pub fn parse(ua: &str) -> UaResult {
    UaEngine::builtin().classify(ua)
}

/// Classify from flexible arguments in one call.
///
/// ```rust
/// use ua_engine::{parse_with, HeaderFn, ParseArg};
///
/// let headers = HeaderFn(|_: &str| Some("Midori/0.2.2".to_string()));
/// let result = parse_with([ParseArg::headers(&headers), ParseArg::Ua(None)]);
/// assert_eq!(result.browser.name.as_deref(), Some("Midori"));
/// ```
pub fn parse_with(args: impl IntoIterator<Item = ParseArg>) -> UaResult {
    UaParser::from_args(args).result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::Extension;
    use crate::ir::{Binding, Category, Field, Rule};

    const CHROME_28_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/28.0.1500.71 Safari/537.36";

    #[test]
    fn test_default_parser_is_empty() {
        let parser = UaParser::default();
        assert_eq!(parser.ua(), "");
        assert_eq!(parser.result(), UaResult::default());
    }

    #[test]
    fn test_accessors_are_memoized() {
        let parser = UaParser::with_ua(CHROME_28_MAC);
        let first = parser.engine() as *const Engine;
        let second = parser.engine() as *const Engine;
        assert_eq!(first, second);
        assert_eq!(parser.engine().name.as_deref(), Some("Blink"));
    }

    #[test]
    fn test_set_ua_clears_memo() {
        let mut parser = UaParser::with_ua(CHROME_28_MAC);
        assert_eq!(parser.os().name.as_deref(), Some("macOS"));

        let os = parser.set_ua("Dillo/1.0").os().clone();
        assert_eq!(os, Os::default());
        assert_eq!(parser.browser().name.as_deref(), Some("Dillo"));

        parser.set_ua_opt(None);
        assert_eq!(parser.ua(), "");
        assert!(parser.browser().is(None));
    }

    #[test]
    fn test_result_is_idempotent() {
        let parser = UaParser::with_ua(CHROME_28_MAC);
        assert_eq!(parser.result(), parser.result());
    }

    #[test]
    fn test_config_limit_applies_to_reassignment() {
        let config = ParserConfig::default().with_max_ua_length(7);
        let mut parser = UaParser::with_config(Some("Dillo/1.0 and more"), &config);
        assert_eq!(parser.ua(), "Dillo/1");
        parser.set_ua("Links (2.1)");
        assert_eq!(parser.ua(), "Links (");
    }

    #[test]
    fn test_stateless_matches_instance() {
        let parser = UaParser::with_ua(CHROME_28_MAC);
        assert_eq!(parse(CHROME_28_MAC), parser.result());
    }

    #[test]
    fn test_from_args_with_extension() {
        let rule = Rule::new(
            &["(myownbrowser)/((\\d+)?[\\w.]+)"],
            vec![
                Binding::Capture(Field::Name),
                Binding::Capture(Field::Version),
                Binding::Capture(Field::Major),
            ],
        )
        .unwrap();
        let extension = Extension::new().with_rule(Category::Browser, rule);

        let result = parse_with([
            ParseArg::from(extension),
            ParseArg::from("Mozilla/5.0 MyOwnBrowser/1.3"),
        ]);
        assert_eq!(result.browser.name.as_deref(), Some("MyOwnBrowser"));
        assert_eq!(result.browser.version.as_deref(), Some("1.3"));
        assert_eq!(result.browser.major.as_deref(), Some("1"));
    }
}
