//! # UA Engine
//!
//! A rule-based Rust library for classifying user-agent strings into browser,
//! rendering engine, operating system, device and CPU descriptors.
//!
//! Each category has an ordered rule table. The first rule whose pattern
//! matches decides every field of that category; there is no scoring and no
//! longest-match preference. Callers can put their own rules ahead of the
//! built-ins with extensions.
//!
//! ## Quick Start
//!
//! ### Basic Usage
//!
//! ```rust
//! use ua_engine::{CategoryResult, UaParser};
//!
//! let parser = UaParser::with_ua(
//!     "Mozilla/5.0 (Mobile; Windows Phone 8.1; Android 4.0; ARM; Trident/7.0; Touch; rv:11.0; \
//!      IEMobile/11.0; NOKIA; Lumia 635) like iPhone OS 7_0_3 Mac OS X AppleWebKit/537 \
//!      (KHTML, like Gecko) Mobile Safari/537",
//! );
//!
//! assert_eq!(parser.browser().summary().as_deref(), Some("IEMobile 11.0"));
//! assert_eq!(parser.device().to_string(), "Nokia Lumia 635");
//! assert!(parser.os().is(Some("Windows Phone OS")));
//! assert!(parser.cpu().is(Some("arm")));
//! ```
//!
//! ### Stateless Classification
//!
//! ```rust
//! let result = ua_engine::parse("Mozilla/5.0 (X11; Ubuntu; Linux i686; rv:19.0) Gecko/20100101 Firefox/19.0");
//! assert_eq!(result.browser.major.as_deref(), Some("19"));
//! assert_eq!(result.engine.name.as_deref(), Some("Gecko"));
//! ```
//!
//! ### Extensions
//!
//! ```rust
//! use ua_engine::{parse_with, CategoryResult, ExtensionsSpec, ParseArg};
//!
//! let spec: ExtensionsSpec = serde_json::from_str(r#"{
//!     "browser": [
//!         { "patterns": ["(mybrowser)/([\\w.]+)"], "fields": ["name", "version", { "field": "type", "value": "bot" }] }
//!     ]
//! }"#)?;
//!
//! let result = parse_with([
//!     ParseArg::from(spec.compile()?),
//!     ParseArg::from("Mozilla/5.0 MyBrowser/2.0"),
//! ]);
//! assert!(result.browser.is(Some("bot")));
//! assert_eq!(result.browser.version.as_deref(), Some("2.0"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Headers
//!
//! ```rust
//! use std::collections::HashMap;
//! use ua_engine::{parse_with, ParseArg};
//!
//! let headers = HashMap::from([("User-Agent".to_string(), "Dillo/1.0".to_string())]);
//! let result = parse_with([ParseArg::headers(&headers)]);
//! assert_eq!(result, ua_engine::parse("Dillo/1.0"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extension;
pub mod input;
pub mod ir;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod parser;

mod rules;

// Primary interface
pub use engine::UaEngine;
pub use parser::{parse, parse_with, UaParser};

// Configuration and extensions
pub use config::ParserConfig;
pub use extension::{Extension, ExtensionSpec, ExtensionsSpec};
pub use input::{HeaderFn, HeaderSource, ParseArg, UA_MAX_LENGTH};

// Core types and errors
pub use error::{Result, UaError};
pub use ir::{Binding, Category, Field, Pattern, Rule};
pub use model::{
    browser_type, device_type, Browser, CategoryResult, Cpu, Device, Engine, Os, UaResult,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
