//! Tests for caller-supplied extension rules.

use ua_engine::{
    device_type, parse, parse_with, Binding, Category, CategoryResult, Extension, ExtensionSpec,
    ExtensionsSpec, Field, ParseArg, ParserConfig, Rule, UaError, UaParser,
};

const CHROME_20_WIN8: &str = "Mozilla/5.0 (Windows NT 6.2) AppleWebKit/536.6 (KHTML, like Gecko) Chrome/20.0.1090.0 Safari/536.6";

fn my_own_browser() -> Extension {
    let rule = Rule::new(
        &["(myownbrowser)/((\\d+)?[\\w.]+)"],
        vec![
            Binding::Capture(Field::Name),
            Binding::Capture(Field::Version),
            Binding::Capture(Field::Major),
        ],
    )
    .unwrap();
    Extension::new().with_rule(Category::Browser, rule)
}

#[test]
fn test_custom_browser_rule() {
    let parser = UaParser::with_config(
        Some("Mozilla/5.0 MyOwnBrowser/1.3"),
        &ParserConfig::default().with_extension(my_own_browser()),
    );

    assert_eq!(parser.browser().name.as_deref(), Some("MyOwnBrowser"));
    assert_eq!(parser.browser().version.as_deref(), Some("1.3"));
    assert_eq!(parser.browser().major.as_deref(), Some("1"));
}

#[test]
fn test_builtin_rules_still_apply_below_extension() {
    let result = parse_with([ParseArg::from(my_own_browser()), ParseArg::from(CHROME_20_WIN8)]);
    assert_eq!(result, parse(CHROME_20_WIN8));
}

#[test]
fn test_extension_overrides_matching_builtin() {
    let rule = Rule::new(
        &["chrome/(\\d+)"],
        vec![Binding::fixed(Field::Name, "Not Chrome"), Binding::Capture(Field::Version)],
    )
    .unwrap();
    let extension = Extension::new().with_rule(Category::Browser, rule);

    let result = parse_with([ParseArg::from(CHROME_20_WIN8), ParseArg::from(extension)]);
    assert_eq!(result.browser.name.as_deref(), Some("Not Chrome"));
    assert_eq!(result.browser.version.as_deref(), Some("20"));
    assert_eq!(result.browser.major.as_deref(), Some("20"));

    // Other categories keep their built-in answers.
    assert_eq!(result.os.version.as_deref(), Some("8"));
}

#[test]
fn test_fixed_type_is_matched_by_is() {
    let spec: ExtensionSpec = serde_json::from_str(
        r#"{
            "browser": [
                {
                    "patterns": ["(mybrowser)/([\\w.]+)"],
                    "fields": ["name", "version", { "field": "type", "value": "bot" }]
                }
            ]
        }"#,
    )
    .unwrap();

    let result = parse_with([
        ParseArg::from("Mozilla/5.0 MyBrowser/1.3"),
        ParseArg::from(spec.compile().unwrap()),
    ]);
    assert_eq!(result.browser.kind.as_deref(), Some("bot"));
    assert!(result.browser.is(Some("bot")));
    assert!(result.browser.is(Some("MyBrowser")));
}

#[test]
fn test_device_extension_from_yaml() {
    let spec: ExtensionSpec = serde_yaml::from_str(
        r#"
device:
  - patterns: ['(mytab) ([\w ]+)']
    fields: [vendor, model, { field: type, value: tablet }]
  - patterns: ['(myphone)']
    fields: [vendor, { field: type, value: mobile }]
"#,
    )
    .unwrap();
    let extension = spec.compile().unwrap();
    assert_eq!(extension.rules(Category::Device).len(), 2);

    let tab = parse_with([ParseArg::from(extension.clone()), ParseArg::from("Mozilla/5.0 MyTab 14 Pro Max")]);
    assert_eq!(tab.device.vendor.as_deref(), Some("MyTab"));
    assert_eq!(tab.device.model.as_deref(), Some("14 Pro Max"));
    assert_eq!(tab.device.kind.as_deref(), Some(device_type::TABLET));

    let phone = parse_with([ParseArg::from(extension), ParseArg::from("Mozilla/5.0 MyPhone/1.0")]);
    assert_eq!(phone.device.vendor.as_deref(), Some("MyPhone"));
    assert_eq!(phone.device.model, None);
    assert!(phone.device.is(Some("mobile")));
}

#[test]
fn test_list_of_extensions_apply_together() {
    let spec: ExtensionsSpec = serde_json::from_str(
        r#"[
            { "browser": [{ "patterns": ["(mybrowser)/([\\w.]+)"], "fields": ["name", "version"] }] },
            { "os": [{ "patterns": ["(myos) ([\\w.]+)"], "fields": ["name", "version"] }] }
        ]"#,
    )
    .unwrap();
    let extensions = spec.compile().unwrap();
    assert_eq!(extensions.len(), 2);

    let result = parse_with([
        ParseArg::from(extensions),
        ParseArg::from("Mozilla/5.0 (MyOS 1.2) MyBrowser/3.4"),
    ]);
    assert_eq!(result.browser.to_string(), "MyBrowser 3.4");
    assert_eq!(result.os.to_string(), "MyOS 1.2");
}

#[test]
fn test_first_supplied_extension_wins() {
    let named = |name: &'static str| {
        let rule = Rule::new(&["(custom)"], vec![Binding::fixed(Field::Name, name)]).unwrap();
        Extension::new().with_rule(Category::Engine, rule)
    };

    let result = parse_with([
        ParseArg::from(vec![named("First"), named("Second")]),
        ParseArg::from("Custom/1.0"),
    ]);
    assert_eq!(result.engine.name.as_deref(), Some("First"));

    let result = parse_with([
        ParseArg::from(named("Second")),
        ParseArg::from(named("First")),
        ParseArg::from("Custom/1.0"),
    ]);
    assert_eq!(result.engine.name.as_deref(), Some("Second"));
}

#[test]
fn test_mapped_and_replaced_fields() {
    let spec: ExtensionSpec = serde_yaml::from_str(
        r#"
os:
  - patterns: ['(acmeos|acme-os)/([\d_]+)']
    fields:
      - field: name
        map:
          - canonical: AcmeOS
            variants: [acmeos, acme-os]
      - { field: version, pattern: '_', replace: '.' }
cpu:
  - patterns: ['\b(RISCV64)\b']
    fields: [{ field: architecture, lowercase: true }]
"#,
    )
    .unwrap();
    let extension = spec.compile().unwrap();

    let result = parse_with([ParseArg::from(extension), ParseArg::from("Agent (Acme-OS/2_1_0; RISCV64)")]);
    assert_eq!(result.os.name.as_deref(), Some("AcmeOS"));
    assert_eq!(result.os.version.as_deref(), Some("2.1.0"));
    assert_eq!(result.cpu.architecture.as_deref(), Some("riscv64"));
}

#[test]
fn test_case_sensitive_extension_pattern() {
    let spec: ExtensionSpec = serde_json::from_str(
        r#"{ "browser": [{ "patterns": ["(Exact)/([\\d.]+)"], "fields": ["name", "version"], "case_sensitive": true }] }"#,
    )
    .unwrap();
    let extension = spec.compile().unwrap();

    let hit = parse_with([ParseArg::from(extension.clone()), ParseArg::from("Exact/1.0")]);
    assert_eq!(hit.browser.name.as_deref(), Some("Exact"));

    let miss = parse_with([ParseArg::from(extension), ParseArg::from("exact/1.0")]);
    assert_eq!(miss.browser.name, None);
}

#[test]
fn test_unknown_category_contributes_nothing() {
    let spec: ExtensionSpec =
        serde_json::from_str(r#"{ "platform": [{ "patterns": ["dillo"], "fields": [{ "field": "name", "value": "x" }] }] }"#)
            .unwrap();
    let extension = spec.compile().unwrap();
    assert!(extension.is_empty());

    let result = parse_with([ParseArg::from(extension), ParseArg::from("Dillo/1.0")]);
    assert_eq!(result, parse("Dillo/1.0"));
}

#[test]
fn test_invalid_extension_regex() {
    let spec: ExtensionSpec =
        serde_json::from_str(r#"{ "browser": [{ "patterns": ["(unclosed"], "fields": ["name"] }] }"#).unwrap();

    match spec.compile() {
        Err(UaError::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected InvalidRegex, got {other:?}"),
    }
}

#[test]
fn test_extension_from_deserializer() {
    let mut deserializer = serde_json::Deserializer::from_str(
        r#"{ "cpu": [{ "patterns": ["(z80)"], "fields": ["architecture"] }] }"#,
    );
    let extension = Extension::from_deserializer(&mut deserializer).unwrap();

    let result = parse_with([ParseArg::from(extension), ParseArg::from("Retro (Z80)")]);
    assert_eq!(result.cpu.architecture.as_deref(), Some("Z80"));
}
