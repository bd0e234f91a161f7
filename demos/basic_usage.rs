//! Basic UA Engine usage examples.
//!
//! This example demonstrates classifying user-agent strings with the
//! built-in rules, reading them from request headers, and adding custom
//! extension rules.

use std::collections::HashMap;
use ua_engine::{parse, parse_with, ExtensionSpec, ParseArg, UaEngine, UaParser};

const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("UA Engine Basic Usage Examples");
    println!("==============================\n");

    // Example 1: Single string
    single_string_example();
    println!();

    // Example 2: Headers
    headers_example();
    println!();

    // Example 3: Custom rules
    extension_example()?;
    println!();

    // Example 4: Batch processing
    batch_processing_example();

    Ok(())
}

/// Classify one string and print every category.
fn single_string_example() {
    println!("=== Single String Example ===");

    let result = parse(CHROME_WINDOWS);
    println!("Browser: {}", result.browser);
    println!("Engine:  {}", result.engine);
    println!("OS:      {}", result.os);
    println!("CPU:     {}", result.cpu);

    // Accessors are computed on demand and memoized per parser.
    let mut parser = UaParser::with_ua(SAFARI_IPHONE);
    println!("Device:  {}", parser.device());

    parser.set_ua(CHROME_WINDOWS);
    println!("Device after reassignment is unset: {}", parser.device().model.is_none());
}

/// Read the user agent from a header map.
fn headers_example() {
    println!("=== Headers Example ===");

    let mut headers = HashMap::new();
    headers.insert("User-Agent", SAFARI_IPHONE);
    headers.insert("Accept", "text/html");

    let result = parse_with([ParseArg::headers(&headers)]);
    println!("Browser from headers: {}", result.browser);
    println!("Device from headers:  {:?}", result.device);
}

/// Custom rules run ahead of the built-in ones.
fn extension_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Extension Example ===");

    let spec: ExtensionSpec = serde_json::from_str(
        r#"{
            "browser": [
                {
                    "patterns": ["(myownbrowser)/((\\d+)?[\\w.]+)"],
                    "fields": ["name", "version", "major"]
                }
            ]
        }"#,
    )?;
    let extension = spec.compile()?;

    let result = parse_with([
        ParseArg::from("Mozilla/5.0 MyOwnBrowser/1.3"),
        ParseArg::from(extension),
    ]);
    println!(
        "Custom browser: {} (major {:?})",
        result.browser, result.browser.major
    );

    Ok(())
}

/// Classify many strings in parallel with the shared engine.
fn batch_processing_example() {
    println!("=== Batch Processing Example ===");

    let uas = [CHROME_WINDOWS, SAFARI_IPHONE, "curl/7.88.1", ""];
    let results = UaEngine::builtin().classify_batch(&uas);

    for (ua, result) in uas.iter().zip(&results) {
        println!("{:>40.40} -> {}", ua, serde_json::to_string(&result.browser).unwrap_or_default());
    }
}
