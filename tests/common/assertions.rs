//! Domain-specific assertions for skimmer harnesses.
//!
//! These add context-rich failure messages that make it clear *which* output
//! invariant was violated and on *which* line of the output file.

use serde_json::Value;

/// The exact field set every output line must carry, in output order.
pub const POST_FIELDS: [&str; 6] = [
    "text",
    "created_at",
    "author",
    "uri",
    "has_images",
    "is_reply",
];

/// Parse one output line as JSON and assert it carries exactly the six post
/// fields — no more, no fewer. Returns the parsed object for further checks.
pub fn assert_post_shape(line: &str) -> Value {
    let value: Value = serde_json::from_str(line)
        .unwrap_or_else(|err| panic!("output line is not valid JSON: {err}\n  line: {line:?}"));
    let object = value
        .as_object()
        .unwrap_or_else(|| panic!("output line is not a JSON object: {line:?}"));

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = POST_FIELDS.to_vec();
    expected.sort_unstable();
    assert_eq!(
        keys, expected,
        "output line does not have exactly the six post fields\n  line: {line:?}"
    );
    value
}

/// Assert a string field on a parsed output line.
#[macro_export]
macro_rules! assert_post_field {
    ($value:expr, $key:expr, $expected:expr) => {{
        let value: &serde_json::Value = &$value;
        let key: &str = $key;
        let expected = serde_json::json!($expected);
        match value.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_post_field! failed:\n  post[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!("assert_post_field! failed: field {:?} missing from {}", key, value),
        }
    }};
}

/// Read an output file and return its non-empty lines.
pub fn output_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read output file {}: {err}", path.display()))
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
