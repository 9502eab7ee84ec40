use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// Placeholder names of a path template, in order of appearance.
pub fn placeholders(template: &'static str) -> Vec<&'static str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitutes every `{name}` with its value. Values are inserted as-is; path
/// segments are expected to already be valid resource ids. Unknown
/// placeholders are left untouched.
pub fn render(template: &str, values: &HashMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match values.get(name) {
                Some(value) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
