//! `{{NAME}}` placeholder substitution for prompt templates.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("Valid placeholder regex"));

/// Replace every `{{NAME}}` in `template` whose `NAME` is a key of `substitutions`.
///
/// The template is scanned once. Substituted values are inserted verbatim and
/// never rescanned, so a value that itself contains `{{NICHE}}` stays literal.
/// Placeholders without a substitution are left untouched.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::render;
/// use std::collections::HashMap;
///
/// let subs = HashMap::from([("NICHE", "Skincare")]);
/// let out = render("{{NICHE}} tips for {{NICHE}} fans, {{OTHER}}", &subs);
/// assert_eq!(out, "Skincare tips for Skincare fans, {{OTHER}}");
/// ```
pub fn render(template: &str, substitutions: &HashMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match substitutions.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of placeholders still present in `text`, in order of first appearance.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::unresolved_placeholders;
///
/// assert_eq!(unresolved_placeholders("a {{X}} b {{Y}} {{X}}"), vec!["X", "Y"]);
/// assert!(unresolved_placeholders("plain text").is_empty());
/// ```
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholders in `template` that `substitutions` has no value for.
///
/// Only the template is inspected, so `{{...}}` text inside substituted
/// values is never reported.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::missing_substitutions;
/// use std::collections::HashMap;
///
/// let subs = HashMap::from([("NICHE", "Pets"), ("RAW_TEXT", "Try {{PLATFORMS}} now")]);
/// assert!(missing_substitutions("{{NICHE}}: {{RAW_TEXT}}", &subs).is_empty());
/// assert_eq!(missing_substitutions("{{NICHE}} {{PLATFORMS}}", &subs), vec!["PLATFORMS"]);
/// ```
pub fn missing_substitutions(template: &str, substitutions: &HashMap<&str, &str>) -> Vec<String> {
    unresolved_placeholders(template)
        .into_iter()
        .filter(|name| !substitutions.contains_key(name.as_str()))
        .collect()
}
