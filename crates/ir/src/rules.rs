//! Field validation rules
//!
//! A [`ValidationRule`] is a declarative check on a single value. Rules are
//! attached to form fields in node configs and to inspector field
//! descriptors, where they are evaluated before a write is accepted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use weave_core::ConfigValue;

/// Kind of check a rule performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationType {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
    Email,
    Url,
    Custom,
}

impl ValidationType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ValidationType::Required => "Required",
            ValidationType::MinLength => "Min Length",
            ValidationType::MaxLength => "Max Length",
            ValidationType::Min => "Minimum",
            ValidationType::Max => "Maximum",
            ValidationType::Pattern => "Pattern",
            ValidationType::Email => "Email",
            ValidationType::Url => "URL",
            ValidationType::Custom => "Custom",
        }
    }
}

/// A single validation rule: `{ type, value?, message, condition? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: ValidationType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConfigValue>,

    #[serde(default)]
    pub message: String,

    /// Free-form condition, carried but never evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ValidationRule {
    fn new(kind: ValidationType, value: Option<ConfigValue>, message: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            message: message.into(),
            condition: None,
        }
    }

    /// Value must be present and non-blank
    pub fn required() -> Self {
        Self::new(ValidationType::Required, None, "This field is required")
    }

    /// String must have at least `n` characters
    pub fn min_length(n: usize) -> Self {
        Self::new(
            ValidationType::MinLength,
            Some(ConfigValue::Int(n as i64)),
            format!("Must be at least {} characters", n),
        )
    }

    /// String must have at most `n` characters
    pub fn max_length(n: usize) -> Self {
        Self::new(
            ValidationType::MaxLength,
            Some(ConfigValue::Int(n as i64)),
            format!("Must be at most {} characters", n),
        )
    }

    /// Number must be at least `n`
    pub fn min(n: f64) -> Self {
        Self::new(
            ValidationType::Min,
            Some(ConfigValue::Float(n)),
            format!("Must be at least {}", n),
        )
    }

    /// Number must be at most `n`
    pub fn max(n: f64) -> Self {
        Self::new(
            ValidationType::Max,
            Some(ConfigValue::Float(n)),
            format!("Must be at most {}", n),
        )
    }

    /// String must match a regular expression
    pub fn pattern(regex: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ValidationType::Pattern,
            Some(ConfigValue::String(regex.into())),
            message,
        )
    }

    /// String must look like an email address
    pub fn email() -> Self {
        Self::new(ValidationType::Email, None, "Must be a valid email address")
    }

    /// String must look like an absolute URL or a site-relative path
    pub fn url() -> Self {
        Self::new(ValidationType::Url, None, "Must be a URL or a path starting with /")
    }

    /// Replace the message shown on failure
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Check a value against this rule.
    ///
    /// Rules other than `Required` pass on empty values, so optional fields
    /// can be left blank. `Custom` rules always pass.
    pub fn check(&self, value: &ConfigValue) -> Result<(), String> {
        let passed = match self.kind {
            ValidationType::Required => !is_blank(value),
            _ if is_blank(value) => true,
            ValidationType::MinLength => match (value.as_str(), self.limit()) {
                (Some(s), Some(n)) => s.chars().count() as f64 >= n,
                _ => true,
            },
            ValidationType::MaxLength => match (value.as_str(), self.limit()) {
                (Some(s), Some(n)) => s.chars().count() as f64 <= n,
                _ => true,
            },
            ValidationType::Min => match (value.as_float(), self.limit()) {
                (Some(v), Some(n)) => v >= n,
                _ => true,
            },
            ValidationType::Max => match (value.as_float(), self.limit()) {
                (Some(v), Some(n)) => v <= n,
                _ => true,
            },
            ValidationType::Pattern => {
                let pattern = self.value.as_ref().and_then(ConfigValue::as_str);
                match (value.as_str(), pattern) {
                    (Some(s), Some(p)) => match Regex::new(p) {
                        Ok(re) => re.is_match(s),
                        Err(e) => return Err(format!("Invalid pattern '{}': {}", p, e)),
                    },
                    _ => true,
                }
            }
            ValidationType::Email => value.as_str().is_some_and(is_email),
            ValidationType::Url => value.as_str().is_some_and(is_url),
            ValidationType::Custom => true,
        };

        if passed {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn limit(&self) -> Option<f64> {
        self.value.as_ref().and_then(ConfigValue::as_float)
    }
}

/// Run every rule, collecting the failure messages
pub fn check_all(rules: &[ValidationRule], value: &ConfigValue) -> Vec<String> {
    rules.iter().filter_map(|r| r.check(value).err()).collect()
}

fn is_blank(value: &ConfigValue) -> bool {
    match value {
        ConfigValue::Null => true,
        ConfigValue::String(s) => s.trim().is_empty(),
        ConfigValue::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_url(s: &str) -> bool {
    if s.starts_with('/') {
        return !s.contains(char::is_whitespace);
    }
    match s.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
                && !rest.is_empty()
                && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = ValidationRule::required();
        assert!(rule.check(&ConfigValue::from("x")).is_ok());
        assert!(rule.check(&ConfigValue::from("  ")).is_err());
        assert!(rule.check(&ConfigValue::Null).is_err());
        assert!(rule.check(&ConfigValue::from(Vec::<String>::new())).is_err());
        assert!(rule.check(&ConfigValue::Bool(false)).is_ok());
    }

    #[test]
    fn test_numeric_bounds() {
        let min = ValidationRule::min(1.0);
        let max = ValidationRule::max(100.0);
        assert!(min.check(&ConfigValue::Int(1)).is_ok());
        assert!(min.check(&ConfigValue::Int(0)).is_err());
        assert!(max.check(&ConfigValue::Int(100)).is_ok());
        assert_eq!(
            max.check(&ConfigValue::Int(101)).unwrap_err(),
            "Must be at most 100"
        );
    }

    #[test]
    fn test_length_bounds_skip_blank() {
        let rule = ValidationRule::min_length(3);
        assert!(rule.check(&ConfigValue::from("")).is_ok());
        assert!(rule.check(&ConfigValue::from("ab")).is_err());
        assert!(ValidationRule::max_length(2).check(&ConfigValue::from("abc")).is_err());
    }

    #[test]
    fn test_pattern() {
        let rule = ValidationRule::pattern("^[a-z_]+$", "Lowercase only");
        assert!(rule.check(&ConfigValue::from("user_roles")).is_ok());
        assert_eq!(
            rule.check(&ConfigValue::from("Users")).unwrap_err(),
            "Lowercase only"
        );

        let broken = ValidationRule::pattern("(", "never");
        assert!(broken.check(&ConfigValue::from("x")).unwrap_err().starts_with("Invalid pattern"));
    }

    #[test]
    fn test_email_and_url() {
        assert!(ValidationRule::email().check(&ConfigValue::from("a@b.io")).is_ok());
        assert!(ValidationRule::email().check(&ConfigValue::from("a@b")).is_err());
        assert!(ValidationRule::url().check(&ConfigValue::from("https://x.dev/api")).is_ok());
        assert!(ValidationRule::url().check(&ConfigValue::from("/dashboard")).is_ok());
        assert!(ValidationRule::url().check(&ConfigValue::from("dashboard")).is_err());
    }

    #[test]
    fn test_rule_json_shape() {
        let rule: ValidationRule =
            serde_json::from_str(r#"{ "type": "minLength", "value": 8, "message": "Too short" }"#)
                .unwrap();
        assert_eq!(rule.kind, ValidationType::MinLength);
        assert!(rule.check(&ConfigValue::from("short")).is_err());
        assert_eq!(rule.kind.display_name(), "Min Length");
    }

    #[test]
    fn test_check_all_collects() {
        let rules = vec![ValidationRule::required(), ValidationRule::max_length(3)];
        assert_eq!(check_all(&rules, &ConfigValue::from("abcd")).len(), 1);
        assert!(check_all(&rules, &ConfigValue::from("abc")).is_empty());
    }
}
