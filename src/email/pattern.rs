use std::fmt;

/// Placeholder replaced with the full reduced first name
pub const FIRST: &str = "{first}";
/// Placeholder replaced with the full reduced last name
pub const LAST: &str = "{last}";
/// Placeholder replaced with the first character of the reduced first name
pub const FIRST_INITIAL: &str = "{f}";
/// Placeholder replaced with the first character of the reduced last name
pub const LAST_INITIAL: &str = "{l}";
/// Placeholder replaced with the fallback email domain
pub const DOMAIN: &str = "{domain}";

/// A company's address template, e.g. `{first}.{last}` or `{f}{last}@{domain}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPattern(String);

impl EmailPattern {
    /// Wraps a template string; blank templates are treated as absent
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        if template.trim().is_empty() {
            None
        } else {
            Some(Self(template))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders an address for one employee, see [`crate::email::generate_email`]
    pub fn render(&self, firstname: &str, lastname: &str, domain: &str) -> String {
        super::generate_email(firstname, lastname, self.as_str(), domain)
    }
}

impl fmt::Display for EmailPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
