use crate::config::NamesConfig;

/// Honorifics and post-nominal suffixes dropped from display names
pub const DEFAULT_HONORIFICS: &[&str] = &["Prof.", "Dr.", "M.A.", ",", "LL.M."];

/// Ordered stop-list of name tokens that are titles rather than names
///
/// Matching is exact and case-sensitive on whole tokens, so `"Dr."` is
/// dropped while `"Drake"` and `"dr."` are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HonorificPolicy {
    tokens: Vec<String>,
}

impl HonorificPolicy {
    /// Creates a policy from an explicit token list
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the policy configured in the `[names]` table
    pub fn from_config(config: &NamesConfig) -> Self {
        Self::new(config.honorifics.iter().cloned())
    }

    /// Checks whether a single token is on the stop-list
    pub fn is_honorific(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns the tokens that are not honorifics, preserving order
    pub fn strip<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        tokens
            .iter()
            .copied()
            .filter(|t| !self.is_honorific(t))
            .collect()
    }
}

impl Default for HonorificPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HONORIFICS.iter().copied())
    }
}
