//! Search result parser
//!
//! Turns one raw people-search result into an [`EmployeeRecord`]. Results
//! arrive as loosely-typed JSON; any missing level of nesting is a normal
//! outcome, reported as a [`SkipReason`] for the name or as the
//! `"N/A"` position for the subtitle.

use crate::extract::record::{EmployeeRecord, POSITION_UNAVAILABLE};
use crate::names::{normalize, HonorificPolicy};
use serde_json::Value;
use std::fmt;

/// Why a search result produced no employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `itemUnion.entityResult.title.text` is absent or not a string
    MissingName,

    /// Nothing but honorifics, punctuation or emoji remained of the name
    NoNameTokens,

    /// A single name token cannot be split into first and last name
    SingleToken(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "result has no display name"),
            SkipReason::NoNameTokens => write!(f, "display name is empty after cleanup"),
            SkipReason::SingleToken(token) => write!(f, "single-token name '{}'", token),
        }
    }
}

/// Parses one search result item
///
/// # Arguments
///
/// * `item` - One entry of a cluster's `items` array
/// * `policy` - Honorifics removed before the name is split
///
/// # Returns
///
/// * `Ok(EmployeeRecord)` - Parsed employee
/// * `Err(SkipReason)` - The item carries no usable name and should be skipped
///
/// # Example
///
/// ```
/// use lidump::extract::parse_item;
/// use lidump::names::HonorificPolicy;
/// use serde_json::json;
///
/// let item = json!({"itemUnion": {"entityResult": {
///     "title": {"text": "Dr. Jörg Müller"},
///     "primarySubtitle": {"text": "CTO"}
/// }}});
/// let record = parse_item(&item, &HonorificPolicy::default()).unwrap();
/// assert_eq!(record.firstname, "Joerg");
/// assert_eq!(record.lastname, "Mueller");
/// assert_eq!(record.position, "CTO");
/// ```
pub fn parse_item(item: &Value, policy: &HonorificPolicy) -> Result<EmployeeRecord, SkipReason> {
    let name = display_name(item).ok_or(SkipReason::MissingName)?;
    let (firstname, lastname) = split_name(&normalize(name), policy)?;

    let position = subtitle(item)
        .map(normalize)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| POSITION_UNAVAILABLE.to_string());

    Ok(EmployeeRecord {
        firstname,
        lastname,
        position,
    })
}

/// Splits a normalized display name into first and last name
///
/// Honorifics are removed first. Of the remaining tokens the last one is
/// the last name and everything before it, joined by single spaces, is the
/// first name.
pub fn split_name(
    normalized: &str,
    policy: &HonorificPolicy,
) -> Result<(String, String), SkipReason> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let tokens = policy.strip(&tokens);

    match tokens.as_slice() {
        [] => Err(SkipReason::NoNameTokens),
        [single] => Err(SkipReason::SingleToken(single.to_string())),
        [rest @ .., last] => Ok((rest.join(" "), last.to_string())),
    }
}

fn display_name(item: &Value) -> Option<&str> {
    entity_text(item, "title")
}

fn subtitle(item: &Value) -> Option<&str> {
    entity_text(item, "primarySubtitle")
}

/// Reads `itemUnion.entityResult.<field>.text`
fn entity_text<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get("itemUnion")?
        .get("entityResult")?
        .get(field)?
        .get("text")?
        .as_str()
}
