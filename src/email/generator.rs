use super::pattern::{DOMAIN, FIRST, FIRST_INITIAL, LAST, LAST_INITIAL};
use crate::names::map_umlauts;

/// Renders an email address from a name and a company pattern
///
/// Only the first whitespace- or hyphen-delimited word of `firstname` is
/// used; `lastname` is used whole. Both are reduced with [`reduce_name`]
/// before substitution. Placeholders are substituted in this order:
/// `{first}` and `{last}`, then `{f}` and `{l}`, then `{domain}`. When the
/// result still has no `@`, `@{domain}` is appended.
///
/// # Examples
///
/// ```
/// use lidump::email::generate_email;
///
/// assert_eq!(generate_email("John", "Doe", "{first}.{last}@{domain}", "x.com"), "john.doe@x.com");
/// assert_eq!(generate_email("Anna-Maria", "Schmidt", "{f}{last}", "x.com"), "aschmidt@x.com");
/// assert_eq!(generate_email("Jo", "Li", "static@other.com", "x.com"), "static@other.com");
/// ```
pub fn generate_email(firstname: &str, lastname: &str, pattern: &str, domain: &str) -> String {
    let first = reduce_name(first_word(firstname));
    let last = reduce_name(lastname);

    let mut email = pattern.replace(FIRST, &first).replace(LAST, &last);
    email = email
        .replace(FIRST_INITIAL, &initial(&first))
        .replace(LAST_INITIAL, &initial(&last));
    email = email.replace(DOMAIN, domain);

    if !email.contains('@') {
        email.push('@');
        email.push_str(domain);
    }
    email
}

/// Returns the part of a first name used for the address local-part
///
/// `"Anna-Maria"` and `"Anna Maria"` both yield `"Anna"`.
pub fn first_word(firstname: &str) -> &str {
    firstname
        .split(|c: char| c.is_whitespace() || c == '-')
        .next()
        .unwrap_or("")
}

/// Lower-cases a name and strips the characters that never appear in a
/// local-part: periods, spaces, umlauts
pub fn reduce_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    map_umlauts(&stripped.to_lowercase())
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
