/// Returns the variable name when `token` is exactly a placeholder.
///
/// A placeholder is `<`, one or more of `A-Z` or `_`, then `>`, with nothing
/// before or after. Lowercase letters, digits, nested brackets and partial
/// matches are all rejected.
///
/// # Examples
///
/// ```
/// use mcpverse::install::placeholder_name;
///
/// assert_eq!(placeholder_name("<API_KEY>"), Some("API_KEY"));
/// assert_eq!(placeholder_name("<api_key>"), None);
/// assert_eq!(placeholder_name("--key=<API_KEY>"), None);
/// ```
pub fn placeholder_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('<')?.strip_suffix('>')?;
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_') {
        Some(name)
    } else {
        None
    }
}
