/// Normalise a name to a Showdown id: lower-case ASCII letters and digits only.
///
/// `"Mr. Mime"`, `"mr mime"` and `"MrMime"` all become `"mrmime"`.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
