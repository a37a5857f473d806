// web_app/listing/discrete.rs - Unit type and view filters
//
// Plain values, no bounds. An empty selection means "any".

/// Normalizes a unit-type `<select>` value; the "All" option is empty.
pub fn normalize_unit_type(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalizes free-text view input.
pub fn normalize_view(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Keeps `selected` only if the backend still offers it.
pub fn retain_known(selected: Option<String>, available: &[String]) -> Option<String> {
    selected.filter(|s| available.iter().any(|a| a == s))
}
