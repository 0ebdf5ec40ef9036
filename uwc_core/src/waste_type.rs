//! Mapping from the raw collection-type codes of the upstream API to display labels.

/// Label used when the upstream type is absent or not in the table.
pub static FALLBACK_LABEL: &str = "Waste Collection";

static TYPE_LABELS: [(&str, &str); 4] = [
    ("refuse", "General Waste Collection"),
    ("recycling", "Recycling Collection"),
    ("garden", "Garden Waste Collection"),
    ("food", "Food Waste Collection"),
];

/// Get the display label for a raw collection-type code.
///
/// The lookup is case-insensitive; anything outside the table maps to
/// [`FALLBACK_LABEL`].
pub fn label_for(raw_type: Option<&str>) -> &'static str {
    let Some(raw_type) = raw_type else {
        return FALLBACK_LABEL;
    };
    let raw_type = raw_type.trim();
    TYPE_LABELS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(raw_type))
        .map_or(FALLBACK_LABEL, |(_, label)| label)
}
