// Return/refund workflow
pub mod returns;

// Dashboard aggregates
pub mod dashboard;

// Directory reads and single-field updates
pub mod contact_messages;
pub mod designers;
pub mod orders;
pub mod sellers;
pub mod users;

/// Placeholder shown in admin tables for missing text values.
pub const MISSING: &str = "-";

pub(crate) fn or_missing(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_render_as_dash() {
        assert_eq!(or_missing(None), "-");
        assert_eq!(or_missing(Some("  ")), "-");
        assert_eq!(or_missing(Some("Pune")), "Pune");
    }
}
