//! Page category constants for page standardization.
//!
//! Every page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d410_flood_prevention--dashboard"`)
//!   - `data-page-category` with one of the PAGE_CAT_* constants
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM inspector, paste into IDE search, and you land in the
//! `dashboards/d410_flood_prevention/` directory.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("d410_flood_prevention--dashboard"));
        assert!(!is_valid_page_id("no_separator"));
        assert!(!is_valid_page_id("--dashboard"));
        assert!(!is_valid_page_id("d410_flood_prevention--"));
    }
}
