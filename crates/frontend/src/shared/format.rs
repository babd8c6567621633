//! Number formatting helpers for axis ticks and banner figures.

/// Trailing-zero-free label for a numeric value: `"0"`, `"0.5"`, `"90"`,
/// `"1 234"`. Integer magnitudes get a space thousands separator.
pub fn format_tick(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(trimmed),
    }
}

/// Insert a space every 3 digits, counting from the end. Keeps a leading
/// minus sign untouched.
fn group_thousands(int_part: &str) -> String {
    let mut result = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push(' ');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick_trims_zeros() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(90.0), "90");
        assert_eq!(format_tick(0.8), "0.8");
    }

    #[test]
    fn test_format_tick_groups_thousands() {
        assert_eq!(format_tick(1234.0), "1 234");
        assert_eq!(format_tick(1234567.0), "1 234 567");
        assert_eq!(format_tick(245.0), "245");
    }

    #[test]
    fn test_format_tick_negative() {
        assert_eq!(format_tick(-1234.5), "-1 234.5");
        assert_eq!(format_tick(-0.4), "-0.4");
    }
}
