//! Pure size-accounting functions.
//!
//! All functions here are pure and testable without any I/O or images.
//! They feed both the CLI display and the JSON report.

/// Unit labels for [`format_size`], base-1024 steps.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count using the largest base-1024 unit that keeps the
/// scaled value at or above 1, rounded to two decimals with trailing
/// zeros trimmed.
///
/// # Examples
/// ```
/// # use quickshrink::stats::format_size;
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1024), "1 KB");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1048576), "1 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Counts past GB stay in GB (the unit list is the clamp).
    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    // Round to hundredths in integer space so "1.00" prints as "1"
    // and "1.50" as "1.5" without float formatting surprises.
    let hundredths = (scaled * 100.0).round() as u64;
    let whole = hundredths / 100;
    let frac = hundredths % 100;
    let value = if frac == 0 {
        format!("{whole}")
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    };
    format!("{value} {}", UNITS[unit])
}

/// Savings as a percentage of the original size, one fractional digit.
///
/// Defined only when both totals are known and the original is non-zero;
/// otherwise returns the `"0"` placeholder.
pub fn savings_percent(original: Option<u64>, compressed: Option<u64>) -> String {
    match (original, compressed) {
        (Some(original), Some(compressed)) if original > 0 => {
            let percent = (original as f64 - compressed as f64) / original as f64 * 100.0;
            format!("{percent:.1}")
        }
        _ => "0".to_string(),
    }
}

/// Bytes saved, clamped at zero for the case where compression enlarged
/// the file (possible for already-compressed or very small inputs).
pub fn savings_bytes(original: u64, compressed: u64) -> u64 {
    original.saturating_sub(compressed)
}

/// Combined savings summary for a source/compressed total pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Savings {
    /// Percentage string with one fractional digit, or `"0"` placeholder.
    pub percent: String,
    /// Bytes saved, zero when compression did not shrink the input.
    pub bytes: u64,
}

impl Savings {
    pub fn compute(original: Option<u64>, compressed: Option<u64>) -> Self {
        let bytes = match (original, compressed) {
            (Some(original), Some(compressed)) => savings_bytes(original, compressed),
            _ => 0,
        };
        Self {
            percent: savings_percent(original, compressed),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // format_size tests
    // =========================================================================

    #[test]
    fn format_size_zero() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn format_size_unit_boundaries() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1048576), "1 MB");
        assert_eq!(format_size(1073741824), "1 GB");
    }

    #[test]
    fn format_size_trims_trailing_zeros() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2048), "2 KB");
    }

    #[test]
    fn format_size_two_decimals() {
        // 1234 / 1024 = 1.2051 → 1.21
        assert_eq!(format_size(1234), "1.21 KB");
        // 999 stays in bytes
        assert_eq!(format_size(999), "999 Bytes");
    }

    #[test]
    fn format_size_clamps_to_largest_unit() {
        // 5 TB stays expressed in GB
        assert_eq!(format_size(5 * 1024_u64.pow(4)), "5120 GB");
    }

    // =========================================================================
    // savings tests
    // =========================================================================

    #[test]
    fn savings_percent_basic() {
        assert_eq!(savings_percent(Some(2_000_000), Some(800_000)), "60.0");
        assert_eq!(savings_percent(Some(100), Some(75)), "25.0");
    }

    #[test]
    fn savings_percent_placeholder_when_unknown_or_zero() {
        assert_eq!(savings_percent(None, Some(500)), "0");
        assert_eq!(savings_percent(Some(500), None), "0");
        assert_eq!(savings_percent(None, None), "0");
        assert_eq!(savings_percent(Some(0), Some(0)), "0");
    }

    #[test]
    fn savings_percent_stays_in_range_for_shrinking_inputs() {
        for (original, compressed) in [(1u64, 0u64), (100, 100), (1000, 1), (1000, 999)] {
            let percent: f64 = savings_percent(Some(original), Some(compressed))
                .parse()
                .unwrap();
            assert!((0.0..=100.0).contains(&percent));
            assert_eq!(savings_bytes(original, compressed), original - compressed);
        }
    }

    #[test]
    fn savings_bytes_clamps_enlargement_to_zero() {
        assert_eq!(savings_bytes(100, 150), 0);
        assert_eq!(savings_bytes(100, 100), 0);
        assert_eq!(savings_bytes(150, 100), 50);
    }

    #[test]
    fn savings_compute_combines_both() {
        let savings = Savings::compute(Some(2_000_000), Some(800_000));
        assert_eq!(savings.percent, "60.0");
        assert_eq!(savings.bytes, 1_200_000);

        let unknown = Savings::compute(Some(2_000_000), None);
        assert_eq!(unknown.percent, "0");
        assert_eq!(unknown.bytes, 0);
    }
}
