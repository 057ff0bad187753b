//! Storage usage shown in the sidebar meter.

use std::fmt;

const KB: u64 = 1_000;

/// Used and total capacity of the drive, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageQuota {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl StorageQuota {
    pub const fn new(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used_bytes,
            total_bytes,
        }
    }

    /// Used share of the quota in `[0.0, 1.0]`. A zero quota counts as full.
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            return 1.0;
        }
        (self.used_bytes as f64 / self.total_bytes as f64).clamp(0.0, 1.0)
    }

    /// Used share as a whole percentage, for CSS widths.
    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }
}

impl fmt::Display for StorageQuota {
    /// "3.5 GB of 15 GB used"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} used",
            format_bytes(self.used_bytes),
            format_bytes(self.total_bytes)
        )
    }
}

/// Format a byte count with decimal units ("245 KB", "3.5 GB").
///
/// One decimal place is kept only when it is not zero. A value that rounds
/// up to 1000 moves to the next unit ("1 MB", not "1000 KB").
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < KB {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / KB as f64;
    let mut unit = 0;
    loop {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded < 1000.0 || unit == UNITS.len() - 1 {
            return if rounded.fract() == 0.0 {
                format!("{:.0} {}", rounded, UNITS[unit])
            } else {
                format!("{:.1} {}", rounded, UNITS[unit])
            };
        }
        value /= 1000.0;
        unit += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GB: u64 = 1_000_000_000;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(999), "999 B");
        assert_eq!(format_bytes(245_000), "245 KB");
        assert_eq!(format_bytes(1_200_000), "1.2 MB");
        assert_eq!(format_bytes(3_500_000_000), "3.5 GB");
        assert_eq!(format_bytes(15_000_000_000), "15 GB");
    }

    #[test]
    fn test_format_bytes_rounds_into_next_unit() {
        assert_eq!(format_bytes(999_940), "999.9 KB");
        assert_eq!(format_bytes(999_950), "1 MB");
        assert_eq!(format_bytes(999_999_999), "1 GB");
        assert_eq!(format_bytes(2_000_000_000_000), "2000 GB");
    }

    #[test]
    fn test_quota_label() {
        let quota = StorageQuota::new(3_500_000_000, 15_000_000_000);
        assert_eq!(quota.to_string(), "3.5 GB of 15 GB used");
        assert_eq!(quota.percent(), 23);
    }

    #[test]
    fn test_quota_fraction() {
        let quota = StorageQuota::new(5 * GB, 15 * GB);
        assert!((quota.fraction() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(quota.percent(), 33);

        assert_eq!(StorageQuota::new(20 * GB, 15 * GB).fraction(), 1.0);
        assert_eq!(StorageQuota::new(0, 15 * GB).percent(), 0);
        assert_eq!(StorageQuota::new(0, 0).fraction(), 1.0);
    }
}
