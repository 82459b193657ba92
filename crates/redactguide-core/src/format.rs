// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display helpers for file sizes and names.

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Default display width for file names in the preview card.
pub const DEFAULT_NAME_WIDTH: usize = 40;

/// Render a byte count with base-1024 units, rounded to two decimals.
///
/// `0` → `"0 Bytes"`, `1536` → `"1.5 KB"`, `52428800` → `"50 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Shorten a file name to at most `max_len` characters, keeping its extension.
///
/// `"a-very-long-name.pdf"` becomes `"a-very-l...pdf"` style output. Names that
/// already fit are returned unchanged.
pub fn truncate_file_name(name: &str, max_len: usize) -> String {
    let char_count = name.chars().count();
    if char_count <= max_len {
        return name.to_string();
    }

    match name.rsplit_once('.') {
        Some((stem, ext)) => {
            let keep = max_len.saturating_sub(ext.chars().count() + 4);
            let prefix: String = stem.chars().take(keep).collect();
            format!("{prefix}...{ext}")
        }
        None => {
            let prefix: String = name.chars().take(max_len.saturating_sub(3)).collect();
            format!("{prefix}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(52_428_800), "50 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn sizes_round_to_two_decimals() {
        // 1234567 / 1024^2 = 1.1773...
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn short_names_untouched() {
        assert_eq!(truncate_file_name("record.pdf", DEFAULT_NAME_WIDTH), "record.pdf");
    }

    #[test]
    fn long_names_keep_extension() {
        let name = "quarterly_patient_intake_forms_north_clinic_2026.pdf";
        let short = truncate_file_name(name, DEFAULT_NAME_WIDTH);
        assert!(short.ends_with("...pdf"));
        assert!(short.starts_with("quarterly_patient"));
        assert_eq!(short.chars().count(), DEFAULT_NAME_WIDTH - 1);
    }

    #[test]
    fn long_name_without_extension() {
        let short = truncate_file_name("abcdefghij", 6);
        assert_eq!(short, "abc...");
    }
}
