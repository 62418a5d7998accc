//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Hammer emoji for build operations
pub const HAMMER: Emoji = Emoji("🔨", ">");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Package emoji for bundles and components
pub const PACKAGE: Emoji = Emoji("📦", "#");

/// Target emoji for scenario headings
pub const TARGET: Emoji = Emoji("🎯", ">>");

/// Broom emoji for cleanup operations
pub const BROOM: Emoji = Emoji("🧹", "-");

/// Bulb emoji for recommendations
pub const BULB: Emoji = Emoji("💡", "?");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bundle_split::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format bytes as a fixed-precision KB string; the size report uses this
/// for every line so columns stay comparable
///
/// # Examples
///
/// ```
/// use bundle_split::fmt::format_kb;
///
/// assert_eq!(format_kb(10 * 1024), "10.00 KB");
/// assert_eq!(format_kb(1536), "1.50 KB");
/// assert_eq!(format_kb(0), "0.00 KB");
/// ```
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
