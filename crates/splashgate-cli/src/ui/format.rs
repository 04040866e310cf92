//! Formatting helpers for sizes, durations and the build summary.

use super::paint;
use owo_colors::Style;
use std::path::Path;
use std::time::Duration;

/// Format a byte count with the largest fitting unit.
///
/// ```
/// use splashgate_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format a duration as `ms`, seconds, or `Xm Ys`.
///
/// ```
/// use std::time::Duration;
/// use splashgate_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the closing lines of a build.
///
/// `splash` is the copied document and its size, or `None` when the copy
/// failed (the failure itself has already been logged).
pub fn print_build_summary(out_dir: &Path, splash: Option<(&Path, u64)>, duration: Duration) {
    let bold = Style::new().bold();

    eprintln!("\n{}", paint("Build Summary", bold.underline()));
    eprintln!("  {} {}", paint("Output:", bold), out_dir.display());
    match splash {
        Some((path, size)) => eprintln!(
            "  {} {} {}",
            paint("Splash:", bold),
            path.display(),
            paint(format!("({})", format_size(size)), Style::new().dimmed())
        ),
        None => eprintln!(
            "  {} {}",
            paint("Splash:", bold),
            paint("not copied", Style::new().yellow())
        ),
    }
    eprintln!(
        "  {} {}",
        paint("Time:", bold),
        paint(format_duration(duration), Style::new().green())
    );
}
