//! Terminal output for the CLI: status lines and summaries on stderr.

mod format;
mod messages;

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{error, info, success, warning};

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

/// Turn stderr colors off for the whole process when `--no-color` is set.
///
/// Without the flag nothing is overridden: every styled string checks
/// stderr itself, honoring `NO_COLOR` and `FORCE_COLOR`.
pub fn init_colors(no_color: bool) {
    if no_color {
        owo_colors::set_override(false);
    }
}

/// Apply `style` when stderr gets colors.
fn paint(value: impl Display, style: Style) -> String {
    value
        .if_supports_color(Stream::Stderr, move |text| text.style(style))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_strips_styles() {
        init_colors(true);
        let painted = paint("done", Style::new().green().bold());
        owo_colors::unset_override();

        assert_eq!(painted, "done");
    }
}
