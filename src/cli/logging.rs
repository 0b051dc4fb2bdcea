// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::palette::BandColor;

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Render a band label in its own color. Labels outside the palette are
/// printed plain.
#[must_use]
pub fn paint_band(label: &str) -> String {
    BandColor::from_label(label).map_or_else(
        || label.to_string(),
        |color| {
            let (r, g, b) = color.rgb();
            // Dark bands are unreadable as foreground on most terminals.
            if matches!(color, BandColor::Black | BandColor::Brown | BandColor::Blue) {
                label.on_truecolor(r, g, b).white().to_string()
            } else {
                label.truecolor(r, g, b).bold().to_string()
            }
        },
    )
}

/// Render a band sequence, e.g. `[red, violet, yellow, gold]`.
#[must_use]
pub fn paint_bands<S: AsRef<str>>(bands: &[S]) -> String {
    let painted: Vec<String> = bands.iter().map(|b| paint_band(b.as_ref())).collect();
    format!("[{}]", painted.join(", "))
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*))
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }}
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "✅".green(), format!($($arg)*));
    }}
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }}
}
