/// Console summary output utilities
///
/// This module handles:
/// - Thread-safe console output
/// - Colored terminal text with plain-text fallback
/// - The short end-of-batch summary for interactive feedback
use crate::report::format_duration;
use crate::types::{BatchResult, BatchStatus};
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
/// Prevents interleaved output from multiple threads
fn output_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}

fn status_color(status: BatchStatus) -> term::color::Color {
    match status {
        BatchStatus::Success => term::color::BRIGHT_GREEN,
        BatchStatus::Failed => term::color::BRIGHT_RED,
        BatchStatus::Partial => term::color::BRIGHT_YELLOW,
    }
}

/// Print a short batch summary to the console (thread-safe).
///
/// Interactive feedback only; the reports are the durable record.
pub fn print_summary(result: &BatchResult) {
    output_lock(|| {
        println!();
        println!("{}", "=".repeat(60));
        println!("BATCH COMPLETE: {}", result.name.to_uppercase());
        println!("{}", "=".repeat(60));

        print!("Status: ");
        print_color(&result.status.as_str().to_uppercase(), status_color(result.status));
        println!();

        println!("Duration: {}", format_duration(result.duration));
        println!(
            "Total: {} | Succeeded: {} | Failed: {} | Partial: {}",
            result.stats.total_count,
            result.stats.success_count,
            result.stats.failed_count,
            result.stats.partial_count
        );

        if result.stats.total_count > 0 {
            println!("Success rate: {:.1}%", result.stats.success_rate);
        }
        if !result.error_messages.is_empty() {
            println!("Errors: {}", result.error_messages.len());
        }

        println!("{}", "=".repeat(60));
    });
}
