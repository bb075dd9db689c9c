use owo_colors::OwoColorize;

use crate::organize::Summary;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// One-line run summary, e.g. "12 moved, 3 skipped (already present), 0 failed, 1 undated".
pub fn summary_line(summary: &Summary, dry_run: bool) -> String {
    let verb = if dry_run { "would move" } else { "moved" };
    let mut line = format!(
        "{} {verb}, {} skipped (already present), {} failed, {} undated",
        summary.moved, summary.skipped_duplicate, summary.failed, summary.undated
    );
    if summary.interrupted > 0 {
        line.push_str(&format!(", {} not processed (interrupted)", summary.interrupted));
    }
    line
}

/// Print the summary as success, or as a warning when something failed.
pub fn print_summary(summary: &Summary, dry_run: bool) {
    let line = summary_line(summary, dry_run);
    if summary.failed > 0 || summary.interrupted > 0 {
        print_warn(&line);
    } else {
        print_success(&line);
    }
}
