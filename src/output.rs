//! Operator-facing output helpers.
//!
//! Human-readable progress lines with colors. Machine-readable output is not
//! part of this tool's contract; an outer layer owns exit codes.

use console::style;

/// Print an informational progress message.
pub fn print_info(message: &str) {
    println!("{} {}", style("[*]").cyan(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("[+]").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("[!]").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[x]").red().bold(), message);
}

/// Print the guidance shown when prior scan output blocks a new run.
pub fn print_resume_guidance() {
    print_warning(
        "The last scan result was found on disk. Use --continue to continue the scan \
         for the last URL provided, or --restart to discard the last scan result.",
    );
}
