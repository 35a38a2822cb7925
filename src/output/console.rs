//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════╗
║     Model Scout                                   ║
║     Exported model directory inspection           ║
╚═══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print scan configuration summary.
pub fn print_scan_summary(base_path: &str, flavor: &str) {
    println!();
    println!("{}", style("Scan:").bold());
    println!("  Base: {}", base_path);
    println!("  Flavor: {}", flavor);
    println!();
}
