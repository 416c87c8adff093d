//! Output formatting for CLI responses.

use woobridge_core::DiagnosticError;

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints the optional cause and fix lines for a diagnostic error.
pub fn print_diagnostics(err: &dyn DiagnosticError) {
    if let Some(hint) = err.hint() {
        eprintln!("\n  Cause: {hint}");
    }
    if let Some(fix) = err.fix() {
        eprintln!("  Fix:   {fix}\n");
    }
}
