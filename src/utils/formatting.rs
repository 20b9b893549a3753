//! Formatting utilities used for CLI and export outputs.

/// Two-decimal hour figure for list and export outputs.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Money-ish amount; the payroll figures are day-rate proxies, not cents.
pub fn fmt_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
