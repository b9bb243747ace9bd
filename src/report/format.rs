//! Formatted terminal output.
//!
//! Formatting lives in one place so the solver stays free of presentation and
//! output changes stay localized.

use crate::domain::FitResult;

/// Format the regression report: R², intercept, then one coefficient per feature.
///
/// ```text
/// r2        = 0.998765
/// Intercept = 0.125000
/// Coef      = {
///   1.000000
/// }
/// ```
pub fn format_report(fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("r2        = {:.6}\n", fit.quality.r2));
    out.push_str(&format!("Intercept = {:.6}\n", fit.intercept));
    out.push_str("Coef      = {\n");
    for c in &fit.coefficients {
        out.push_str(&format!("  {c:.6}\n"));
    }
    out.push_str("}\n");

    out
}
