//! Human-readable report printing.

use formguard::{ControlStatus, FormState};

/// Render one line per field followed by the form summary.
pub fn render(state: &FormState) -> String {
    let width = state
        .controls()
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for control in state.controls() {
        let status = match control.status() {
            ControlStatus::Untouched => "untouched",
            ControlStatus::Valid => "ok",
            ControlStatus::Invalid => "invalid",
        };
        out.push_str(&format!("{:<width$}  {}", control.name(), status));
        if !control.errors().is_empty() {
            out.push_str(&format!("  {}", control.errors().join("; ")));
        }
        out.push('\n');
    }

    let failed = state.invalid_fields().len();
    if state.is_valid() {
        out.push_str(&format!("form: valid ({} field(s))\n", state.len()));
    } else {
        out.push_str(&format!(
            "form: invalid ({} of {} field(s) failed)\n",
            failed,
            state.len()
        ));
    }
    out
}
