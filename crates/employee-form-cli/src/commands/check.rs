use anyhow::{Context, Result};
use employee_form::{Config, Dialog, FieldValues, SubmissionResult};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use super::render_dialog;

/// Validate one record; returns whether it was accepted
pub fn execute(values: &FieldValues, config: &Config, json: bool) -> Result<bool> {
    let result = SubmissionResult::evaluate(values);
    let dialog = Dialog::with_config(&result, &config.dialog);
    debug!(accepted = result.is_accepted(), "record checked");

    if json {
        let text = serde_json::to_string_pretty(&json_output(&result, &dialog))
            .context("Failed to serialize result")?;
        println!("{}", text);
    } else {
        print!("{}", render_dialog(&result, &dialog));
    }

    Ok(result.is_accepted())
}

/// `--json` output: the submission result next to the rendered dialog
pub fn json_output(result: &SubmissionResult, dialog: &Dialog) -> JsonValue {
    json!({
        "result": result,
        "dialog": dialog,
    })
}
