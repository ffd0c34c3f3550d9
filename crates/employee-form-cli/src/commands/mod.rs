pub mod check;
pub mod shell;

use colored::Colorize;
use employee_form::{Dialog, SubmissionResult};

/// Dialog text with a coloured title, as printed to the terminal
pub fn render_dialog(result: &SubmissionResult, dialog: &Dialog) -> String {
    let title = if result.is_accepted() {
        dialog.title.as_str().green().bold()
    } else {
        dialog.title.as_str().red().bold()
    };
    format!("{}\n\n{}\n", title, dialog.body)
}
