use anyhow::{Context, Result};
use colored::Colorize;
use employee_form::{Config, FieldKind, FieldState, FormController};
use std::io::{self, BufRead, Write};
use tracing::debug;

use super::render_dialog;

const HELP: &str = "\
Commands:
  set <field> <value>   edit a field (first_name, last_name, employee_id, email)
  show                  list fields and their flags
  submit                validate and show the summary
  reset                 clear every field and flag
  help                  show this message
  quit                  leave the shell
";

pub fn execute(config: &Config) -> Result<()> {
    let mut form = FormController::with_dialog_config(config.dialog.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut form, stdin.lock(), stdout.lock())
}

/// Drive `form` with one command per input line until EOF or `quit`
pub fn run<R: BufRead, W: Write>(form: &mut FormController, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", "Employee form. Type `help` for commands.".bold())?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let trimmed = line.trim_start();
        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed.trim_end(), ""));
        debug!(command, "shell command");

        match command {
            "" => {}
            "set" => match parse_set(rest) {
                Ok((field, value)) => {
                    form.set_field(field, value);
                }
                Err(message) => writeln!(out, "{} {}", "error:".red(), message)?,
            },
            "show" => show(form, &mut out)?,
            "submit" => {
                let result = form.submit();
                if let Some(dialog) = form.dialog() {
                    write!(out, "{}", render_dialog(&result, &dialog))?;
                }
                form.dismiss_dialog();
            }
            "reset" => {
                form.reset();
                writeln!(out, "Form cleared")?;
            }
            "help" => write!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(
                out,
                "{} unknown command `{}` (try `help`)",
                "error:".red(),
                other
            )?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Split `<field> <value>`; everything after the first space is the value
fn parse_set(rest: &str) -> Result<(FieldKind, String), String> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err("usage: set <field> <value>".to_string());
    }

    let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
    let field = name.parse::<FieldKind>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

fn show<W: Write>(form: &FormController, out: &mut W) -> Result<()> {
    for field in FieldKind::ALL {
        let value = form.field(field);
        match form.field_state(field) {
            FieldState::Untouched => writeln!(out, "  {:<12} {:?}", field.label(), value)?,
            FieldState::Flagged(error) => writeln!(
                out,
                "{} {:<12} {:?}  {}",
                "!".red().bold(),
                field.label(),
                value,
                error.message().red()
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_script(script: &str) -> (FormController, String) {
        let mut form = FormController::new();
        let mut out = Vec::new();
        run(&mut form, script.as_bytes(), &mut out).unwrap();
        (form, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_set_keeps_spaces_in_value() {
        let (form, _) = run_script("set first_name Mary Jane\n");
        assert_eq!(form.field(FieldKind::FirstName), "Mary Jane");
    }

    #[test]
    fn test_set_without_value_clears_field() {
        let (form, _) = run_script("set email a@b.com\nset email\n");
        assert_eq!(form.field(FieldKind::Email), "");
    }

    #[test]
    fn test_submit_prints_summary() {
        let script = "\
set first_name John
set last_name Doe
set employee_id 0123456
set email john@doe.com
submit
";
        let (form, output) = run_script(script);
        assert!(form.last_result().unwrap().is_accepted());
        assert!(output.contains("Submitted"));
        assert!(output.contains("Email: john@doe.com"));
        assert!(!form.is_dialog_open());
    }

    #[test]
    fn test_submit_empty_form_lists_errors() {
        let (form, output) = run_script("submit\n");
        assert_eq!(form.errors().len(), 4);
        assert!(output.contains("Oops!"));
        assert!(output.contains("Employee ID: must be 7 digits starting with 0"));
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let (form, output) = run_script("set phone 555\n");
        assert!(output.contains("unknown field `phone`"));
        assert_eq!(form.values(), &employee_form::FieldValues::default());
    }

    #[test]
    fn test_quit_stops_processing() {
        let (form, _) = run_script("quit\nset email a@b.com\n");
        assert_eq!(form.field(FieldKind::Email), "");
    }

    #[test]
    fn test_reset_and_show() {
        let (form, output) = run_script("set last_name Doe\nsubmit\nreset\nshow\n");
        assert!(form.errors().is_empty());
        assert!(output.contains("Form cleared"));
        assert!(output.contains("Last Name"));
    }
}
