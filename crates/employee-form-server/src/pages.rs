// File: src/pages.rs
// Purpose: Maud markup for the employee form page

use employee_form::{Dialog, ErrorMap, FieldKind, FieldValues};
use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 32rem; margin: 2rem auto; }
.field { display: flex; flex-direction: column; margin-bottom: 0.75rem; }
.field.error input { border-color: #b00020; }
.field small { color: #b00020; }
.actions { display: flex; justify-content: flex-end; gap: 1rem; }
dialog pre { white-space: pre-wrap; font-family: inherit; }
";

/// Full form page; flagged fields show their message and `dialog` opens on top
pub fn form_page(values: &FieldValues, errors: &ErrorMap, dialog: Option<&Dialog>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Employee Details" }
                style { (STYLE) }
            }
            body {
                h1 { "Employee Details" }
                form method="post" action="/submit" novalidate {
                    @for field in FieldKind::ALL {
                        (field_input(field, values.get(field), errors))
                    }
                    div class="actions" {
                        button type="submit" formaction="/reset" { "Reset" }
                        button type="submit" { "Submit" }
                    }
                }
                @if let Some(dialog) = dialog {
                    (summary_dialog(dialog))
                }
            }
        }
    }
}

fn field_input(field: FieldKind, value: &str, errors: &ErrorMap) -> Markup {
    let message = errors.message_for(field);
    let input_type = match field {
        FieldKind::Email => "email",
        FieldKind::EmployeeId => "tel",
        FieldKind::FirstName | FieldKind::LastName => "text",
    };

    html! {
        div.field.error[message.is_some()] {
            label for=(field.key()) { (field.label()) }
            input
                type=(input_type)
                id=(field.key())
                name=(field.key())
                value=(value)
                aria-invalid=[message.map(|_| "true")];
            @if let Some(message) = message {
                small { (message) }
            }
        }
    }
}

fn summary_dialog(dialog: &Dialog) -> Markup {
    html! {
        dialog open {
            h2 { (dialog.title) }
            pre { (dialog.body) }
            form method="dialog" {
                button { "Ok" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_form::SubmissionResult;

    #[test]
    fn test_blank_page_has_all_inputs_and_no_dialog() {
        let page = form_page(&FieldValues::default(), &ErrorMap::new(), None).into_string();
        for field in FieldKind::ALL {
            assert!(page.contains(&format!(r#"name="{}""#, field.key())));
        }
        assert!(!page.contains("<dialog"));
        assert!(!page.contains("<small>"));
    }

    #[test]
    fn test_flagged_field_shows_message() {
        let values = FieldValues::new("John", "Doe", "42", "john@doe.com");
        let errors = values.errors();
        let page = form_page(&values, &errors, None).into_string();

        assert!(page.contains("must be 7 digits starting with 0"));
        assert!(page.contains(r#"class="field error""#));
        assert!(page.contains(r#"value="42""#));
    }

    #[test]
    fn test_values_are_escaped() {
        let values = FieldValues::new("<script>", "", "", "");
        let page = form_page(&values, &values.errors(), None).into_string();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_dialog_is_rendered() {
        let values = FieldValues::new("John", "Doe", "0123456", "john@doe.com");
        let dialog = Dialog::new(&SubmissionResult::evaluate(&values));
        let page = form_page(&values, &ErrorMap::new(), Some(&dialog)).into_string();
        assert!(page.contains("<dialog open>"));
        assert!(page.contains("Submitted"));
    }
}
