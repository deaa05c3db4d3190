use maud::{html, Markup};

use crate::catalog::Course;
use crate::enroll::{ContactDetails, EnrollmentRecord, SyncStatus, ValidationError};
use crate::names;
use crate::views::components;

fn course_summary(course: &Course) -> Markup {
    html! {
        article.enroll-summary {
            header {
                (components::level_badge(course.level))
                h2 { (course.title) }
            }
            p { (course.description) }
            p {
                strong { (components::price(course.price)) }
                span.muted { " · " (course.duration) }
            }
        }
    }
}

fn field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    error: Option<ValidationError>,
) -> Markup {
    html! {
        label {
            (label)
            @if let Some(err) = error {
                input name=(name)
                      type=(input_type)
                      value=(value)
                      required="true"
                      aria-invalid="true"
                      aria-label=(label);
                small { (err) }
            } @else {
                input name=(name)
                      type=(input_type)
                      value=(value)
                      required="true"
                      aria-label=(label);
            }
        }
    }
}

/// Step 1: contact details, with inline errors after a failed submit.
pub fn details_form(
    course: &Course,
    details: &ContactDetails,
    errors: &[ValidationError],
) -> Markup {
    let find = |wanted: &[ValidationError]| errors.iter().find(|e| wanted.contains(e)).copied();
    let name_err = find(&[ValidationError::NameRequired]);
    let email_err = find(&[ValidationError::EmailRequired, ValidationError::EmailInvalid]);
    let phone_err = find(&[ValidationError::PhoneInvalid]);

    html! {
        h1 { "Enroll" }
        (course_summary(course))
        article style="width: fit-content;" {
            form hx-post=(names::enroll_details_url(&course.id))
                 hx-target="main"
                 hx-swap="innerHTML" {
                (field("name", "Full name", "text", &details.name, name_err))
                (field("email", "Email", "email", &details.email, email_err))
                (field("phone", "Phone (10 digits)", "tel", &details.phone, phone_err))
                button type="submit" { "Continue" }
            }
        }
    }
}

/// Step 2: review before committing. The details ride along in hidden
/// fields; they were validated on the way in and will be validated again
/// on commit.
pub fn confirm(course: &Course, details: &ContactDetails) -> Markup {
    html! {
        h1 { "Confirm enrollment" }
        (course_summary(course))
        article style="width: fit-content;" {
            table {
                tr { th { "Name" }  td { (details.name) } }
                tr { th { "Email" } td { (details.email) } }
                tr { th { "Phone" } td { (details.phone) } }
                tr { th { "Amount" } td { (components::price(course.price)) } }
            }
            form hx-post=(names::enroll_commit_url(&course.id))
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name="name" value=(details.name);
                input type="hidden" name="email" value=(details.email);
                input type="hidden" name="phone" value=(details.phone);
                button type="submit" { "Confirm and enroll" }
            }
            p {
                a href=(names::enroll_url(&course.id))
                  hx-get=(names::enroll_url(&course.id))
                  hx-target="main" {
                    "Edit details"
                }
            }
        }
    }
}

/// Step 3: receipt. A pending sync is surfaced, not hidden; the reference
/// id is what the admin needs either way.
pub fn success(
    course: &Course,
    record: &EnrollmentRecord,
    status: SyncStatus,
    whatsapp: &str,
) -> Markup {
    html! {
        h1 { "You're in" }
        article.enroll-summary {
            p {
                "Enrollment recorded for "
                strong { (course.title) }
                "."
            }
            table {
                tr { th { "Reference" } td { code { (record.transaction_id) } } }
                tr { th { "Amount" }    td { (components::price(record.amount)) } }
                tr { th { "Status" }    td { (status.as_str()) } }
            }
            @if status == SyncStatus::Pending {
                p.muted {
                    "We could not reach our records system just now. Keep the "
                    "reference id; we will reconcile it manually."
                }
            }
            p {
                a role="button" href=(whatsapp) target="_blank" rel="noopener" {
                    "Message us on WhatsApp"
                }
            }
            p {
                (components::nav_link(
                    &names::syllabus_url(course.level),
                    html! { "See your syllabus" },
                ))
            }
        }
    }
}
