use axum::{
    extract::{Path, State},
    routing::{get, post},
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    catalog::Course,
    enroll::{self, ContactDetails, EnrollmentRecord},
    extractors::IsHtmx,
    rejections::{AppError, OptionExt},
    views, AppState,
};

fn respond(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        views::titled(title, body)
    } else {
        views::page(title, body)
    }
}

fn course<'a>(state: &'a AppState, id: &str) -> Result<&'a Course, AppError> {
    state.catalog.course_by_id(id).or_not_found()
}

pub(crate) async fn details(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Markup, AppError> {
    let course = course(&state, &course_id)?;
    Ok(respond(
        is_htmx,
        "Enroll",
        views::enroll::details_form(course, &ContactDetails::default(), &[]),
    ))
}

#[derive(Deserialize)]
pub(crate) struct ContactForm {
    name: String,
    email: String,
    phone: String,
}

impl From<ContactForm> for ContactDetails {
    fn from(form: ContactForm) -> ContactDetails {
        ContactDetails {
            name: form.name,
            email: form.email,
            phone: form.phone,
        }
    }
}

pub(crate) async fn submit_details(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Markup, AppError> {
    let course = course(&state, &course_id)?;
    let details = ContactDetails::from(form);

    let body = match details.validate() {
        Ok(details) => views::enroll::confirm(course, &details),
        Err(errors) => {
            tracing::debug!(?errors, "enrollment details rejected");
            views::enroll::details_form(course, &details, &errors)
        }
    };
    Ok(views::titled("Enroll", body))
}

pub(crate) async fn commit(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Markup, AppError> {
    let course = course(&state, &course_id)?;

    // Hidden fields can be tampered with, so the commit re-validates.
    let submitted = ContactDetails::from(form);
    let details = match submitted.validate() {
        Ok(details) => details,
        Err(errors) => {
            return Ok(views::titled(
                "Enroll",
                views::enroll::details_form(course, &submitted, &errors),
            ));
        }
    };

    let record = EnrollmentRecord::new(&details, course);
    let status = state.sink.submit(&record).await;
    tracing::info!(
        transaction_id = %record.transaction_id,
        course = %course.id,
        status = status.as_str(),
        "enrollment committed"
    );

    let whatsapp = enroll::whatsapp_link(&state.whatsapp_admin, &record);
    Ok(views::titled(
        "Enrolled",
        views::enroll::success(course, &record, status, &whatsapp),
    ))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/enroll/{course_id}", get(details))
        .route("/enroll/{course_id}/details", post(submit_details))
        .route("/enroll/{course_id}/commit", post(commit))
}
