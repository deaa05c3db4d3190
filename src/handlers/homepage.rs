use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    catalog::Level,
    extractors::IsHtmx,
    names,
    rejections::{AppError, OptionExt},
    selector::{self, LevelFilter, SortOrder},
    views,
    views::courses::CourseListData,
    views::syllabus::SyllabusData,
    AppState,
};

fn respond(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        views::titled(title, body)
    } else {
        views::page(title, body)
    }
}

pub(crate) async fn homepage(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    respond(
        is_htmx,
        "Home",
        views::homepage::landing_page(&state.catalog.testimonials, &state.catalog.faqs),
    )
}

#[derive(Deserialize)]
pub(crate) struct CourseQuery {
    levels: Option<String>,
    sort: Option<String>,
    toggle: Option<String>,
}

pub(crate) async fn courses(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Markup {
    let mut filter = query
        .levels
        .as_deref()
        .map(LevelFilter::parse)
        .unwrap_or(LevelFilter::All);
    if let Some(level) = query.toggle.as_deref().and_then(Level::parse) {
        filter = filter.toggled(level);
    }
    let order = query
        .sort
        .as_deref()
        .and_then(SortOrder::parse)
        .unwrap_or(SortOrder::Asc);

    let data = CourseListData {
        courses: selector::filter_courses(&state.catalog.courses, &filter, order),
        filter,
        order,
    };
    respond(is_htmx, "Courses", views::courses::course_list(&data))
}

pub(crate) async fn syllabus_default(
    is_htmx: IsHtmx,
    state: State<AppState>,
) -> Result<Markup, AppError> {
    syllabus(is_htmx, state, Path(Level::L1.as_str().to_string())).await
}

pub(crate) async fn syllabus(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Result<Markup, AppError> {
    let level = Level::parse(&level).or_not_found()?;
    let data = SyllabusData {
        level,
        course: state.catalog.course(level),
        topics: selector::syllabus_for_level(&state.catalog.syllabus, level),
    };
    Ok(respond(is_htmx, "Syllabus", views::syllabus::syllabus(&data)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route(names::COURSES_URL, get(courses))
        .route(names::SYLLABUS_URL, get(syllabus_default))
        .route("/syllabus/{level}", get(syllabus))
}
