use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    catalog::Level,
    extractors::{IsHtmx, QuizToken},
    names,
    quiz::{Phase, QuizSession},
    rejections::{AppError, OptionExt, ResultExt},
    utils, views,
    views::quiz::ResultData,
    AppState,
};

fn respond(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        views::titled(title, body)
    } else {
        views::page(title, body)
    }
}

/// Renders whatever phase the session is in. The single entry point for
/// every state transition handler, so a refresh always lands on the same
/// screen the last action produced.
fn render_session(state: &AppState, session: &QuizSession) -> Markup {
    let questions = state.catalog.questions(session.level);
    match session.phase {
        Phase::Intro => views::quiz::intro(session.level, questions.len()),
        Phase::Question { index } => match session.current_question(questions) {
            Some(question) => views::quiz::question(session, question, index),
            None => render_result(state, session),
        },
        Phase::Result => render_result(state, session),
    }
}

fn render_result(state: &AppState, session: &QuizSession) -> Markup {
    let recommendation = session.recommendation();
    let target = match recommendation {
        crate::quiz::Recommendation::AdvanceTo(level) => level,
        crate::quiz::Recommendation::EnrollTopTier(level) => level,
        crate::quiz::Recommendation::EnrollCurrent(level) => level,
    };
    views::quiz::result(&ResultData {
        session,
        verdict: session.verdict(),
        recommendation,
        course: state.catalog.course(target),
    })
}

pub(crate) async fn quiz_home(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Markup {
    let session = token.and_then(|t| state.quizzes.get(&t));
    let body = match &session {
        Some(session) => render_session(&state, session),
        None => views::quiz::picker(&state.catalog.courses),
    };
    respond(is_htmx, "Assessment", body)
}

pub(crate) async fn open(
    State(state): State<AppState>,
    QuizToken(previous): QuizToken,
    Path(level): Path<String>,
) -> Result<Response, AppError> {
    let level = Level::parse(&level).or_not_found()?;
    // The cookie is about to be replaced; its old entry must not linger.
    if let Some(previous) = previous {
        state.quizzes.remove(&previous);
    }
    let token = state.quizzes.open(level);
    tracing::info!(%level, sessions = state.quizzes.len(), "opened assessment session");

    let body = views::titled(
        "Assessment",
        views::quiz::intro(level, state.catalog.questions(level).len()),
    );
    let cookie = utils::cookie(names::QUIZ_SESSION_COOKIE_NAME, &token, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        cookie.parse().reject("could not encode session cookie")?,
    );
    Ok((headers, body).into_response())
}

fn active_session(state: &AppState, token: Option<String>) -> Result<(String, QuizSession), AppError> {
    let token = token.ok_or(AppError::Input("no assessment in progress"))?;
    let session = state
        .quizzes
        .get(&token)
        .ok_or(AppError::Input("assessment session expired"))?;
    Ok((token, session))
}

pub(crate) async fn start(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<Markup, AppError> {
    let (token, session) = active_session(&state, token)?;
    let total = state.catalog.questions(session.level).len();
    let session = state
        .quizzes
        .update(&token, |s| s.start(total))
        .ok_or(AppError::Input("assessment session expired"))?;
    Ok(views::titled("Assessment", render_session(&state, &session)))
}

#[derive(Deserialize)]
pub(crate) struct AnswerForm {
    option: usize,
}

pub(crate) async fn answer(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Form(form): Form<AnswerForm>,
) -> Result<Markup, AppError> {
    let (token, session) = active_session(&state, token)?;
    let questions = state.catalog.questions(session.level).to_vec();
    let session = state
        .quizzes
        .update(&token, |s| s.submit_answer(&questions, form.option))
        .ok_or(AppError::Input("assessment session expired"))?;
    Ok(views::titled("Assessment", render_session(&state, &session)))
}

pub(crate) async fn retry(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<Markup, AppError> {
    let (token, session) = active_session(&state, token)?;
    let level = session.level;
    let session = state
        .quizzes
        .update(&token, |s| s.reset(level))
        .ok_or(AppError::Input("assessment session expired"))?;
    Ok(views::titled("Assessment", render_session(&state, &session)))
}

pub(crate) async fn advance(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Path(level): Path<String>,
) -> Result<Markup, AppError> {
    let level = Level::parse(&level).or_not_found()?;
    let (token, _) = active_session(&state, token)?;
    let session = state
        .quizzes
        .update(&token, |s| s.reset(level))
        .ok_or(AppError::Input("assessment session expired"))?;
    tracing::info!(%level, "advanced to next assessment");
    Ok(views::titled("Assessment", render_session(&state, &session)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_home))
        .route("/quiz/open/{level}", post(open))
        .route(names::QUIZ_START_URL, post(start))
        .route(names::QUIZ_ANSWER_URL, post(answer))
        .route(names::QUIZ_RETRY_URL, post(retry))
        .route("/quiz/advance/{level}", post(advance))
}
