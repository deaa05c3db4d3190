use maud::{html, Markup};

use crate::catalog::{Course, Level, QuizQuestion};
use crate::names;
use crate::quiz::{QuizSession, Recommendation, Verdict};
use crate::views::components;

/// Level picker shown when no assessment is underway.
pub fn picker(courses: &[Course]) -> Markup {
    html! {
        h1 { "Placement assessment" }
        p {
            "Five questions per level, pass at " (names::PASS_THRESHOLD_PERCENT) "%. "
            "Pass a level and we point you one higher; fail it and that level's "
            "course is where to start."
        }
        div.course-grid {
            @for course in courses {
                article.course-card {
                    header {
                        (components::level_badge(course.level))
                        h3 { (course.title) }
                    }
                    p.muted { (course.target_audience) }
                    footer {
                        button hx-post=(names::quiz_open_url(course.level))
                               hx-target="main"
                               hx-swap="innerHTML" {
                            "Assess " (course.level.as_str())
                        }
                    }
                }
            }
        }
    }
}

pub fn intro(level: Level, total: usize) -> Markup {
    html! {
        div.terminal.quiz-terminal {
            p.prompt { span.kw { "BEGIN" } " assessment_" (level.as_str().to_lowercase()) ";" }
            p {
                (total) " questions on " (level.label()) "-level PostgreSQL. "
                "No time limit, one attempt per question."
            }
            button hx-post=(names::QUIZ_START_URL)
                   hx-target="main"
                   hx-swap="innerHTML" {
                "Start"
            }
        }
    }
}

pub fn question(session: &QuizSession, question: &QuizQuestion, index: usize) -> Markup {
    html! {
        div.terminal.quiz-terminal {
            (scrollback(session))
            p.prompt {
                span.muted { "[" (index + 1) "/" (session.total) "] " }
                (question.prompt)
            }
            form hx-post=(names::QUIZ_ANSWER_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                @for (i, option) in question.options.iter().enumerate() {
                    label {
                        input type="radio" name="option" value=(i) required="true";
                        (option)
                    }
                }
                button type="submit" { "Answer" }
            }
        }
    }
}

/// Earlier answers, replayed as terminal history above the current prompt.
fn scrollback(session: &QuizSession) -> Markup {
    html! {
        @for answer in &session.answers {
            p.scrollback-line {
                @if answer.was_correct {
                    span.ok { "ok " }
                } @else {
                    span.err { "ERR " }
                }
                span.muted { (answer.prompt) }
            }
        }
    }
}

pub struct ResultData<'a> {
    pub session: &'a QuizSession,
    pub verdict: Verdict,
    pub recommendation: Recommendation,
    /// The course the recommendation points at, when it exists in the
    /// catalog.
    pub course: Option<&'a Course>,
}

pub fn result(data: &ResultData) -> Markup {
    let verdict = data.verdict;
    html! {
        div.terminal.quiz-terminal {
            @for answer in &data.session.answers {
                p.scrollback-line {
                    @if answer.was_correct {
                        span.ok { "ok " }
                        (answer.prompt)
                    } @else {
                        span.err { "ERR " }
                        (answer.prompt)
                        br;
                        span.muted {
                            "    you said: " (answer.chosen)
                            " / correct: " (answer.correct_text)
                        }
                    }
                }
            }

            @if verdict.passed {
                p.verdict-pass {
                    "PASS: " (verdict.correct) "/" (verdict.total)
                    " (" (verdict.percentage) "%)"
                }
            } @else {
                p.verdict-fail {
                    "FAIL: " (verdict.correct) "/" (verdict.total)
                    " (" (verdict.percentage) "%, need " (names::PASS_THRESHOLD_PERCENT) "%)"
                }
            }

            (recommendation(data))

            p {
                button class="outline"
                       hx-post=(names::QUIZ_RETRY_URL)
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "Retry " (data.session.level.as_str())
                }
            }
        }
    }
}

fn recommendation(data: &ResultData) -> Markup {
    match data.recommendation {
        Recommendation::AdvanceTo(next) => html! {
            p {
                "You are past " (data.session.level.as_str()) ". Take the "
                (next.as_str()) " assessment to see how far you go."
            }
            button hx-post=(names::quiz_advance_url(next))
                   hx-target="main"
                   hx-swap="innerHTML" {
                "Assess " (next.as_str())
            }
        },
        Recommendation::EnrollTopTier(level) => html! {
            p {
                "You cleared the top tier. The " (level.label())
                " course will still stretch you; it goes far beyond the assessment."
            }
            (enroll_button(data.course, level))
        },
        Recommendation::EnrollCurrent(level) => html! {
            p {
                "The " (level.label()) " course is built exactly for where you "
                "are now."
            }
            (enroll_button(data.course, level))
        },
    }
}

fn enroll_button(course: Option<&Course>, level: Level) -> Markup {
    match course {
        Some(course) => html! {
            a role="button"
              href=(names::enroll_url(&course.id))
              hx-get=(names::enroll_url(&course.id))
              hx-target="main"
              hx-push-url="true" {
                "Enroll in " (course.title)
            }
        },
        None => html! {
            (crate::views::components::nav_link(
                names::COURSES_URL,
                html! { "Browse " (level.as_str()) " courses" },
            ))
        },
    }
}
