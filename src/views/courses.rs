use maud::{html, Markup};

use crate::catalog::{Course, Level};
use crate::names;
use crate::selector::{LevelFilter, SortOrder};
use crate::views::components;

pub struct CourseListData<'a> {
    pub courses: Vec<&'a Course>,
    pub filter: LevelFilter,
    pub order: SortOrder,
}

fn facet_url(filter: &LevelFilter, order: SortOrder, toggle: Option<Level>) -> String {
    let mut url = format!(
        "{}?levels={}&sort={}",
        names::COURSES_URL,
        filter.to_query(),
        order.as_str()
    );
    if let Some(level) = toggle {
        url.push_str("&toggle=");
        url.push_str(level.as_str());
    }
    url
}

/// The filter widget, rendered as the query it stands for. Each level chip
/// toggles itself; the order chip flips the sort.
fn facet_widget(filter: &LevelFilter, order: SortOrder) -> Markup {
    let flipped = match order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    };
    html! {
        div.terminal.facet-widget {
            p.prompt {
                span.kw { "SELECT" } " * " span.kw { "FROM" } " courses"
                br;
                span.kw { "WHERE" } " level " span.kw { "IN" } " ("
                @if filter.is_all() {
                    a.level-toggle.active
                      href=(facet_url(filter, order, None))
                      hx-get=(facet_url(filter, order, None))
                      hx-target="main"
                      hx-push-url="true" {
                        "ALL"
                    }
                } @else {
                    a.level-toggle
                      href=(format!("{}?levels=ALL&sort={}", names::COURSES_URL, order.as_str()))
                      hx-get=(format!("{}?levels=ALL&sort={}", names::COURSES_URL, order.as_str()))
                      hx-target="main"
                      hx-push-url="true" {
                        "ALL"
                    }
                }
                @for level in Level::ALL {
                    ", "
                    a.level-toggle.active[filter.contains(level)]
                      href=(facet_url(filter, order, Some(level)))
                      hx-get=(facet_url(filter, order, Some(level)))
                      hx-target="main"
                      hx-push-url="true" {
                        (level.as_str())
                    }
                }
                ")"
                br;
                span.kw { "ORDER BY" } " price "
                a.level-toggle
                  href=(facet_url(filter, flipped, None))
                  hx-get=(facet_url(filter, flipped, None))
                  hx-target="main"
                  hx-push-url="true" {
                    (order.as_str())
                }
                ";"
            }
        }
    }
}

fn course_card(course: &Course) -> Markup {
    html! {
        article.course-card {
            header {
                (components::level_badge(course.level))
                h3 { (course.title) }
            }
            p { (course.description) }
            p.muted { "For: " (course.target_audience) }
            ul.course-skills {
                @for skill in &course.skills {
                    li { (skill) }
                }
            }
            footer {
                span.course-price { (components::price(course.price)) }
                span.muted { " · " (course.duration) }
                a role="button"
                  href=(names::enroll_url(&course.id))
                  hx-get=(names::enroll_url(&course.id))
                  hx-target="main"
                  hx-push-url="true" {
                    "Enroll"
                }
            }
        }
    }
}

pub fn course_list(data: &CourseListData) -> Markup {
    html! {
        h1 { "Courses" }
        (facet_widget(&data.filter, data.order))

        @if data.courses.is_empty() {
            article.empty-result {
                p.muted { "(0 rows)" }
                p {
                    a href=(format!("{}?levels=ALL&sort=ASC", names::COURSES_URL))
                      hx-get=(format!("{}?levels=ALL&sort=ASC", names::COURSES_URL))
                      hx-target="main"
                      hx-push-url="true" {
                        "Reset filters"
                    }
                }
            }
        } @else {
            div.course-grid {
                @for course in &data.courses {
                    (course_card(course))
                }
            }
            p.muted { "(" (data.courses.len()) " rows)" }
        }
    }
}
