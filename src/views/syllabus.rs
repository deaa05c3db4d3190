use maud::{html, Markup};

use crate::catalog::{Course, Level, SyllabusTopic};
use crate::names;
use crate::views::components;

pub struct SyllabusData<'a> {
    pub level: Level,
    pub course: Option<&'a Course>,
    pub topics: Vec<&'a SyllabusTopic>,
}

fn level_tabs(active: Level) -> Markup {
    html! {
        nav.level-tabs {
            ul {
                @for level in Level::ALL {
                    li {
                        @if level == active {
                            a.active href=(names::syllabus_url(level)) aria-current="page" {
                                (level.as_str()) " " (level.label())
                            }
                        } @else {
                            a href=(names::syllabus_url(level))
                              hx-get=(names::syllabus_url(level))
                              hx-target="main"
                              hx-push-url="true" {
                                (level.as_str()) " " (level.label())
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn syllabus(data: &SyllabusData) -> Markup {
    html! {
        h1 { "Syllabus" }
        p.muted {
            "Each level covers everything below it. Pick a level to see the "
            "full ground it stands on."
        }
        (level_tabs(data.level))

        @if let Some(course) = data.course {
            article.book-page {
                header {
                    (components::level_badge(course.level))
                    h2 { (course.title) }
                    p.muted { (course.duration) " · " (components::price(course.price)) }
                }

                ol.syllabus-topics {
                    @for topic in &data.topics {
                        li {
                            strong { (topic.title) }
                            span.muted.topic-tier { " [" (topic.tier.as_str()) "]" }
                            p { (topic.description) }
                        }
                    }
                }

                footer {
                    p.muted { (data.topics.len()) " topics" }
                    a role="button"
                      href=(names::enroll_url(&course.id))
                      hx-get=(names::enroll_url(&course.id))
                      hx-target="main"
                      hx-push-url="true" {
                        "Enroll in " (course.level.as_str())
                    }
                }
            }
        }
    }
}
