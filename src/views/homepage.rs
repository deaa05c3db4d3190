use maud::{html, Markup};

use crate::catalog::{FaqItem, Level, Testimonial};
use crate::names;
use crate::views::components;

pub fn landing_page(testimonials: &[Testimonial], faqs: &[FaqItem]) -> Markup {
    html! {
        // Hero section
        section.landing-hero {
            div.terminal {
                p.prompt {
                    span.kw { "SELECT" } " career " span.kw { "FROM" } " postgresql_mastery;"
                }
            }
            h1 { "Master PostgreSQL, from first query to production fleet" }
            p.landing-hero-desc {
                "Four structured levels of instructor-led training. Take the "
                "placement assessment, find your level, and start where it counts."
            }
            div.landing-cta {
                a role="button"
                  href=(names::QUIZ_URL)
                  hx-get=(names::QUIZ_URL)
                  hx-target="main"
                  hx-push-url="true" {
                    "Find my level"
                }
                a role="button" class="outline"
                  href=(names::COURSES_URL)
                  hx-get=(names::COURSES_URL)
                  hx-target="main"
                  hx-push-url="true" {
                    "Browse courses"
                }
            }
        }

        // Features section
        section.landing-features {
            h2 { "Why train here" }
            div.landing-features-grid {
                article.landing-feature-card {
                    h3 { "Level-matched" }
                    p { "A five-question assessment per level tells you exactly where to start." }
                }
                article.landing-feature-card {
                    h3 { "Production-first" }
                    p { "Replication, tuning, and incident drills on real clusters, not toy schemas." }
                }
                article.landing-feature-card {
                    h3 { "Cumulative syllabus" }
                    p { "Every level includes everything below it. No gaps between courses." }
                }
                article.landing-feature-card {
                    h3 { "Direct line" }
                    p { "Enrollment opens a WhatsApp thread with the instructor, not a ticket queue." }
                }
            }
        }

        // Testimonials
        section.testimonial-wall {
            h2 { "What students say" }
            div.landing-features-grid {
                @for t in testimonials {
                    article.testimonial-card {
                        p { "\u{201c}" (t.content) "\u{201d}" }
                        footer {
                            strong { (t.name) }
                            br;
                            small { (t.role) ", " (t.company) }
                        }
                    }
                }
            }
        }

        // FAQ
        section.landing-faq {
            h2 { "Frequently asked questions" }
            @for faq in faqs {
                details {
                    summary { (faq.question) }
                    p { (faq.answer) }
                }
            }
        }

        // Instructor
        section.landing-instructor {
            h2 { "Your instructor" }
            p {
                strong { "Karthik Katrotiya" }
                " has run PostgreSQL in production for over a decade, from "
                "single-node startups to multi-region fleets, and has taught "
                "hundreds of engineers to do the same."
            }
        }

        footer.landing-footer {
            p {
                "Start with the "
                (components::nav_link(names::QUIZ_URL, html! { "placement assessment" }))
                " or jump straight to the "
                (components::nav_link(&names::syllabus_url(Level::L1), html! { "syllabus" }))
                "."
            }
        }
    }
}
