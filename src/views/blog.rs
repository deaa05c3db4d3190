use maud::{html, Markup, PreEscaped};

use crate::catalog::BlogPost;
use crate::names;
use crate::selector::{CategoryFilter, SortOrder};
use crate::views::components;

pub struct BlogListData<'a> {
    pub posts: Vec<&'a BlogPost>,
    pub categories: Vec<&'a str>,
    pub category: CategoryFilter,
    pub query: String,
    pub order: SortOrder,
}

fn list_url(category: &CategoryFilter, query: &str, order: SortOrder) -> String {
    format!(
        "{}?category={}&q={}&sort={}",
        names::BLOG_URL,
        urlencoding::encode(category.as_str()),
        urlencoding::encode(query),
        order.as_str()
    )
}

fn filter_bar(data: &BlogListData) -> Markup {
    let flipped = match data.order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    };
    html! {
        div.blog-filter {
            form hx-get=(names::BLOG_URL)
                 hx-target="main"
                 hx-push-url="true" {
                input type="search"
                      name="q"
                      value=(data.query)
                      placeholder="Search titles"
                      aria-label="Search titles";
                input type="hidden" name="category" value=(data.category.as_str());
                input type="hidden" name="sort" value=(data.order.as_str());
                button type="submit" class="outline" { "Search" }
            }

            p.prompt {
                span.kw { "WHERE" } " category = "
                @let all = CategoryFilter::All;
                a.level-toggle.active[data.category == all]
                  href=(list_url(&all, &data.query, data.order))
                  hx-get=(list_url(&all, &data.query, data.order))
                  hx-target="main"
                  hx-push-url="true" {
                    "ALL"
                }
                @for cat in &data.categories {
                    @let filter = CategoryFilter::Category(cat.to_string());
                    " | "
                    a.level-toggle.active[data.category == filter]
                      href=(list_url(&filter, &data.query, data.order))
                      hx-get=(list_url(&filter, &data.query, data.order))
                      hx-target="main"
                      hx-push-url="true" {
                        (cat)
                    }
                }
                br;
                span.kw { "ORDER BY" } " published "
                a.level-toggle
                  href=(list_url(&data.category, &data.query, flipped))
                  hx-get=(list_url(&data.category, &data.query, flipped))
                  hx-target="main"
                  hx-push-url="true" {
                    (data.order.as_str())
                }
            }
        }
    }
}

pub fn blog_list(data: &BlogListData) -> Markup {
    html! {
        h1 { "Blog" }
        (filter_bar(data))

        @if data.posts.is_empty() {
            article.empty-result {
                p.muted { "(0 rows)" }
            }
        } @else {
            table.blog-table {
                thead {
                    tr {
                        th { "published" }
                        th { "title" }
                        th { "category" }
                        th { "level" }
                    }
                }
                tbody {
                    @for post in &data.posts {
                        tr.blog-row {
                            td.muted { (post.published.format("%Y-%m-%d")) }
                            td {
                                (components::nav_link(
                                    &names::blog_post_url(post.id),
                                    html! { (post.title) },
                                ))
                            }
                            td { (post.category) }
                            td { (components::level_badge(post.level)) }
                        }
                    }
                }
            }
            p.muted { "(" (data.posts.len()) " rows)" }
        }
    }
}

pub fn blog_post(post: &BlogPost, content: &str) -> Markup {
    html! {
        article.blog-post {
            header {
                (components::level_badge(post.level))
                h1 { (post.title) }
                p.muted {
                    (post.author) " · " (post.published.format("%B %-d, %Y"))
                    " · " (post.read_time)
                }
                p {
                    @for tag in &post.tags {
                        span.badge { (tag) } " "
                    }
                }
            }

            // Post bodies are generated server-side from the catalog, never
            // from user input.
            (PreEscaped(content.to_string()))

            footer {
                (components::nav_link(names::BLOG_URL, html! { "Back to all posts" }))
            }
        }
    }
}
