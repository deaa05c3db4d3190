use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::{AppError, OptionExt},
    selector::{self, CategoryFilter, SortOrder},
    views,
    views::blog::BlogListData,
    AppState,
};

fn respond(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        views::titled(title, body)
    } else {
        views::page(title, body)
    }
}

#[derive(Deserialize)]
pub(crate) struct BlogQuery {
    category: Option<String>,
    q: Option<String>,
    sort: Option<String>,
}

pub(crate) async fn blog_list(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Markup {
    let category = query
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or(CategoryFilter::All);
    let q = query.q.unwrap_or_default();
    let order = query
        .sort
        .as_deref()
        .and_then(SortOrder::parse)
        .unwrap_or(SortOrder::Desc);

    let data = BlogListData {
        posts: selector::filter_posts(&state.catalog.posts, &category, &q, order),
        categories: selector::categories(&state.catalog.posts),
        category,
        query: q,
        order,
    };
    respond(is_htmx, "Blog", views::blog::blog_list(&data))
}

pub(crate) async fn blog_post(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Markup, AppError> {
    let post = state.catalog.post(id).or_not_found()?;
    Ok(respond(
        is_htmx,
        &post.title,
        views::blog::blog_post(post, &post.content),
    ))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::BLOG_URL, get(blog_list))
        .route("/blog/{id}", get(blog_post))
}
