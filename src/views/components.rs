use maud::{html, Markup};

use crate::catalog::Level;

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

/// Colored level tag, `L1` through `L4`.
pub fn level_badge(level: Level) -> Markup {
    let class = format!("badge badge-{}", level.as_str().to_lowercase());
    html! {
        span class=(class) { (level.as_str()) " " (level.label()) }
    }
}

/// Price in rupees, formatted the Indian way for the amounts in play
/// (12,000 up to 30,000).
pub fn price(amount: u32) -> String {
    if amount >= 1000 {
        format!("\u{20b9}{},{:03}", amount / 1000, amount % 1000)
    } else {
        format!("\u{20b9}{amount}")
    }
}
