//! The shared maud templates used across the app's pages.

use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

/// The navigation bar shown at the top of every page.
fn nav_bar(active_endpoint: &str) -> Markup {
    let links = [
        (endpoints::DASHBOARD_VIEW, "Dashboard"),
        (endpoints::ANALYTICS_VIEW, "Analytics"),
        (endpoints::SUPPORT_VIEW, "Support"),
        (endpoints::LOG_IN_VIEW, "Log in"),
    ];

    html! {
        nav class="nav-bar" {
            a class="brand" href=(endpoints::ROOT) { "Fintrack" }

            @for (url, title) in links {
                a.active[url == active_endpoint] href=(url) { (title) }
            }
        }
    }
}

/// Wrap `content` in the shared page chrome: doctype, head, and navigation
/// bar.
///
/// `scripts` is a list of URLs of JavaScript files to load with the page.
pub fn base(title: &str, active_endpoint: &str, scripts: &[&str], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Fintrack" }
                link href="/static/main.css" rel="stylesheet";

                @for script in scripts
                {
                    script src=(script) defer {}
                }
            }
            body
            {
                (nav_bar(active_endpoint))

                main class="page" { (content) }
            }
        }
    }
}
