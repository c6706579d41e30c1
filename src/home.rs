//! The landing page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the landing page.
pub async fn get_home_page() -> Response {
    let content = html! {
        section class="hero" {
            h1 { "Take charge of your money" }
            p {
                "Record income and expenses, file them under categories, and \
                see where your money goes."
            }
            p {
                a class="button" href=(endpoints::SIGN_UP_VIEW) { "Get started" }
                " or "
                a href=(endpoints::LOG_IN_VIEW) { "log in" }
                " if you already have an account."
            }
        }
    };

    base("Home", endpoints::ROOT, &[], &content).into_response()
}
