//! The 404 page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{endpoints, html::base};

/// A fallback route handler that renders the 404 page.
pub async fn get_404_not_found() -> Response {
    let content = html! {
        h1 { "Page not found" }
        p {
            "The page you were looking for does not exist. "
            a href=(endpoints::ROOT) { "Return home" }
        }
    };

    (StatusCode::NOT_FOUND, base("Not Found", "", &[], &content)).into_response()
}
