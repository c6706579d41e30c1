//! The forgot-password page and its form handler.

use axum::response::{IntoResponse, Redirect, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the forgot-password page.
pub async fn get_forgot_password_page() -> Response {
    let content = html! {
        h1 { "Reset your password" }
        p {
            "Enter the email address you signed up with and we will send you \
            a link to reset your password."
        }

        form method="post" action=(endpoints::FORGOT_PASSWORD_VIEW) {
            label for="email" { "Email" }
            input type="email" name="email" id="email" required;

            button type="submit" { "Send reset link" }
        }

        p {
            a href=(endpoints::LOG_IN_VIEW) { "Back to log in" }
        }
    };

    base(
        "Forgot Password",
        endpoints::FORGOT_PASSWORD_VIEW,
        &[],
        &content,
    )
    .into_response()
}

/// Handle a forgot-password form submission by sending the user back to the
/// log-in page.
///
/// No email is sent and nothing is stored.
pub async fn post_forgot_password() -> Redirect {
    Redirect::to(endpoints::LOG_IN_VIEW)
}
