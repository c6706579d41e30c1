//! The log-in page and its form handler.

use axum::response::{IntoResponse, Redirect, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the log-in page.
pub async fn get_log_in_page() -> Response {
    let content = html! {
        h1 { "Log in to your account" }

        form method="post" action=(endpoints::LOG_IN_VIEW) {
            label for="email" { "Email" }
            input type="email" name="email" id="email" required;

            label for="password" { "Password" }
            input type="password" name="password" id="password" required;

            button type="submit" { "Log in" }
        }

        p {
            a href=(endpoints::FORGOT_PASSWORD_VIEW) { "Forgot your password?" }
        }
        p {
            "Don't have an account? "
            a href=(endpoints::SIGN_UP_VIEW) { "Sign up here" }
        }
    };

    base("Log In", endpoints::LOG_IN_VIEW, &[], &content).into_response()
}

/// Handle a log-in form submission by sending the user to the dashboard.
///
/// There are no accounts to check the submission against: the form is
/// accepted as-is and nothing is stored.
pub async fn post_log_in() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
