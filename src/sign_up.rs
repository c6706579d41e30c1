//! The sign-up page and its form handler.

use axum::response::{IntoResponse, Redirect, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the sign-up page.
pub async fn get_sign_up_page() -> Response {
    let content = html! {
        h1 { "Create an account" }

        form method="post" action=(endpoints::SIGN_UP_VIEW) {
            label for="email" { "Email" }
            input type="email" name="email" id="email" required;

            label for="password" { "Password" }
            input type="password" name="password" id="password" required;

            label for="confirm_password" { "Confirm password" }
            input type="password" name="confirm_password" id="confirm_password" required;

            button type="submit" { "Sign up" }
        }

        p {
            "Already have an account? "
            a href=(endpoints::LOG_IN_VIEW) { "Log in here" }
        }
    };

    base("Sign Up", endpoints::SIGN_UP_VIEW, &[], &content).into_response()
}

/// Handle a sign-up form submission by sending the user to the log-in page.
///
/// Nothing is stored: no account is created and no credentials are checked.
pub async fn post_sign_up() -> Redirect {
    Redirect::to(endpoints::LOG_IN_VIEW)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, sign_up::post_sign_up};

    #[tokio::test]
    async fn sign_up_redirects_to_log_in() {
        let response = post_sign_up().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::LOG_IN_VIEW);
    }
}
