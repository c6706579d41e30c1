//! The support page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the support page.
pub async fn get_support_page() -> Response {
    let content = html! {
        h1 { "Support" }
        p {
            "Having trouble with Fintrack? Check the answers below, or email "
            a href="mailto:support@fintrack.example" { "support@fintrack.example" }
            " and we will get back to you."
        }

        section {
            h2 { "How do I record a transaction?" }
            p {
                "Open the "
                a href=(endpoints::DASHBOARD_VIEW) { "dashboard" }
                " and fill in the form at the top of the page. The date, \
                description, category, and amount fields are all required."
            }
        }

        section {
            h2 { "Can I edit a transaction?" }
            p {
                "Not yet. Delete the transaction from the dashboard table and \
                record it again with the corrected details."
            }
        }
    };

    base("Support", endpoints::SUPPORT_VIEW, &[], &content).into_response()
}
