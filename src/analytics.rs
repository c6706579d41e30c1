//! The analytics page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the analytics page.
///
/// The summaries are computed client-side from the transactions API by
/// `static/js/analytics.js`.
pub async fn get_analytics_page() -> Response {
    let content = html! {
        h1 { "Analytics" }

        section class="card" {
            h2 { "Overview" }

            dl class="totals" {
                dt { "Income" }
                dd id="totalIncome" { "–" }

                dt { "Expenses" }
                dd id="totalExpenses" { "–" }

                dt { "Balance" }
                dd id="balance" { "–" }
            }
        }

        section class="card" {
            h2 { "Spending by category" }

            table id="categoryTable" {
                thead {
                    tr {
                        th { "Category" }
                        th { "Amount" }
                    }
                }
                tbody {}
            }
        }
    };

    base(
        "Analytics",
        endpoints::ANALYTICS_VIEW,
        &["/static/js/analytics.js"],
        &content,
    )
    .into_response()
}
