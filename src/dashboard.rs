//! The dashboard page for recording and reviewing transactions.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{endpoints, html::base};

/// Display the dashboard page.
///
/// The transaction form and table are populated client-side from the
/// transactions API by `static/js/dashboard.js`.
pub async fn get_dashboard_page() -> Response {
    let content = html! {
        h1 { "Dashboard" }

        section class="card" {
            h2 { "Add a transaction" }

            form id="transactionForm" {
                label for="date" { "Date" }
                input type="date" id="date" required;

                label for="description" { "Description" }
                input type="text" id="description" required;

                label for="category" { "Category" }
                input type="text" id="category" required;

                label for="amount" { "Amount" }
                input type="number" id="amount" step="0.01" required;

                label for="type" { "Type" }
                select id="type" {
                    option value="income" { "Income" }
                    option value="expense" { "Expense" }
                }

                button type="submit" { "Add" }
            }
        }

        section class="card" {
            h2 { "Transactions" }

            table id="transactionTable" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { "Category" }
                        th { "Amount" }
                        th { "Type" }
                        th {}
                    }
                }
                tbody {}
            }
        }
    };

    base(
        "Dashboard",
        endpoints::DASHBOARD_VIEW,
        &["/static/js/dashboard.js"],
        &content,
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, response::IntoResponse};
    use scraper::{Html, Selector};

    use crate::dashboard::get_dashboard_page;

    #[tokio::test]
    async fn dashboard_contains_form_and_table() {
        let response = get_dashboard_page().await.into_response();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document = Html::parse_document(&String::from_utf8_lossy(&body));

        let form_selector = Selector::parse("#transactionForm").unwrap();
        assert!(
            document.select(&form_selector).next().is_some(),
            "dashboard is missing the transaction form"
        );

        let table_selector = Selector::parse("#transactionTable").unwrap();
        assert!(
            document.select(&table_selector).next().is_some(),
            "dashboard is missing the transaction table"
        );
    }
}
