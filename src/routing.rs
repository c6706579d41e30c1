//! Application router configuration for the page and API routes.

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::get_analytics_page,
    dashboard::get_dashboard_page,
    endpoints,
    forgot_password::{get_forgot_password_page, post_forgot_password},
    home::get_home_page,
    log_in::{get_log_in_page, post_log_in},
    not_found::get_404_not_found,
    sign_up::{get_sign_up_page, post_sign_up},
    support::get_support_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(
            endpoints::LOG_IN_VIEW,
            get(get_log_in_page).post(post_log_in),
        )
        .route(
            endpoints::SIGN_UP_VIEW,
            get(get_sign_up_page).post(post_sign_up),
        )
        .route(
            endpoints::FORGOT_PASSWORD_VIEW,
            get(get_forgot_password_page).post(post_forgot_password),
        )
        .route(endpoints::SUPPORT_VIEW, get(get_support_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page));

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_endpoint),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router, endpoints};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize the database.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn pages_render() {
        let server = new_test_server();

        for endpoint in [
            endpoints::ROOT,
            endpoints::LOG_IN_VIEW,
            endpoints::SIGN_UP_VIEW,
            endpoints::FORGOT_PASSWORD_VIEW,
            endpoints::SUPPORT_VIEW,
            endpoints::DASHBOARD_VIEW,
            endpoints::ANALYTICS_VIEW,
        ] {
            let response = server.get(endpoint).await;

            response.assert_status_ok();
            assert!(
                response.text().contains("<!DOCTYPE html>"),
                "{endpoint} did not render a page"
            );
        }
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found_page() {
        let server = new_test_server();

        let response = server.get("/no-such-page").await;

        response.assert_status_not_found();
        assert!(response.text().contains("Page not found"));
    }
}
