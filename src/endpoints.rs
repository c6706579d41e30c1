//! The application's route URIs.

/// The home page.
pub const ROOT: &str = "/";
/// The page for logging in to the application.
pub const LOG_IN_VIEW: &str = "/login";
/// The page for creating an account.
pub const SIGN_UP_VIEW: &str = "/signup";
/// The page with instructions for resetting a forgotten password.
pub const FORGOT_PASSWORD_VIEW: &str = "/forgot-password";
/// The page for contacting support.
pub const SUPPORT_VIEW: &str = "/support";
/// The landing page for recording and reviewing transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for visualizing income and spending.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
