// API module containing routes and handlers
pub mod handlers;
pub mod routes;

pub use routes::create_app;
