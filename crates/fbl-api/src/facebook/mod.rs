pub mod client;
pub mod models;
pub mod routes;

pub use client::GraphClient;
pub use routes::routes;
