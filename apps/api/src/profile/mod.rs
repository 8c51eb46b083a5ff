// Student profile: data model, in-memory store and HTTP handlers.

pub mod handlers;
pub mod models;
pub mod store;
