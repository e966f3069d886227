//! HTTP surface: routes, handlers, request/response models and errors.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod router;
pub mod session;
pub mod state;
