pub mod handler;
pub mod model;
#[cfg(debug_assertions)]
pub mod openapi;
pub mod route;
