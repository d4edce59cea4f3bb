// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between HTTP and the services
// - Translates forms into service requests and entities into DTOs
// - Never contains business rules

pub mod dto;
pub mod error_handling;
pub mod render;
pub mod routes;
pub mod state;
pub mod views;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use render::{redirect, Page};
pub use routes::build_router;
pub use state::AppState;
