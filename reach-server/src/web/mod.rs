//! Web layer: HTTP routes, DTOs, application state.

mod dto;
mod routes;
mod state;

pub use dto::{ReachabilityRequest, ReachabilityResponse};
pub use routes::{AppError, create_router};
pub use state::AppState;
