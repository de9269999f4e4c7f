//! Request handlers, grouped by downstream service.

pub mod auth;
pub mod health;
pub mod suggestions;
pub mod tasks;

pub use auth::{login, register};
pub use health::health_check;
pub use suggestions::get_suggestions;
pub use tasks::{complete_task, create_task, get_task_history, get_tasks, update_task};

use crate::errors::GatewayError;

/// Fallback for unmatched routes.
pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}
