// Application state shared across all modules

use sqlx::SqlitePool;

/// Process-wide state. Per-request data (such as `Notifications`) never
/// lives here.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
