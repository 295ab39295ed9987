use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::AccountStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Account and lockout lookups. A trait object so tests can drive the
    /// handlers without a database.
    pub store: Arc<dyn AccountStore>,
}
