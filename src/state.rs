use std::sync::Arc;

use crate::auth::AccessGate;
use crate::config::ServerConfig;
use crate::store::EventStore;

/// Shared application state, injected into every handler.
///
/// The store is the only shared mutable resource; handlers never touch
/// module-level state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
    pub gate: Arc<AccessGate>,
    pub config: Arc<ServerConfig>,
}
