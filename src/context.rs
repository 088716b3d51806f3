//! Shared application context.

use std::sync::Arc;

use crate::config::Settings;

/// The loaded settings behind an `Arc`, plus whatever process-wide
/// handles the application grows later.
///
/// Constructed once at startup and cloned into every component that
/// needs configuration. Components receive the context explicitly —
/// there is no module-level global — which keeps configuration
/// injectable in tests. Cloning is cheap and all clones observe the
/// same immutable record.
#[derive(Debug)]
pub struct AppContext {
    settings: Arc<Settings>,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// The immutable settings record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Clone for AppContext {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
        }
    }
}
