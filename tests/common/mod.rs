//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::TestServer;
use parking_lot::Mutex;

use city_info::config::CorsSettings;
use city_info::domain::services::{Notifier, NotifyError};
use city_info::infrastructure::repositories::InMemoryResourceStore;
use city_info::startup::{build_router, AppState};

/// A notice captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotice {
    pub subject: String,
    pub body: String,
}

/// Notifier that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotice>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<SentNotice> {
        self.sent.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.sent.lock().push(SentNotice {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Test application over a freshly seeded in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryResourceStore,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    /// Create a new test application with the seeded catalog
    pub fn new() -> Self {
        let store = InMemoryResourceStore::seeded();
        let notifier = Arc::new(RecordingNotifier::default());

        let state = AppState::new(Arc::new(store.clone()), notifier.clone());
        let cors = CorsSettings {
            allowed_origins: vec![],
        };
        let server = TestServer::new(build_router(state, &cors)).expect("test server");

        Self {
            server,
            store,
            notifier,
        }
    }
}

/// Path of a city's point of interest collection
pub fn points_of_interest_path(city_id: i64) -> String {
    format!("/api/cities/{}/pointsofinterest", city_id)
}

/// Path of a single point of interest
pub fn point_of_interest_path(city_id: i64, poi_id: i64) -> String {
    format!("/api/cities/{}/pointsofinterest/{}", city_id, poi_id)
}
