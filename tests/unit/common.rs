// Common utilities for the client tests

use marketplace_client::prelude::*;
use mockito::{Server, ServerGuard};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A mock backend plus a client wired to it with an isolated session and event registry
pub struct TestContext {
    pub server: ServerGuard,
    pub client: Arc<ApiClient>,
    pub logouts: Arc<AtomicUsize>,
}

impl TestContext {
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

/// Counts the logout broadcasts published on `events`
pub fn count_logouts(events: &SessionEvents) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    events.subscribe(move |event| {
        if event == SessionEvent::Logout {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    hits
}

/// Builds a client against `server` with an in-memory session
pub fn client_for(base_url: &str, token: Option<&str>) -> (Arc<ApiClient>, Arc<AtomicUsize>) {
    let session = SessionStore::in_memory();
    if let Some(token) = token {
        session.store(token).expect("store token");
    }
    let events = SessionEvents::new();
    let logouts = count_logouts(&events);
    let client = ApiClient::builder(Config::with_base_url(base_url))
        .session_store(session)
        .events(events)
        .build()
        .expect("client builds");
    (Arc::new(client), logouts)
}

/// Starts a mock backend and a client with no session token
pub async fn anonymous_context() -> TestContext {
    let server = Server::new_async().await;
    let (client, logouts) = client_for(&server.url(), None);
    TestContext {
        server,
        client,
        logouts,
    }
}

/// Starts a mock backend and a client holding `token`
pub async fn authenticated_context(token: &str) -> TestContext {
    let server = Server::new_async().await;
    let (client, logouts) = client_for(&server.url(), Some(token));
    TestContext {
        server,
        client,
        logouts,
    }
}
