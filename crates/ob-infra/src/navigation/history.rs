//! In-memory navigation history.
//!
//! Models the host router's history stack so replace/push semantics can be
//! observed: `replace` overwrites the top entry, `push` appends one.

use async_trait::async_trait;
use ob_core::onboarding::RouteId;
use ob_core::ports::NavigationPort;
use tokio::sync::Mutex;
use tracing::info;

pub struct InMemoryNavigationHistory {
    entries: Mutex<Vec<String>>,
}

impl InMemoryNavigationHistory {
    /// Create a history positioned on `entry_route`.
    pub fn new(entry_route: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![entry_route.into()]),
        }
    }

    /// History positioned on the onboarding welcome screen.
    pub fn at_welcome() -> Self {
        Self::new(RouteId::WELCOME_PATH)
    }

    /// Route currently on screen.
    pub async fn current(&self) -> Option<String> {
        self.entries.lock().await.last().cloned()
    }

    /// All entries, oldest first.
    pub async fn entries(&self) -> Vec<String> {
        self.entries.lock().await.clone()
    }

    /// Go back one entry. Returns the new current route, or `None` when
    /// there is nothing to go back to.
    pub async fn back(&self) -> Option<String> {
        let mut entries = self.entries.lock().await;
        if entries.len() < 2 {
            return None;
        }
        entries.pop();
        entries.last().cloned()
    }
}

#[async_trait]
impl NavigationPort for InMemoryNavigationHistory {
    async fn replace(&self, route: RouteId) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().await;
        let previous = entries.pop();
        entries.push(route.path().to_string());
        info!(from = ?previous, to = %route, "navigation replace");
        Ok(())
    }

    async fn push(&self, route: RouteId) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().await;
        entries.push(route.path().to_string());
        info!(to = %route, depth = entries.len(), "navigation push");
        Ok(())
    }
}
