use async_trait::async_trait;

use crate::onboarding::{NavigationIntent, RouteId};

/// Host navigation service.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    /// Change screen without leaving a back-navigable entry.
    async fn replace(&self, route: RouteId) -> anyhow::Result<()>;

    /// Change screen and keep the current one reachable with "back".
    async fn push(&self, route: RouteId) -> anyhow::Result<()>;

    async fn navigate(&self, intent: NavigationIntent) -> anyhow::Result<()> {
        match intent {
            NavigationIntent::Replace(route) => self.replace(route).await,
            NavigationIntent::Push(route) => self.push(route).await,
        }
    }
}

#[cfg(test)]
mockall::mock! {
    pub Navigation {}

    #[async_trait]
    impl NavigationPort for Navigation {
        async fn replace(&self, route: RouteId) -> anyhow::Result<()>;
        async fn push(&self, route: RouteId) -> anyhow::Result<()>;
    }
}
