use std::sync::Mutex;

use ob_core::onboarding::{FlowType, RouteId, WalletState};
use ob_core::ports::{NavigationPort, WalletStatePort};

/// Store double that keeps state in memory and records every flow-type write.
pub(crate) struct MockWalletStatePort {
    state: Mutex<WalletState>,
    flow_writes: Mutex<Vec<FlowType>>,
    fail_writes: bool,
}

impl MockWalletStatePort {
    pub(crate) fn new(state: WalletState) -> Self {
        Self {
            state: Mutex::new(state),
            flow_writes: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub(crate) fn failing_writes(state: WalletState) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(state)
        }
    }

    pub(crate) fn flow_writes(&self) -> Vec<FlowType> {
        self.flow_writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WalletStatePort for MockWalletStatePort {
    async fn get_state(&self) -> anyhow::Result<WalletState> {
        Ok(self.state.lock().unwrap().clone())
    }

    async fn set_state(&self, state: &WalletState) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("disk full");
        }
        if let Some(flow_type) = state.first_time_flow_type {
            self.flow_writes.lock().unwrap().push(flow_type);
        }
        *self.state.lock().unwrap() = state.clone();
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.state.lock().unwrap() = WalletState::default();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavCall {
    Replace(RouteId),
    Push(RouteId),
}

#[derive(Default)]
pub(crate) struct RecordingNavigationPort {
    calls: Mutex<Vec<NavCall>>,
}

impl RecordingNavigationPort {
    pub(crate) fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NavigationPort for RecordingNavigationPort {
    async fn replace(&self, route: RouteId) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(NavCall::Replace(route));
        Ok(())
    }

    async fn push(&self, route: RouteId) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(NavCall::Push(route));
        Ok(())
    }
}
