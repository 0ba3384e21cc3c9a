use std::sync::Arc;

use ob_core::onboarding::OnboardingEntryState;
use tokio::sync::Mutex;

/// Shared context for one mount of the entry screen.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole dispatch so events are handled one at a time.
/// - `state`: used for both reading (`get_state`) and writing (during dispatch).
#[derive(Clone)]
pub(crate) struct OnboardingContext {
    state: Arc<Mutex<OnboardingEntryState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl OnboardingContext {
    pub(crate) fn new(initial_state: OnboardingEntryState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Context for a fresh mount.
    pub(crate) fn entering() -> Self {
        Self::new(OnboardingEntryState::Entering)
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> OnboardingEntryState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub(crate) async fn set_state(&self, state: OnboardingEntryState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
