//! Onboarding entry controller.
//!
//! This module coordinates the entry screen state machine and its side effects:
//! recording the first-time flow type and asking the host to navigate.

use std::sync::Arc;

use ob_core::{
    onboarding::{
        OnboardingAction, OnboardingEntryState, OnboardingEvent, OnboardingIntent,
        OnboardingStateMachine, WalletState,
    },
    ports::{NavigationPort, WalletStatePort},
};
use tracing::{debug, error, info, info_span, Instrument};

use super::context::OnboardingContext;
use super::{GetWalletState, SetFirstTimeFlowType};

/// Errors produced by the onboarding entry controller.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingControllerError {
    #[error("read wallet state failed: {0}")]
    ReadWalletState(#[source] anyhow::Error),
    #[error("set first-time flow type failed: {0}")]
    SetFlowType(#[source] anyhow::Error),
    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// Controller behind the onboarding entry screen.
///
/// One instance per mount. The flow-type write is awaited before navigation
/// is requested; if it fails, navigation is suppressed and the state does not
/// advance.
pub struct OnboardingEntryController {
    context: Arc<OnboardingContext>,

    get_wallet_state: Arc<GetWalletState>,
    set_first_time_flow_type: Arc<SetFirstTimeFlowType>,
    navigation: Arc<dyn NavigationPort>,
}

impl OnboardingEntryController {
    pub fn new(
        get_wallet_state: Arc<GetWalletState>,
        set_first_time_flow_type: Arc<SetFirstTimeFlowType>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::entering().arc(),
            get_wallet_state,
            set_first_time_flow_type,
            navigation,
        }
    }

    pub fn from_ports(
        wallet_state: Arc<dyn WalletStatePort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self::new(
            Arc::new(GetWalletState::from_ports(wallet_state.clone())),
            Arc::new(SetFirstTimeFlowType::from_ports(wallet_state)),
            navigation,
        )
    }

    /// Activation hook: read the store, then decide whether to redirect.
    pub async fn activate(&self) -> Result<OnboardingEntryState, OnboardingControllerError> {
        let wallet = self
            .get_wallet_state
            .execute()
            .await
            .map_err(OnboardingControllerError::ReadWalletState)?;
        self.on_activate(wallet).await
    }

    /// Activation hook with an explicit wallet state.
    pub async fn on_activate(
        &self,
        wallet: WalletState,
    ) -> Result<OnboardingEntryState, OnboardingControllerError> {
        self.dispatch(OnboardingEvent::Activate { wallet }).await
    }

    pub async fn on_choose_create(
        &self,
    ) -> Result<OnboardingEntryState, OnboardingControllerError> {
        self.choose(OnboardingIntent::ChooseCreate).await
    }

    pub async fn on_choose_import(
        &self,
    ) -> Result<OnboardingEntryState, OnboardingControllerError> {
        self.choose(OnboardingIntent::ChooseImport).await
    }

    pub async fn choose(
        &self,
        intent: OnboardingIntent,
    ) -> Result<OnboardingEntryState, OnboardingControllerError> {
        self.dispatch(OnboardingEvent::Choose { intent }).await
    }

    pub async fn state(&self) -> OnboardingEntryState {
        self.context.get_state().await
    }

    async fn dispatch(
        &self,
        event: OnboardingEvent,
    ) -> Result<OnboardingEntryState, OnboardingControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.onboarding_entry.dispatch", event = ?event);
        async {
            let from = self.context.get_state().await;
            let (next, actions) = OnboardingStateMachine::transition(from.clone(), event);
            info!(from = ?from, to = ?next, actions = actions.len(), "onboarding state transition");

            self.execute_actions(actions).await?;
            self.context.set_state(next.clone()).await;
            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<OnboardingAction>,
    ) -> Result<(), OnboardingControllerError> {
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                OnboardingAction::SetFirstTimeFlowType { flow_type } => {
                    self.set_first_time_flow_type
                        .execute(flow_type)
                        .await
                        .map_err(|err| {
                            error!(
                                %flow_type,
                                error = %err,
                                "recording flow type failed, navigation suppressed"
                            );
                            OnboardingControllerError::SetFlowType(err)
                        })?;
                }
                OnboardingAction::Navigate { intent } => {
                    self.navigation.navigate(intent).await.map_err(|err| {
                        error!(?intent, error = %err, "onboarding navigation failed");
                        OnboardingControllerError::Navigation(err)
                    })?;
                }
            }
        }
        Ok(())
    }
}
