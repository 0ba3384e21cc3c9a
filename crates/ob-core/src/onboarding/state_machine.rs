//! Onboarding entry state machine.
//!
//! Defines a pure state transition function for the onboarding entry screen.

use super::{
    choice_effects, entry_redirect, FlowType, NavigationIntent, OnboardingIntent, RouteId,
    WalletState,
};

/// Entry screen state within one mount.
///
/// 入口页在一次挂载内的状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingEntryState {
    /// Mounted, wallet state not inspected yet.
    ///
    /// 已挂载，尚未检查钱包状态。
    Entering,
    /// No keyring: the create / import choice is shown.
    ///
    /// 无 keyring：展示创建 / 导入选择。
    AwaitingChoice,
    /// Redirected to completion (imported wallet).
    ///
    /// 已重定向到完成页。
    Completed,
    /// Redirected to secure-your-wallet.
    ///
    /// 已重定向到钱包备份页。
    SecuringWallet,
    /// A choice was recorded and forward navigation requested.
    ///
    /// 已记录选择并请求前进导航。
    Dispatched { flow_type: FlowType },
}

impl OnboardingEntryState {
    /// Whether choice intents are honoured in this state.
    pub fn accepts_choice(&self) -> bool {
        matches!(
            self,
            OnboardingEntryState::AwaitingChoice | OnboardingEntryState::Dispatched { .. }
        )
    }

    /// Whether activation redirected away from the entry screen.
    pub fn is_redirected(&self) -> bool {
        matches!(
            self,
            OnboardingEntryState::Completed | OnboardingEntryState::SecuringWallet
        )
    }
}

/// Events that drive the entry screen.
///
/// 驱动入口页的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingEvent {
    /// Screen became active with the current wallet state.
    ///
    /// 页面激活，携带当前钱包状态。
    Activate { wallet: WalletState },
    /// User picked create or import.
    ///
    /// 用户选择创建或导入。
    Choose { intent: OnboardingIntent },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingAction {
    /// Persist the chosen first-time flow type.
    ///
    /// 持久化首次流程类型。
    SetFirstTimeFlowType { flow_type: FlowType },
    /// Ask the host to navigate.
    ///
    /// 请求宿主导航。
    Navigate { intent: NavigationIntent },
}

/// Pure onboarding entry state machine.
///
/// 纯状态机：不包含副作用。
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        state: OnboardingEntryState,
        event: OnboardingEvent,
    ) -> (OnboardingEntryState, Vec<OnboardingAction>) {
        match (state, event) {
            (OnboardingEntryState::Entering, OnboardingEvent::Activate { wallet }) => {
                match entry_redirect(&wallet) {
                    None => (OnboardingEntryState::AwaitingChoice, Vec::new()),
                    Some(intent) => {
                        let next = match intent.route() {
                            RouteId::Completion => OnboardingEntryState::Completed,
                            _ => OnboardingEntryState::SecuringWallet,
                        };
                        (next, vec![OnboardingAction::Navigate { intent }])
                    }
                }
            }
            (state, OnboardingEvent::Choose { intent }) if state.accepts_choice() => {
                let (flow_type, navigation) = choice_effects(intent);
                (
                    OnboardingEntryState::Dispatched { flow_type },
                    vec![
                        OnboardingAction::SetFirstTimeFlowType { flow_type },
                        OnboardingAction::Navigate { intent: navigation },
                    ],
                )
            }
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(state = ?state, event = ?_event, "onboarding event ignored");
                (state, Vec::new())
            }
        }
    }
}
