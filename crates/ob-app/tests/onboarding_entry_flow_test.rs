use std::sync::Arc;

use ob_app::usecases::ResetOnboarding;
use ob_app::OnboardingEntryController;
use ob_core::onboarding::{FlowType, OnboardingEntryState, RouteId, WalletState};
use ob_core::ports::WalletStatePort;
use ob_infra::{FileWalletStateRepository, InMemoryNavigationHistory};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build(
    temp_dir: &TempDir,
) -> (
    OnboardingEntryController,
    Arc<FileWalletStateRepository>,
    Arc<InMemoryNavigationHistory>,
) {
    let store = Arc::new(FileWalletStateRepository::with_defaults(
        temp_dir.path().to_path_buf(),
    ));
    let history = Arc::new(InMemoryNavigationHistory::at_welcome());
    let controller = OnboardingEntryController::from_ports(store.clone(), history.clone());
    (controller, store, history)
}

#[tokio::test]
async fn onboarding_entry_flow_fresh_user_chooses_import() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");
    let (controller, store, history) = build(&temp_dir);

    let state = controller.activate().await.expect("activate");
    assert_eq!(state, OnboardingEntryState::AwaitingChoice);
    assert_eq!(history.entries().await, vec![RouteId::WELCOME_PATH]);

    controller.on_choose_import().await.expect("choose import");

    let persisted = store.get_state().await.expect("read state");
    assert_eq!(persisted.first_time_flow_type, Some(FlowType::Import));
    assert!(!persisted.keyring_exists);
    assert_eq!(
        history.entries().await,
        vec![RouteId::WELCOME_PATH, RouteId::Metametrics.path()]
    );

    // push keeps the entry screen reachable
    assert_eq!(history.back().await.as_deref(), Some(RouteId::WELCOME_PATH));
}

#[tokio::test]
async fn onboarding_entry_flow_returning_user_is_redirected_without_history() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");
    let (controller, store, history) = build(&temp_dir);
    store
        .set_state(&WalletState {
            keyring_exists: true,
            first_time_flow_type: Some(FlowType::Create),
        })
        .await
        .expect("seed state");

    let state = controller.activate().await.expect("activate");

    assert_eq!(state, OnboardingEntryState::SecuringWallet);
    assert_eq!(
        history.entries().await,
        vec![RouteId::SecureYourWallet.path()]
    );
    assert_eq!(history.back().await, None);
}

#[tokio::test]
async fn onboarding_entry_flow_imported_keyring_goes_to_completion() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");
    let (controller, store, history) = build(&temp_dir);
    store
        .set_state(&WalletState {
            keyring_exists: true,
            first_time_flow_type: Some(FlowType::Import),
        })
        .await
        .expect("seed state");

    controller.activate().await.expect("activate");
    // choices after a redirect are ignored
    controller.on_choose_create().await.expect("choose create");

    assert_eq!(history.entries().await, vec![RouteId::Completion.path()]);
    assert_eq!(
        store.get_state().await.unwrap().first_time_flow_type,
        Some(FlowType::Import)
    );
}

#[tokio::test]
async fn onboarding_entry_flow_rerun_after_reset_overwrites_choice() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");

    let (first_mount, store, _history) = build(&temp_dir);
    first_mount.activate().await.expect("activate");
    first_mount.on_choose_create().await.expect("choose create");
    assert_eq!(
        store.get_state().await.unwrap().first_time_flow_type,
        Some(FlowType::Create)
    );

    ResetOnboarding::new(store.clone())
        .execute()
        .await
        .expect("reset");

    let (second_mount, store, history) = build(&temp_dir);
    assert_eq!(
        second_mount.activate().await.expect("activate"),
        OnboardingEntryState::AwaitingChoice
    );
    second_mount.on_choose_import().await.expect("choose import");
    second_mount.on_choose_import().await.expect("choose import again");

    assert_eq!(
        store.get_state().await.unwrap().first_time_flow_type,
        Some(FlowType::Import)
    );
    assert_eq!(
        history.entries().await,
        vec![
            RouteId::WELCOME_PATH,
            RouteId::Metametrics.path(),
            RouteId::Metametrics.path()
        ]
    );
}
