//! Tests for starting and stopping the backend run

use super::fixtures::*;
use super::helpers::*;
use crate::core::state::SharedStore;
use crate::services::RunControl;
use crate::types::{BackendCall, SyncGroup};

async fn running(store: &SharedStore) -> bool {
    store.read().await.is_running()
}

mod run_control_tests {
    use super::*;

    #[tokio::test]
    async fn test_start_resyncs_instead_of_setting_status() {
        let backend = ScriptedBackend::new();
        let store = create_test_store();
        let control = RunControl::new(backend.clone(), create_test_refresher(&backend, &store));
        backend.set_running(true);

        let ack = control.start().await.unwrap();

        assert_eq!(ack.status.as_deref(), Some("started"));
        assert_eq!(backend.calls_of(BackendCall::StartRun), 1);
        assert!(wait_for_condition(|| running(&store), 1000).await);
        assert_eq!(control.last_error().await, None);
    }

    #[tokio::test]
    async fn test_stop_failure_records_error() {
        let backend = ScriptedBackend::new();
        backend.fail(BackendCall::StopRun);
        let store = create_test_store();
        let control = RunControl::new(backend.clone(), create_test_refresher(&backend, &store));

        let err = control.stop().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to stop simulation");
        assert_eq!(control.last_error().await.as_deref(), Some("Failed to stop simulation"));
        settle().await;
        assert_eq!(backend.calls_of(BackendCall::FetchRunStatus), 0);
        assert!(!store.read().await.has_committed(SyncGroup::Main));
    }

    #[tokio::test]
    async fn test_start_failure_then_success_clears_error() {
        let backend = ScriptedBackend::new();
        backend.fail(BackendCall::StartRun);
        let store = create_test_store();
        let control = RunControl::new(backend.clone(), create_test_refresher(&backend, &store));
        assert!(control.start().await.is_err());

        backend.recover(BackendCall::StartRun);
        control.start().await.unwrap();

        assert_eq!(control.last_error().await, None);
    }
}
