//! Tests for manual order submission

use super::fixtures::*;
use super::helpers::*;
use crate::core::form::OrderForm;
use crate::services::ManualOrderSubmitter;
use crate::services::poller::RefreshOutcome;
use crate::types::BackendCall;
use shared::{DrinkType, LoyaltyStatus, OrderStatus};

mod manual_order_submitter_tests {
    use super::*;

    #[tokio::test]
    async fn test_form_starts_at_defaults() {
        let backend = ScriptedBackend::new();
        let store = create_test_store();
        let submitter = ManualOrderSubmitter::new(backend.clone(), create_test_refresher(&backend, &store));

        assert!(submitter.form().is_default());
        assert_eq!(submitter.form().drink_type, DrinkType::Latte);
        assert_eq!(submitter.last_error(), None);
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form_and_resyncs() {
        let backend = ScriptedBackend::new();
        backend.set_running(true);
        let store = create_test_store();
        let mut submitter = ManualOrderSubmitter::new(backend.clone(), create_test_refresher(&backend, &store));
        submitter.set_form(OrderForm::new("Grace", DrinkType::Mocha, LoyaltyStatus::Gold));

        let submitted = submitter.submit().await.unwrap();

        assert_eq!(submitted.order.customer_name, "Grace");
        assert_eq!(submitted.order.status, OrderStatus::Queued);
        assert!(submitter.form().is_default());
        assert_eq!(submitted.resync.await.unwrap(), RefreshOutcome::Committed);
        assert_eq!(backend.calls_of(BackendCall::FetchQueue), 1);
        assert!(store.read().await.is_running());

        let created = backend.created_orders();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].drink_type, DrinkType::Mocha);
        assert_eq!(created[0].loyalty_status, LoyaltyStatus::Gold);
    }

    #[tokio::test]
    async fn test_empty_name_is_sent_as_is() {
        let backend = ScriptedBackend::new();
        let store = create_test_store();
        let mut submitter = ManualOrderSubmitter::new(backend.clone(), create_test_refresher(&backend, &store));

        submitter.submit().await.unwrap();

        assert_eq!(backend.created_orders()[0].customer_name, "");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let backend = ScriptedBackend::new();
        backend.fail(BackendCall::CreateOrder);
        let store = create_test_store();
        let mut submitter = ManualOrderSubmitter::new(backend.clone(), create_test_refresher(&backend, &store));
        submitter.form_mut().customer_name = "Grace".to_string();
        submitter.form_mut().drink_type = DrinkType::Espresso;

        let err = submitter.submit().await.err().unwrap();

        assert_eq!(err.to_string(), "Failed to create order");
        assert_eq!(submitter.last_error(), Some("Failed to create order"));
        assert_eq!(submitter.form().customer_name, "Grace");
        assert_eq!(submitter.form().drink_type, DrinkType::Espresso);
        settle().await;
        assert_eq!(backend.calls_of(BackendCall::FetchQueue), 0);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let backend = ScriptedBackend::new();
        backend.fail(BackendCall::CreateOrder);
        let store = create_test_store();
        let mut submitter = ManualOrderSubmitter::new(backend.clone(), create_test_refresher(&backend, &store));
        assert!(submitter.submit().await.is_err());

        backend.recover(BackendCall::CreateOrder);
        assert!(submitter.submit().await.is_ok());

        assert_eq!(submitter.last_error(), None);
    }
}
