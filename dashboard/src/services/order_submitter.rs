//! Manual order submission

use std::sync::Arc;
use tokio::task::JoinHandle;

use shared::{Component, Order, component_info, component_warn};
use crate::core::form::OrderForm;
use crate::error::DashboardResult;
use crate::services::poller::{GroupRefresher, RefreshOutcome};
use crate::traits::BackendClient;

/// A created order together with the resync it triggered
#[derive(Debug)]
pub struct Submitted {
    pub order: Order,
    pub resync: JoinHandle<RefreshOutcome>,
}

/// Holds the operator's form and posts it as a new order
///
/// Success resets the form and schedules an immediate main-group resync.
/// Failure keeps the form so the operator can retry.
pub struct ManualOrderSubmitter<C: BackendClient + 'static> {
    client: Arc<C>,
    refresher: GroupRefresher<C>,
    form: OrderForm,
    last_error: Option<String>,
}

impl<C: BackendClient + 'static> ManualOrderSubmitter<C> {
    pub fn new(client: Arc<C>, refresher: GroupRefresher<C>) -> Self {
        Self {
            client,
            refresher,
            form: OrderForm::default(),
            last_error: None,
        }
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    pub fn set_form(&mut self, form: OrderForm) {
        self.form = form;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub async fn submit(&mut self) -> DashboardResult<Submitted> {
        let request = self.form.to_request();
        match self.client.create_order(request).await {
            Ok(order) => {
                component_info!(
                    Component::OrderSubmitter,
                    "✅ Created order {} ({} for '{}')",
                    order.id,
                    order.drink_type,
                    order.customer_name
                );
                self.form.reset();
                self.last_error = None;
                Ok(Submitted {
                    order,
                    resync: self.refresher.spawn_main_refresh(),
                })
            }
            Err(e) => {
                component_warn!(Component::OrderSubmitter, "❌ {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
