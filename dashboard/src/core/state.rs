//! Latest synchronized snapshot per resource group
//!
//! Pure business logic with no I/O dependencies. Each group is replaced
//! wholesale on commit; a failure records an error and leaves the last
//! committed value untouched.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use shared::{MetricsSnapshot, Order, Worker};
use crate::core::analytics::{self, OrderAnalytics};
use crate::types::SyncGroup;

/// Store shared between the scheduler, the on-demand invokers and readers
pub type SharedStore = Arc<RwLock<SyncStateStore>>;

/// Identifies one fetch of a group; later tickets supersede earlier ones
pub type Ticket = u64;

/// The four main resources, fetched and committed together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainSnapshot {
    pub queue: Vec<Order>,
    pub workers: Vec<Worker>,
    pub metrics: MetricsSnapshot,
    pub running: bool,
}

/// A committed value for one group
#[derive(Debug, Clone, PartialEq)]
pub enum GroupSnapshot {
    Main(MainSnapshot),
    OrderHistory(Vec<Order>),
}

impl GroupSnapshot {
    pub fn group(&self) -> SyncGroup {
        match self {
            GroupSnapshot::Main(_) => SyncGroup::Main,
            GroupSnapshot::OrderHistory(_) => SyncGroup::OrderHistory,
        }
    }
}

/// What happened to a commit or failure report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    /// A newer fetch of the same group already reported
    Superseded,
}

#[derive(Debug, Clone)]
struct GroupSlot<T> {
    value: Option<T>,
    error: Option<String>,
    committed_at: Option<DateTime<Utc>>,
    issued: Ticket,
    applied: Ticket,
}

impl<T> Default for GroupSlot<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            committed_at: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> GroupSlot<T> {
    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.issued
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        ticket > self.applied
    }

    fn commit(&mut self, ticket: Ticket, value: T) -> Applied {
        if !self.accepts(ticket) {
            return Applied::Superseded;
        }
        self.applied = ticket;
        self.value = Some(value);
        self.error = None;
        self.committed_at = Some(Utc::now());
        Applied::Yes
    }

    fn fail(&mut self, ticket: Ticket, message: String) -> Applied {
        if !self.accepts(ticket) {
            return Applied::Superseded;
        }
        self.applied = ticket;
        self.error = Some(message);
        Applied::Yes
    }
}

/// Central store of synchronized backend state
#[derive(Debug, Default)]
pub struct SyncStateStore {
    main: GroupSlot<MainSnapshot>,
    history: GroupSlot<Vec<Order>>,
    /// Bumped on every applied commit or failure
    revision: u64,
}

impl SyncStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing across tasks
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Reserve a ticket before dispatching a fetch for `group`
    pub fn issue_ticket(&mut self, group: SyncGroup) -> Ticket {
        match group {
            SyncGroup::Main => self.main.issue(),
            SyncGroup::OrderHistory => self.history.issue(),
        }
    }

    /// Replace a group's snapshot wholesale and clear its error
    pub fn commit(&mut self, ticket: Ticket, snapshot: GroupSnapshot) -> Applied {
        let applied = match snapshot {
            GroupSnapshot::Main(value) => self.main.commit(ticket, value),
            GroupSnapshot::OrderHistory(value) => self.history.commit(ticket, value),
        };
        self.bump(applied)
    }

    /// Record a group's error; the committed snapshot is left as it was
    pub fn fail(&mut self, group: SyncGroup, ticket: Ticket, message: impl Into<String>) -> Applied {
        let message = message.into();
        let applied = match group {
            SyncGroup::Main => self.main.fail(ticket, message),
            SyncGroup::OrderHistory => self.history.fail(ticket, message),
        };
        self.bump(applied)
    }

    fn bump(&mut self, applied: Applied) -> Applied {
        if applied == Applied::Yes {
            self.revision += 1;
        }
        applied
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn error(&self, group: SyncGroup) -> Option<&str> {
        match group {
            SyncGroup::Main => self.main.error.as_deref(),
            SyncGroup::OrderHistory => self.history.error.as_deref(),
        }
    }

    pub fn committed_at(&self, group: SyncGroup) -> Option<DateTime<Utc>> {
        match group {
            SyncGroup::Main => self.main.committed_at,
            SyncGroup::OrderHistory => self.history.committed_at,
        }
    }

    pub fn has_committed(&self, group: SyncGroup) -> bool {
        match group {
            SyncGroup::Main => self.main.value.is_some(),
            SyncGroup::OrderHistory => self.history.value.is_some(),
        }
    }

    pub fn main_snapshot(&self) -> Option<&MainSnapshot> {
        self.main.value.as_ref()
    }

    /// Waiting queue; empty before the first commit
    pub fn queue(&self) -> &[Order] {
        self.main.value.as_ref().map(|m| m.queue.as_slice()).unwrap_or(&[])
    }

    pub fn workers(&self) -> &[Worker] {
        self.main.value.as_ref().map(|m| m.workers.as_slice()).unwrap_or(&[])
    }

    /// `None` until metrics have been committed at least once
    pub fn metrics(&self) -> Option<&MetricsSnapshot> {
        self.main.value.as_ref().map(|m| &m.metrics)
    }

    pub fn is_running(&self) -> bool {
        self.main.value.as_ref().is_some_and(|m| m.running)
    }

    /// Order history; empty before the first commit
    pub fn orders(&self) -> &[Order] {
        self.history.value.as_deref().unwrap_or(&[])
    }

    /// Consistent copy of everything a reader needs, analytics included
    pub fn view(&self) -> DashboardView {
        DashboardView {
            revision: self.revision,
            queue: self.queue().to_vec(),
            workers: self.workers().to_vec(),
            metrics: self.metrics().cloned(),
            running: self.is_running(),
            main_error: self.main.error.clone(),
            main_updated_at: self.main.committed_at,
            orders: self.orders().to_vec(),
            orders_error: self.history.error.clone(),
            analytics: analytics::aggregate(self.orders()),
        }
    }
}

/// Read-only snapshot handed to presentation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub revision: u64,
    pub queue: Vec<Order>,
    pub workers: Vec<Worker>,
    pub metrics: Option<MetricsSnapshot>,
    pub running: bool,
    pub main_error: Option<String>,
    pub main_updated_at: Option<DateTime<Utc>>,
    pub orders: Vec<Order>,
    pub orders_error: Option<String>,
    pub analytics: OrderAnalytics,
}
