//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod analytics;
pub mod form;
pub mod presentation;
pub mod render;
pub mod state;

// Re-export commonly used types
pub use analytics::{ItemRow, OrderAnalytics, aggregate};
pub use form::OrderForm;
pub use presentation::StatusFilter;
pub use state::{DashboardView, GroupSnapshot, MainSnapshot, SharedStore, SyncStateStore};
