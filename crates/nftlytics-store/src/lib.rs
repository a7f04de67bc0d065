//! Presentation-facing state for the analytics dashboard.
//!
//! `AnalyticsStore` drives the fetch pipeline and publishes every state
//! change as a `StoreEvent`; `SelectionController` tracks which row is
//! under detail inspection.

pub mod event;
pub mod selection;
pub mod store;

pub use event::StoreEvent;
pub use selection::{Selection, SelectionController};
pub use store::AnalyticsStore;
