/// UI layer: immediate-mode rendering of the dashboard.
///
/// Nothing in here owns data; every panel draws from [`crate::state::AppState`]
/// and routes control changes back through its mutators.

pub mod central;
pub mod charts;
pub mod cloud;
pub mod flow;
pub mod format;
pub mod panels;
pub mod table;
