//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused
//! models: `ui` owns tab visibility, `explorer` owns dataset/sample/result
//! data and the stale-response bookkeeping.

pub mod explorer;
pub mod ui;
