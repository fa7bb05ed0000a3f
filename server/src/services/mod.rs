//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the corpus registry and the text transforms so
//! route handlers can stay focused on JSON translation and status codes.

pub mod augment;
pub mod corpus;
pub mod preprocess;
