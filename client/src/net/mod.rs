//! Network layer: REST helpers over the wire DTOs.

pub mod api;
