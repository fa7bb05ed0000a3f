//! Pages of the workbench app.

pub mod workbench;
