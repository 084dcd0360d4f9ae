//! Flutter-facing bridge over `jotter_core`.

pub mod api;
