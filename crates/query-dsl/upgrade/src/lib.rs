//! Pluggable hooks invoked at fixed points during schema-upgrade operations.

pub mod listener;
pub mod view;
