#[path = "../common/mod.rs"]
mod common;

mod configuration;
mod cursor_access;
