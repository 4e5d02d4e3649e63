//! itemd - a minimal file-backed CRUD service for item records.

pub mod build_info;
pub mod config;
pub mod handlers;
pub mod item;
pub mod server;
pub mod service;
pub mod store;
