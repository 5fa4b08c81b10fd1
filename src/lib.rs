//! Aliasmap - a small URL alias registry service
//!
//! This library provides the core functionality for the Aliasmap service:
//! a persistent alias -> URL registry with save/resolve/delete semantics,
//! the HTTP services that expose it, and the supporting configuration and
//! storage layers.
//!
//! # Architecture
//! - `storage`: SeaORM storage backend and data access
//! - `services`: registry business logic (save, resolve, delete)
//! - `api`: HTTP services (redirect, JSON API, health)
//! - `config`: configuration management
//! - `system`: logging and process-level utilities

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
