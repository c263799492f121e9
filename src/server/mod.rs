//! Server-side API backend and game logic.
//!
//! The backend uses Axum as the web framework and SeaORM over Sqlite for
//! persistence. Game rules that need no database live in `engine` so they can be
//! exercised without one.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Game operations orchestrated over the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Engine** (`engine/`) - Pure rules: stats, damage, rolling, rewards
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Route registration and OpenAPI document
//! - **Scheduler** (`scheduler/`) - Hourly purge of expired breeding and hatch sessions
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** converts DTOs to params and calls a service
//! 3. **Service** applies game rules, using the engine and the data layer
//! 4. **Controller** converts the domain result to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
