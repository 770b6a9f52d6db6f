// ABOUTME: Main library entry point for the NutriCheck suitability service
// ABOUTME: Wires configuration, logging, upstream clients, orchestration, view model and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

#![deny(unsafe_code)]

//! # `NutriCheck`
//!
//! Backend for a packaged-food nutrition facts view. Given a signed-in user
//! and a product, it answers one question first: can this user eat this?
//!
//! ## Features
//!
//! - **Allergen suitability**: tri-state verdict with explanatory notes
//! - **AI analysis**: proxies the external analysis service and degrades
//!   gracefully when it is down
//! - **Local insights**: nutrient ratings for the user's medical conditions
//!   and allergen-safe alternatives ranked by nutrient similarity
//! - **View model**: the nutrition facts panel and the UI state machines as
//!   plain values
//!
//! ## Architecture
//!
//! - **`clients`**: `FoodDataSource` trait over the profile, catalog and
//!   analysis services
//! - **`services`**: orchestration of fetches and classification
//! - **`view`**: presentation state
//! - **`routes`**: axum HTTP API
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutricheck::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("NutriCheck configured with HTTP port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Upstream service clients
pub mod clients;

/// Environment configuration
pub mod config;

/// Service names, endpoints, headers and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: request IDs, spans, CORS
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Orchestration services
pub mod services;

/// Presentation state for the nutrition facts view
pub mod view;

pub use nutricheck_core::models;
pub use nutricheck_intelligence as intelligence;
