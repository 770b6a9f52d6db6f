// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Configuration module for `NutriCheck`
//!
//! - **Environment**: server, upstream service and classifier settings read
//!   from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, HttpClientConfig, LogLevel, ServerConfig, ServiceEndpoints};
