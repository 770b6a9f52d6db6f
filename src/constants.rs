// ABOUTME: System-wide constants re-exported from nutricheck-core
// ABOUTME: Service names, endpoints, headers, environment keys and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Constants Module

pub use nutricheck_core::constants::{defaults, endpoints, env_config, headers, service_names};
