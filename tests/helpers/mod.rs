// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports router request helpers, catalog fixtures and an in-memory data source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;
pub mod fixtures;
pub mod mock_source;
