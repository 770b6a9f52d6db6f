// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides deterministic catalog generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Common benchmark utilities and fixtures.

pub mod fixtures;
