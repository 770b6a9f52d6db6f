// ABOUTME: Unified error handling re-exported from nutricheck-core
// ABOUTME: Keeps crate::errors paths stable for routes, clients and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Unified Error Handling System
//!
//! Error types live in `nutricheck-core` so the intelligence crate can share
//! them. With the `http-response` feature enabled `AppError` renders itself
//! as an axum response.

pub use nutricheck_core::errors::{
    AllergenError, AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse,
    ErrorResponseDetails, JsonKind,
};
