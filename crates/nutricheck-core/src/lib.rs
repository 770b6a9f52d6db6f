// ABOUTME: Core types and constants for the NutriCheck product suitability platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

#![deny(unsafe_code)]

//! # NutriCheck Core
//!
//! Foundation crate providing shared types and constants for the NutriCheck
//! platform. It has no knowledge of HTTP clients or algorithms, so it changes
//! rarely and keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the classifier's `AllergenError`
//! - **models**: User profile, product, and analysis service records
//! - **constants**: Service names, environment keys, and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `Product`, analysis records)
pub mod models;
