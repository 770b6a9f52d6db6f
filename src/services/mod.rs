// ABOUTME: Domain service layer orchestrating upstream fetches and suitability computations
// ABOUTME: Protocol-agnostic so the HTTP routes and the CLI share the same flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Domain service layer
//!
//! Business logic lives here rather than in route handlers so the REST API
//! and the command-line client produce identical results.

/// Suitability page assembly: profile, product, verdict, analysis, insights
pub mod suitability;

pub use suitability::{
    AnalysisOutcome, LocalInsights, PageOptions, SuitabilityAssessment, SuitabilityContext,
    SuitabilityPage, SuitabilityService,
};
