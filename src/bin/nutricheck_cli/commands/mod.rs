// ABOUTME: Re-exports command modules for nutricheck-cli
// ABOUTME: Offline classification and remote suitability checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

pub mod check;
pub mod classify;
