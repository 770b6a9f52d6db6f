// ABOUTME: Offline allergen classification command
// ABOUTME: Runs the pure classifier on command-line fields and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use crate::helpers::display::{display_report, print_json};
use anyhow::Result;
use nutricheck::intelligence::{classify_with_locale, NoteLocale};
use tracing::debug;

/// Classify the given fields and print the result
pub fn run(
    user_allergies: &str,
    allergens: &str,
    indirect: &str,
    locale: NoteLocale,
    json: bool,
) -> Result<()> {
    let report = classify_with_locale(user_allergies, allergens, indirect, locale);
    debug!(verdict = %report.verdict, "Classified command-line fields");

    if json {
        print_json(&report)
    } else {
        display_report(&report, locale);
        Ok(())
    }
}
