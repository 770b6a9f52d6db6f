// ABOUTME: Output formatting helpers for nutricheck-cli
// ABOUTME: Renders reports and suitability pages as text or pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use anyhow::Result;
use nutricheck::intelligence::nutrient_evaluation::NutrientEvaluation;
use nutricheck::intelligence::{NoteLocale, SuitabilityReport};
use nutricheck::models::RecommendedProduct;
use nutricheck::services::{LocalInsights, SuitabilityPage};
use nutricheck::view::RecommendationHeading;
use serde::Serialize;

const RULE_WIDTH: usize = 50;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a classifier report
pub fn display_report(report: &SuitabilityReport, locale: NoteLocale) {
    println!("Verdict: {}", report.verdict.label(locale));
    println!("  {}", report.direct_note);
    if let Some(indirect) = &report.indirect_note {
        println!("  {indirect}");
    }
}

/// Print a full suitability page
pub fn display_page(page: &SuitabilityPage, locale: NoteLocale) {
    println!("\n{}", page.assessment.product_name);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("User: {}", page.assessment.user_name);
    display_report(&page.assessment.report, locale);

    println!("\nNutrition facts");
    println!("{}", "-".repeat(RULE_WIDTH));
    for row in &page.nutrition.rows {
        println!("  {:<20} {:>12}", row.label, row.display);
    }

    if let Some(analysis) = &page.analysis {
        println!("\nAI analysis");
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("  {}", analysis.explanation);
        for assessment in &analysis.nutrition_analysis {
            println!("  {}: {}", assessment.nutrient, assessment.evaluation);
        }
        if let Some(heading) = page.recommendation_heading {
            display_recommendations(heading, &analysis.recommendations, locale);
        }
    }

    if let Some(insights) = &page.insights {
        display_insights(insights, page, locale);
    }
}

fn display_recommendations(
    heading: RecommendationHeading,
    products: &[RecommendedProduct],
    locale: NoteLocale,
) {
    println!("\n  {}", heading.text(locale));
    for product in products {
        println!("   - {} (#{})", product.name, product.id);
    }
}

fn display_evaluation(evaluation: &NutrientEvaluation, locale: NoteLocale) {
    let (name, status) = match locale {
        NoteLocale::English => (evaluation.nutrient.label(), evaluation.status.label()),
        NoteLocale::Korean => (
            evaluation.nutrient.korean_label(),
            evaluation.status.korean_label(),
        ),
    };
    let per_100g = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
    println!(
        "  {name:<20} {status:<16} {} / avg {} per 100g",
        per_100g(evaluation.value_per_100g),
        per_100g(evaluation.catalog_average_per_100g),
    );
}

fn display_insights(insights: &LocalInsights, page: &SuitabilityPage, locale: NoteLocale) {
    println!("\nLocal insights");
    println!("{}", "-".repeat(RULE_WIDTH));
    if !insights.conditions.is_empty() {
        let names: Vec<String> = insights
            .conditions
            .iter()
            .map(|condition| format!("{condition:?}"))
            .collect();
        println!("  Conditions: {}", names.join(", "));
    }
    for evaluation in &insights.evaluations {
        display_evaluation(evaluation, locale);
    }
    let heading = RecommendationHeading::derive(
        false,
        insights.alternatives.len(),
        page.assessment.report.verdict,
    );
    display_recommendations(heading, &insights.alternatives, locale);
}
