// ABOUTME: Remote suitability check command
// ABOUTME: Fetches profile and product through the configured services and prints the page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use crate::helpers::display::{display_page, print_json};
use anyhow::Result;
use nutricheck::clients::{initialize_shared_client, HttpFoodDataClient};
use nutricheck::config::ServerConfig;
use nutricheck::intelligence::NoteLocale;
use nutricheck::services::{PageOptions, SuitabilityService};
use std::sync::Arc;
use tracing::info;

/// Build and print the suitability page for `user_id` and `product_id`
pub async fn run(
    user_id: &str,
    product_id: i64,
    options: PageOptions,
    locale: Option<NoteLocale>,
    json: bool,
) -> Result<()> {
    let config = ServerConfig::from_env()?;
    let locale = locale.unwrap_or(config.locale);
    info!(
        profile = %config.services.profile_base_url,
        catalog = %config.services.catalog_base_url,
        "Checking product {product_id} for user {user_id}"
    );

    initialize_shared_client(config.http_client);
    let source = Arc::new(HttpFoodDataClient::new(config.services.clone()));
    let service = SuitabilityService::new(source)
        .with_locale(locale)
        .with_top_k(config.recommendation_top_k);

    let page = service.evaluate(user_id, product_id, options).await?;

    if json {
        print_json(&page)
    } else {
        display_page(&page, locale);
        Ok(())
    }
}
