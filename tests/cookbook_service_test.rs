// ABOUTME: Integration tests for the shared cookbook service
// ABOUTME: Covers validation, persistence after mutations, failed saves, concurrency and reopening
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use async_trait::async_trait;
use common::{gram_draft, init_test_logging, memory_service, SAMPLE_INGREDIENTS};
use cookbook::config::CookbookConfig;
use cookbook::errors::{AppError, AppResult, ErrorCode};
use cookbook::recipes::{
    ConversionTable, Cookbook, IngredientParser, RecipeDraft, Rounding, Unit,
};
use cookbook::services::CookbookService;
use cookbook::storage::CookbookStore;
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

/// Store that loads empty state and refuses every save
struct FailingStore;

#[async_trait]
impl CookbookStore for FailingStore {
    async fn load_cookbook(&self) -> AppResult<Cookbook> {
        Ok(Cookbook::new())
    }

    async fn save_cookbook(&self, _cookbook: &Cookbook) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }

    async fn load_conversion_table(&self) -> AppResult<ConversionTable> {
        Ok(ConversionTable::new())
    }

    async fn save_conversion_table(&self, _table: &ConversionTable) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }
}

fn failing_service() -> CookbookService {
    init_test_logging();
    CookbookService::new(
        Cookbook::new(),
        ConversionTable::new(),
        IngredientParser::default(),
        Rounding::default(),
        Arc::new(FailingStore),
    )
}

// ============================================================================
// Recipe Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_add_from_text_parses_and_saves() {
    let (service, store) = memory_service();
    let id = service
        .add_recipe_from_text(
            RecipeDraft::new("Wild rice soup", 4.0).with_tag("soup"),
            SAMPLE_INGREDIENTS,
            "anna",
        )
        .await
        .unwrap();

    assert_eq!(id, 10);
    let recipe = service.find(id).await.unwrap();
    assert_eq!(recipe.ingredients().len(), 12);
    assert_eq!(recipe.created_by(), "anna");
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.saved_cookbook().await.find(id).unwrap(), recipe);
}

#[tokio::test]
async fn test_invalid_drafts_are_rejected() {
    let (service, store) = memory_service();

    let blank = service.add_recipe(RecipeDraft::new("  ", 4.0), "anna").await;
    assert_eq!(blank.unwrap_err().code, ErrorCode::InvalidInput);

    let zero = service.add_recipe(RecipeDraft::new("Soep", 0.0), "anna").await;
    assert_eq!(zero.unwrap_err().code, ErrorCode::ValueOutOfRange);

    let nan = service.add_recipe(RecipeDraft::new("Soep", f64::NAN), "anna").await;
    assert!(nan.is_err());

    assert_eq!(store.save_count(), 0);
    assert!(service.list().await.is_empty());
}

#[tokio::test]
async fn test_unknown_recipe_is_not_found() {
    let (service, _store) = memory_service();
    let error = service.find(40).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.http_status(), 404);

    assert!(service.remove_recipe(40).await.is_err());
    assert!(service
        .update_recipe(40, RecipeDraft::new("x", 1.0), "anna")
        .await
        .is_err());
    assert!(service.adjust_portions(40, 2.0).await.is_err());
}

#[tokio::test]
async fn test_update_and_remove_are_persisted() {
    let (service, store) = memory_service();
    let id = service
        .add_recipe(gram_draft("Brood", 4.0, 500.0, "bloem"), "anna")
        .await
        .unwrap();

    let draft = service.find(id).await.unwrap().to_draft().with_notes("Overnight rijzen");
    let updated = service.update_recipe(id, draft, "bram").await.unwrap();
    assert_eq!(updated.notes(), "Overnight rijzen");
    assert_eq!(updated.updated_by(), "bram");
    assert_eq!(store.saved_cookbook().await.find(id).unwrap().notes(), "Overnight rijzen");

    let removed = service.remove_recipe(id).await.unwrap();
    assert_eq!(removed.name(), "Brood");
    assert!(store.saved_cookbook().await.is_empty());
    assert_eq!(store.save_count(), 3);
}

#[tokio::test]
async fn test_adjust_portions_leaves_stored_recipe() {
    let (service, _store) = memory_service();
    let id = service
        .add_recipe(gram_draft("Brood", 4.0, 100.0, "bloem"), "anna")
        .await
        .unwrap();

    let scaled = service.adjust_portions(id, 8.0).await.unwrap();
    assert_eq!(scaled.ingredients()[0].amount(), 200.0);
    assert_eq!(service.find(id).await.unwrap().ingredients()[0].amount(), 100.0);

    let error = service.adjust_portions(id, -1.0).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_search_list_and_tags() {
    let (service, _store) = memory_service();
    service
        .add_recipe(gram_draft("Pannenkoeken", 4.0, 250.0, "bloem").with_tag("zoet"), "anna")
        .await
        .unwrap();
    service
        .add_recipe_from_text(
            RecipeDraft::new("Champignonsoep", 4.0).with_tag("soep"),
            SAMPLE_INGREDIENTS,
            "anna",
        )
        .await
        .unwrap();

    let found = service.search("MUSHROOM").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Champignonsoep");

    let names: Vec<String> = service.list().await.iter().map(|r| r.name().to_owned()).collect();
    assert_eq!(names, vec!["Champignonsoep", "Pannenkoeken"]);
    assert_eq!(service.all_tags().await, vec!["soep", "zoet"]);
}

// ============================================================================
// Density Tests
// ============================================================================

#[tokio::test]
async fn test_density_edit_changes_rendering() {
    let (service, store) = memory_service();
    let id = service
        .add_recipe(gram_draft("Brood", 4.0, 100.0, "bloem"), "anna")
        .await
        .unwrap();
    let recipe = service.find(id).await.unwrap();

    assert_eq!(service.render_ingredients(&recipe).await, vec!["100 g bloem"]);

    assert_eq!(service.set_density("Bloem", 2.0).await.unwrap(), None);
    assert_eq!(
        service.render_ingredients(&recipe).await,
        vec!["100 g bloem (200 ml / 0.8 cup)"]
    );
    assert_eq!(store.saved_conversion_table().await.density("bloem"), Some(2.0));
    assert_eq!(service.densities().await, vec![("bloem".to_owned(), 2.0)]);

    assert_eq!(service.remove_density("bloem").await.unwrap(), Some(2.0));
    assert_eq!(service.remove_density("bloem").await.unwrap(), None);
    assert!(service.conversion_table().await.is_empty());
}

#[tokio::test]
async fn test_invalid_density_is_rejected() {
    let (service, store) = memory_service();
    let error = service.set_density("melk", 0.0).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(store.save_count(), 0);
}

// ============================================================================
// Failure And Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_failed_save_leaves_state_unchanged() {
    let service = failing_service();

    let error = service
        .add_recipe(gram_draft("Brood", 4.0, 100.0, "bloem"), "anna")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(service.list().await.is_empty());

    assert!(service.set_density("bloem", 2.0).await.is_err());
    assert!(service.conversion_table().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_get_distinct_ids() {
    let (service, store) = memory_service();

    let handles: Vec<_> = (0..20)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .add_recipe(gram_draft(&format!("recept {n}"), 2.0, 100.0, "bloem"), "anna")
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert!(ids.iter().all(|id| id % 10 == 0 && *id >= 10 && *id <= 200));
    assert_eq!(store.saved_cookbook().await.len(), 20);
    assert_eq!(store.save_count(), 20);
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_open_creates_folder_and_reopens() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = CookbookConfig::default().with_data_dir(dir.path().join("data"));

    let service = CookbookService::open(&config).await.unwrap();
    let id = service
        .add_recipe_from_text(RecipeDraft::new("Soep", 4.0), SAMPLE_INGREDIENTS, "anna")
        .await
        .unwrap();
    service.set_density("chopped carrots", 1.6).await.unwrap();
    service.remove_recipe(id).await.unwrap();
    assert!(config.recipes_path().exists());
    assert!(config.conversion_path().exists());

    let reopened = CookbookService::open(&config).await.unwrap();
    assert!(reopened.list().await.is_empty());
    assert_eq!(reopened.densities().await.len(), 1);
    let next = reopened
        .add_recipe(RecipeDraft::new("Brood", 2.0), "anna")
        .await
        .unwrap();
    assert_eq!(next, 20);
}

#[tokio::test]
async fn test_export_matches_stored_form() {
    let (service, _store) = memory_service();
    service.set_density("bloem", 2.0).await.unwrap();
    service
        .add_recipe(gram_draft("Brood", 4.0, 100.0, "bloem"), "anna")
        .await
        .unwrap();

    assert_eq!(
        service.export_conversion_json().await.unwrap(),
        "{\n    \"bloem\": 2.0\n}"
    );
    let recipes: serde_json::Value =
        serde_json::from_str(&service.export_recipes_json().await.unwrap()).unwrap();
    assert_eq!(recipes["last_id"], 10);
    assert_eq!(recipes["recipes"][0]["ingredients"][0]["unit"], "g");
}

#[tokio::test]
async fn test_parser_uses_service_aliases() {
    let (service, _store) = memory_service();
    let parsed = service.parse_ingredients("2 el olie\n1 kg bloem");
    assert_eq!(parsed[0].unit(), Some(Unit::Tablespoon));
    assert_eq!(parsed[1].amount(), 1000.0);
    assert_eq!(service.rounding(), Rounding::default());
}
