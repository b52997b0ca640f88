use super::*;
use crate::models::Patch;
use std::collections::HashSet;
use tracing_test::traced_test;

fn corolla() -> CarInput {
    CarInput {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        color: "blue".to_string(),
        price: 20000.0,
    }
}

fn civic() -> CarInput {
    CarInput {
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        year: 2019,
        color: "white".to_string(),
        price: 15500.5,
    }
}

fn color_patch(color: &str) -> CarPatch {
    CarPatch {
        color: Patch::Set(color.to_string()),
        ..CarPatch::default()
    }
}

#[tokio::test]
async fn create_should_assign_fresh_ids_and_equal_timestamps() {
    let repo = CarRepository::new();
    let mut ids = HashSet::new();

    for _ in 0..50 {
        let car = repo.create(corolla()).await;
        assert!(!car.id.is_empty());
        assert_eq!(car.created_at, car.updated_at);
        assert!(ids.insert(car.id));
    }

    assert_eq!(repo.len().await, 50);
}

#[tokio::test]
async fn get_should_return_stored_copy() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    let fetched = repo.get(&created.id).await.expect("car should exist");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_all_should_return_every_car() {
    let repo = CarRepository::new();
    assert!(repo.is_empty().await);

    let a = repo.create(corolla()).await;
    let b = repo.create(civic()).await;

    let ids: HashSet<String> = repo.list_all().await.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([a.id, b.id]));
}

#[tokio::test]
async fn list_all_should_not_see_later_writes() {
    let repo = CarRepository::new();
    let car = repo.create(corolla()).await;

    let snapshot = repo.list_all().await;
    repo.merge(&car.id, &color_patch("red")).await.unwrap();

    assert_eq!(snapshot[0].color, "blue");
}

#[tokio::test]
async fn replace_should_keep_identity_and_overwrite_fields() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    let replaced = repo
        .replace(&created.id, civic())
        .await
        .expect("car should exist");

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);
    assert_eq!(replaced.input(), civic());
    assert_eq!(repo.get(&created.id).await, Some(replaced));
}

#[tokio::test]
async fn merge_single_field_should_change_only_that_field() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    let merged = repo
        .merge(&created.id, &color_patch("red"))
        .await
        .unwrap()
        .expect("car should exist");

    assert_eq!(merged.color, "red");
    assert_eq!(merged.make, created.make);
    assert_eq!(merged.model, created.model);
    assert_eq!(merged.year, created.year);
    assert_eq!(merged.price, created.price);
    assert_eq!(merged.id, created.id);
    assert_eq!(merged.created_at, created.created_at);
    assert!(merged.updated_at >= created.updated_at);
}

#[tokio::test]
async fn merge_with_same_value_still_counts_as_set() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    let merged = repo.merge(&created.id, &color_patch("blue")).await;
    assert!(matches!(merged, Ok(Some(_))));
}

#[tokio::test]
async fn merge_empty_patch_should_fail_for_known_and_unknown_ids() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    assert_eq!(
        repo.merge(&created.id, &CarPatch::default()).await,
        Err(RepositoryError::EmptyUpdate)
    );
    assert_eq!(
        repo.merge("missing", &CarPatch::default()).await,
        Err(RepositoryError::EmptyUpdate)
    );
    assert_eq!(repo.get(&created.id).await, Some(created));
}

#[tokio::test]
async fn missing_id_should_be_reported_not_raised() {
    let repo = CarRepository::new();

    assert_eq!(repo.get("missing").await, None);
    assert_eq!(repo.replace("missing", corolla()).await, None);
    assert_eq!(repo.merge("missing", &color_patch("red")).await, Ok(None));
    assert!(!repo.delete("missing").await);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn delete_should_be_idempotent() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;

    assert!(repo.delete(&created.id).await);
    assert!(!repo.delete(&created.id).await);
    assert_eq!(repo.get(&created.id).await, None);
}

#[tokio::test]
async fn clones_should_share_the_same_store() {
    let repo = CarRepository::new();
    let other = repo.clone();

    let created = repo.create(corolla()).await;
    assert_eq!(other.get(&created.id).await, Some(created));
}

#[tokio::test]
async fn concurrent_creates_should_all_land() {
    let repo = CarRepository::new();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(civic()).await.id })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(repo.len().await, 20);
}

#[tokio::test]
#[traced_test]
async fn writes_should_be_logged() {
    let repo = CarRepository::new();
    let created = repo.create(corolla()).await;
    repo.delete(&created.id).await;

    assert!(logs_contain("Successfully created car"));
    assert!(logs_contain("Successfully deleted car"));
    assert!(logs_contain(&created.id));
}
