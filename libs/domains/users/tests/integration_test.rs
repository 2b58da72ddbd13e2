//! Integration tests for the Users domain
//!
//! These run the Postgres repository against a real database via
//! testcontainers, so the UNIQUE index and id sequence are the ones
//! production uses. Requires Docker: `cargo test -- --ignored`.

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn valid(name: &str, email: &str, phone: &str) -> ValidUser {
    UserDraft::new(name, email, phone).validate_fields().unwrap()
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let created = repo
        .create(valid(&builder.name(), &builder.email("main"), &builder.phone()))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.email, builder.email("main"));

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, created.name);
    assert_eq!(found.phone, created.phone);
    assert!(repo.find_by_id(10000).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unique_violation_maps_to_conflict() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    repo.create(valid("Ram", "ram@ram.com", "9812345678"))
        .await
        .unwrap();
    let result = repo.create(valid("Shyam", "ram@ram.com", "1234567")).await;

    assert!(matches!(result, Err(UserError::EmailConflict(email)) if email == "ram@ram.com"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_and_patch() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let ram = repo
        .create(valid("Ram", "ram@ram.com", "9812345678"))
        .await
        .unwrap();
    let hari = repo
        .create(valid("Hari", "hari@hari.com", "1234567"))
        .await
        .unwrap();

    let replaced = repo
        .update(ram.id, valid("Ram Kumar", "ram@ram.com", "7654321"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.name, "Ram Kumar");
    assert_eq!(replaced.created_at, ram.created_at);

    let conflict = repo
        .update(hari.id, valid("Hari", "ram@ram.com", "1234567"))
        .await;
    assert!(matches!(conflict, Err(UserError::EmailConflict(_))));

    let patched = repo
        .patch(
            hari.id,
            UserPayload {
                phone: Some("9800000000".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(patched.name, "Hari");
    assert_eq!(patched.phone, "9800000000");

    assert!(repo
        .update(10000, valid("Nobody", "nobody@example.com", "1234567"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_delete_and_count() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    for (name, email) in [("Ram", "a@a.com"), ("Hari", "b@b.com"), ("Sita", "c@c.com")] {
        repo.create(valid(name, email, "1234567")).await.unwrap();
    }

    let ids: Vec<UserId> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert!(repo.delete(2).await.unwrap());
    assert!(!repo.delete(2).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 2);

    db.truncate_users().await;
    assert!(repo.find_all().await.unwrap().is_empty());
}
