mod common;

use blog_backend::models::ArticleDraft;
use blog_backend::{store, AppError};
use chrono::{Duration, Utc};
use common::test_store;

fn draft(title: &str, content: &str) -> ArticleDraft {
    ArticleDraft {
        id: None,
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[actix_web::test]
async fn insert_assigns_id_and_creation_time() {
    let db = test_store().await;
    let before = Utc::now() - Duration::seconds(1);

    let saved = db.store.save(&draft("Hello", "World")).await.unwrap();

    assert_eq!(saved.id, 1);
    assert_eq!(saved.title, "Hello");
    assert!(saved.created_at >= before);
    assert!(saved.created_at <= Utc::now() + Duration::seconds(1));

    let listed = db.store.find_all().await.unwrap();
    assert_eq!(listed, vec![saved]);
}

#[actix_web::test]
async fn find_all_keeps_insertion_order() {
    let db = test_store().await;
    for title in ["first", "second", "third"] {
        db.store.save(&draft(title, "body")).await.unwrap();
    }

    let titles: Vec<_> = db
        .store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();

    assert_eq!(titles, ["first", "second", "third"]);
}

#[actix_web::test]
async fn update_keeps_id_and_creation_time() {
    let db = test_store().await;
    let original = db.store.save(&draft("Hello", "World")).await.unwrap();

    let mut edited = ArticleDraft::from(original.clone());
    edited.title = "Hello again".into();
    edited.content = "Edited".into();
    let updated = db.store.save(&edited).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    let stored = db.store.find_by_id(original.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Hello again");
    assert_eq!(stored.content, "Edited");
    assert_eq!(stored.created_at, original.created_at);
    assert_eq!(db.store.find_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn update_of_missing_row_is_not_found() {
    let db = test_store().await;
    let ghost = ArticleDraft {
        id: Some(42),
        ..draft("t", "c")
    };

    let err = db.store.save(&ghost).await.unwrap_err();

    assert!(matches!(err, AppError::ArticleNotFound(42)));
    assert!(db.store.find_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn delete_removes_the_row() {
    let db = test_store().await;
    let kept = db.store.save(&draft("kept", "body")).await.unwrap();
    let gone = db.store.save(&draft("gone", "body")).await.unwrap();

    db.store.delete(gone.id).await.unwrap();

    assert_eq!(db.store.find_by_id(gone.id).await.unwrap(), None);
    assert_eq!(db.store.find_all().await.unwrap(), vec![kept]);
}

#[actix_web::test]
async fn delete_of_missing_row_is_not_found() {
    let db = test_store().await;

    let err = db.store.delete(999).await.unwrap_err();

    assert!(matches!(err, AppError::ArticleNotFound(999)));
}

#[actix_web::test]
async fn get_reports_absence() {
    let db = test_store().await;

    assert!(matches!(
        db.store.get(7).await.unwrap_err(),
        AppError::ArticleNotFound(7)
    ));
}

#[actix_web::test]
async fn schema_creation_is_idempotent() {
    let db = test_store().await;
    db.store.save(&draft("survives", "body")).await.unwrap();

    store::create_schema(db.store.connection()).await.unwrap();

    assert_eq!(db.store.find_all().await.unwrap().len(), 1);
}
