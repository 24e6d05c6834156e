#![allow(dead_code)]

use std::time::Duration;

use blog_backend::{store, ArticleStore, Config};
use tempfile::TempDir;

/// A store over a fresh SQLite file, removed when dropped.
pub struct TestStore {
    pub store: ArticleStore,
    _dir: TempDir,
}

pub async fn test_store() -> TestStore {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("blog.db").display()),
        connect_attempts: 1,
        connect_backoff: Duration::ZERO,
        max_connections: 1,
        ..Config::default()
    };
    let db = store::connect(&config).await.expect("connect");
    store::create_schema(&db).await.expect("schema");
    TestStore {
        store: ArticleStore::new(db),
        _dir: dir,
    }
}
