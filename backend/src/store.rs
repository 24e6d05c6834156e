//! Article persistence on top of sea-orm.

use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Schema,
};
use tokio::time::sleep;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{article, Article, ArticleDraft};

/// Opens the connection pool, retrying while the database comes up.
pub async fn connect(config: &Config) -> std::result::Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let mut attempt = 1;
    loop {
        match Database::connect(options.clone()).await {
            Ok(db) => {
                tracing::info!(attempt, "connected to database");
                return Ok(db);
            }
            Err(err) if attempt < config.connect_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = config.connect_attempts,
                    error = %err,
                    "database not reachable, retrying"
                );
                sleep(config.connect_backoff).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Creates the `articles` table if it is missing.
pub async fn create_schema(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let mut table = schema.create_table_from_entity(article::Entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct ArticleStore {
    db: DatabaseConnection,
}

impl ArticleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// All articles, oldest first.
    pub async fn find_all(&self) -> Result<Vec<Article>> {
        let articles = article::Entity::find()
            .order_by_asc(article::Column::Id)
            .all(&self.db)
            .await?;
        tracing::debug!(count = articles.len(), "loaded articles");
        Ok(articles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>> {
        Ok(article::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Like [`find_by_id`](Self::find_by_id), with absence as an error.
    pub async fn get(&self, id: i32) -> Result<Article> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::ArticleNotFound(id))
    }

    /// Inserts a draft without an id, or updates the row a draft points to.
    ///
    /// `created_at` is stamped on insert only.
    pub async fn save(&self, draft: &ArticleDraft) -> Result<Article> {
        match draft.id {
            None => {
                let row = article::ActiveModel {
                    title: Set(draft.title.clone()),
                    content: Set(draft.content.clone()),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                };
                let saved = row.insert(&self.db).await?;
                tracing::info!(id = saved.id, "article created");
                Ok(saved)
            }
            Some(id) => {
                let row = article::ActiveModel {
                    id: Unchanged(id),
                    title: Set(draft.title.clone()),
                    content: Set(draft.content.clone()),
                    ..Default::default()
                };
                match row.update(&self.db).await {
                    Ok(saved) => {
                        tracing::info!(id, "article updated");
                        Ok(saved)
                    }
                    Err(DbErr::RecordNotUpdated) => Err(AppError::ArticleNotFound(id)),
                    Err(err) => Err(err.into()),
                }
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = article::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::ArticleNotFound(id));
        }
        tracing::info!(id, "article deleted");
        Ok(())
    }
}
