use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    // Written once on insert, never part of an update.
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

/// An editable article that may not have been saved yet.
///
/// The `new` route starts from [`ArticleDraft::default`]; the `edit` route
/// starts from an existing row. Either way the form binds onto the draft and
/// [`crate::store::ArticleStore::save`] decides between insert and update
/// from `id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArticleDraft {
    pub id: Option<i32>,
    pub title: String,
    pub content: String,
}

impl From<Model> for ArticleDraft {
    fn from(article: Model) -> Self {
        Self {
            id: Some(article.id),
            title: article.title,
            content: article.content,
        }
    }
}
