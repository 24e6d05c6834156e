pub mod article;

pub use article::{ArticleDraft, Model as Article};
