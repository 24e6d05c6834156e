//! Binding and validation of the article form.

use std::collections::BTreeMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::ArticleDraft;

/// Raw fields posted by the article form. Missing fields decode as empty.
///
/// Values are trimmed when bound, so blank input fails the `min = 1` checks.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct ArticleInput {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Le titre doit contenir entre 1 et 255 caractères"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Le contenu ne peut pas être vide"))]
    pub content: String,
}

/// Messages per field name, in field order.
pub type FormErrors = BTreeMap<String, Vec<String>>;

/// The article form after a request went through it.
#[derive(Clone, Debug, Serialize)]
pub struct ArticleForm {
    pub article: ArticleDraft,
    pub submitted: bool,
    pub errors: FormErrors,
}

impl ArticleForm {
    /// Binds whatever the request carried onto `article`.
    ///
    /// Only a POST with a decoded body counts as a submission; anything else
    /// leaves the draft as it was and reports no errors.
    pub fn handle_request(
        method: &Method,
        input: Option<ArticleInput>,
        mut article: ArticleDraft,
    ) -> Self {
        let input = match input {
            Some(input) if *method == Method::POST => input.trimmed(),
            _ => {
                return Self {
                    article,
                    submitted: false,
                    errors: FormErrors::new(),
                }
            }
        };

        let errors = match input.validate() {
            Ok(()) => FormErrors::new(),
            Err(errors) => collect_errors(&errors),
        };
        article.title = input.title;
        article.content = input.content;

        Self {
            article,
            submitted: true,
            errors,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True once the draft may be persisted.
    pub fn is_ready(&self) -> bool {
        self.is_submitted() && self.is_valid()
    }
}

impl ArticleInput {
    fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

fn collect_errors(errors: &ValidationErrors) -> FormErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", e.code))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn post(title: &str, content: &str, article: ArticleDraft) -> ArticleForm {
        ArticleForm::handle_request(&Method::POST, input(title, content), article)
    }

    fn input(title: &str, content: &str) -> Option<ArticleInput> {
        Some(ArticleInput {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    #[rstest]
    fn get_request_is_not_a_submission() {
        let form = ArticleForm::handle_request(
            &Method::GET,
            input("Hello", "World"),
            ArticleDraft::default(),
        );

        assert!(!form.is_submitted());
        assert!(form.errors.is_empty());
        assert_eq!(form.article, ArticleDraft::default());
    }

    #[rstest]
    fn post_without_body_is_not_a_submission() {
        let form = ArticleForm::handle_request(&Method::POST, None, ArticleDraft::default());

        assert!(!form.is_submitted());
        assert!(!form.is_ready());
    }

    #[rstest]
    fn valid_post_binds_fields() {
        let form = post("Hello", "World", ArticleDraft::default());

        assert!(form.is_ready());
        assert_eq!(form.article.title, "Hello");
        assert_eq!(form.article.content, "World");
        assert_eq!(form.article.id, None);
    }

    #[rstest]
    fn binding_keeps_the_id_of_an_existing_article() {
        let existing = ArticleDraft {
            id: Some(4),
            title: "Old".into(),
            content: "Old body".into(),
        };
        let form = post("New", "New body", existing);

        assert!(form.is_ready());
        assert_eq!(form.article.id, Some(4));
        assert_eq!(form.article.title, "New");
    }

    #[rstest]
    #[case("", "World", "title")]
    #[case("   ", "World", "title")]
    #[case("Hello", "", "content")]
    #[case("Hello", " \n\t ", "content")]
    fn missing_field_is_reported(
        #[case] title: &str,
        #[case] content: &str,
        #[case] field: &str,
    ) {
        let form = post(title, content, ArticleDraft::default());

        assert!(form.is_submitted());
        assert!(!form.is_valid());
        assert_eq!(form.errors.len(), 1);
        assert!(!form.errors[field].is_empty());
    }

    #[rstest]
    fn invalid_values_stay_bound_for_redisplay() {
        let form = post("", "Draft body", ArticleDraft::default());

        assert!(!form.is_ready());
        assert_eq!(form.article.content, "Draft body");
    }

    #[rstest]
    fn surrounding_whitespace_is_trimmed() {
        let form = post("  Hello  ", "\n World \n", ArticleDraft::default());

        assert!(form.is_ready());
        assert_eq!(form.article.title, "Hello");
        assert_eq!(form.article.content, "World");
    }

    #[rstest]
    fn overlong_title_is_rejected() {
        let title = "x".repeat(256);
        let form = post(&title, "body", ArticleDraft::default());

        assert!(form.errors.contains_key("title"));
    }
}
