//! A small server-rendered blog: list, read, write, edit and delete articles.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod utils;
pub mod views;

use actix_web::web;

pub use config::Config;
pub use error::AppError;
pub use store::ArticleStore;
pub use views::ViewRenderer;

/// Largest accepted article form body, well above any sensible post.
pub const MAX_FORM_BYTES: usize = 20 * 1024 * 1024;

/// Registers every route. Route names are what redirects resolve against.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(MAX_FORM_BYTES))
        .service(
            web::resource("/")
                .name("home")
                .route(web::get().to(handlers::home)),
        )
        .service(
            web::resource("/blog")
                .name("app_blog")
                .route(web::get().to(handlers::index)),
        )
        .service(
            web::resource("/blog/show/{id}")
                .name("blog_show")
                .route(web::get().to(handlers::show)),
        )
        .service(
            web::resource("/blog/new")
                .name("blog_create")
                .route(web::get().to(handlers::create))
                .route(web::post().to(handlers::create)),
        )
        .service(
            web::resource("/blog/edit/{id}")
                .name("blog_edit")
                .route(web::get().to(handlers::edit))
                .route(web::post().to(handlers::edit)),
        )
        .service(
            web::resource("/blog/delete/{id}")
                .name("blog_delete")
                .route(web::get().to(handlers::delete)),
        )
        .default_service(web::to(handlers::not_found));
}
