use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use blog_backend::{routes, store, telemetry, ArticleStore, Config, ViewRenderer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    telemetry::init_tracing(config.log_json);

    let db = store::connect(&config)
        .await
        .context("cannot connect to the database")?;
    store::create_schema(&db)
        .await
        .context("cannot create the articles table")?;

    let store = web::Data::new(ArticleStore::new(db));
    let views =
        web::Data::new(ViewRenderer::from_config(&config).context("cannot load templates")?);

    tracing::info!(bind = %config.bind_addr, "starting blog server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(views.clone())
            .configure(routes)
    })
    .bind(config.bind_addr.as_str())
    .with_context(|| format!("cannot bind {}", config.bind_addr))?
    .run()
    .await?;

    Ok(())
}
