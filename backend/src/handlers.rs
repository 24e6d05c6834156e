use actix_web::http::{header::ContentType, Method};
use actix_web::{web, HttpRequest, HttpResponse};
use tera::Context;

use crate::error::{AppError, Result};
use crate::forms::{ArticleForm, ArticleInput};
use crate::models::ArticleDraft;
use crate::store::ArticleStore;
use crate::utils::flash::Flash;
use crate::views::ViewRenderer;

pub const DELETED_NOTICE: &str = "L'article a bien été supprimé !";

pub async fn home(views: web::Data<ViewRenderer>) -> Result<HttpResponse> {
    let mut ctx = Context::new();
    ctx.insert("title", "Bienvenue sur le blog");
    ctx.insert("age", &28);
    views.render("blog/home.html", &ctx)
}

pub async fn index(
    req: HttpRequest,
    store: web::Data<ArticleStore>,
    views: web::Data<ViewRenderer>,
) -> Result<HttpResponse> {
    let articles = store.find_all().await?;
    let mut ctx = Context::new();
    ctx.insert("articles", &articles);

    let Some(flash) = Flash::from_request(&req) else {
        return views.render("blog/index.html", &ctx);
    };
    ctx.insert("flash", &flash);
    let html = views.render_to_string("blog/index.html", &ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .cookie(Flash::removal_cookie())
        .body(html))
}

pub async fn show(
    path: web::Path<i32>,
    store: web::Data<ArticleStore>,
    views: web::Data<ViewRenderer>,
) -> Result<HttpResponse> {
    let article = store.get(path.into_inner()).await?;
    let mut ctx = Context::new();
    ctx.insert("article", &article);
    views.render("blog/show.html", &ctx)
}

pub async fn create(
    req: HttpRequest,
    input: FormInput,
    store: web::Data<ArticleStore>,
    views: web::Data<ViewRenderer>,
) -> actix_web::Result<HttpResponse> {
    let input = submitted_fields(&req, input)?;
    Ok(article_form(&req, ArticleDraft::default(), input, &store, &views).await?)
}

pub async fn edit(
    req: HttpRequest,
    path: web::Path<i32>,
    input: FormInput,
    store: web::Data<ArticleStore>,
    views: web::Data<ViewRenderer>,
) -> actix_web::Result<HttpResponse> {
    let article = store.get(path.into_inner()).await?;
    let input = submitted_fields(&req, input)?;
    Ok(article_form(&req, ArticleDraft::from(article), input, &store, &views).await?)
}

type FormInput = std::result::Result<web::Form<ArticleInput>, actix_web::Error>;

// A GET carries no form body, so a decode failure there just means "not
// submitted". On POST the failure (oversized or malformed body) is the answer.
fn submitted_fields(
    req: &HttpRequest,
    input: FormInput,
) -> actix_web::Result<Option<ArticleInput>> {
    match input {
        Ok(form) => Ok(Some(form.into_inner())),
        Err(err) if *req.method() == Method::POST => {
            tracing::warn!(error = %err, "article form body rejected");
            Err(err)
        }
        Err(_) => Ok(None),
    }
}

// Shared by create and edit: persist and redirect on a valid submission,
// otherwise (re)display the form.
async fn article_form(
    req: &HttpRequest,
    draft: ArticleDraft,
    input: Option<ArticleInput>,
    store: &ArticleStore,
    views: &ViewRenderer,
) -> Result<HttpResponse> {
    let form = ArticleForm::handle_request(req.method(), input, draft);
    if form.is_ready() {
        let saved = store.save(&form.article).await?;
        return views.redirect(req, "blog_show", [saved.id.to_string()]);
    }
    if form.is_submitted() {
        tracing::debug!(errors = ?form.errors, "article form rejected");
    }

    let mut ctx = Context::new();
    ctx.insert("form", &form);
    views.render("blog/form.html", &ctx)
}

pub async fn delete(
    req: HttpRequest,
    path: web::Path<i32>,
    store: web::Data<ArticleStore>,
    views: web::Data<ViewRenderer>,
) -> Result<HttpResponse> {
    store.delete(path.into_inner()).await?;
    views.redirect_with_flash(
        &req,
        "app_blog",
        std::iter::empty::<&str>(),
        &Flash::success(DELETED_NOTICE),
    )
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(AppError::RouteNotFound(req.path().to_string()))
}
