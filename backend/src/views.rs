//! Template rendering and redirects.

use std::path::Path;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera};

use crate::config::Config;
use crate::error::Result;
use crate::utils::flash::Flash;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("blog/home.html", include_str!("../templates/blog/home.html")),
    ("blog/index.html", include_str!("../templates/blog/index.html")),
    ("blog/show.html", include_str!("../templates/blog/show.html")),
    ("blog/form.html", include_str!("../templates/blog/form.html")),
];

/// Renders pages from named templates.
///
/// Templates ship inside the binary. A template directory given in the
/// config shadows embedded templates with the same relative name.
#[derive(Clone, Debug)]
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    pub fn new() -> std::result::Result<Self, tera::Error> {
        Ok(Self { tera: embedded()? })
    }

    pub fn with_overrides(dir: &Path) -> std::result::Result<Self, tera::Error> {
        let glob = format!("{}/**/*.html", dir.display());
        let mut tera = Tera::parse(&glob)?;
        // `extend` keeps what is already there, so overrides win.
        tera.extend(&embedded()?)?;
        tracing::info!(dir = %dir.display(), "loaded template overrides");
        Ok(Self { tera })
    }

    pub fn from_config(config: &Config) -> std::result::Result<Self, tera::Error> {
        match &config.template_dir {
            Some(dir) => Self::with_overrides(dir),
            None => Self::new(),
        }
    }

    pub fn render_to_string(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<HttpResponse> {
        let html = self.render_to_string(template, context)?;
        Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
    }

    /// `302 Found` to the path of a named route.
    pub fn redirect<U, I>(&self, req: &HttpRequest, route: &str, params: U) -> Result<HttpResponse>
    where
        U: IntoIterator<Item = I>,
        I: AsRef<str>,
    {
        let url = req.url_for(route, params)?;
        Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, url.path()))
            .finish())
    }

    /// Same as [`redirect`](Self::redirect), leaving a notice for the next page.
    pub fn redirect_with_flash<U, I>(
        &self,
        req: &HttpRequest,
        route: &str,
        params: U,
        flash: &Flash,
    ) -> Result<HttpResponse>
    where
        U: IntoIterator<Item = I>,
        I: AsRef<str>,
    {
        let url = req.url_for(route, params)?;
        Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, url.path()))
            .cookie(flash.to_cookie())
            .finish())
    }
}

fn embedded() -> std::result::Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}
