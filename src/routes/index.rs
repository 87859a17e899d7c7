use std::str::FromStr;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use bleiner_content::{
    CategoryFilter, FLEET, LICENSES, License, Project, ProjectCategory, SERVICES, SLIDES,
    Service, Slide, Vehicle, filter_projects, slide_index,
};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

use super::contact::ContactFormTemplate;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub slides: &'static [Slide],
    pub slide_index: usize,
    pub prev_slide: usize,
    pub next_slide: usize,
    pub services: &'static [Service],
    pub categories: &'static [ProjectCategory],
    pub filter_tag: &'static str,
    pub projects: Vec<&'static Project>,
    pub fleet: &'static [Vehicle],
    pub licenses: &'static [License],
    pub site: crate::config::SiteConfig,
    pub contact: String,
}

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    pub category: Option<String>,
    pub slide: Option<String>,
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    // Unknown tags fall back to the full gallery.
    let filter = query
        .category
        .as_deref()
        .and_then(|tag| CategoryFilter::from_str(tag).ok())
        .unwrap_or_default();

    let requested = query
        .slide
        .as_deref()
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(0);
    let slide = slide_index(requested);

    let contact = template.to_string(ContactFormTemplate::default());

    template.render(IndexTemplate {
        slides: SLIDES,
        slide_index: slide,
        prev_slide: slide_index(slide + SLIDES.len() - 1),
        next_slide: slide_index(slide + 1),
        services: SERVICES,
        categories: ProjectCategory::VARIANTS,
        filter_tag: filter.tag(),
        projects: filter_projects(filter),
        fleet: FLEET,
        licenses: LICENSES,
        site: app_state.config.site.clone(),
        contact,
    })
}
