use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_catalog_contracts::{BlogPostFilter, CatalogFeatureService, ProjectFilter};
use portfolio_models::catalog::{BlogPostId, ProjectTag};
use tracing::debug;

use super::{error, not_found};
use crate::models::catalog::{
    ApiBlogPost, ApiBlogPostsQuery, ApiDeveloperProfile, ApiProject, ApiProjectsQuery,
};

pub fn router(service: Arc<impl CatalogFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/profile", routing::get(get_profile))
        .route("/api/projects", routing::get(list_projects))
        .route("/api/projects/tags", routing::get(list_project_tags))
        .route("/api/blog-posts", routing::get(list_blog_posts))
        .route("/api/blog-posts/:id", routing::get(get_blog_post))
        .with_state(service)
}

async fn get_profile(service: State<Arc<impl CatalogFeatureService>>) -> Response {
    Json(ApiDeveloperProfile::from(service.get_profile())).into_response()
}

async fn list_projects(
    service: State<Arc<impl CatalogFeatureService>>,
    query: Result<Query<ApiProjectsQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return invalid_query(rejection),
    };

    let tag = match query.tag.as_deref().map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => match ProjectTag::try_new(tag) {
            Ok(tag) => Some(tag),
            // no project can carry a tag that does not pass validation
            Err(_) => return Json(Vec::<ApiProject>::new()).into_response(),
        },
        None => None,
    };

    let projects = service
        .list_projects(ProjectFilter {
            tag,
            featured: query.featured,
        })
        .into_iter()
        .map(ApiProject::from)
        .collect::<Vec<_>>();

    Json(projects).into_response()
}

async fn list_project_tags(service: State<Arc<impl CatalogFeatureService>>) -> Response {
    Json(service.list_project_tags()).into_response()
}

async fn list_blog_posts(
    service: State<Arc<impl CatalogFeatureService>>,
    query: Result<Query<ApiBlogPostsQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return invalid_query(rejection),
    };

    let category = query.category.filter(|category| !category.trim().is_empty());

    let posts = service
        .list_blog_posts(BlogPostFilter { category })
        .into_iter()
        .map(ApiBlogPost::from)
        .collect::<Vec<_>>();

    Json(posts).into_response()
}

async fn get_blog_post(
    service: State<Arc<impl CatalogFeatureService>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return not_found().await;
    };

    match service.get_blog_post(BlogPostId::new(id)) {
        Some(post) => Json(ApiBlogPost::from(post)).into_response(),
        None => not_found().await,
    }
}

fn invalid_query(rejection: QueryRejection) -> Response {
    debug!(rejection = %rejection.body_text(), "rejected query string");
    error(StatusCode::BAD_REQUEST, "Invalid query parameters")
}
