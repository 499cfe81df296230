use std::sync::Arc;

use portfolio_core_catalog_contracts::{BlogPostFilter, CatalogFeatureService, ProjectFilter};
use portfolio_models::catalog::{
    BlogPost, BlogPostId, Catalog, DeveloperProfile, Project, ProjectTag,
};

#[derive(Debug, Clone)]
pub struct CatalogFeatureServiceImpl {
    catalog: Arc<Catalog>,
}

impl CatalogFeatureServiceImpl {
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }
}

impl CatalogFeatureService for CatalogFeatureServiceImpl {
    #[tracing::instrument(level = "trace", skip(self))]
    fn list_projects(&self, filter: ProjectFilter) -> Vec<Project> {
        self.catalog
            .projects
            .iter()
            .filter(|project| filter.tag.as_ref().is_none_or(|tag| project.has_tag(tag)))
            .filter(|project| filter.featured.is_none_or(|featured| project.featured == featured))
            .cloned()
            .collect()
    }

    fn list_project_tags(&self) -> Vec<ProjectTag> {
        let mut tags = Vec::<ProjectTag>::new();
        for tag in self.catalog.projects.iter().flat_map(|p| &p.tags) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn list_blog_posts(&self, filter: BlogPostFilter) -> Vec<BlogPost> {
        self.catalog
            .blog_posts
            .iter()
            .filter(|post| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|category| post.is_in_category(category))
            })
            .cloned()
            .collect()
    }

    fn get_blog_post(&self, id: BlogPostId) -> Option<BlogPost> {
        self.catalog
            .blog_posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    fn get_profile(&self) -> DeveloperProfile {
        self.catalog.profile.clone()
    }
}
