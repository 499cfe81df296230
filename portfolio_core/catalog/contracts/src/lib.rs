use portfolio_models::catalog::{BlogPost, BlogPostId, DeveloperProfile, Project, ProjectTag};

/// Read-only queries on the static site content.
pub trait CatalogFeatureService: Send + Sync + 'static {
    /// Return all projects matching `filter`, in catalog order.
    fn list_projects(&self, filter: ProjectFilter) -> Vec<Project>;

    /// Return the distinct tags of all projects in the order they first appear.
    fn list_project_tags(&self) -> Vec<ProjectTag>;

    /// Return all blog posts matching `filter`, in catalog order.
    fn list_blog_posts(&self, filter: BlogPostFilter) -> Vec<BlogPost>;

    fn get_blog_post(&self, id: BlogPostId) -> Option<BlogPost>;

    fn get_profile(&self) -> DeveloperProfile;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub tag: Option<ProjectTag>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostFilter {
    /// Matched case-insensitively.
    pub category: Option<String>,
}
