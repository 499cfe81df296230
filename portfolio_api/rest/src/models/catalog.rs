use std::collections::BTreeMap;

use chrono::NaiveDate;
use portfolio_models::{
    catalog::{BlogPost, BlogPostId, DeveloperProfile, Project, ProjectId, ProjectTag},
    email_address::EmailAddress,
};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: Url,
    pub demo_url: Option<Url>,
    pub code_url: Option<Url>,
    pub tags: Vec<ProjectTag>,
    pub featured: bool,
}

impl From<Project> for ApiProject {
    fn from(value: Project) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            image: value.image,
            demo_url: value.demo_url,
            code_url: value.code_url,
            tags: value.tags,
            featured: value.featured,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

impl From<BlogPost> for ApiBlogPost {
    fn from(value: BlogPost) -> Self {
        Self {
            id: value.id,
            title: value.title,
            excerpt: value.excerpt,
            content: value.content,
            category: value.category,
            publish_date: value.publish_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeveloperProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub image: Url,
    pub location: String,
    pub email: EmailAddress,
    pub availability: String,
    pub social_links: BTreeMap<String, Url>,
}

impl From<DeveloperProfile> for ApiDeveloperProfile {
    fn from(value: DeveloperProfile) -> Self {
        Self {
            name: value.name,
            title: value.title,
            bio: value.bio,
            skills: value.skills,
            image: value.image,
            location: value.location,
            email: value.email,
            availability: value.availability,
            social_links: value.social_links,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiProjectsQuery {
    pub tag: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiBlogPostsQuery {
    pub category: Option<String>,
}
