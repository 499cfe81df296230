use std::collections::BTreeMap;

use chrono::NaiveDate;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{email_address::EmailAddress, macros::id};

id!(ProjectId);
id!(BlogPostId);

/// The static content of the site, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: DeveloperProfile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub image: Url,
    pub location: String,
    pub email: EmailAddress,
    pub availability: String,
    /// Social network name (e.g. `github`) mapped to the profile url.
    #[serde(default)]
    pub social_links: BTreeMap<String, Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: Url,
    pub demo_url: Option<Url>,
    pub code_url: Option<Url>,
    #[serde(default)]
    pub tags: Vec<ProjectTag>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Display,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Deref,
        Serialize,
        Deserialize
    )
)]
pub struct ProjectTag(String);

impl Project {
    pub fn has_tag(&self, tag: &ProjectTag) -> bool {
        self.tags.contains(tag)
    }
}

impl BlogPost {
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }
}
