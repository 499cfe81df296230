use std::sync::LazyLock;

use chrono::NaiveDate;
use portfolio_models::catalog::{
    BlogPost, BlogPostId, Catalog, DeveloperProfile, Project, ProjectId, ProjectTag,
};

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    profile: PROFILE.clone(),
    projects: vec![TASKMASTER.clone(), WEATHERWISE.clone(), SHOPSTREAM.clone()],
    blog_posts: vec![TYPESCRIPT_POST.clone(), SERVER_COMPONENTS_POST.clone()],
});

pub static PROFILE: LazyLock<DeveloperProfile> = LazyLock::new(|| DeveloperProfile {
    name: "Alex Example".into(),
    title: "Full Stack Developer".into(),
    bio: "I build modern web applications.".into(),
    skills: vec!["Rust".into(), "TypeScript".into()],
    image: "https://images.example.com/alex.jpg".parse().unwrap(),
    location: "Berlin, Germany".into(),
    email: "alex@example.com".parse().unwrap(),
    availability: "Mon-Fri, 9:00 AM - 5:00 PM CET".into(),
    social_links: [
        ("github", "https://github.com/alex-example"),
        ("linkedin", "https://linkedin.com/in/alex-example"),
    ]
    .into_iter()
    .map(|(name, url)| (name.into(), url.parse().unwrap()))
    .collect(),
});

pub static TASKMASTER: LazyLock<Project> = LazyLock::new(|| Project {
    id: ProjectId::new(1),
    title: "TaskMaster Pro".into(),
    description: "A collaborative task management platform.".into(),
    image: "https://images.example.com/taskmaster.jpg".parse().unwrap(),
    demo_url: Some("https://example.com/taskmaster".parse().unwrap()),
    code_url: Some("https://github.com/example/taskmaster".parse().unwrap()),
    tags: tags(&["react", "typescript", "firebase"]),
    featured: true,
});

pub static WEATHERWISE: LazyLock<Project> = LazyLock::new(|| Project {
    id: ProjectId::new(2),
    title: "WeatherWise".into(),
    description: "Weather forecasting with interactive maps.".into(),
    image: "https://images.example.com/weatherwise.jpg".parse().unwrap(),
    demo_url: None,
    code_url: Some("https://github.com/example/weatherwise".parse().unwrap()),
    tags: tags(&["react", "node"]),
    featured: false,
});

pub static SHOPSTREAM: LazyLock<Project> = LazyLock::new(|| Project {
    id: ProjectId::new(3),
    title: "ShopStream".into(),
    description: "An e-commerce platform with live inventory updates.".into(),
    image: "https://images.example.com/shopstream.jpg".parse().unwrap(),
    demo_url: Some("https://example.com/shopstream".parse().unwrap()),
    code_url: None,
    tags: tags(&["nextjs", "node", "mongodb"]),
    featured: true,
});

pub static TYPESCRIPT_POST: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: BlogPostId::new(1),
    title: "Building Scalable React Applications with TypeScript".into(),
    excerpt: "Structuring large-scale React applications.".into(),
    content: "Lorem ipsum dolor sit amet.".into(),
    category: "Tutorial".into(),
    publish_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
});

pub static SERVER_COMPONENTS_POST: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: BlogPostId::new(2),
    title: "Why Server Components Will Change Frontend Development".into(),
    excerpt: "An exploration of React Server Components.".into(),
    content: "Lorem ipsum dolor sit amet.".into(),
    category: "Opinion".into(),
    publish_date: NaiveDate::from_ymd_opt(2023, 5, 28).unwrap(),
});

fn tags(tags: &[&str]) -> Vec<ProjectTag> {
    tags.iter().map(|&tag| tag.try_into().unwrap()).collect()
}
