use std::time::Duration;

use anyhow::anyhow;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use portfolio_api_rest::{RestServer, RestServerConfig};
use portfolio_core_catalog_contracts::{BlogPostFilter, CatalogFeatureService, ProjectFilter};
use portfolio_core_catalog_impl::CatalogFeatureServiceImpl;
use portfolio_core_contact_impl::{
    notification::{ContactNotificationConfig, ContactNotificationServiceImpl},
    ContactFeatureServiceImpl,
};
use portfolio_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use portfolio_demo::catalog::CATALOG;
use portfolio_email_impl::{AsyncStubTransport, EmailServiceImpl};
use portfolio_models::{
    catalog::{BlogPost, BlogPostId, DeveloperProfile, Project, ProjectTag},
    contact::{ContactSubmission, ContactSubmissionId, ContactSubmissionRequest},
    email_address::EmailAddressWithName,
};
use portfolio_persistence_contracts::contact::ContactSubmissionRepository;
use portfolio_persistence_memory::contact::MemoryContactSubmissionRepository;
use portfolio_shared_impl::time::TimeServiceImpl;
use portfolio_templates_impl::TemplateServiceImpl;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

type Repo = MemoryContactSubmissionRepository<TimeServiceImpl>;

struct TestApp {
    router: Router,
    repo: Repo,
    email: EmailServiceImpl,
}

fn app(transport: AsyncStubTransport) -> TestApp {
    app_with_config(transport, RestServerConfig::default())
}

fn app_with_config(transport: AsyncStubTransport, config: RestServerConfig) -> TestApp {
    let email = EmailServiceImpl::stub(from(), transport);
    let repo = MemoryContactSubmissionRepository::new(TimeServiceImpl);

    let catalog = CatalogFeatureServiceImpl::new(CATALOG.clone());
    let router = router(email.clone(), repo.clone(), catalog, config);

    TestApp {
        router,
        repo,
        email,
    }
}

fn router(
    email: EmailServiceImpl,
    repo: impl ContactSubmissionRepository,
    catalog: impl CatalogFeatureService,
    config: RestServerConfig,
) -> Router {
    let notification = ContactNotificationServiceImpl::new(
        TemplateServiceImpl::new().unwrap(),
        email.clone(),
        ContactNotificationConfig {
            recipient: "owner@example.com".parse().unwrap(),
            subject_prefix: "New Contact Form Submission".into(),
            timeout: Duration::from_secs(15),
        },
    );
    let contact = ContactFeatureServiceImpl::new(repo, notification);
    let health = HealthFeatureServiceImpl::new(
        TimeServiceImpl,
        email,
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(10),
        },
    );

    RestServer::new(health, catalog, contact, config).router()
}

fn from() -> EmailAddressWithName {
    "Portfolio <noreply@example.com>".parse().unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_submission() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "subject": "Hello",
        "message": "This is a sufficiently long message.",
    })
}

#[tokio::test]
async fn list_projects() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/api/projects")).await;

    assert_eq!(status, StatusCode::OK);
    let titles = body
        .as_array()
        .unwrap()
        .iter()
        .map(|project| project["title"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["TaskMaster Pro", "WeatherWise", "ShopStream"]);
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "title": "TaskMaster Pro",
            "description": "A collaborative task management platform.",
            "image": "https://images.example.com/taskmaster.jpg",
            "demoUrl": "https://example.com/taskmaster",
            "codeUrl": "https://github.com/example/taskmaster",
            "tags": ["react", "typescript", "firebase"],
            "featured": true,
        })
    );
    assert_eq!(body[1]["demoUrl"], Value::Null);
}

#[tokio::test]
async fn list_projects_filtered() {
    let app = app(AsyncStubTransport::new_ok());

    let (_, _, by_tag) = send(&app.router, get("/api/projects?tag=React")).await;
    let (_, _, featured) = send(&app.router, get("/api/projects?featured=true")).await;
    let (_, _, unknown) = send(&app.router, get("/api/projects?tag=cobol")).await;
    let (_, _, empty_tag) = send(&app.router, get("/api/projects?tag=")).await;

    let ids = |body: &Value| {
        body.as_array()
            .unwrap()
            .iter()
            .map(|project| project["id"].as_u64().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&by_tag), [1, 2]);
    assert_eq!(ids(&featured), [1, 3]);
    assert_eq!(ids(&unknown), [] as [u64; 0]);
    assert_eq!(ids(&empty_tag), [1, 2, 3]);
}

#[tokio::test]
async fn invalid_query_parameters() {
    let app = app(AsyncStubTransport::new_ok());

    for uri in [
        "/api/projects?featured=abc",
        "/api/blog-posts?category=a&category=b",
    ] {
        let (status, headers, body) = send(&app.router, get(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(body, json!({"message": "Invalid query parameters"}));
    }
}

#[tokio::test]
async fn list_project_tags() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/api/projects/tags")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["react", "typescript", "firebase", "node", "nextjs", "mongodb"])
    );
}

#[tokio::test]
async fn list_blog_posts() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, all) = send(&app.router, get("/api/blog-posts")).await;
    let (_, _, opinion) = send(&app.router, get("/api/blog-posts?category=opinion")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["publishDate"], "2023-06-15");
    assert_eq!(all[0]["category"], "Tutorial");
    assert_eq!(opinion.as_array().unwrap().len(), 1);
    assert_eq!(opinion[0]["id"], 2);
}

#[tokio::test]
async fn get_blog_post() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/api/blog-posts/1")).await;
    let (missing, _, missing_body) = send(&app.router, get("/api/blog-posts/42")).await;
    let (invalid, _, _) = send(&app.router, get("/api/blog-posts/abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["title"],
        "Building Scalable React Applications with TypeScript"
    );
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert_eq!(missing_body, json!({"message": "Not found"}));
    assert_eq!(invalid, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_profile() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/api/profile")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alex Example");
    assert_eq!(body["email"], "alex@example.com");
    assert_eq!(
        body["socialLinks"]["github"],
        "https://github.com/alex-example"
    );
}

#[tokio::test]
async fn submit_contact_form() {
    // Arrange
    let app = app(AsyncStubTransport::new_ok());

    // Act
    let (status, _, body) = send(
        &app.router,
        post_json("/api/contact", &valid_submission()),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "Contact form submitted successfully",
            "id": 1,
            "emailSent": true,
        })
    );

    let submissions = app.repo.list().await.unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(*submissions[0].name, "Jane");

    let messages = app.email.stub_messages().await;
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Subject: New Contact Form Submission: Hello"));
}

#[tokio::test]
async fn sequential_submissions_get_sequential_ids() {
    let app = app(AsyncStubTransport::new_ok());

    let (_, _, first) = send(&app.router, post_json("/api/contact", &valid_submission())).await;
    let (_, _, second) = send(&app.router, post_json("/api/contact", &valid_submission())).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn submit_contact_form_with_unreachable_transport() {
    // Arrange
    let app = app(AsyncStubTransport::new_error());

    // Act
    let (status, _, body) = send(
        &app.router,
        post_json("/api/contact", &valid_submission()),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emailSent"], false);
    assert_eq!(body["id"], 1);
    assert_eq!(app.repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn submit_invalid_contact_form() {
    // Arrange
    let app = app(AsyncStubTransport::new_ok());
    let input = json!({
        "name": "A",
        "email": "not-an-email",
        "subject": "Hi",
        "message": "too short",
    });

    // Act
    let (status, _, body) = send(&app.router, post_json("/api/contact", &input)).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error");
    let errors = body["errors"].as_str().unwrap();
    assert!(errors.contains("valid email address"));
    assert!(errors.contains("at least 10 characters"));
    assert!(app.repo.list().await.unwrap().is_empty());
    assert!(app.email.stub_messages().await.is_empty());
}

#[tokio::test]
async fn submit_incomplete_contact_form() {
    let app = app(AsyncStubTransport::new_ok());

    for field in ["name", "email", "subject", "message"] {
        let mut input = valid_submission();
        input.as_object_mut().unwrap().remove(field);

        let (status, _, body) = send(&app.router, post_json("/api/contact", &input)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], format!("Validation error: Required at \"{field}\""));
    }

    assert!(app.repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_contact_form_name_with_line_breaks() {
    let app = app(AsyncStubTransport::new_ok());

    for name in ["Jane\nDoe", "Jane\r\nBcc: evil@x.com"] {
        let input = json!({
            "name": name,
            "email": "jane@x.com",
            "subject": "Hello",
            "message": "This is a sufficiently long message.",
        });

        let (status, _, body) = send(&app.router, post_json("/api/contact", &input)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            "Validation error: Name must not contain line breaks or control characters at \"name\""
        );
    }

    assert!(app.repo.list().await.unwrap().is_empty());
    assert!(app.email.stub_messages().await.is_empty());
}

#[tokio::test]
async fn notification_email_escapes_html() {
    // Arrange
    let app = app(AsyncStubTransport::new_ok());
    let input = json!({
        "name": "<b>Jane</b>",
        "email": "jane@x.com",
        "subject": "Hello",
        "message": "This is a sufficiently long message.",
    });

    // Act
    let (status, _, _) = send(&app.router, post_json("/api/contact", &input)).await;

    // Assert
    assert_eq!(status, StatusCode::CREATED);
    let message = app.email.stub_messages().await.remove(0);
    assert!(message.contains("&lt;b&gt;Jane&lt;"));
    assert!(!message.contains("<strong>Name:</strong> <b>"));
}

#[tokio::test]
async fn submit_malformed_body() {
    let app = app(AsyncStubTransport::new_ok());
    let invalid_json = Request::post("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let missing_content_type = Request::post("/api/contact")
        .body(Body::from(valid_submission().to_string()))
        .unwrap();
    let not_an_object = post_json("/api/contact", &json!(["Jane"]));

    for request in [invalid_json, missing_content_type, not_an_object] {
        let (status, _, body) = send(&app.router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error");
        assert!(body["errors"].as_str().unwrap().starts_with("Validation error: "));
    }

    assert!(app.repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn health() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"http": true, "email": true}));
}

#[tokio::test]
async fn unknown_route() {
    let app = app(AsyncStubTransport::new_ok());

    let (status, _, body) = send(&app.router, get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Not found"}));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app(AsyncStubTransport::new_ok());

    let (_, first, _) = send(&app.router, get("/api/projects")).await;
    let (_, second, _) = send(&app.router, get("/api/unknown")).await;

    let first = first.get("X-Request-Id").unwrap();
    let second = second.get("X-Request-Id").unwrap();
    assert_eq!(first.len(), 32);
    assert_ne!(first, second);
}

#[tokio::test]
async fn client_request_id_is_reused() {
    let app = app(AsyncStubTransport::new_ok());
    let valid = Request::get("/api/projects")
        .header("X-Request-Id", "01912345-6789-7abc-8def-0123456789ab")
        .body(Body::empty())
        .unwrap();
    let invalid = Request::get("/api/projects")
        .header("X-Request-Id", "not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let (_, valid, _) = send(&app.router, valid).await;
    let (_, invalid, _) = send(&app.router, invalid).await;

    assert_eq!(valid["X-Request-Id"], "0191234567897abc8def0123456789ab");
    assert_ne!(invalid["X-Request-Id"], "not-a-uuid");
    assert_eq!(invalid["X-Request-Id"].len(), 32);
}

#[tokio::test]
async fn cors_allowed_origin() {
    // Arrange
    let origin = HeaderValue::from_static("https://portfolio.example.com");
    let app = app_with_config(
        AsyncStubTransport::new_ok(),
        RestServerConfig {
            allowed_origins: vec![origin.clone()],
        },
    );
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, origin.clone())
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, headers, _) = send(&app.router, request).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&origin)
    );
}

#[tokio::test]
async fn cors_disabled_by_default() {
    let app = app(AsyncStubTransport::new_ok());
    let request = Request::get("/api/projects")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

struct PanickingCatalog;

impl CatalogFeatureService for PanickingCatalog {
    fn list_projects(&self, _filter: ProjectFilter) -> Vec<Project> {
        panic!("catalog unavailable")
    }

    fn list_project_tags(&self) -> Vec<ProjectTag> {
        unimplemented!()
    }

    fn list_blog_posts(&self, _filter: BlogPostFilter) -> Vec<BlogPost> {
        unimplemented!()
    }

    fn get_blog_post(&self, _id: BlogPostId) -> Option<BlogPost> {
        unimplemented!()
    }

    fn get_profile(&self) -> DeveloperProfile {
        unimplemented!()
    }
}

#[tokio::test]
async fn handler_panic() {
    // Arrange
    let router = router(
        EmailServiceImpl::disabled(from()),
        MemoryContactSubmissionRepository::new(TimeServiceImpl),
        PanickingCatalog,
        RestServerConfig::default(),
    );

    // Act
    let (status, headers, body) = send(&router, get("/api/projects")).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal server error"}));
    assert!(headers.contains_key("X-Request-Id"));
}

struct FailingRepository;

impl ContactSubmissionRepository for FailingRepository {
    async fn create(
        &self,
        _request: ContactSubmissionRequest,
    ) -> anyhow::Result<ContactSubmission> {
        Err(anyhow!("disk full"))
    }

    async fn get(&self, _id: ContactSubmissionId) -> anyhow::Result<Option<ContactSubmission>> {
        Err(anyhow!("disk full"))
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        Err(anyhow!("disk full"))
    }
}

#[tokio::test]
async fn submit_contact_form_storage_failure() {
    // Arrange
    let email = EmailServiceImpl::stub(from(), AsyncStubTransport::new_ok());
    let router = router(
        email.clone(),
        FailingRepository,
        CatalogFeatureServiceImpl::new(CATALOG.clone()),
        RestServerConfig::default(),
    );

    // Act
    let (status, _, body) = send(&router, post_json("/api/contact", &valid_submission())).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Failed to submit contact form"}));
    assert!(email.stub_messages().await.is_empty());
}

#[tokio::test]
async fn health_email_unreachable() {
    let router = router(
        EmailServiceImpl::file("/nonexistent/portfolio-mail", from()),
        MemoryContactSubmissionRepository::new(TimeServiceImpl),
        CatalogFeatureServiceImpl::new(CATALOG.clone()),
        RestServerConfig::default(),
    );

    let (status, _, body) = send(&router, get("/health")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"http": true, "email": false}));
}
