use portfolio_core_catalog_impl::CatalogFeatureServiceImpl;
use portfolio_core_contact_impl::{
    notification::ContactNotificationServiceImpl, ContactFeatureServiceImpl,
};
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_email_impl::EmailServiceImpl;
use portfolio_persistence_memory::contact::MemoryContactSubmissionRepository;
use portfolio_shared_impl::time::TimeServiceImpl;
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<HealthFeature, CatalogFeature, ContactFeature>;

// Shared
pub type Time = TimeServiceImpl;
pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;

// Persistence
pub type ContactRepo = MemoryContactSubmissionRepository<Time>;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;
pub type CatalogFeature = CatalogFeatureServiceImpl;
pub type ContactFeature = ContactFeatureServiceImpl<ContactRepo, ContactNotification>;
pub type ContactNotification = ContactNotificationServiceImpl<Template, Email>;
