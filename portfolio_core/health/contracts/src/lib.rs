use std::future::Future;

pub trait HealthFeatureService: Send + Sync + 'static {
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub email: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.email
    }
}
