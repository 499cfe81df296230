use std::sync::Arc;

use portfolio_models::contact::{ContactSubmission, ContactSubmissionId, ContactSubmissionRequest};
use portfolio_persistence_contracts::contact::ContactSubmissionRepository;
use portfolio_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MemoryContactSubmissionRepository<Time> {
    time: Time,
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    last_id: u64,
    submissions: Vec<ContactSubmission>,
}

impl<Time> MemoryContactSubmissionRepository<Time> {
    pub fn new(time: Time) -> Self {
        Self {
            time,
            state: Default::default(),
        }
    }
}

impl<Time> ContactSubmissionRepository for MemoryContactSubmissionRepository<Time>
where
    Time: TimeService,
{
    async fn create(&self, request: ContactSubmissionRequest) -> anyhow::Result<ContactSubmission> {
        // id allocation, timestamp and insertion happen under the same lock
        let mut state = self.state.write().await;
        state.last_id += 1;

        let submission = ContactSubmission::new(state.last_id.into(), request, self.time.now());
        state.submissions.push(submission.clone());

        debug!(id = %submission.id, "stored contact submission");

        Ok(submission)
    }

    async fn get(&self, id: ContactSubmissionId) -> anyhow::Result<Option<ContactSubmission>> {
        let state = self.state.read().await;

        // ids are assigned sequentially starting at 1 and never removed
        Ok(usize::try_from(*id)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| state.submissions.get(index))
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        Ok(self.state.read().await.submissions.clone())
    }
}
