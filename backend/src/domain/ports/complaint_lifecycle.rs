//! Driving port for complaint lifecycle operations.

use async_trait::async_trait;

use crate::domain::complaint::{Complaint, ComplaintId};
use crate::domain::user::UserId;
use crate::domain::Error;

/// Answer submission as received from the staff client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCommand {
    pub answer: String,
    /// `true` saves a draft (status unchanged); `false` closes the
    /// complaint and stamps the answered-at instant.
    pub temporary: bool,
}

/// Complaint state machine as seen by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintLifecycle: Send + Sync {
    /// Fetch a complaint for the staff detail view.
    async fn complaint_detail(&self, id: ComplaintId) -> Result<Complaint, Error>;

    /// Assign `staff_id` as manager, moving SUBMITTED → IN_PROGRESS.
    async fn assign_manager(&self, id: ComplaintId, staff_id: UserId) -> Result<Complaint, Error>;

    /// Save answer text, as a draft or as the closing answer.
    async fn save_answer(&self, id: ComplaintId, command: AnswerCommand)
        -> Result<Complaint, Error>;
}
