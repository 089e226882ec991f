//! Complaint lifecycle service.
//!
//! Applies the pure transitions from [`crate::domain::complaint`] inside a
//! single load → apply → save sequence per operation; the store's `save`
//! is the atomic unit. Concurrent operations on the same complaint resolve
//! as last-writer-wins, which is the accepted semantics here.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::complaint::{Complaint, ComplaintId, TransitionError};
use crate::domain::ports::{
    AnswerCommand, ComplaintLifecycle, ComplaintRepository, ComplaintStoreError,
};
use crate::domain::user::UserId;
use crate::domain::Error;

fn map_store_error(error: ComplaintStoreError) -> Error {
    Error::internal(format!("complaint store error: {error}"))
}

fn map_transition_error(error: TransitionError) -> Error {
    match error {
        TransitionError::AlreadyClosed { .. } => Error::conflict(error.to_string()),
    }
}

/// Lifecycle engine over the complaint store.
#[derive(Clone)]
pub struct ComplaintService<R> {
    complaints: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ComplaintService<R>
where
    R: ComplaintRepository,
{
    /// Create the service over the given store and clock.
    pub fn new(complaints: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { complaints, clock }
    }

    async fn load(&self, id: ComplaintId) -> Result<Complaint, Error> {
        self.complaints
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("complaint {id} not found")))
    }
}

#[async_trait]
impl<R> ComplaintLifecycle for ComplaintService<R>
where
    R: ComplaintRepository,
{
    async fn complaint_detail(&self, id: ComplaintId) -> Result<Complaint, Error> {
        self.load(id).await
    }

    async fn assign_manager(&self, id: ComplaintId, staff_id: UserId) -> Result<Complaint, Error> {
        let complaint = self.load(id).await?;
        let (next, event) = complaint
            .assign_manager(staff_id)
            .map_err(map_transition_error)?;
        self.complaints.save(&next).await.map_err(map_store_error)?;
        info!(complaint_id = %id, staff_id = %staff_id, ?event, "manager assigned");
        Ok(next)
    }

    async fn save_answer(
        &self,
        id: ComplaintId,
        command: AnswerCommand,
    ) -> Result<Complaint, Error> {
        let complaint = self.load(id).await?;
        let (next, event) = complaint
            .save_answer(command.answer, command.temporary, self.clock.utc())
            .map_err(map_transition_error)?;
        self.complaints.save(&next).await.map_err(map_store_error)?;
        info!(complaint_id = %id, temporary = command.temporary, ?event, "answer saved");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::{ComplaintStatus, DepartmentId};
    use crate::domain::ports::MockComplaintRepository;
    use crate::domain::ErrorCode;
    use chrono::{DateTime, TimeZone, Utc};
    use mockable::MockClock;

    fn submitted(id: i64) -> Complaint {
        Complaint {
            id: ComplaintId(id),
            title: "Broken streetlight".into(),
            body: "The light on 5th has been out for a week.".into(),
            address_text: "5th Avenue 12".into(),
            location: None,
            applicant_id: UserId(3),
            current_department_id: DepartmentId(1),
            assigned_staff_id: None,
            status: ComplaintStatus::Submitted,
            answer: None,
            answered_at: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    fn clock() -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_utc().return_const(noon());
        Arc::new(clock)
    }

    #[tokio::test]
    async fn assign_on_missing_complaint_is_not_found() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ComplaintService::new(Arc::new(repo), clock());

        let err = service
            .assign_manager(ComplaintId(404), UserId(7))
            .await
            .expect_err("missing complaint must fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(err.message().contains("404"));
    }

    #[tokio::test]
    async fn assign_saves_the_in_progress_state() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(submitted(id.0))));
        repo.expect_save()
            .withf(|saved| {
                saved.status == ComplaintStatus::InProgress
                    && saved.assigned_staff_id == Some(UserId(7))
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = ComplaintService::new(Arc::new(repo), clock());

        let next = service
            .assign_manager(ComplaintId(42), UserId(7))
            .await
            .expect("assign succeeds");
        assert_eq!(next.status, ComplaintStatus::InProgress);
    }

    #[tokio::test]
    async fn final_answer_stamps_the_injected_clock() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(submitted(id.0))));
        repo.expect_save()
            .withf(|saved| {
                saved.status == ComplaintStatus::Closed && saved.answered_at == Some(noon())
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = ComplaintService::new(Arc::new(repo), clock());

        let next = service
            .save_answer(
                ComplaintId(42),
                AnswerCommand {
                    answer: "Fixed.".into(),
                    temporary: false,
                },
            )
            .await
            .expect("final answer succeeds");
        assert_eq!(next.answer.as_deref(), Some("Fixed."));
    }

    #[tokio::test]
    async fn draft_answer_leaves_status_and_timestamp_untouched() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(submitted(id.0))));
        repo.expect_save()
            .withf(|saved| {
                saved.status == ComplaintStatus::Submitted && saved.answered_at.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = ComplaintService::new(Arc::new(repo), clock());

        let next = service
            .save_answer(
                ComplaintId(42),
                AnswerCommand {
                    answer: "draft text".into(),
                    temporary: true,
                },
            )
            .await
            .expect("draft succeeds");
        assert_eq!(next.answer.as_deref(), Some("draft text"));
    }

    #[tokio::test]
    async fn closed_complaints_reject_further_answers_without_saving() {
        // No expect_save: a save would panic the mock, proving nothing is
        // persisted for a rejected transition.
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id().returning(|id| {
            let mut closed = submitted(id.0);
            closed.status = ComplaintStatus::Closed;
            closed.answer = Some("Fixed.".into());
            closed.answered_at = Some(noon());
            Ok(Some(closed))
        });
        let service = ComplaintService::new(Arc::new(repo), clock());

        let err = service
            .save_answer(
                ComplaintId(42),
                AnswerCommand {
                    answer: "again".into(),
                    temporary: false,
                },
            )
            .await
            .expect_err("re-closing is rejected");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }
}
