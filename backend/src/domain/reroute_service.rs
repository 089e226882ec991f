//! Reroute workflow service.
//!
//! Records reroute requests against the append-only trail. The referenced
//! complaint is loaded once to snapshot its current department and is
//! never written: its department and assignee stay untouched until the
//! external approval step runs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::complaint::{ComplaintId, DepartmentId};
use crate::domain::ports::{
    ComplaintRepository, ComplaintStoreError, RerouteRepository, RerouteStoreError,
    RerouteWorkflow,
};
use crate::domain::reroute::{ComplaintReroute, NewReroute};
use crate::domain::user::UserId;
use crate::domain::Error;

fn map_complaint_store_error(error: ComplaintStoreError) -> Error {
    Error::internal(format!("complaint store error: {error}"))
}

fn map_reroute_store_error(error: RerouteStoreError) -> Error {
    Error::internal(format!("reroute store error: {error}"))
}

/// Workflow engine over the complaint and reroute stores.
#[derive(Clone)]
pub struct RerouteService<C, R> {
    complaints: Arc<C>,
    reroutes: Arc<R>,
}

impl<C, R> RerouteService<C, R>
where
    C: ComplaintRepository,
    R: RerouteRepository,
{
    /// Create the service over the given stores.
    pub fn new(complaints: Arc<C>, reroutes: Arc<R>) -> Self {
        Self {
            complaints,
            reroutes,
        }
    }
}

#[async_trait]
impl<C, R> RerouteWorkflow for RerouteService<C, R>
where
    C: ComplaintRepository,
    R: RerouteRepository,
{
    async fn request_reroute(
        &self,
        complaint_id: ComplaintId,
        target_department_id: DepartmentId,
        reason: String,
        requester_id: UserId,
    ) -> Result<ComplaintReroute, Error> {
        let complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await
            .map_err(map_complaint_store_error)?
            .ok_or_else(|| Error::not_found(format!("complaint {complaint_id} not found")))?;

        let request =
            NewReroute::for_complaint(&complaint, target_department_id, reason, requester_id);
        let record = self
            .reroutes
            .append(request)
            .await
            .map_err(map_reroute_store_error)?;
        info!(
            complaint_id = %complaint_id,
            reroute_id = %record.id,
            origin = %record.origin_department_id,
            target = %record.target_department_id,
            "reroute requested"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::{Complaint, ComplaintStatus};
    use crate::domain::ports::{MockComplaintRepository, MockRerouteRepository};
    use crate::domain::reroute::{RerouteId, RerouteStatus};
    use crate::domain::ErrorCode;
    use chrono::Utc;

    fn complaint_in_department(dept: i64) -> Complaint {
        Complaint {
            id: ComplaintId(42),
            title: "Pothole".into(),
            body: "Deep pothole near the crossing.".into(),
            address_text: "Main St 4".into(),
            location: None,
            applicant_id: UserId(3),
            current_department_id: DepartmentId(dept),
            assigned_staff_id: Some(UserId(7)),
            status: ComplaintStatus::Closed,
            answer: Some("Fixed.".into()),
            answered_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn missing_complaint_is_not_found() {
        let mut complaints = MockComplaintRepository::new();
        complaints.expect_find_by_id().returning(|_| Ok(None));
        let reroutes = MockRerouteRepository::new();
        let service = RerouteService::new(Arc::new(complaints), Arc::new(reroutes));

        let err = service
            .request_reroute(ComplaintId(404), DepartmentId(3), "wrong dept".into(), UserId(7))
            .await
            .expect_err("missing complaint must fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn request_snapshots_origin_and_never_saves_the_complaint() {
        // MockComplaintRepository carries no expect_save: any write to the
        // complaint store would panic the test.
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_find_by_id()
            .returning(|_| Ok(Some(complaint_in_department(1))));
        let mut reroutes = MockRerouteRepository::new();
        reroutes
            .expect_append()
            .withf(|request| {
                request.origin_department_id == DepartmentId(1)
                    && request.target_department_id == DepartmentId(3)
                    && request.requester_id == UserId(7)
            })
            .times(1)
            .returning(|request| {
                Ok(ComplaintReroute {
                    id: RerouteId(1),
                    complaint_id: request.complaint_id,
                    origin_department_id: request.origin_department_id,
                    target_department_id: request.target_department_id,
                    reason: request.reason,
                    requester_id: request.requester_id,
                    status: RerouteStatus::Pending,
                    requested_at: Utc::now(),
                })
            });
        let service = RerouteService::new(Arc::new(complaints), Arc::new(reroutes));

        let record = service
            .request_reroute(ComplaintId(42), DepartmentId(3), "wrong dept".into(), UserId(7))
            .await
            .expect("request succeeds");
        assert_eq!(record.status, RerouteStatus::Pending);
        assert_eq!(record.origin_department_id, DepartmentId(1));
    }
}
