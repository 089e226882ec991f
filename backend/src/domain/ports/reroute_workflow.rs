//! Driving port for the reroute workflow.

use async_trait::async_trait;

use crate::domain::complaint::{ComplaintId, DepartmentId};
use crate::domain::reroute::ComplaintReroute;
use crate::domain::user::UserId;
use crate::domain::Error;

/// Reroute request intake as seen by inbound adapters.
///
/// Creating a request never mutates the referenced complaint; approval is
/// an external step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RerouteWorkflow: Send + Sync {
    /// Record a pending reroute request for `complaint_id`.
    async fn request_reroute(
        &self,
        complaint_id: ComplaintId,
        target_department_id: DepartmentId,
        reason: String,
        requester_id: UserId,
    ) -> Result<ComplaintReroute, Error>;
}
