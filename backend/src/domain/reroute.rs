//! Reroute request trail.
//!
//! A reroute references its complaint by id only; it is an independently
//! owned record, and the complaint stays untouched until an (external)
//! approval step acts on the request.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::complaint::{Complaint, ComplaintId, DepartmentId};
use super::user::UserId;

/// Stable numeric reroute identifier assigned by the reroute store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RerouteId(pub i64);

impl fmt::Display for RerouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Approval status of a reroute request.
///
/// Only PENDING is produced by this core; the approval step that moves a
/// request to APPROVED or REJECTED is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RerouteStatus {
    Pending,
    Approved,
    Rejected,
}

/// Reroute request not yet persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReroute {
    pub complaint_id: ComplaintId,
    pub origin_department_id: DepartmentId,
    pub target_department_id: DepartmentId,
    pub reason: String,
    pub requester_id: UserId,
}

impl NewReroute {
    /// Build a pending request against the complaint's *current* department.
    ///
    /// The origin department is snapshotted here and never recomputed, so
    /// later changes to the complaint do not retroactively alter history.
    pub fn for_complaint(
        complaint: &Complaint,
        target_department_id: DepartmentId,
        reason: String,
        requester_id: UserId,
    ) -> Self {
        Self {
            complaint_id: complaint.id,
            origin_department_id: complaint.current_department_id,
            target_department_id,
            reason,
            requester_id,
        }
    }
}

/// Persisted reroute request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintReroute {
    pub id: RerouteId,
    pub complaint_id: ComplaintId,
    pub origin_department_id: DepartmentId,
    pub target_department_id: DepartmentId,
    pub reason: String,
    pub requester_id: UserId,
    pub status: RerouteStatus,
    pub requested_at: DateTime<Utc>,
}
