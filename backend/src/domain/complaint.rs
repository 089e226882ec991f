//! Complaint aggregate and its state machine.
//!
//! Transitions are pure functions: they take the current value and return
//! the next value together with the event that occurred, so the machine is
//! unit-testable without a store. Services persist the returned state as a
//! single atomic save.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// Stable numeric complaint identifier assigned by the complaint store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ComplaintId(pub i64);

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// District/department identifier owned by an external directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct DepartmentId(pub i64);

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geocoordinates submitted with a complaint.
///
/// Latitude and longitude travel as one value: a complaint either has both
/// or neither, never one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Persisted complaint status.
///
/// DRAFTED is deliberately not a value here: temporarily saving an answer
/// is a self-loop that leaves the status untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Submitted,
    InProgress,
    Closed,
}

/// Citizen-submitted complaint routed to staff.
///
/// ## Invariants
/// - `answered_at` is set iff `status` is [`ComplaintStatus::Closed`].
/// - `assigned_staff_id` is set once the complaint leaves
///   [`ComplaintStatus::Submitted`].
/// - There is no transition out of [`ComplaintStatus::Closed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub body: String,
    pub address_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub applicant_id: UserId,
    pub current_department_id: DepartmentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_staff_id: Option<UserId>,
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered_at: Option<DateTime<Utc>>,
}

/// Event emitted by a successful transition, for audit logging.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplaintEvent {
    ManagerAssigned { staff_id: UserId },
    AnswerDrafted,
    AnswerCompleted { at: DateTime<Utc> },
}

/// Rejected transition attempts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The complaint is CLOSED; CLOSED is terminal.
    #[error("complaint {id} is already closed")]
    AlreadyClosed { id: ComplaintId },
}

impl Complaint {
    fn reject_if_closed(&self) -> Result<(), TransitionError> {
        if self.status == ComplaintStatus::Closed {
            return Err(TransitionError::AlreadyClosed { id: self.id });
        }
        Ok(())
    }

    /// Assign a manager and move the complaint into IN_PROGRESS.
    ///
    /// Idempotent on IN_PROGRESS; re-assigning with a different staff id
    /// overwrites the assignee (last-writer-wins, by design).
    pub fn assign_manager(
        mut self,
        staff_id: UserId,
    ) -> Result<(Self, ComplaintEvent), TransitionError> {
        self.reject_if_closed()?;
        self.assigned_staff_id = Some(staff_id);
        self.status = ComplaintStatus::InProgress;
        Ok((self, ComplaintEvent::ManagerAssigned { staff_id }))
    }

    /// Save answer text, either as a draft or as the closing answer.
    ///
    /// A temporary save overwrites the answer text only and leaves the
    /// status untouched (the DRAFTED self-loop). A final save closes the
    /// complaint and stamps `answered_at` with the provided instant.
    pub fn save_answer(
        mut self,
        answer: String,
        temporary: bool,
        now: DateTime<Utc>,
    ) -> Result<(Self, ComplaintEvent), TransitionError> {
        self.reject_if_closed()?;
        self.answer = Some(answer);
        if temporary {
            return Ok((self, ComplaintEvent::AnswerDrafted));
        }
        self.status = ComplaintStatus::Closed;
        self.answered_at = Some(now);
        Ok((self, ComplaintEvent::AnswerCompleted { at: now }))
    }
}
