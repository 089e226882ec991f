//! In-memory store adapters.
//!
//! Each mutation takes the write lock for the whole read-modify-write, so
//! every store operation is observed as an atomic unit. Identifier
//! assignment uses an atomic counter, mirroring a store-side sequence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;

use crate::domain::complaint::{Complaint, ComplaintId};
use crate::domain::ports::{
    ComplaintRepository, ComplaintStoreError, RerouteRepository, RerouteStoreError,
    UserRepository, UserStoreError,
};
use crate::domain::reroute::{ComplaintReroute, NewReroute, RerouteId, RerouteStatus};
use crate::domain::user::User;

/// Credential store adapter keyed by unique username.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record; used by bootstrap seeding and tests.
    pub async fn upsert(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.username.as_ref().to_owned(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}

/// Complaint store adapter.
#[derive(Default)]
pub struct InMemoryComplaintStore {
    complaints: RwLock<HashMap<ComplaintId, Complaint>>,
}

impl InMemoryComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly; complaint creation itself is an external
    /// write, so only seeding and tests go through here.
    pub async fn seed(&self, complaint: Complaint) {
        let mut complaints = self.complaints.write().await;
        complaints.insert(complaint.id, complaint);
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintStore {
    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintStoreError> {
        let complaints = self.complaints.read().await;
        Ok(complaints.get(&id).cloned())
    }

    async fn save(&self, complaint: &Complaint) -> Result<(), ComplaintStoreError> {
        let mut complaints = self.complaints.write().await;
        complaints.insert(complaint.id, complaint.clone());
        Ok(())
    }
}

/// Append-only reroute trail adapter.
pub struct InMemoryRerouteStore {
    records: RwLock<Vec<ComplaintReroute>>,
    next_id: AtomicI64,
    clock: Arc<dyn Clock>,
}

impl InMemoryRerouteStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            clock,
        }
    }

    /// Snapshot of the trail, oldest first; used by tests.
    pub async fn records(&self) -> Vec<ComplaintReroute> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl RerouteRepository for InMemoryRerouteStore {
    async fn append(&self, request: NewReroute) -> Result<ComplaintReroute, RerouteStoreError> {
        let record = ComplaintReroute {
            id: RerouteId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            complaint_id: request.complaint_id,
            origin_department_id: request.origin_department_id,
            target_department_id: request.target_department_id,
            reason: request.reason,
            requester_id: request.requester_id,
            status: RerouteStatus::Pending,
            requested_at: self.clock.utc(),
        };
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::{ComplaintStatus, DepartmentId};
    use crate::domain::user::UserId;
    use mockable::DefaultClock;

    fn complaint(id: i64) -> Complaint {
        Complaint {
            id: ComplaintId(id),
            title: "Noise".into(),
            body: "Construction noise at night.".into(),
            address_text: "Elm St 2".into(),
            location: None,
            applicant_id: UserId(3),
            current_department_id: DepartmentId(1),
            assigned_staff_id: None,
            status: ComplaintStatus::Submitted,
            answer: None,
            answered_at: None,
        }
    }

    #[tokio::test]
    async fn complaint_save_overwrites_the_full_record() {
        let store = InMemoryComplaintStore::new();
        store.seed(complaint(42)).await;

        let mut updated = complaint(42);
        updated.status = ComplaintStatus::InProgress;
        updated.assigned_staff_id = Some(UserId(7));
        store.save(&updated).await.expect("save succeeds");

        let loaded = store
            .find_by_id(ComplaintId(42))
            .await
            .expect("find succeeds")
            .expect("record present");
        assert_eq!(loaded, updated);
    }

    #[tokio::test]
    async fn reroute_append_assigns_sequential_ids() {
        let store = InMemoryRerouteStore::new(Arc::new(DefaultClock));
        let request = NewReroute {
            complaint_id: ComplaintId(42),
            origin_department_id: DepartmentId(1),
            target_department_id: DepartmentId(3),
            reason: "wrong dept".into(),
            requester_id: UserId(7),
        };

        let first = store.append(request.clone()).await.expect("first append");
        let second = store.append(request).await.expect("second append");
        assert_eq!(first.id, RerouteId(1));
        assert_eq!(second.id, RerouteId(2));
        assert_eq!(store.records().await.len(), 2);
    }
}
