use chrono::Utc;
use parking_lot::RwLock;

use crate::models::plan::{Mood, Plan, PlanRecord};

/// Storage for planning records, injected into the handler layer.
pub trait PlanStore: Send + Sync {
    fn create(&self, plan: Plan, mood: Mood) -> PlanRecord;
    fn list(&self) -> Vec<PlanRecord>;
    fn get(&self, id: u64) -> Option<PlanRecord>;
}

/// Process-local store. Ids start at 1 and reset on restart.
#[derive(Default)]
pub struct InMemoryPlanStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    counter: u64,
    records: Vec<PlanRecord>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for InMemoryPlanStore {
    fn create(&self, plan: Plan, mood: Mood) -> PlanRecord {
        let mut inner = self.inner.write();
        inner.counter += 1;

        let record = PlanRecord {
            id: inner.counter,
            mood,
            plan,
            created_at: Utc::now(),
        };
        inner.records.push(record.clone());
        record
    }

    fn list(&self) -> Vec<PlanRecord> {
        self.inner.read().records.clone()
    }

    fn get(&self, id: u64) -> Option<PlanRecord> {
        self.inner
            .read()
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }
}
