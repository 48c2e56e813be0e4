//! In-memory document store used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentStore, StoreError, StoreResult};

/// A store answering from fixed data and recording every call it receives.
#[derive(Default)]
pub(crate) struct FakeStore {
    pub search_results: Vec<Value>,
    pub pages: HashMap<String, Value>,
    pub unauthorized: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn with_search_results(results: Vec<Value>) -> Self {
        Self {
            search_results: results,
            ..Default::default()
        }
    }

    pub fn with_page(id: &str, page: Value) -> Self {
        let mut store = Self::default();
        store.pages.insert(id.to_string(), page);
        store
    }

    pub fn unauthorized() -> Self {
        Self {
            unauthorized: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn search(&self, query: &str) -> StoreResult<Vec<Value>> {
        self.record(format!("search:{}", query));
        if self.unauthorized {
            return Err(StoreError::Unauthorized);
        }
        Ok(self.search_results.clone())
    }

    async fn retrieve(&self, page_id: &str) -> StoreResult<Value> {
        self.record(format!("retrieve:{}", page_id));
        if self.unauthorized {
            return Err(StoreError::Unauthorized);
        }
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(page_id.to_string()))
    }
}
