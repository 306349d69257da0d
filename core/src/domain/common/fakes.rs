use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dietary_analysis::ports::LLMClient,
    history::{entities::HistoryRow, ports::HistoryStore},
    product::{entities::Product, ports::ProductSource},
};

pub type FakeService = Service<FakeLLM, FakeProductSource, FakeHistoryStore>;

#[derive(Debug, Clone)]
pub enum LlmBehaviour {
    Reply(String),
    Fail,
    Delayed(Duration, String),
}

#[derive(Debug, Clone)]
pub struct FakeLLM {
    behaviour: LlmBehaviour,
    calls: Arc<AtomicUsize>,
}

impl FakeLLM {
    pub fn new(behaviour: LlmBehaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(LlmBehaviour::Reply(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLMClient for FakeLLM {
    async fn generate_with_text(
        &self,
        _prompt: String,
        _response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            LlmBehaviour::Reply(text) => Ok(text.clone()),
            LlmBehaviour::Fail => Err(CoreError::ExternalServiceError(
                "quota exceeded".to_string(),
            )),
            LlmBehaviour::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeProductSource {
    pub products: HashMap<String, Product>,
    pub failing: bool,
}

impl FakeProductSource {
    pub fn with(barcode: &str, product: Product) -> Self {
        Self {
            products: HashMap::from([(barcode.to_string(), product)]),
            failing: false,
        }
    }
}

impl ProductSource for FakeProductSource {
    async fn lookup_barcode(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        if self.failing {
            return Err(CoreError::ExternalServiceError("provider down".to_string()));
        }
        Ok(self.products.get(barcode).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeHistoryStore {
    pub rows: Arc<Mutex<Vec<HistoryRow>>>,
    pub failing: bool,
}

impl FakeHistoryStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn saved(&self) -> Vec<HistoryRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl HistoryStore for FakeHistoryStore {
    async fn save(&self, row: HistoryRow) -> Result<(), CoreError> {
        if self.failing {
            return Err(CoreError::ExternalServiceError("store down".to_string()));
        }
        self.rows.lock().unwrap().push(row);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryRow>, CoreError> {
        if self.failing {
            return Err(CoreError::ExternalServiceError("store down".to_string()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}

pub fn service(llm: Option<FakeLLM>) -> FakeService {
    Service::new(
        llm,
        FakeProductSource::default(),
        FakeHistoryStore::default(),
        Duration::from_secs(5),
    )
}
