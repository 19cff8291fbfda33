//! Shared test doubles.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cartkit::cart::{CartItem, CartStore, ItemSpec};
use cartkit::confirm::{ConfirmRequest, ConfirmationPort, Decision};
use cartkit::notify::Notifier;
use cartkit::storage::{CartBackend, MemoryBackend, StorageError};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Answers from a fixed script and records every request it saw.
pub struct ScriptedPort {
    answers: Mutex<VecDeque<Decision>>,
    pub requests: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedPort {
    pub fn new(answers: &[Decision]) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl ConfirmationPort for ScriptedPort {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn confirm(&self, request: &ConfirmRequest) -> Decision {
        self.requests.lock().push(request.clone());
        self.answers
            .lock()
            .pop_front()
            .unwrap_or(Decision::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Error { title: String, message: String },
    Info { title: String, message: String },
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: Mutex<Vec<Note>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> usize {
        self.notes
            .lock()
            .iter()
            .filter(|n| matches!(n, Note::Error { .. }))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        self.notes.lock().push(Note::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn notify_info(&self, title: &str, message: &str) {
        self.notes.lock().push(Note::Info {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Backend whose `clear` always fails.
#[derive(Default)]
pub struct FailingBackend {
    pub clear_calls: AtomicUsize,
}

#[async_trait]
impl CartBackend for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        Ok(Vec::new())
    }

    async fn save(&self, _items: &[CartItem]) -> Result<(), StorageError> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            reason: "storage offline".to_string(),
        })
    }
}

/// Backend whose `clear` waits until the test calls `release`.
#[derive(Default)]
pub struct GatedBackend {
    pub entered: Notify,
    gate: Notify,
}

impl GatedBackend {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl CartBackend for GatedBackend {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        Ok(Vec::new())
    }

    async fn save(&self, _items: &[CartItem]) -> Result<(), StorageError> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(())
    }
}

pub fn fish(id: &str, price: u64) -> ItemSpec {
    ItemSpec::new(id, format!("Fish {id}"), price)
}

/// Store holding three distinct lines.
pub fn three_item_store(backend: Arc<dyn CartBackend>) -> CartStore {
    let store = CartStore::new(backend);
    store.add_to_cart(fish("a", 50_000));
    store.add_to_cart(fish("b", 120_000));
    store.add_to_cart(fish("b", 120_000));
    store.add_to_cart(fish("c", 75_000));
    store
}

pub fn memory() -> Arc<dyn CartBackend> {
    Arc::new(MemoryBackend::new())
}
