//! Common test utilities for Escala integration tests.
//!
//! Provides a scripted confirmation prompt, a shared in-memory store
//! handle, and an engine pre-loaded with a small roster.

use std::cell::Cell;
use std::sync::Arc;

use escala::domain::services::ShiftRotationCalculator;
use escala::{ConfirmationPrompt, LeaveEngine, MemoryStore};

/// Prompt whose answer is set by the test; counts how often it was asked.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: Cell<bool>,
    asked: Cell<usize>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            asked: Cell::new(0),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, _prompt: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer.get()
    }
}

pub type TestEngine = LeaveEngine<Arc<MemoryStore>, ScriptedPrompt>;

/// Engine over a fresh in-memory store, with the prompt pre-set to
/// `confirm`. Returns the store handle so tests can inspect what was
/// persisted.
pub fn engine_confirming(confirm: bool) -> (TestEngine, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let engine = LeaveEngine::load(
        Arc::clone(&store),
        ScriptedPrompt::answering(confirm),
        ShiftRotationCalculator::new(),
    )
    .expect("empty store loads");
    (engine, store)
}

/// Engine with a small roster: two employees on rotating team A, one on
/// team B, one on fixed team F. Ids are assigned 1..=4 in order.
pub fn engine_with_roster(confirm: bool) -> (TestEngine, Arc<MemoryStore>) {
    let (mut engine, store) = engine_confirming(confirm);
    engine
        .add_employee("João Silva", "A", Some("AGSE".into()), None, None)
        .unwrap();
    engine
        .add_employee("Maria Santos", "A", Some("AGSE".into()), None, None)
        .unwrap();
    engine
        .add_employee("Ana Oliveira", "B", Some("AGSE".into()), None, None)
        .unwrap();
    engine
        .add_employee("Carla Nunes", "F", Some("Analista Técnico".into()), None, None)
        .unwrap();
    (engine, store)
}

/// Shorthand ISO date parser for test literals.
pub fn d(s: &str) -> chrono::NaiveDate {
    s.parse().expect("test date literal")
}
