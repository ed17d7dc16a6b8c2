// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use directory_core::application::ports::{time::Clock, util::ReferenceGenerator};
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-03-05T10:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by the whole suite.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Hands out scripted enquiry references, then falls back to numbered ones.
#[derive(Default)]
pub struct SequenceReferences {
    scripted: Mutex<VecDeque<String>>,
    counter: Mutex<u32>,
}

impl SequenceReferences {
    pub fn scripted(references: &[&str]) -> Self {
        Self {
            scripted: Mutex::new(references.iter().map(|r| (*r).to_string()).collect()),
            counter: Mutex::new(0),
        }
    }
}

impl ReferenceGenerator for SequenceReferences {
    fn generate(&self, _now: DateTime<Utc>) -> String {
        if let Some(next) = self.scripted.lock().unwrap().pop_front() {
            return next;
        }
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("enq-test-{counter:05}")
    }
}
