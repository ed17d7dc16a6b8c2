// tests/support/mocks/email.rs
use async_trait::async_trait;
use directory_core::application::{
    ApplicationError, ApplicationResult,
    ports::email::{EmailDispatcher, EmailMessage},
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps every message it is asked to send. Can be switched to fail.
#[derive(Default)]
pub struct RecordingEmailDispatcher {
    sent: Mutex<Vec<EmailMessage>>,
    failing: AtomicBool,
}

impl RecordingEmailDispatcher {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(true),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDispatcher for RecordingEmailDispatcher {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::dispatch("relay unavailable"));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}
