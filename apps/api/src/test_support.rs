//! Shared test doubles for the outbound clients.
//!
//! Both collaborators are trait objects in `AppState`, so tests substitute
//! these doubles instead of touching the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::completion::{ChatMessage, ChatParams, CompletionClient, CompletionError};
use crate::lessons::{LessonsCatalog, LessonsError};

/// Catalog double returning a fixed list of lesson names.
pub struct FixedCatalog(Vec<String>);

impl FixedCatalog {
    pub fn of(names: &[&str]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl LessonsCatalog for FixedCatalog {
    async fn lesson_names(&self) -> Result<Vec<String>, LessonsError> {
        Ok(self.0.clone())
    }
}

/// Catalog double that fails with an upstream HTTP status.
pub struct FailingCatalog {
    pub status: u16,
}

#[async_trait]
impl LessonsCatalog for FailingCatalog {
    async fn lesson_names(&self) -> Result<Vec<String>, LessonsError> {
        Err(LessonsError::Api {
            status: self.status,
            message: "lessons service unavailable".to_string(),
        })
    }
}

/// Completion double returning a canned reply and recording every call.
pub struct CannedCompletion {
    reply: String,
    calls: AtomicUsize,
    last_user_prompt: Mutex<Option<String>>,
    last_params: Mutex<Option<ChatParams>>,
}

impl CannedCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            last_user_prompt: Mutex::new(None),
            last_params: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_prompt(&self) -> Option<String> {
        self.last_user_prompt.lock().unwrap().clone()
    }

    pub fn last_params(&self) -> Option<ChatParams> {
        *self.last_params.lock().unwrap()
    }
}

#[async_trait]
impl CompletionClient for CannedCompletion {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        params: ChatParams,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_prompt.lock().unwrap() = messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.clone());
        *self.last_params.lock().unwrap() = Some(params);
        Ok(self.reply.clone())
    }
}

/// Completion double that fails with an upstream API status.
pub struct FailingCompletion {
    pub status: u16,
}

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn chat(
        &self,
        _messages: &[ChatMessage],
        _params: ChatParams,
    ) -> Result<String, CompletionError> {
        Err(CompletionError::Api {
            status: self.status,
            message: "model unavailable".to_string(),
        })
    }
}
