use crate::core::{Backend, BackendResponse};
use crate::utils::error::{LoaderError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

enum Reply {
    Respond(u16, String),
    Fail(String),
}

/// 依照 path（含 query）回傳預先設定的結果，並記錄被請求的 URL
#[derive(Clone, Default)]
pub(crate) struct ScriptedBackend {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(path, status, &body.to_string())
    }

    pub(crate) fn respond_raw(self, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Respond(status, body.to_string()));
        self
    }

    pub(crate) fn fail(self, path: &str, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Fail(message.to_string()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn get(&self, url: &Url) -> Result<BackendResponse> {
        let key = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        self.requests.lock().unwrap().push(key.clone());

        match self.replies.lock().unwrap().get(&key) {
            Some(Reply::Respond(status, body)) => Ok(BackendResponse::new(
                StatusCode::from_u16(*status).unwrap(),
                body.clone().into_bytes(),
            )),
            Some(Reply::Fail(message)) => Err(LoaderError::BackendError {
                message: message.clone(),
            }),
            None => Err(LoaderError::BackendError {
                message: format!("no scripted reply for {}", key),
            }),
        }
    }
}
