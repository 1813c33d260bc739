//! Test doubles shared by the bot integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use homework_api::HomeworkSource;
use homework_bot::Notifier;
use homework_common::{Cursor, HomeworkError, Result};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed list of fetch results and records every cursor it saw.
///
/// Once the script runs out it answers with an empty list and no cursor.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Value>>>,
    cursors: Mutex<Vec<Cursor>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Value>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            cursors: Mutex::default(),
        }
    }

    pub fn cursors(&self) -> Vec<Cursor> {
        self.cursors.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.cursors.lock().unwrap().len()
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch(&self, cursor: Cursor) -> Result<Value> {
        self.cursors.lock().unwrap().push(cursor);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "homeworks": [] })))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Records every message it is asked to send, optionally failing them all.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            Err(HomeworkError::notification("chat unavailable"))
        } else {
            Ok(())
        }
    }
}
