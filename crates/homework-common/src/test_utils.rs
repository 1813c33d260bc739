//! Test utilities and shared test helpers for the homework bot.
//!
//! Fixtures here describe the Practicum API payloads the bot consumes, so that
//! every crate in the workspace tests against the same shapes.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Practicum API payload fixtures.
pub mod payload_fixtures {
    use serde_json::{json, Value};

    /// A single homework item.
    pub fn homework(name: &str, status: &str) -> Value {
        json!({
            "id": 124,
            "status": status,
            "homework_name": name,
            "reviewer_comment": "",
            "date_updated": "2023-11-14T22:13:20Z",
            "lesson_name": "Итоговый проект"
        })
    }

    /// A response carrying the given items and cursor.
    pub fn response(homeworks: Vec<Value>, current_date: u64) -> Value {
        json!({
            "homeworks": homeworks,
            "current_date": current_date
        })
    }

    /// A response with no homework updates.
    pub fn empty_response(current_date: u64) -> Value {
        response(Vec::new(), current_date)
    }

    /// A response that omits the `current_date` cursor.
    pub fn response_without_cursor(homeworks: Vec<Value>) -> Value {
        json!({ "homeworks": homeworks })
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating homework names as students write them.
    pub fn homework_name_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Zа-яА-Я0-9_. -]{1,64}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating one of the known status codes.
    pub fn known_status_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("approved"), Just("reviewing"), Just("rejected")]
    }

    /// Strategy for generating status codes outside the known set.
    pub fn unknown_status_strategy() -> impl Strategy<Value = String> {
        r"[a-z_]{1,16}".prop_filter("must not be a known status", |s| {
            !matches!(s.as_str(), "approved" | "reviewing" | "rejected")
        })
    }
}
