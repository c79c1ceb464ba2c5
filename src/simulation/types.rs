use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Structured key/value data attached to an entry. Keys keep insertion order.
pub type Context = Map<String, Value>;

pub const USERS: [&str; 5] = ["alice", "bob", "charlie", "diana", "eve"];

pub const ACTIONS: [&str; 6] = [
    "login",
    "logout",
    "view_page",
    "create_post",
    "delete_post",
    "update_profile",
];

pub const PAGES: [&str; 6] = [
    "/home",
    "/profile",
    "/dashboard",
    "/settings",
    "/posts",
    "/admin",
];

pub const ERROR_MESSAGES: [&str; 6] = [
    "Database connection failed",
    "Invalid user credentials",
    "File not found",
    "Permission denied",
    "Timeout occurred",
    "Memory limit exceeded",
];

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; TestBot/1.0)";

pub const IP_PREFIX: &str = "192.168.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Error, Level::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
        }
    }

    /// Entries at this level are mirrored to the diagnostic stream.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four kinds of entry drawn each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Activity,
    Warning,
    Error,
    Debug,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Activity,
        Category::Warning,
        Category::Error,
        Category::Debug,
    ];

    pub fn level(&self) -> Level {
        match self {
            Category::Activity => Level::Info,
            Category::Warning => Level::Warning,
            Category::Error => Level::Error,
            Category::Debug => Level::Debug,
        }
    }
}

/// A single generated line, built and serialized immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: Level,
    pub message: String,
    pub context: Context,
}

impl LogEntry {
    /// Entry stamped with the current local wall-clock time, truncated to seconds.
    pub fn now(level: Level, message: impl Into<String>, context: Context) -> Self {
        let timestamp = Local::now().naive_local();
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            level,
            message: message.into(),
            context,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

/// Simulated user action. Field order is the serialized key order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivitySample {
    pub user: String,
    pub action: String,
    pub page: String,
    pub ip: String,
    pub user_agent: String,
}
