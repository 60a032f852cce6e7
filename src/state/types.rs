use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value recorded in the state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Text(String),
}

impl StateValue {
    /// Marker semantics: `true`, or text spelling a true value
    pub fn is_truthy(&self) -> bool {
        match self {
            StateValue::Bool(b) => *b,
            StateValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "1"
            ),
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{}", b),
            StateValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// On-disk layout of the state store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub meta: StateMeta,
    /// namespace -> key -> value
    #[serde(default)]
    pub modules: BTreeMap<String, BTreeMap<String, StateValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMeta {
    pub schema_version: u8,
    pub hostname: String,

    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,

    /// Monotonic revision bumped on every write
    #[serde(default)]
    pub state_revision: Option<u64>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            meta: StateMeta {
                schema_version: 1,
                hostname: "unknown".to_string(),
                last_update: None,
                state_revision: None,
            },
            modules: BTreeMap::new(),
        }
    }
}

impl State {
    pub fn for_host(hostname: String) -> Self {
        let mut state = Self::default();
        state.meta.hostname = hostname;
        state
    }
}
