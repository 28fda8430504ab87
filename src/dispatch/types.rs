use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// What a handler reports back. `action` is a stable machine-readable
/// label; anything domain-specific goes in `detail`.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResult {
    pub success: bool,
    pub action: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub detail: Map<String, Value>,
}

impl HandlerResult {
    pub fn ok(action: &str) -> Self {
        Self {
            success: true,
            action: action.to_string(),
            detail: Map::new(),
        }
    }

    pub fn failed(action: &str) -> Self {
        Self {
            success: false,
            action: action.to_string(),
            detail: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.detail.insert(key.to_string(), value);
        self
    }
}

/// Failure taxonomy of a dispatch. Nothing above the dispatcher boundary
/// ever receives a raw exception; these terminate in a structured result
/// plus exactly one spoken utterance.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("malformed intent: {0}")]
    InvalidIntentShape(String),

    #[error("intent {intent} is not available on {route}")]
    PageRestricted { intent: String, route: String },

    #[error("intent {0} requires authentication")]
    AuthRequired(String),

    #[error("unknown intent {0}")]
    UnknownIntent(String),

    #[error("no element matched {0}")]
    TargetNotFound(String),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Terminal state of one dispatch call.
#[derive(Debug)]
pub enum DispatchOutcome {
    Executed(HandlerResult),
    Rejected {
        error: DispatchError,
        result: HandlerResult,
    },
    Errored {
        error: DispatchError,
        result: HandlerResult,
    },
}

impl DispatchOutcome {
    pub fn result(&self) -> &HandlerResult {
        match self {
            Self::Executed(result)
            | Self::Rejected { result, .. }
            | Self::Errored { result, .. } => result,
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Executed(_))
    }
}
