use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How the dispatcher should locate the target element.
/// Wire names match what the generative classifier returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetMethod {
    ByName,
    ByIndex,
    ById,
    Direct,
    Complex,
}

impl Default for TargetMethod {
    fn default() -> Self {
        Self::Direct
    }
}

/// Structured output of intent classification. Immutable once produced;
/// consumed exactly once by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIntent {
    pub intent: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub method: TargetMethod,
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub requires_auth: bool,
    // serde camelCase would produce "fallbackToAi"; the classifier
    // contract spells it "fallbackToAI".
    #[serde(default, rename = "fallbackToAI")]
    pub fallback_to_ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolvedIntent {
    pub fn direct(intent: &str, confidence: f32) -> Self {
        Self {
            intent: intent.to_string(),
            target: None,
            method: TargetMethod::Direct,
            params: Map::new(),
            confidence,
            requires_auth: false,
            fallback_to_ai: false,
            error: None,
        }
    }

    /// Degraded result for any classifier failure. Signals the dispatcher
    /// to surface a "didn't understand" response; never carries side
    /// effects of its own.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            intent: "unknown".to_string(),
            target: None,
            method: TargetMethod::Complex,
            params: Map::new(),
            confidence: 0.0,
            requires_auth: false,
            fallback_to_ai: true,
            error: Some(message.into()),
        }
    }

    pub fn with_param(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    pub fn param_index(&self, key: &str) -> Option<usize> {
        self.params.get(key).and_then(Value::as_u64).map(|v| v as usize)
    }

    /// The target/method/params triple must be internally consistent
    /// before any side effect runs.
    pub fn validate_shape(&self) -> Result<(), String> {
        match self.method {
            TargetMethod::ByIndex => match self.params.get("index") {
                Some(v) if v.as_u64().is_some() => Ok(()),
                Some(v) => Err(format!(
                    "method byIndex requires a non-negative integer index, got {v}"
                )),
                None => Err("method byIndex requires params.index".to_string()),
            },
            TargetMethod::ByName => {
                if self.target.as_deref().map_or(true, |t| t.trim().is_empty()) {
                    Err("method byName requires a non-empty target".to_string())
                } else {
                    Ok(())
                }
            }
            TargetMethod::ById => {
                let has_id = self
                    .params
                    .get("id")
                    .and_then(Value::as_str)
                    .map_or(false, |s| !s.trim().is_empty());
                let has_target = self.target.as_deref().map_or(false, |t| !t.trim().is_empty());
                if has_id || has_target {
                    Ok(())
                } else {
                    Err("method byId requires params.id or a target".to_string())
                }
            }
            TargetMethod::Direct | TargetMethod::Complex => Ok(()),
        }
    }
}

/// Minimal view of the command table the resolver embeds into the
/// classifier prompt: intent name plus the route prefixes it is valid on
/// (empty slice = available anywhere).
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub intent: &'static str,
    pub routes: &'static [&'static str],
}

impl ActionCatalog {
    /// Intent names available on the given pathname.
    pub fn available_for(&self, pathname: &str) -> Vec<&'static str> {
        let lowered = pathname.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.routes.is_empty()
                    || e.routes.iter().any(|r| lowered.starts_with(&r.to_lowercase()))
            })
            .map(|e| e.intent)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{
            "intent": "addToCart",
            "target": "chocolates",
            "method": "byName",
            "params": {"quantity": 2},
            "confidence": 0.9,
            "requiresAuth": false,
            "fallbackToAI": true
        }"#;
        let intent: ResolvedIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.intent, "addToCart");
        assert_eq!(intent.method, TargetMethod::ByName);
        assert!(intent.fallback_to_ai);

        let back = serde_json::to_value(&intent).unwrap();
        assert_eq!(back["requiresAuth"], json!(false));
        assert_eq!(back["fallbackToAI"], json!(true));
        assert_eq!(back["method"], json!("byName"));
    }

    #[test]
    fn by_index_requires_integer_index() {
        let mut intent = ResolvedIntent::direct("select_item", 0.9);
        intent.method = TargetMethod::ByIndex;
        assert!(intent.validate_shape().is_err());

        let ok = intent.clone().with_param("index", json!(3));
        assert!(ok.validate_shape().is_ok());

        let bad = intent.with_param("index", json!(-2));
        assert!(bad.validate_shape().is_err(), "negative index must be rejected");
    }

    #[test]
    fn by_name_requires_target() {
        let mut intent = ResolvedIntent::direct("addToCart", 0.9);
        intent.method = TargetMethod::ByName;
        assert!(intent.validate_shape().is_err());
        intent.target = Some("flores".to_string());
        assert!(intent.validate_shape().is_ok());
    }
}
