use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Flattened template parameters handed to a delivery provider.
///
/// Keys are the template variable names the provider substitutes. Values
/// are kept as JSON so numeric fields such as `waitlist_number` survive
/// the trip to providers that accept typed parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NotificationPayload(BTreeMap<String, Value>);

impl NotificationPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Address the notification is meant for (`to_email`).
    pub fn recipient(&self) -> Option<&str> {
        self.get_str("to_email")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
