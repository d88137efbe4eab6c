use crate::core::field::FieldKey;
use crate::core::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field values collected during one registration attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: IndexMap<FieldKey, Value>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<Value>) {
        self.values.insert(key, value.into());
    }

    pub fn with(mut self, key: FieldKey, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: FieldKey) -> &Value {
        const EMPTY: &Value = &Value::None;
        self.values.get(&key).unwrap_or(EMPTY)
    }

    pub fn text(&self, key: FieldKey) -> Option<&str> {
        self.get(key).as_text()
    }

    pub fn is_blank(&self, key: FieldKey) -> bool {
        self.get(key).is_empty()
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<Value> {
        self.values.shift_remove(&key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(FieldKey, Value)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (FieldKey, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
