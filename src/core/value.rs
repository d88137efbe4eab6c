use serde::{Deserialize, Serialize};

/// Handle to an uploaded file; the bytes live with whoever accepted the upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    None,
    Text(String),
    File(FileRef),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.trim().is_empty(),
            Self::File(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            Self::File(f) => Some(f),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<FileRef> for Value {
    fn from(value: FileRef) -> Self {
        Self::File(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileRef, Value};

    #[test]
    fn blank_text_counts_as_empty() {
        assert!(Value::None.is_empty());
        assert!(Value::text("   ").is_empty());
        assert!(!Value::text("E1").is_empty());
        assert!(!Value::from(FileRef::new("photo.png", 0)).is_empty());
    }

    #[test]
    fn untagged_serde_keeps_shapes() {
        let file: Value = serde_json::from_str(r#"{"name":"a.png","size":12}"#).expect("file");
        assert_eq!(file.as_file().map(|f| f.size), Some(12));

        let text: Value = serde_json::from_str(r#""hello""#).expect("text");
        assert_eq!(text.as_text(), Some("hello"));

        let none: Value = serde_json::from_str("null").expect("null");
        assert_eq!(none, Value::None);
    }
}
