use serde::Serialize;

use crate::{Error, ErrorKind};

/// Machine-readable form of an [`Error`], one JSON object per diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    pub severity: &'static str,
    pub code: &'static str,
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl From<&Error> for DiagnosticRecord {
    fn from(error: &Error) -> Self {
        Self {
            severity: "error",
            code: error.kind.code(),
            kind: error.kind,
            message: error.msg.to_string(),
            anchor: error.anchor.as_ref().map(|a| a.to_string()),
            notes: error.notes.to_vec(),
        }
    }
}

impl DiagnosticRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn emit(&self) -> serde_json::Result<()> {
        self.to_json().map(|msg| println!("{msg}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Anchor;

    #[test]
    fn json_has_code_kind_and_anchor() {
        let err = Error::anchored(
            ErrorKind::IllegalPrivateModifier,
            "field 'title' must not be private",
            Anchor::member("com.example.Main", "title"),
        );
        let json = DiagnosticRecord::from(&err).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["code"], "E0004");
        assert_eq!(value["kind"], "IllegalPrivateModifier");
        assert_eq!(value["anchor"], "com.example.Main#title");
        assert!(value.get("notes").is_none());
    }
}
