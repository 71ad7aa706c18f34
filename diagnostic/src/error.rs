use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Every failure the processor can report, in the order the pipeline hits them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidDeclarationKind,
    MissingRequiredBase,
    InvalidMemberType,
    IllegalPrivateModifier,
    InvalidSignature,
    DuplicateComponent,
    MissingLayoutDirective,
    EmissionIOFailure,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDeclarationKind => "E0001",
            ErrorKind::MissingRequiredBase => "E0002",
            ErrorKind::InvalidMemberType => "E0003",
            ErrorKind::IllegalPrivateModifier => "E0004",
            ErrorKind::InvalidSignature => "E0005",
            ErrorKind::DuplicateComponent => "E0006",
            ErrorKind::MissingLayoutDirective => "E0007",
            ErrorKind::EmissionIOFailure => "E0008",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDeclarationKind => "InvalidDeclarationKind",
            ErrorKind::MissingRequiredBase => "MissingRequiredBase",
            ErrorKind::InvalidMemberType => "InvalidMemberType",
            ErrorKind::IllegalPrivateModifier => "IllegalPrivateModifier",
            ErrorKind::InvalidSignature => "InvalidSignature",
            ErrorKind::DuplicateComponent => "DuplicateComponent",
            ErrorKind::MissingLayoutDirective => "MissingLayoutDirective",
            ErrorKind::EmissionIOFailure => "EmissionIOFailure",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declaration or member a diagnostic is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Anchor {
    pub component: String,
    pub member: Option<String>,
}

impl Anchor {
    pub fn component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            member: None,
        }
    }

    pub fn member(component: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            member: Some(member.into()),
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}#{member}", self.component),
            None => f.write_str(&self.component),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
    pub anchor: Option<Anchor>,
    pub notes: Vec<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: msg.to_string(),
            anchor: None,
            notes: Vec::new(),
        }
    }

    pub fn anchored(kind: ErrorKind, msg: &str, anchor: Anchor) -> Self {
        Self::new(kind, msg).at(anchor)
    }

    pub fn at(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    // Only fills in an anchor if none was set closer to the failure
    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.anchor.is_none() {
            self.anchor = Some(anchor);
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.kind.code(), self.msg)?;
        if let Some(anchor) = &self.anchor {
            write!(f, " (at {anchor})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
