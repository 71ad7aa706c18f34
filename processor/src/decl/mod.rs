use std::fmt::{Display, Formatter};

use diagnostic::Anchor;
use serde::Deserialize;

/// Qualified, dot-separated host type name, e.g. `android.widget.TextView`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn package(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(pkg, _)| pkg)
    }

    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(&self.0, |(_, name)| name)
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Void,
    Primitive(String),
    Declared(TypeName),
}

impl TypeRef {
    pub fn parse(ty: &str) -> Self {
        match ty {
            "void" => Self::Void,
            p if PRIMITIVES.contains(&p) => Self::Primitive(p.to_string()),
            _ => Self::Declared(TypeName::new(ty)),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn as_declared(&self) -> Option<&TypeName> {
        match self {
            Self::Declared(name) => Some(name),
            Self::Void | Self::Primitive(_) => None,
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Primitive(p) => f.write_str(p),
            TypeRef::Declared(name) => name.fmt(f),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl Display for DeclKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DeclKind::Class => "a class",
            DeclKind::Interface => "an interface",
            DeclKind::Enum => "an enum",
            DeclKind::Annotation => "an annotation type",
            DeclKind::Record => "a record",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Field { ty: TypeRef },
    Method { params: Vec<TypeRef>, returns: TypeRef },
}

/// Parsed binding directive; a member carries at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    ViewById(i32),
    AfterViews,
    Click(Vec<i32>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    pub modifiers: Vec<Modifier>,
    pub directive: Option<Directive>,
}

impl MemberDecl {
    pub fn is_private(&self) -> bool {
        self.modifiers.contains(&Modifier::Private)
    }

    /// True when `self`, declared in a subtype, hides or overrides `other`.
    pub fn overrides(&self, other: &MemberDecl) -> bool {
        self.name == other.name
            && match (&self.kind, &other.kind) {
                (MemberKind::Field { .. }, MemberKind::Field { .. }) => true,
                (MemberKind::Method { params: a, .. }, MemberKind::Method { params: b, .. }) => {
                    a == b
                }
                _ => false,
            }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDecl {
    pub name: TypeName,
    pub package: String,
    pub kind: DeclKind,
    pub extends: Option<TypeName>,
    // None when the generation directive was never evaluated
    pub layout: Option<i32>,
    pub members: Vec<MemberDecl>,
}

impl ComponentDecl {
    pub fn new(name: TypeName) -> Self {
        Self {
            package: name.package().to_string(),
            name,
            kind: DeclKind::Class,
            extends: None,
            layout: None,
            members: Vec::new(),
        }
    }

    /// Name relative to the package; differs from the simple name for nested classes.
    pub fn relative_name(&self) -> &str {
        match self.package.is_empty() {
            true => self.name.as_str(),
            false => self
                .name
                .as_str()
                .strip_prefix(&self.package)
                .and_then(|n| n.strip_prefix('.'))
                .unwrap_or(self.name.simple_name()),
        }
    }

    pub fn anchor(&self) -> Anchor {
        Anchor::component(self.name.as_str())
    }

    pub fn member_anchor(&self, member: &MemberDecl) -> Anchor {
        Anchor::member(self.name.as_str(), &member.name)
    }
}
