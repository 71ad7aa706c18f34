mod manifest;
mod names;
pub mod platform;

use std::collections::HashMap;

use crate::decl::{ComponentDecl, MemberDecl, TypeName};

pub use manifest::{load_declarations, parse_declarations, ManifestError};
pub use names::{is_identifier, is_qualified_name};

/// Supplies one batch of component declarations and answers base-type queries.
pub trait DeclarationSource {
    /// Components in the order the batch is processed.
    fn components(&self) -> &[ComponentDecl];

    /// One step up the base-type chain, None once the chain ends or the type is unknown.
    fn super_type(&self, ty: &TypeName) -> Option<TypeName>;

    /// Members declared directly on `ty`; empty for types the source only knows by name.
    fn declared_members(&self, ty: &TypeName) -> &[MemberDecl];
}

/// In-memory declaration set. Explicit parents win over component `extends`,
/// which win over the built-in platform hierarchy.
#[derive(Debug, Default)]
pub struct Declarations {
    components: Vec<ComponentDecl>,
    parents: HashMap<TypeName, TypeName>,
    type_members: HashMap<TypeName, Vec<MemberDecl>>,
}

impl Declarations {
    pub fn new(components: Vec<ComponentDecl>) -> Self {
        Self {
            components,
            ..Self::default()
        }
    }

    pub fn with_type(mut self, ty: TypeName, parent: TypeName) -> Self {
        self.parents.insert(ty, parent);
        self
    }

    /// Members of a non-component base type, inherited by components below it.
    pub fn with_type_members(mut self, ty: TypeName, members: Vec<MemberDecl>) -> Self {
        self.type_members.insert(ty, members);
        self
    }

    pub fn with_component(mut self, component: ComponentDecl) -> Self {
        self.components.push(component);
        self
    }
}

impl DeclarationSource for Declarations {
    fn components(&self) -> &[ComponentDecl] {
        &self.components
    }

    fn super_type(&self, ty: &TypeName) -> Option<TypeName> {
        self.parents
            .get(ty)
            .cloned()
            .or_else(|| {
                self.components
                    .iter()
                    .find(|c| &c.name == ty)
                    .and_then(|c| c.extends.clone())
            })
            .or_else(|| platform::super_type(ty))
    }

    fn declared_members(&self, ty: &TypeName) -> &[MemberDecl] {
        match self.type_members.get(ty) {
            Some(members) => members,
            None => self
                .components
                .iter()
                .find(|c| &c.name == ty)
                .map(|c| c.members.as_slice())
                .unwrap_or_default(),
        }
    }
}
