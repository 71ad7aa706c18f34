mod component;
pub mod hierarchy;
mod member;

use diagnostic::{err, Error, ErrorsTrait, WarningResult};
use tracing::debug;

use crate::{
    decl::{ComponentDecl, MemberDecl, TypeName},
    source::DeclarationSource,
    ProcessorConfig,
};

use hierarchy::{ancestors, ascend, Ascent};

/// A component that passed the component-level checks, with the members that may be bound.
#[derive(Debug)]
pub struct ValidatedComponent<'a> {
    pub decl: &'a ComponentDecl,
    pub members: Vec<&'a MemberDecl>,
}

/// Stateless between calls; every diagnostic is returned to the caller.
pub struct Validator<'a, S> {
    source: &'a S,
    config: &'a ProcessorConfig,
}

impl<'a, S: DeclarationSource> Validator<'a, S> {
    pub fn new(source: &'a S, config: &'a ProcessorConfig) -> Self {
        Self { source, config }
    }

    pub fn ascend(&self, start: &TypeName, target: &TypeName) -> Ascent {
        ascend(
            start,
            target,
            self.config.validate.max_hierarchy_depth,
            |ty| self.source.super_type(ty),
        )
    }

    /// Full member list of a component: directive members inherited from
    /// declared base types (root-most first), then the component's own.
    /// A member hidden or overridden further down the chain is not inherited.
    pub fn members(&self, decl: &'a ComponentDecl) -> Vec<&'a MemberDecl> {
        let mut visible: Vec<&MemberDecl> = decl.members.iter().collect();
        let mut inherited = Vec::new();
        let chain = ancestors(
            &decl.name,
            self.config.validate.max_hierarchy_depth,
            |ty| self.source.super_type(ty),
        );
        for ancestor in chain {
            let own: Vec<&MemberDecl> = self
                .source
                .declared_members(&ancestor)
                .iter()
                .filter(|m| m.directive.is_some() && !visible.iter().any(|v| v.overrides(m)))
                .collect();
            visible.extend(own.iter().copied());
            inherited.push(own);
        }

        inherited
            .into_iter()
            .rev()
            .flatten()
            .chain(decl.members.iter())
            .collect()
    }

    /// Component checks first; members are only checked once the component passes.
    /// Member failures never affect sibling members.
    pub fn validate(
        &self,
        decl: &'a ComponentDecl,
    ) -> WarningResult<Option<ValidatedComponent<'a>>> {
        if let Err(errs) = self.check_component(decl) {
            debug!(component = %decl.name, "component rejected");
            return err(None, errs);
        }

        let mut errs: Vec<Error> = Vec::new();
        let mut members = Vec::new();
        for member in self.members(decl) {
            match errs.take_errs(self.check_member(decl, member)) {
                Some(warnings) => {
                    warnings.record_errs(&mut errs);
                    members.push(member);
                }
                None => debug!(component = %decl.name, member = %member.name, "member excluded"),
            }
        }

        err(Some(ValidatedComponent { decl, members }), errs)
    }
}
