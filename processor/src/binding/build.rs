use tracing::debug;

use crate::{
    decl::{Directive, MemberDecl, MemberKind, TypeRef},
    validate::ValidatedComponent,
};

use super::{ClickBinding, ComponentBinding, ViewBinding};

fn single_param(member: &MemberDecl) -> Option<&TypeRef> {
    match &member.kind {
        MemberKind::Method { params, .. } if params.len() == 1 => params.first(),
        _ => None,
    }
}

/// Walks the validated members once, in the order the source returned them.
pub fn build(validated: &ValidatedComponent) -> ComponentBinding {
    let decl = validated.decl;
    let mut binding = ComponentBinding::new(
        decl.name.clone(),
        decl.package.clone(),
        decl.relative_name().to_string(),
    );
    binding.layout = decl.layout;

    for member in &validated.members {
        match (&member.directive, &member.kind) {
            (Some(Directive::ViewById(id)), MemberKind::Field { ty: TypeRef::Declared(ty) }) => {
                binding.views.push(ViewBinding {
                    id: *id,
                    member: member.name.clone(),
                    ty: ty.clone(),
                })
            }
            (Some(Directive::AfterViews), _) => binding.after_views.push(member.name.clone()),
            (Some(Directive::Click(ids)), _) => binding.clicks.push(ClickBinding {
                handler: member.name.clone(),
                ids: ids.clone(),
                param: single_param(member).and_then(TypeRef::as_declared).cloned(),
            }),
            // Validation never lets other view shapes through
            (Some(Directive::ViewById(_)), _) | (None, _) => (),
        }
    }

    debug!(
        component = %binding.component,
        views = binding.views.len(),
        hooks = binding.after_views.len(),
        clicks = binding.clicks.len(),
        "built binding"
    );
    binding
}
