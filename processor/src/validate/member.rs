use diagnostic::{ok, CriticalResult, Error, ErrorKind, ErrorsTrait, ToErr};

use crate::{
    config::SignaturePolicy,
    decl::{ComponentDecl, Directive, MemberDecl, MemberKind, TypeRef},
    source::DeclarationSource,
};

use super::Validator;

impl<'a, S: DeclarationSource> Validator<'a, S> {
    /// Critical errors exclude the member from generation; warnings keep it.
    pub(super) fn check_member(
        &self,
        decl: &ComponentDecl,
        member: &MemberDecl,
    ) -> diagnostic::Result<()> {
        match &member.directive {
            None => Ok(ok(())),
            Some(Directive::ViewById(_)) => self.check_view(decl, member).map(ok),
            Some(Directive::AfterViews) => self.check_after_views(decl, member),
            Some(Directive::Click(_)) => self.check_click(decl, member),
        }
    }

    fn check_view(&self, decl: &ComponentDecl, member: &MemberDecl) -> CriticalResult<()> {
        let anchor = decl.member_anchor(member);
        let ty = match &member.kind {
            MemberKind::Field { ty } => ty,
            MemberKind::Method { .. } => {
                return Error::anchored(
                    ErrorKind::InvalidMemberType,
                    &format!("view binding '{}' must be a field", member.name),
                    anchor,
                )
                .as_err()
            }
        };

        // Type and visibility are reported independently
        let mut errs = Vec::new();
        if let Some(note) = self.view_type_note(ty) {
            errs.push(
                Error::anchored(
                    ErrorKind::InvalidMemberType,
                    &format!(
                        "field '{}' of type {ty} must be a subtype of {}",
                        member.name, self.config.platform.view
                    ),
                    anchor.clone(),
                )
                .with_note(note),
            );
        }
        if member.is_private() {
            errs.push(private_error(member, "field", anchor));
        }
        errs.err_or(())
    }

    fn check_after_views(
        &self,
        decl: &ComponentDecl,
        member: &MemberDecl,
    ) -> diagnostic::Result<()> {
        let anchor = decl.member_anchor(member);
        let (params, returns) = self.expect_method(member, "post-init hook", &anchor)?;

        let mut errs = Vec::new();
        if member.is_private() {
            errs.push(private_error(member, "method", anchor.clone()));
        }
        if !params.is_empty() {
            errs.push(Error::anchored(
                ErrorKind::InvalidSignature,
                &format!(
                    "post-init hook '{}' must take no parameters, found {}",
                    member.name,
                    params.len()
                ),
                anchor.clone(),
            ));
        }
        if !returns.is_void() {
            errs.push(void_error(member, returns, anchor));
        }
        self.apply_policy(errs)
    }

    fn check_click(&self, decl: &ComponentDecl, member: &MemberDecl) -> diagnostic::Result<()> {
        let anchor = decl.member_anchor(member);
        let (params, returns) = self.expect_method(member, "click handler", &anchor)?;

        let mut errs = Vec::new();
        if member.is_private() {
            errs.push(private_error(member, "method", anchor.clone()));
        }
        match params {
            [param] => {
                if let Some(note) = self.view_type_note(param) {
                    errs.push(
                        Error::anchored(
                            ErrorKind::InvalidSignature,
                            &format!(
                                "click handler '{}' takes {param}, expected a subtype of {}",
                                member.name, self.config.platform.view
                            ),
                            anchor.clone(),
                        )
                        .with_note(note),
                    );
                }
            }
            _ => errs.push(Error::anchored(
                ErrorKind::InvalidSignature,
                &format!(
                    "click handler '{}' must take exactly one parameter, found {}",
                    member.name,
                    params.len()
                ),
                anchor.clone(),
            )),
        }
        if !returns.is_void() {
            errs.push(void_error(member, returns, anchor));
        }
        self.apply_policy(errs)
    }

    fn expect_method<'m>(
        &self,
        member: &'m MemberDecl,
        role: &str,
        anchor: &diagnostic::Anchor,
    ) -> CriticalResult<(&'m [TypeRef], &'m TypeRef)> {
        match &member.kind {
            MemberKind::Method { params, returns } => Ok((params.as_slice(), returns)),
            MemberKind::Field { .. } => Error::anchored(
                ErrorKind::InvalidMemberType,
                &format!("{role} '{}' must be a method", member.name),
                anchor.clone(),
            )
            .as_err(),
        }
    }

    // None when the type reaches the platform view type
    fn view_type_note(&self, ty: &TypeRef) -> Option<String> {
        match ty.as_declared() {
            Some(name) => self.ascend(name, &self.config.platform.view).note(),
            None => Some(format!("{ty} is not a class type")),
        }
    }

    fn apply_policy(&self, errs: Vec<Error>) -> diagnostic::Result<()> {
        match self.config.validate.signatures {
            SignaturePolicy::Strict => errs.err_or(ok(())),
            SignaturePolicy::Permissive => Ok(diagnostic::err((), errs)),
        }
    }
}

fn private_error(member: &MemberDecl, what: &str, anchor: diagnostic::Anchor) -> Error {
    Error::anchored(
        ErrorKind::IllegalPrivateModifier,
        &format!("{what} '{}' must not be private", member.name),
        anchor,
    )
}

fn void_error(member: &MemberDecl, returns: &TypeRef, anchor: diagnostic::Anchor) -> Error {
    Error::anchored(
        ErrorKind::InvalidSignature,
        &format!("method '{}' must return void, found {returns}", member.name),
        anchor,
    )
}

#[cfg(test)]
mod tests {
    use diagnostic::ErrorKind;

    use crate::{
        config::SignaturePolicy,
        decl::{MemberDecl, Modifier},
        fixtures::{activity, after_views, click, source_with, view_field},
        validate::Validator,
        ProcessorConfig,
    };

    // (kinds, kept) for one member under the given policy
    fn check(member: MemberDecl, policy: SignaturePolicy) -> (Vec<ErrorKind>, bool) {
        let mut config = ProcessorConfig::default();
        config.validate.signatures = policy;
        let decl = activity("com.example.Main");
        let source = source_with(vec![decl.clone()]);
        let validator = Validator::new(&source, &config);
        match validator.check_member(&decl, &member) {
            Ok(warnings) => (warnings.errors.iter().map(|e| e.kind).collect(), true),
            Err(errs) => (errs.iter().map(|e| e.kind).collect(), false),
        }
    }

    fn strict(member: MemberDecl) -> (Vec<ErrorKind>, bool) {
        check(member, SignaturePolicy::Strict)
    }

    #[test]
    fn view_field_subtype_passes() {
        assert_eq!(strict(view_field("title", "android.widget.TextView", 1)), (vec![], true));
        assert_eq!(strict(view_field("root", "android.view.View", 2)), (vec![], true));
    }

    #[test]
    fn private_view_field_is_excluded() {
        let mut member = view_field("title", "android.widget.TextView", 1);
        member.modifiers.push(Modifier::Private);
        assert_eq!(strict(member), (vec![ErrorKind::IllegalPrivateModifier], false));
    }

    #[test]
    fn view_type_and_visibility_are_both_reported() {
        let mut member = view_field("name", "java.lang.String", 1);
        member.modifiers.push(Modifier::Private);
        assert_eq!(
            check(member, SignaturePolicy::Permissive),
            (
                vec![ErrorKind::InvalidMemberType, ErrorKind::IllegalPrivateModifier],
                false
            )
        );
        assert_eq!(
            strict(view_field("count", "int", 1)),
            (vec![ErrorKind::InvalidMemberType], false)
        );
    }

    #[test]
    fn after_views_signature_rules() {
        assert_eq!(strict(after_views("init", &[], "void")), (vec![], true));
        assert_eq!(
            strict(after_views("init", &["int"], "boolean")),
            (vec![ErrorKind::InvalidSignature, ErrorKind::InvalidSignature], false)
        );
        assert_eq!(
            check(after_views("init", &["int"], "void"), SignaturePolicy::Permissive),
            (vec![ErrorKind::InvalidSignature], true)
        );
    }

    #[test]
    fn click_handler_parameter_rules() {
        assert_eq!(
            strict(click("onTap", &["android.view.View"], &[10])),
            (vec![], true)
        );
        assert_eq!(
            strict(click("onTap", &["android.widget.Button"], &[10])),
            (vec![], true)
        );
        assert_eq!(
            strict(click("onTap", &[], &[10])),
            (vec![ErrorKind::InvalidSignature], false)
        );
        assert_eq!(
            strict(click("onTap", &["int", "int"], &[10])),
            (vec![ErrorKind::InvalidSignature], false)
        );
        assert_eq!(
            strict(click("onTap", &["java.lang.String"], &[10])),
            (vec![ErrorKind::InvalidSignature], false)
        );
    }

    #[test]
    fn private_click_handler_is_kept_only_when_permissive() {
        let mut member = click("onTap", &["android.view.View"], &[10]);
        member.modifiers.push(Modifier::Private);
        assert_eq!(
            strict(member.clone()),
            (vec![ErrorKind::IllegalPrivateModifier], false)
        );
        assert_eq!(
            check(member, SignaturePolicy::Permissive),
            (vec![ErrorKind::IllegalPrivateModifier], true)
        );
    }

    #[test]
    fn directive_on_wrong_member_kind() {
        let mut hook_on_field = view_field("title", "android.widget.TextView", 1);
        hook_on_field.directive = Some(crate::decl::Directive::AfterViews);
        assert_eq!(
            check(hook_on_field, SignaturePolicy::Permissive),
            (vec![ErrorKind::InvalidMemberType], false)
        );

        let mut click_on_field = view_field("button", "android.widget.Button", 1);
        click_on_field.directive = Some(crate::decl::Directive::Click(vec![1]));
        assert_eq!(strict(click_on_field), (vec![ErrorKind::InvalidMemberType], false));

        let mut view_on_method = after_views("init", &[], "void");
        view_on_method.directive = Some(crate::decl::Directive::ViewById(1));
        assert_eq!(strict(view_on_method), (vec![ErrorKind::InvalidMemberType], false));
    }
}
