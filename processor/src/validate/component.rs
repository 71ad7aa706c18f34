use diagnostic::{CriticalResult, Error, ErrorKind, ToErr};
use shared::traits::ThenOk;

use crate::{
    decl::{ComponentDecl, DeclKind},
    source::DeclarationSource,
};

use super::Validator;

impl<'a, S: DeclarationSource> Validator<'a, S> {
    // Kind first, then base type; stops at the first failure
    pub(super) fn check_component(&self, decl: &ComponentDecl) -> CriticalResult<()> {
        (decl.kind == DeclKind::Class).then_ok(
            || (),
            || {
                Error::anchored(
                    ErrorKind::InvalidDeclarationKind,
                    &format!(
                        "'{}' is {}, only classes can be bound to a layout",
                        decl.relative_name(),
                        decl.kind
                    ),
                    decl.anchor(),
                )
                .as_vec()
            },
        )?;

        let base = &self.config.platform.activity;
        match self.ascend(&decl.name, base).note() {
            None => Ok(()),
            Some(note) => Error::anchored(
                ErrorKind::MissingRequiredBase,
                &format!("class '{}' must inherit from {base}", decl.relative_name()),
                decl.anchor(),
            )
            .with_note(note)
            .as_err(),
        }
    }
}

#[cfg(test)]
mod tests {
    use diagnostic::ErrorKind;

    use crate::{
        decl::{ComponentDecl, DeclKind},
        fixtures::{activity, source_with},
        validate::Validator,
        ProcessorConfig,
    };

    fn check(decl: ComponentDecl) -> Vec<ErrorKind> {
        let config = ProcessorConfig::default();
        let source = source_with(vec![decl.clone()]);
        let validator = Validator::new(&source, &config);
        match validator.check_component(&decl) {
            Ok(()) => Vec::new(),
            Err(errs) => errs.into_iter().map(|e| e.kind).collect(),
        }
    }

    #[test]
    fn direct_activity_passes() {
        assert!(check(activity("com.example.Main")).is_empty());
    }

    #[test]
    fn interface_stops_before_base_check() {
        let mut decl = activity("com.example.Main");
        decl.kind = DeclKind::Interface;
        decl.extends = None;
        assert_eq!(check(decl), [ErrorKind::InvalidDeclarationKind]);
    }

    #[test]
    fn missing_base_is_reported_with_chain() {
        let mut decl = activity("com.example.Main");
        decl.extends = Some("java.lang.Object".into());
        let config = ProcessorConfig::default();
        let source = source_with(vec![decl.clone()]);
        let errs = Validator::new(&source, &config)
            .check_component(&decl)
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ErrorKind::MissingRequiredBase);
        assert_eq!(
            errs[0].notes,
            ["base-type chain: com.example.Main -> java.lang.Object"]
        );
    }
}
