use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::decl::{
    ComponentDecl, DeclKind, Directive, MemberDecl, MemberKind, Modifier, TypeName, TypeRef,
};

use super::{is_identifier, is_qualified_name, Declarations};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not read manifest {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("'{0}' is not a valid qualified type name")]
    InvalidTypeName(String),
    #[error("{component} is not declared inside package '{package}'")]
    PackageMismatch { component: String, package: String },
    #[error("'{member}' in {component} is not a valid member name")]
    InvalidMemberName { component: String, member: String },
    #[error("{component}#{member} carries more than one binding directive")]
    ConflictingDirectives { component: String, member: String },
    #[error("click directive on {component}#{member} lists no view ids")]
    EmptyClickIds { component: String, member: String },
    #[error("{component}#{member}: {reason}")]
    MemberShape {
        component: String,
        member: String,
        reason: &'static str,
    },
}

// On-disk schema

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default, rename = "component")]
    components: Vec<ComponentEntry>,
    #[serde(default, rename = "type")]
    types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    extends: String,
    #[serde(default, rename = "member")]
    members: Vec<MemberEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentEntry {
    name: String,
    #[serde(default)]
    kind: DeclKind,
    package: Option<String>,
    extends: Option<String>,
    layout: Option<i32>,
    #[serde(default, rename = "member")]
    members: Vec<MemberEntry>,
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MemberEntryKind {
    Field,
    Method,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemberEntry {
    name: String,
    kind: MemberEntryKind,
    #[serde(rename = "type")]
    ty: Option<String>,
    params: Option<Vec<String>>,
    returns: Option<String>,
    #[serde(default)]
    modifiers: Vec<Modifier>,
    view: Option<i32>,
    #[serde(default)]
    after_views: bool,
    click: Option<Vec<i32>>,
}

fn type_name(name: String) -> Result<TypeName, ManifestError> {
    match is_qualified_name(&name) {
        true => Ok(TypeName::new(name)),
        false => Err(ManifestError::InvalidTypeName(name)),
    }
}

fn type_ref(ty: String) -> Result<TypeRef, ManifestError> {
    match TypeRef::parse(&ty) {
        TypeRef::Declared(_) => type_name(ty).map(TypeRef::Declared),
        builtin => Ok(builtin),
    }
}

fn member_decls(
    entries: Vec<MemberEntry>,
    owner: &str,
) -> Result<Vec<MemberDecl>, ManifestError> {
    entries.into_iter().map(|m| m.into_decl(owner)).collect()
}

impl MemberEntry {
    fn into_decl(self, component: &str) -> Result<MemberDecl, ManifestError> {
        let shape_err = |member: &str, reason| ManifestError::MemberShape {
            component: component.to_string(),
            member: member.to_string(),
            reason,
        };

        if !is_identifier(&self.name) {
            return Err(ManifestError::InvalidMemberName {
                component: component.to_string(),
                member: self.name,
            });
        }

        let mut directives = Vec::new();
        if let Some(id) = self.view {
            directives.push(Directive::ViewById(id));
        }
        if self.after_views {
            directives.push(Directive::AfterViews);
        }
        if let Some(ids) = self.click {
            if ids.is_empty() {
                return Err(ManifestError::EmptyClickIds {
                    component: component.to_string(),
                    member: self.name,
                });
            }
            directives.push(Directive::Click(ids));
        }
        if directives.len() > 1 {
            return Err(ManifestError::ConflictingDirectives {
                component: component.to_string(),
                member: self.name,
            });
        }

        let kind = match (self.kind, self.ty, self.params, self.returns) {
            (MemberEntryKind::Field, Some(ty), None, None) => {
                MemberKind::Field { ty: type_ref(ty)? }
            }
            (MemberEntryKind::Field, None, _, _) => {
                return Err(shape_err(&self.name, "fields need a 'type'"))
            }
            (MemberEntryKind::Field, Some(_), _, _) => {
                return Err(shape_err(&self.name, "fields take no 'params' or 'returns'"))
            }
            (MemberEntryKind::Method, None, params, returns) => MemberKind::Method {
                params: params
                    .unwrap_or_default()
                    .into_iter()
                    .map(type_ref)
                    .collect::<Result<_, _>>()?,
                returns: returns.map_or(Ok(TypeRef::Void), type_ref)?,
            },
            (MemberEntryKind::Method, Some(_), _, _) => {
                let reason = "methods use 'params' and 'returns', not 'type'";
                return Err(shape_err(&self.name, reason));
            }
        };

        Ok(MemberDecl {
            name: self.name,
            kind,
            modifiers: self.modifiers,
            directive: directives.pop(),
        })
    }
}

impl ComponentEntry {
    fn into_decl(self) -> Result<ComponentDecl, ManifestError> {
        let name = type_name(self.name)?;
        let members = member_decls(self.members, name.as_str())?;
        // An explicit package must be a prefix of the qualified name
        let package = match self.package {
            None => name.package().to_string(),
            Some(pkg) if pkg.is_empty() => pkg,
            Some(pkg) if !is_qualified_name(&pkg) => {
                return Err(ManifestError::InvalidTypeName(pkg))
            }
            Some(pkg) if !name.as_str().starts_with(&format!("{pkg}.")) => {
                return Err(ManifestError::PackageMismatch {
                    component: name.to_string(),
                    package: pkg,
                })
            }
            Some(pkg) => pkg,
        };
        Ok(ComponentDecl {
            package,
            kind: self.kind,
            extends: self.extends.map(type_name).transpose()?,
            layout: self.layout,
            members,
            name,
        })
    }
}

impl Manifest {
    fn into_declarations(self) -> Result<Declarations, ManifestError> {
        let components = self
            .components
            .into_iter()
            .map(ComponentEntry::into_decl)
            .collect::<Result<_, _>>()?;
        self.types
            .into_iter()
            .try_fold(Declarations::new(components), |decls, entry| {
                let name = type_name(entry.name)?;
                let members = member_decls(entry.members, name.as_str())?;
                let decls = decls.with_type(name.clone(), type_name(entry.extends)?);
                Ok(match members.is_empty() {
                    true => decls,
                    false => decls.with_type_members(name, members),
                })
            })
    }
}

/// Parses a TOML declaration manifest into one batch.
pub fn parse_declarations(text: &str) -> Result<Declarations, ManifestError> {
    toml::from_str::<Manifest>(text)?.into_declarations()
}

pub fn load_declarations(path: &Path) -> Result<Declarations, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_declarations(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DeclarationSource;

    const MANIFEST: &str = r#"
        [[type]]
        name = "com.example.BaseActivity"
        extends = "android.app.Activity"

        [[component]]
        name = "com.example.Main"
        extends = "com.example.BaseActivity"
        layout = 100

        [[component.member]]
        name = "title"
        kind = "field"
        type = "android.widget.TextView"
        view = 1

        [[component.member]]
        name = "counter"
        kind = "field"
        type = "int"

        [[component.member]]
        name = "init"
        kind = "method"
        after_views = true

        [[component.member]]
        name = "onTap"
        kind = "method"
        params = ["android.view.View"]
        modifiers = ["public"]
        click = [10, 20]

        [[component]]
        name = "com.example.Settings"
        kind = "interface"
    "#;

    #[test]
    fn parses_components_members_and_types() {
        let decls = parse_declarations(MANIFEST).unwrap();
        let components = decls.components();
        assert_eq!(components.len(), 2);

        let main = &components[0];
        assert_eq!(main.name.as_str(), "com.example.Main");
        assert_eq!(main.package, "com.example");
        assert_eq!(main.layout, Some(100));
        assert_eq!(
            main.members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            ["title", "counter", "init", "onTap"]
        );
        assert_eq!(main.members[0].directive, Some(Directive::ViewById(1)));
        assert_eq!(main.members[1].directive, None);
        assert_eq!(main.members[2].directive, Some(Directive::AfterViews));
        assert_eq!(
            main.members[2].kind,
            MemberKind::Method {
                params: vec![],
                returns: TypeRef::Void
            }
        );
        assert_eq!(main.members[3].directive, Some(Directive::Click(vec![10, 20])));
        assert_eq!(main.members[3].modifiers, vec![Modifier::Public]);

        assert_eq!(components[1].kind, DeclKind::Interface);
        assert_eq!(components[1].layout, None);

        assert_eq!(
            decls.super_type(&"com.example.BaseActivity".into()),
            Some("android.app.Activity".into())
        );
    }

    #[test]
    fn rejects_two_directives_on_one_member() {
        let text = r#"
            [[component]]
            name = "com.example.Main"

            [[component.member]]
            name = "title"
            kind = "field"
            type = "android.widget.TextView"
            view = 1
            click = [2]
        "#;
        assert!(matches!(
            parse_declarations(text),
            Err(ManifestError::ConflictingDirectives { .. })
        ));
    }

    #[test]
    fn rejects_empty_click_ids() {
        let text = r#"
            [[component]]
            name = "com.example.Main"

            [[component.member]]
            name = "onTap"
            kind = "method"
            click = []
        "#;
        assert!(matches!(
            parse_declarations(text),
            Err(ManifestError::EmptyClickIds { .. })
        ));
    }

    #[test]
    fn rejects_bad_names_and_shapes() {
        let bad_type = r#"
            [[component]]
            name = "com..Main"
        "#;
        assert!(matches!(
            parse_declarations(bad_type),
            Err(ManifestError::InvalidTypeName(_))
        ));

        let field_without_type = r#"
            [[component]]
            name = "com.example.Main"

            [[component.member]]
            name = "title"
            kind = "field"
        "#;
        assert!(matches!(
            parse_declarations(field_without_type),
            Err(ManifestError::MemberShape { .. })
        ));

        let keyword_member = r#"
            [[component]]
            name = "com.example.Main"

            [[component.member]]
            name = "new"
            kind = "method"
        "#;
        assert!(matches!(
            parse_declarations(keyword_member),
            Err(ManifestError::InvalidMemberName { .. })
        ));
    }

    #[test]
    fn type_entries_carry_inherited_members() {
        let text = r#"
            [[type]]
            name = "com.example.BaseActivity"
            extends = "android.app.Activity"

            [[type.member]]
            name = "toolbar"
            kind = "field"
            type = "android.view.View"
            view = 5

            [[type]]
            name = "com.example.Plain"
            extends = "android.app.Activity"
        "#;
        let decls = parse_declarations(text).unwrap();
        let members = decls.declared_members(&"com.example.BaseActivity".into());
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].directive, Some(Directive::ViewById(5)));
        assert!(decls.declared_members(&"com.example.Plain".into()).is_empty());
    }

    #[test]
    fn explicit_package_must_prefix_the_name() {
        let nested = r#"
            [[component]]
            name = "com.example.Outer.Inner"
            package = "com.example"
        "#;
        let decls = parse_declarations(nested).unwrap();
        assert_eq!(decls.components()[0].relative_name(), "Outer.Inner");

        let foreign = r#"
            [[component]]
            name = "com.example.Main"
            package = "org.other"
        "#;
        assert!(matches!(
            parse_declarations(foreign),
            Err(ManifestError::PackageMismatch { .. })
        ));

        let partial_segment = r#"
            [[component]]
            name = "com.examples.Main"
            package = "com.example"
        "#;
        assert!(matches!(
            parse_declarations(partial_segment),
            Err(ManifestError::PackageMismatch { .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let text = r#"
            [[component]]
            name = "com.example.Main"
            layuot = 3
        "#;
        assert!(matches!(parse_declarations(text), Err(ManifestError::Parse(_))));
    }
}
