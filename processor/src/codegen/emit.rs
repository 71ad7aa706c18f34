use diagnostic::{CriticalResult, Error, ErrorKind, ToErr};
use shared::{constants::OVERRIDE, traits::MapVec};

use crate::{
    binding::{ClickBinding, ComponentBinding, ViewBinding},
    config::ViewStyle,
    decl::TypeName,
    ProcessorConfig,
};

use super::{
    idents::CODEGEN_IDENTS,
    model::{ClassRef, ClassSpec, Expr, JavaFile, JavaModifier, JavaType, MethodSpec, Statement},
};

/// Turns one binding into the code model of its generated subclass.
pub struct Emitter<'a> {
    config: &'a ProcessorConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn class_name(&self, binding: &ComponentBinding) -> String {
        format!("{}{}", binding.simple_name(), self.config.codegen.suffix)
    }

    fn view_ref(&self) -> ClassRef {
        ClassRef::from_type(&self.config.platform.view)
    }

    pub fn emit(&self, binding: &ComponentBinding) -> CriticalResult<JavaFile> {
        let layout = binding.layout.ok_or_else(|| {
            Error::anchored(
                ErrorKind::MissingLayoutDirective,
                &format!("'{}' has no layout directive", binding.relative_name),
                diagnostic::Anchor::component(binding.component.as_str()),
            )
            .as_vec()
        })?;

        let on_create = MethodSpec::new(CODEGEN_IDENTS.on_create)
            .annotate(override_ref())
            .modifier(JavaModifier::Protected)
            .param(
                ClassRef::from_type(&self.config.platform.bundle),
                CODEGEN_IDENTS.saved_state,
            )
            .section(vec![
                Statement::Expr(Expr::Super.call_on(
                    CODEGEN_IDENTS.on_create,
                    vec![Expr::ident(CODEGEN_IDENTS.saved_state)],
                )),
                Statement::Expr(Expr::call(
                    CODEGEN_IDENTS.set_content_view,
                    vec![Expr::Int(layout)],
                )),
            ])
            .section(binding.views.map_vec(|v| self.view_lookup(v)))
            .section(
                binding
                    .after_views
                    .map_vec(|hook| Statement::Expr(Expr::call(hook, Vec::new()))),
            )
            .section(
                binding
                    .clicks
                    .iter()
                    .flat_map(|click| {
                        click
                            .ids
                            .iter()
                            .map(move |id| self.click_listener(click, *id))
                    })
                    .collect(),
            );

        Ok(JavaFile {
            package: binding.package.clone(),
            class: ClassSpec {
                name: self.class_name(binding),
                modifiers: vec![JavaModifier::Public],
                superclass: Some(ClassRef::new(
                    binding.package.as_str(),
                    binding.relative_name.as_str(),
                )),
                methods: vec![on_create],
            },
        })
    }

    fn view_lookup(&self, view: &ViewBinding) -> Statement {
        let ty = ClassRef::from_type(&view.ty);
        let value = find_view_by_id(view.id).cast(ty.clone());
        match self.config.codegen.view_style {
            ViewStyle::Field => Statement::Assign {
                target: view.member.clone(),
                value,
            },
            ViewStyle::Local => Statement::Local {
                ty,
                name: view.member.clone(),
                value,
            },
        }
    }

    // The looked-up view is narrowed when the handler asks for a View subtype
    fn click_listener(&self, click: &ClickBinding, id: i32) -> Statement {
        let view = self.view_ref();
        let arg = Expr::ident(CODEGEN_IDENTS.view_var);
        let arg = match &click.param {
            Some(param) if param != &self.config.platform.view => {
                arg.cast(ClassRef::from_type(param))
            }
            _ => arg,
        };

        let on_click = MethodSpec::new(CODEGEN_IDENTS.on_click)
            .annotate(override_ref())
            .modifier(JavaModifier::Public)
            .returns(JavaType::Void)
            .param(view.clone(), CODEGEN_IDENTS.view_var)
            .section(vec![Statement::Expr(Expr::call(&click.handler, vec![arg]))]);

        Statement::Expr(find_view_by_id(id).call_on(
            CODEGEN_IDENTS.set_on_click_listener,
            vec![Expr::NewAnonymous {
                ty: view.nested(CODEGEN_IDENTS.click_listener),
                methods: vec![on_click],
            }],
        ))
    }
}

fn override_ref() -> ClassRef {
    ClassRef::from_type(&TypeName::new(OVERRIDE))
}

fn find_view_by_id(id: i32) -> Expr {
    Expr::call(CODEGEN_IDENTS.find_view_by_id, vec![Expr::Int(id)])
}
