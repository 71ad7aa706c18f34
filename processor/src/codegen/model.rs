use crate::decl::TypeName;

/// Reference to a host class. `name` is relative to the package and may be nested
/// (`View.OnClickListener`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassRef {
    pub package: String,
    pub name: String,
}

impl ClassRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn from_type(ty: &TypeName) -> Self {
        Self::new(ty.package(), ty.simple_name())
    }

    pub fn nested(&self, name: &str) -> Self {
        Self::new(self.package.as_str(), format!("{}.{name}", self.name))
    }

    /// Outermost enclosing class; what an import statement names.
    pub fn top_level(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    pub fn qualify(&self, name: &str) -> String {
        match self.package.is_empty() {
            true => name.to_string(),
            false => format!("{}.{name}", self.package),
        }
    }

    pub fn qualified(&self) -> String {
        self.qualify(&self.name)
    }

    pub fn qualified_top_level(&self) -> String {
        self.qualify(self.top_level())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    Void,
    Class(ClassRef),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JavaModifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
}

impl JavaModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            JavaModifier::Public => "public",
            JavaModifier::Protected => "protected",
            JavaModifier::Private => "private",
            JavaModifier::Static => "static",
            JavaModifier::Final => "final",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub ty: ClassRef,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Int(i32),
    Super,
    Call {
        target: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    Cast {
        ty: ClassRef,
        expr: Box<Expr>,
    },
    NewAnonymous {
        ty: ClassRef,
        methods: Vec<MethodSpec>,
    },
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.to_string())
    }

    /// Unqualified call on `this`.
    pub fn call(method: &str, args: Vec<Expr>) -> Self {
        Self::Call {
            target: None,
            method: method.to_string(),
            args,
        }
    }

    pub fn call_on(self, method: &str, args: Vec<Expr>) -> Self {
        Self::Call {
            target: Some(Box::new(self)),
            method: method.to_string(),
            args,
        }
    }

    pub fn cast(self, ty: ClassRef) -> Self {
        Self::Cast {
            ty,
            expr: Box::new(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expr(Expr),
    Assign { target: String, value: Expr },
    Local { ty: ClassRef, name: String, value: Expr },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub annotations: Vec<ClassRef>,
    pub modifiers: Vec<JavaModifier>,
    pub returns: JavaType,
    pub params: Vec<ParamSpec>,
    // Blank-line separated groups; never reorders statements
    pub sections: Vec<Vec<Statement>>,
}

impl MethodSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            returns: JavaType::Void,
            params: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: ClassRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: JavaModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn returns(mut self, returns: JavaType) -> Self {
        self.returns = returns;
        self
    }

    pub fn param(mut self, ty: ClassRef, name: &str) -> Self {
        self.params.push(ParamSpec {
            ty,
            name: name.to_string(),
        });
        self
    }

    pub fn section(mut self, statements: Vec<Statement>) -> Self {
        self.sections.push(statements);
        self
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.sections.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    pub name: String,
    pub modifiers: Vec<JavaModifier>,
    pub superclass: Option<ClassRef>,
    pub methods: Vec<MethodSpec>,
}

/// One compilation unit holding a single top-level class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile {
    pub package: String,
    pub class: ClassSpec,
}

impl JavaFile {
    pub fn qualified_name(&self) -> String {
        ClassRef::new(self.package.as_str(), self.class.name.as_str()).qualified()
    }

    /// Every class referenced by the file, in source order.
    pub fn class_refs(&self) -> Vec<&ClassRef> {
        let mut refs = Vec::new();
        refs.extend(self.class.superclass.iter());
        self.class
            .methods
            .iter()
            .for_each(|m| method_refs(m, &mut refs));
        refs
    }
}

fn method_refs<'a>(method: &'a MethodSpec, refs: &mut Vec<&'a ClassRef>) {
    refs.extend(method.annotations.iter());
    if let JavaType::Class(ty) = &method.returns {
        refs.push(ty);
    }
    refs.extend(method.params.iter().map(|p| &p.ty));
    for statement in method.statements() {
        match statement {
            Statement::Expr(expr) | Statement::Assign { value: expr, .. } => expr_refs(expr, refs),
            Statement::Local { ty, value, .. } => {
                refs.push(ty);
                expr_refs(value, refs);
            }
        }
    }
}

fn expr_refs<'a>(expr: &'a Expr, refs: &mut Vec<&'a ClassRef>) {
    match expr {
        Expr::Ident(_) | Expr::Int(_) | Expr::Super => (),
        Expr::Call { target, args, .. } => {
            if let Some(target) = target {
                expr_refs(target, refs);
            }
            args.iter().for_each(|a| expr_refs(a, refs));
        }
        Expr::Cast { ty, expr } => {
            refs.push(ty);
            expr_refs(expr, refs);
        }
        Expr::NewAnonymous { ty, methods } => {
            refs.push(ty);
            methods.iter().for_each(|m| method_refs(m, refs));
        }
    }
}
