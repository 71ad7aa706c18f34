use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use shared::constants::{DEFAULT_INDENT, JAVA_LANG};

use super::model::{ClassRef, Expr, JavaFile, JavaType, MethodSpec, Statement};

/// Swappable textual rendering of the code model.
pub trait Render {
    fn render(&self, file: &JavaFile) -> String;
}

/// Decides, per file, which classes are imported and which must stay qualified.
struct Names {
    // Simple top-level name -> qualified top-level name it resolves to
    simple: HashMap<String, String>,
    imports: BTreeSet<String>,
}

impl Names {
    fn new(file: &JavaFile) -> Self {
        let mut names = Self {
            simple: HashMap::new(),
            imports: BTreeSet::new(),
        };
        names.claim(&file.class.name, file.qualified_name());
        for class in file.class_refs() {
            let implicit = class.package.is_empty()
                || class.package == file.package
                || class.package == JAVA_LANG;
            if names.claim(class.top_level(), class.qualified_top_level()) && !implicit {
                names.imports.insert(class.qualified_top_level());
            }
        }
        names
    }

    // False when the simple name already belongs to another class
    fn claim(&mut self, simple: &str, qualified: String) -> bool {
        match self.simple.get(simple) {
            Some(owner) => owner == &qualified,
            None => {
                self.simple.insert(simple.to_string(), qualified);
                true
            }
        }
    }

    fn name(&self, class: &ClassRef) -> String {
        match self.simple.get(class.top_level()) {
            Some(owner) if owner == &class.qualified_top_level() => class.name.clone(),
            _ => class.qualified(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JavaRenderer {
    indent: String,
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl JavaRenderer {
    pub fn new(indent: &str) -> Self {
        Self {
            indent: indent.to_string(),
        }
    }

    fn pad(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    fn method(&self, names: &Names, method: &MethodSpec, level: usize) -> String {
        let pad = self.pad(level);
        let mut out = String::new();
        for annotation in &method.annotations {
            out.push_str(&format!("{pad}@{}\n", names.name(annotation)));
        }
        let returns = match &method.returns {
            JavaType::Void => "void".to_string(),
            JavaType::Class(ty) => names.name(ty),
        };
        let params = method
            .params
            .iter()
            .map(|p| format!("{} {}", names.name(&p.ty), p.name))
            .join(", ");
        out.push_str(&pad);
        out.push_str(
            &method
                .modifiers
                .iter()
                .map(|m| m.as_str().to_string())
                .chain([returns])
                .join(" "),
        );
        out.push_str(&format!(" {}({params}) {{\n", method.name));

        let body = method
            .sections
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| {
                section
                    .iter()
                    .map(|s| self.statement(names, s, level + 1))
                    .join("")
            })
            .join("\n");
        out.push_str(&body);
        out.push_str(&format!("{pad}}}\n"));
        out
    }

    fn statement(&self, names: &Names, statement: &Statement, level: usize) -> String {
        let code = match statement {
            Statement::Expr(expr) => self.expr(names, expr, level),
            Statement::Assign { target, value } => {
                format!("{target} = {}", self.expr(names, value, level))
            }
            Statement::Local { ty, name, value } => format!(
                "{} {name} = {}",
                names.name(ty),
                self.expr(names, value, level)
            ),
        };
        format!("{}{code};\n", self.pad(level))
    }

    // `level` is the indentation of the line the expression starts on
    fn expr(&self, names: &Names, expr: &Expr, level: usize) -> String {
        match expr {
            Expr::Ident(name) => name.to_string(),
            Expr::Int(value) => value.to_string(),
            Expr::Super => "super".to_string(),
            Expr::Call {
                target,
                method,
                args,
            } => {
                let args = args.iter().map(|a| self.expr(names, a, level)).join(", ");
                match target.as_deref() {
                    None => format!("{method}({args})"),
                    Some(target @ Expr::Cast { .. }) => {
                        format!("({}).{method}({args})", self.expr(names, target, level))
                    }
                    Some(target) => {
                        format!("{}.{method}({args})", self.expr(names, target, level))
                    }
                }
            }
            Expr::Cast { ty, expr } => {
                format!("({}) {}", names.name(ty), self.expr(names, expr, level))
            }
            Expr::NewAnonymous { ty, methods } => {
                let body = methods
                    .iter()
                    .map(|m| self.method(names, m, level + 1))
                    .join("\n");
                format!("new {}() {{\n{body}{}}}", names.name(ty), self.pad(level))
            }
        }
    }
}

impl Render for JavaRenderer {
    fn render(&self, file: &JavaFile) -> String {
        let names = Names::new(file);
        let mut out = String::new();

        if !file.package.is_empty() {
            out.push_str(&format!("package {};\n\n", file.package));
        }
        if !names.imports.is_empty() {
            out.push_str(&names.imports.iter().map(|i| format!("import {i};\n")).join(""));
            out.push('\n');
        }

        let class = &file.class;
        let mut header = class.modifiers.iter().map(|m| m.as_str()).join(" ");
        if !header.is_empty() {
            header.push(' ');
        }
        header.push_str(&format!("class {}", class.name));
        if let Some(superclass) = &class.superclass {
            header.push_str(&format!(" extends {}", names.name(superclass)));
        }
        out.push_str(&format!("{header} {{\n"));
        out.push_str(
            &class
                .methods
                .iter()
                .map(|m| self.method(&names, m, 1))
                .join("\n"),
        );
        out.push_str("}\n");
        out
    }
}
