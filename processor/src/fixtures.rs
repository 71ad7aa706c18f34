use diagnostic::Error;
use shared::constants::ACTIVITY_BASE;

use crate::{
    decl::{ComponentDecl, Directive, MemberDecl, MemberKind, TypeRef},
    sink::MemorySink,
    source::Declarations,
    BatchReport, Processor, ProcessorConfig,
};

/// A class extending the platform activity directly, with layout 100.
pub fn activity(name: &str) -> ComponentDecl {
    let mut decl = ComponentDecl::new(name.into());
    decl.extends = Some(ACTIVITY_BASE.into());
    decl.layout = Some(100);
    decl
}

pub fn source_with(components: Vec<ComponentDecl>) -> Declarations {
    Declarations::new(components)
}

pub fn field(name: &str, ty: &str) -> MemberDecl {
    MemberDecl {
        name: name.to_string(),
        kind: MemberKind::Field {
            ty: TypeRef::parse(ty),
        },
        modifiers: Vec::new(),
        directive: None,
    }
}

pub fn method(name: &str, params: &[&str], returns: &str) -> MemberDecl {
    MemberDecl {
        name: name.to_string(),
        kind: MemberKind::Method {
            params: params.iter().map(|p| TypeRef::parse(p)).collect(),
            returns: TypeRef::parse(returns),
        },
        modifiers: Vec::new(),
        directive: None,
    }
}

pub fn view_field(name: &str, ty: &str, id: i32) -> MemberDecl {
    MemberDecl {
        directive: Some(Directive::ViewById(id)),
        ..field(name, ty)
    }
}

pub fn after_views(name: &str, params: &[&str], returns: &str) -> MemberDecl {
    MemberDecl {
        directive: Some(Directive::AfterViews),
        ..method(name, params, returns)
    }
}

pub fn click(name: &str, params: &[&str], ids: &[i32]) -> MemberDecl {
    MemberDecl {
        directive: Some(Directive::Click(ids.to_vec())),
        ..method(name, params, "void")
    }
}

/// Runs one batch into memory.
pub fn run(
    source: &Declarations,
    config: &ProcessorConfig,
) -> (BatchReport, Vec<Error>, MemorySink) {
    let mut diagnostics = Vec::new();
    let mut sink = MemorySink::new();
    let report = Processor::new(config).process(source, &mut diagnostics, &mut sink);
    (report, diagnostics, sink)
}
