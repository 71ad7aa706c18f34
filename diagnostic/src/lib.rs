mod critical_result;
mod error;
mod record;
mod result;
mod sink;
mod warning_result;
mod writer;

use codespan_reporting::{
    files::SimpleFiles,
    term::{self, Config},
};

use crate::writer::{PlainWriter, Writer, WriterTrait};

pub use codespan_reporting::diagnostic::Diagnostic as CodespanDiagnostic;
pub use critical_result::*;
pub use error::*;
pub use record::DiagnosticRecord;
pub use result::*;
pub use sink::DiagnosticSink;
pub use warning_result::*;

// Diagnostics are anchored to declarations rather than source text, so there are no files
type NoFiles = SimpleFiles<String, String>;

fn emit_into<W: WriterTrait>(error: &Error) -> String {
    let mut writer = W::empty();
    match term::emit(
        &mut writer,
        &Config::default(),
        &NoFiles::new(),
        &CodespanDiagnostic::from(error),
    ) {
        Ok(()) => writer.to_string(),
        Err(_) => format!("{error}\n"),
    }
}

/// Renders an error for a color terminal.
pub fn render(error: &Error) -> String {
    emit_into::<Writer>(error)
}

pub fn render_plain(error: &Error) -> String {
    emit_into::<PlainWriter>(error)
}

impl From<&Error> for CodespanDiagnostic<usize> {
    fn from(error: &Error) -> Self {
        let notes = error
            .anchor
            .iter()
            .map(|anchor| format!("at {anchor}"))
            .chain(error.notes.iter().cloned())
            .collect();
        CodespanDiagnostic::error()
            .with_code(error.kind.code())
            .with_message(&error.msg)
            .with_notes(notes)
    }
}
