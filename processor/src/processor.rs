use std::collections::HashSet;

use diagnostic::{Anchor, CriticalResult, DiagnosticSink, Error, ErrorKind, ToErr};
use tracing::{debug, info, warn};

use crate::{
    binding::{build, BindingMap, ComponentBinding},
    codegen::{Emitter, JavaRenderer, Render},
    decl::TypeName,
    sink::{CodeSink, GeneratedArtifact},
    source::DeclarationSource,
    validate::{ValidatedComponent, Validator},
    ProcessorConfig,
};

/// What one batch produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub generated: Vec<TypeName>,
    pub failed: Vec<TypeName>,
    pub diagnostics: usize,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0
    }
}

// Forwards diagnostics while counting them for the report
struct Counted<'d, D> {
    inner: &'d mut D,
    count: usize,
}

impl<D: DiagnosticSink> DiagnosticSink for Counted<'_, D> {
    fn report(&mut self, error: Error) {
        self.count += 1;
        self.inner.report(error);
    }
}

pub struct Processor<'a> {
    config: &'a ProcessorConfig,
    renderer: JavaRenderer,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a ProcessorConfig) -> Self {
        Self {
            config,
            renderer: JavaRenderer::new(&config.codegen.indent),
        }
    }

    /// Runs Validate, Build and Emit over the whole batch, in that order.
    /// Failures stay local to their component; nothing here aborts the batch.
    pub fn process<S, D, C>(&self, source: &S, diagnostics: &mut D, sink: &mut C) -> BatchReport
    where
        S: DeclarationSource,
        D: DiagnosticSink,
        C: CodeSink,
    {
        let mut diagnostics = Counted {
            inner: diagnostics,
            count: 0,
        };
        let mut report = BatchReport::default();

        let validated = self.validate_all(source, &mut diagnostics, &mut report);

        let mut bindings = BindingMap::new();
        for component in &validated {
            if let Err(binding) = bindings.insert(build(component)) {
                warn!(component = %binding.component, "binding already present, skipped");
            }
        }

        let emitter = Emitter::new(self.config);
        for binding in &bindings {
            match self.emit(&emitter, binding, sink) {
                Ok(artifact) => {
                    debug!(component = %binding.component, artifact = %artifact, "emitted");
                    report.generated.push(binding.component.clone());
                }
                Err(errs) => {
                    warn!(component = %binding.component, "emission failed");
                    diagnostics.report_all(errs);
                    report.failed.push(binding.component.clone());
                }
            }
        }

        report.diagnostics = diagnostics.count;
        info!(
            generated = report.generated.len(),
            failed = report.failed.len(),
            diagnostics = report.diagnostics,
            "batch processed"
        );
        report
    }

    fn validate_all<'s, S: DeclarationSource>(
        &'s self,
        source: &'s S,
        diagnostics: &mut impl DiagnosticSink,
        report: &mut BatchReport,
    ) -> Vec<ValidatedComponent<'s>> {
        let validator = Validator::new(source, self.config);
        let mut seen = HashSet::new();
        let mut validated = Vec::new();

        for decl in source.components() {
            if !seen.insert(&decl.name) {
                diagnostics.report(Error::anchored(
                    ErrorKind::DuplicateComponent,
                    &format!("'{}' appears more than once in the batch", decl.name),
                    decl.anchor(),
                ));
                report.failed.push(decl.name.clone());
                continue;
            }

            let result = validator.validate(decl);
            debug!(
                component = %decl.name,
                valid = result.value.is_some(),
                errors = result.errors.len(),
                "validated"
            );
            diagnostics.report_all(result.errors);
            match result.value {
                Some(component) => validated.push(component),
                None => report.failed.push(decl.name.clone()),
            }
        }
        validated
    }

    // Returns the qualified name of the written artifact
    fn emit(
        &self,
        emitter: &Emitter,
        binding: &ComponentBinding,
        sink: &mut impl CodeSink,
    ) -> CriticalResult<String> {
        let file = emitter.emit(binding)?;
        let artifact = GeneratedArtifact {
            package: file.package.clone(),
            class_name: file.class.name.clone(),
            source: self.renderer.render(&file),
        };
        sink.write(&artifact).map_err(|e| {
            Error::anchored(
                ErrorKind::EmissionIOFailure,
                &e.to_string(),
                Anchor::component(binding.component.as_str()),
            )
            .as_vec()
        })?;
        Ok(artifact.qualified_name())
    }
}
