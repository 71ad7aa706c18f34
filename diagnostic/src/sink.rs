use crate::Error;

/// Receives every diagnostic raised during a batch. Reporting never halts processing.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);

    fn report_all(&mut self, errors: impl IntoIterator<Item = Error>)
    where
        Self: Sized,
    {
        errors.into_iter().for_each(|e| self.report(e));
    }
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}
