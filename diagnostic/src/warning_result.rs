use crate::Error;

// Used for operations that have non-critical errors (still produces a value)
#[derive(Debug)]
pub struct WarningResult<T> {
    pub value: T,
    pub errors: Vec<Error>,
}

impl<T> WarningResult<T> {
    // Moves the warnings into errs and returns the value
    pub fn record_errs(self, errs: &mut Vec<Error>) -> T {
        errs.extend(self.errors);
        self.value
    }
}

pub fn ok<T>(value: T) -> WarningResult<T> {
    err(value, Vec::new())
}

pub fn err<T>(value: T, errors: Vec<Error>) -> WarningResult<T> {
    WarningResult { value, errors }
}
