use crate::Error;

// Used for operations that have critical errors (no value if error)
pub type CriticalResult<T> = std::result::Result<T, Vec<Error>>;

// Convert a single error into a failed result
pub trait ToErr {
    fn as_vec(self) -> Vec<Error>;

    fn as_err<T>(self) -> CriticalResult<T>;
}

impl ToErr for Error {
    fn as_vec(self) -> Vec<Error> {
        vec![self]
    }

    fn as_err<T>(self) -> CriticalResult<T> {
        Err(self.as_vec())
    }
}

// Convert Vec<Error> to CriticalResult<T>
pub trait ErrorsTrait {
    fn err_or<T>(self, t: T) -> CriticalResult<T>;

    fn take_errs<T>(&mut self, r: CriticalResult<T>) -> Option<T>;
}

impl ErrorsTrait for Vec<Error> {
    fn err_or<T>(self, t: T) -> CriticalResult<T> {
        match self.is_empty() {
            true => Ok(t),
            false => Err(self),
        }
    }

    fn take_errs<T>(&mut self, r: CriticalResult<T>) -> Option<T> {
        match r {
            Ok(t) => Some(t),
            Err(e) => {
                self.extend(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn sig(msg: &str) -> Error {
        Error::new(ErrorKind::InvalidSignature, msg)
    }

    #[test]
    fn err_or_is_ok_only_without_errors() {
        assert_eq!(Vec::<Error>::new().err_or(7), Ok(7));
        let errs = vec![sig("a"), sig("b")];
        assert_eq!(errs.clone().err_or(7), Err(errs));
    }

    #[test]
    fn take_errs_moves_errors_and_keeps_values() {
        let mut errs: Vec<Error> = Vec::new();
        assert_eq!(errs.take_errs(sig("x").as_err::<()>()), None);
        assert_eq!(errs.take_errs(Ok::<_, Vec<Error>>(3)), Some(3));
        assert_eq!(errs.iter().map(|e| e.msg.as_str()).collect::<Vec<_>>(), ["x"]);
    }
}
