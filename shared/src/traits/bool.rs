// then_some for Result
pub trait ThenOk<T, E> {
    fn then_ok(self, t: impl FnOnce() -> T, e: impl FnOnce() -> E) -> Result<T, E>;
}

impl<T, E> ThenOk<T, E> for bool {
    fn then_ok(self, t: impl FnOnce() -> T, e: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            true => Ok(t()),
            false => Err(e()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_ok_runs_one_side() {
        assert_eq!(true.then_ok(|| 1, || "no"), Ok(1));
        assert_eq!(false.then_ok(|| 1, || "no"), Err("no"));
    }
}
