use super::{CriticalResult, WarningResult};

// Used for operations that have both critical and non-critical errors
pub type Result<T> = CriticalResult<WarningResult<T>>;
