pub mod constants;
pub mod traits;
