mod bool;
mod map_vec;

pub use self::bool::ThenOk;
pub use map_vec::MapVec;
