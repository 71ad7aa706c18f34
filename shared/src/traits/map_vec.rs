// Shorthands for iterating a slice into a new Vec
pub trait MapVec<T> {
    fn map_vec<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U>;

    fn join_map(&self, f: impl FnMut(&T) -> String, sep: &str) -> String {
        self.map_vec(f).join(sep)
    }
}

impl<T> MapVec<T> for [T] {
    fn map_vec<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.iter().map(f).collect()
    }
}

impl<T> MapVec<T> for Vec<T> {
    fn map_vec<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.as_slice().map_vec(f)
    }
}
