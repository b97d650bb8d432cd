use crate::error::Result;


pub mod longhashmap;

/// Operations of a map keyed by `i64`.
///
/// Absent values are modelled with `Option`: `put` refuses `None`, lookups
/// answer `None` for missing keys, and `keys`/`values` answer `None` for an
/// empty map.
pub trait LongMap<V> {
    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Fails with [`LongMapError::InvalidArgument`](crate::LongMapError) when
    /// `value` converts to `None`; the map is left untouched in that case.
    fn put<T>(&mut self, key: i64, value: T) -> Result<Option<V>>
    where
        T: Into<Option<V>>;

    fn get(&self, key: i64) -> Option<&V>;

    fn remove(&mut self, key: i64) -> Option<V>;

    fn contains_key(&self, key: i64) -> bool;

    /// Linear scan for an equal value. A `None` query is never contained.
    fn contains_value<'q, Q>(&self, value: Q) -> bool
    where
        Q: Into<Option<&'q V>>,
        V: PartialEq + 'q;

    /// Every key in bucket order, or `None` when the map is empty.
    fn keys(&self) -> Option<Vec<i64>>;

    /// Every value in the same order as [`keys`](LongMap::keys), or `None`
    /// when the map is empty.
    fn values(&self) -> Option<Vec<&V>>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn clear(&mut self);
}
