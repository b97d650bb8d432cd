pub mod containers;
pub mod error;
pub mod util;

pub use containers::longhashmap::{IntoIter, Iter, LongHashMap};
pub use containers::LongMap;
pub use error::{LongMapError, Result};


/// Builds a [`LongHashMap`] from `key => value` pairs.
///
/// ```
/// use longmap::{longmap, LongMap};
///
/// let map = longmap! { 1 => "one", -2 => "minus two" };
/// assert_eq!(map.size(), 2);
/// assert_eq!(map.get(-2), Some(&"minus two"));
/// ```
#[macro_export]
macro_rules! longmap {
    () => {
        $crate::LongHashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::LongHashMap::new();
            $(
                map.insert($key, $value);
            )+
            map
        }
    };
}
