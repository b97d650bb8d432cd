

pub mod bucket {
    /// Bucket count of a freshly constructed map.
    pub const INITIAL_CAPACITY: usize = 16;

    // Load factor 0.75 as an exact ratio, so thresholds never go through floats.
    const LOAD_FACTOR_NUM: usize = 3;
    const LOAD_FACTOR_DEN: usize = 4;

    /// Entry count at which the next new key doubles `capacity`:
    /// `floor(capacity * 0.75)`.
    #[inline]
    pub const fn grow_threshold(capacity: usize) -> usize {
        capacity / LOAD_FACTOR_DEN * LOAD_FACTOR_NUM
            + capacity % LOAD_FACTOR_DEN * LOAD_FACTOR_NUM / LOAD_FACTOR_DEN
    }

    /// `|key| mod capacity`. The magnitude is taken unsigned so `i64::MIN`
    /// does not overflow.
    #[inline]
    pub const fn bucket_index(key: i64, capacity: usize) -> usize {
        (key.unsigned_abs() % capacity as u64) as usize
    }

    /// Bucket count for a caller supplied size hint.
    #[inline]
    pub const fn normalize_capacity(requested: usize) -> usize {
        if requested <= 1 {
            1
        } else {
            requested.next_power_of_two()
        }
    }


    #[test]
    fn default_capacity(){
        assert_eq!(INITIAL_CAPACITY, 16);
        assert_eq!(grow_threshold(INITIAL_CAPACITY), 12);
    }

    #[test]
    fn thresholds(){
        const LOAD_FACTOR: f64 = 0.75;

        assert_eq!(grow_threshold(16), 12);
        assert_eq!(grow_threshold(32), 24);
        assert_eq!(grow_threshold(1), 0);
        assert_eq!(grow_threshold(2), 1);
        assert_eq!(grow_threshold(4), 3);

        (0..20).map(|shift| 1usize << shift).for_each(|capacity|{
            let expected = (capacity as f64 * LOAD_FACTOR).floor() as usize;
            assert_eq!(grow_threshold(capacity), expected);
        });
    }

    #[test]
    fn indexes(){
        assert_eq!(bucket_index(19, 16), 3);
        assert_eq!(bucket_index(4, 16), 4);
        assert_eq!(bucket_index(0, 16), 0);
        assert_eq!(bucket_index(16, 16), 0);

        // negative keys fold onto their magnitude
        assert_eq!(bucket_index(-19, 16), 3);
        assert_eq!(bucket_index(-1, 32), 1);

        assert_eq!(bucket_index(i64::MIN, 16), 0);
        assert_eq!(bucket_index(i64::MAX, 16), 15);
        assert_eq!(bucket_index(i64::MAX, 1), 0);
    }

    #[test]
    fn normalized(){
        assert_eq!(normalize_capacity(0), 1);
        assert_eq!(normalize_capacity(1), 1);
        assert_eq!(normalize_capacity(3), 4);
        assert_eq!(normalize_capacity(16), 16);
        assert_eq!(normalize_capacity(17), 32);
    }
}
