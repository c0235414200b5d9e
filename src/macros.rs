/// Builds a [`FlatMap`](crate::FlatMap) from `key => value` literals.
///
/// Keys and values may be any expression implementing `Into<String>`.
/// A repeated key keeps its first position and takes the last value.
///
/// # Examples
///
/// ```rust
/// use flatjson::flat_map;
///
/// let map = flat_map! {
///     "profile.save" => "Ctrl+S",
///     "profile.open" => "Ctrl+O",
/// };
/// assert_eq!(map.len(), 2);
///
/// let empty = flat_map! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! flat_map {
    () => {
        $crate::FlatMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::FlatMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}

/// Builds a [`BoolMap`](crate::BoolMap) from `key => bool` pairs.
///
/// # Examples
///
/// ```rust
/// use flatjson::bool_map;
///
/// let map = bool_map! { "prefab_pcaps" => true, "prefab_max_throughput" => false };
/// assert_eq!(map.get("prefab_pcaps"), Some(&true));
/// ```
#[macro_export]
macro_rules! bool_map {
    () => {
        $crate::BoolMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::BoolMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
