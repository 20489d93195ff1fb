use std::collections::HashMap;

/// Keys returns the keys of the map in an unspecified order.
///
/// Example:
///
///     let k = keys(&map);
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}
