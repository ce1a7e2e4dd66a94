//! A dictionary that can hold multiple values per key.
//!
//! [`MultiValueDict`] keeps keys in first-insertion order, which is what form
//! submissions need: extracted values come back in the order the controls
//! appear in the form.

/// A dictionary that maps keys to lists of values, preserving key order.
///
/// [`get`](MultiValueDict::get) returns the **last** value for a key, while
/// [`get_list`](MultiValueDict::get_list) returns all values.
///
/// # Examples
///
/// ```
/// use dynaform_core::utils::MultiValueDict;
///
/// let mut d = MultiValueDict::new();
/// d.append("color".to_string(), "red");
/// d.append("color".to_string(), "blue");
///
/// assert_eq!(d.get("color"), Some(&"blue"));
/// assert_eq!(d.get_list("color"), Some(&["red", "blue"][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValueDict<V> {
    entries: Vec<(String, Vec<V>)>,
}

impl<V> Default for MultiValueDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MultiValueDict<V> {
    /// Creates an empty `MultiValueDict`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns a reference to the **last** value associated with the key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_list(key).and_then(<[V]>::last)
    }

    /// Returns all values associated with the key.
    pub fn get_list(&self, key: &str) -> Option<&[V]> {
        self.position(key).map(|i| self.entries[i].1.as_slice())
    }

    /// Sets the value for a key, replacing any existing values.
    ///
    /// A key that already exists keeps its original position.
    pub fn set(&mut self, key: String, value: V) {
        match self.position(&key) {
            Some(i) => self.entries[i].1 = vec![value],
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Replaces the list for a key. An empty list keeps the key present.
    pub fn set_list(&mut self, key: String, values: Vec<V>) {
        match self.position(&key) {
            Some(i) => self.entries[i].1 = values,
            None => self.entries.push((key, values)),
        }
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: String, value: V) {
        match self.position(&key) {
            Some(i) => self.entries[i].1.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary contains no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the dictionary contains the specified key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns an iterator over (key, value-list) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<V> IntoIterator for MultiValueDict<V> {
    type Item = (String, Vec<V>);
    type IntoIter = std::vec::IntoIter<(String, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_last() {
        let mut d = MultiValueDict::new();
        d.append("a".to_string(), 1);
        d.append("a".to_string(), 2);
        assert_eq!(d.get("a"), Some(&2));
        assert_eq!(d.get("missing"), None);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut d = MultiValueDict::new();
        d.append("first".to_string(), "x");
        d.append("second".to_string(), "y");
        d.append("first".to_string(), "z");
        d.set("first".to_string(), "only");
        assert_eq!(d.get_list("first"), Some(&["only"][..]));
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_insertion_order() {
        let mut d = MultiValueDict::new();
        for key in ["z", "a", "m"] {
            d.set(key.to_string(), key);
        }
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(d.len(), 3);
        assert!(d.contains_key("a"));
        assert!(!d.is_empty());
    }

    #[test]
    fn test_set_list_keeps_empty_key() {
        let mut d: MultiValueDict<&str> = MultiValueDict::new();
        d.set_list("terms".to_string(), Vec::new());
        assert!(d.contains_key("terms"));
        assert_eq!(d.get("terms"), None);
        assert_eq!(d.get_list("terms"), Some(&[][..]));
    }

    #[test]
    fn test_into_iter() {
        let mut d = MultiValueDict::new();
        d.append("k".to_string(), 1);
        d.append("k".to_string(), 2);
        let all: Vec<(String, Vec<i32>)> = d.into_iter().collect();
        assert_eq!(all, vec![("k".to_string(), vec![1, 2])]);
    }
}
