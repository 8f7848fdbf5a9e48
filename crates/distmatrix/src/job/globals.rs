use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Peer libraries a UMD consumer provides as globals, keyed by module id.
///
/// Insertion order is kept so UMD jobs list their externals the way the
/// configuration declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GlobalsMap(IndexMap<String, String>);

impl GlobalsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use distmatrix::GlobalsMap;
    ///
    /// let globals = GlobalsMap::new()
    ///     .with("react", "React")
    ///     .with("react-dom", "ReactDOM");
    /// assert_eq!(globals.get("react-dom"), Some("ReactDOM"));
    /// ```
    pub fn with(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    /// Returns the previous binding for `id`, if any.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.0.insert(id.into(), name.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Module identifiers, in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for GlobalsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        )
    }
}
