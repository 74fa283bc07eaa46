//! Package specifications and their normalization into install tokens.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Packages to install, either as a plain list or as a mapping from package
/// name to an optional version range.
///
/// Both JSON shapes deserialize directly, and mapping entries keep their
/// insertion order:
///
/// ```
/// use pkg_install::Packages;
///
/// let packages: Packages =
///     serde_json::from_str(r#"{"twilio": "~3.1", "node-env-run": null}"#)?;
/// assert_eq!(packages.to_list(), ["twilio@~3.1", "node-env-run"]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Packages {
    /// Ordered list of `name` or `name@versionRange` entries.
    List(Vec<Value>),
    /// Mapping from package name to an optional version range.
    Map(Map<String, Value>),
}

impl Packages {
    /// Flatten into install tokens, filtering entries that do not fit.
    ///
    /// List entries survive only if they are strings. Mapping entries emit
    /// `name@versionRange` for string values and the bare `name` for `null`;
    /// a value of any other type drops the entry. Nothing here ever fails:
    /// partially malformed input must not abort an install.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Packages::List(entries) => entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_owned))
                .collect(),
            Packages::Map(entries) => entries
                .iter()
                .filter_map(|(name, version)| match version {
                    Value::String(range) => Some(format!("{name}@{range}")),
                    Value::Null => Some(name.clone()),
                    _ => None,
                })
                .collect(),
        }
    }
}

impl From<Vec<String>> for Packages {
    fn from(packages: Vec<String>) -> Self {
        Packages::List(packages.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Packages {
    fn from(packages: Vec<&str>) -> Self {
        Packages::List(packages.into_iter().map(Value::from).collect())
    }
}

impl From<&[&str]> for Packages {
    fn from(packages: &[&str]) -> Self {
        Packages::List(packages.iter().copied().map(Value::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Packages {
    fn from(packages: [&str; N]) -> Self {
        Packages::List(packages.into_iter().map(Value::from).collect())
    }
}

/// Build the mapping form from `(name, version range)` pairs; `None` stands
/// for "no version".
impl<K, V> FromIterator<(K, Option<V>)> for Packages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut entries = Map::new();
        for (name, version) in iter {
            let value = match version {
                Some(range) => Value::String(range.into()),
                None => Value::Null,
            };
            entries.insert(name.into(), value);
        }
        Packages::Map(entries)
    }
}
