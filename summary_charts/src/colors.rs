use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

/// Chart colour of each project, e.g. `"#ff0000"`. Read only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorAssignment(IndexMap<String, String>);

impl ColorAssignment {
    pub fn get(&self, project: &str) -> Option<&str> {
        self.0.get(project).map(String::as_str)
    }

    /// Colour of `label`, or `fallback` when the label has no colour assigned.
    pub fn resolve(&self, label: &str, fallback: &str) -> String {
        match self.get(label) {
            Some(color) => color.to_string(),
            None => {
                warn!("no chart colour for '{label}', using {fallback}");
                fallback.to_string()
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorAssignment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ColorAssignment(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
