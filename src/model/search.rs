// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::iter::FromIterator;

/// Field filters for a search, kept in insertion order.
///
/// ```
/// use rsbpm::model::search::SearchQuery;
///
/// let query = SearchQuery::new().track("money").artist("pink floyd");
/// assert_eq!(query.to_query_string(), "track:money artist:pink floyd ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    fields: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn track(self, value: &str) -> Self {
        self.field("track", value)
    }

    pub fn artist(self, value: &str) -> Self {
        self.field("artist", value)
    }

    pub fn album(self, value: &str) -> Self {
        self.field("album", value)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Joins every pair as `"<field>:<value> "`. The trailing space is kept.
    pub fn to_query_string(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}:{} ", name, value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for SearchQuery {
    fn from(fields: Vec<(K, V)>) -> Self {
        fields.into_iter().collect()
    }
}
