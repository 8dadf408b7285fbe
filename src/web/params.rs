//! Query parameters accepted by the user listing page.

use crate::domain::user_query::UserQuery;

/// Listing query parameters.
///
/// Built from the raw `(key, value)` pairs of the query string so that no
/// input is ever rejected:
/// - a repeated key resolves to its last value;
/// - `page` is parsed leniently: anything that is not a non-negative integer
///   (e.g. `abc`, `-3`, an empty value, or a number too large for `u64`) is
///   treated as absent, and the page is then clamped to at least 1;
/// - unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub search: Option<String>,
    pub page: Option<u64>,
}

impl ListingParams {
    /// Collects the parameters from decoded query-string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "search" => params.search = Some(value),
                "page" => params.page = value.trim().parse().ok(),
                _ => {}
            }
        }
        params
    }

    /// Normalizes the parameters into a [`UserQuery`].
    ///
    /// # Defaults
    ///
    /// - `search`: empty (no filter)
    /// - `page`: 1
    pub fn into_query(self) -> UserQuery {
        UserQuery::new(self.search, self.page.unwrap_or(1))
    }
}
