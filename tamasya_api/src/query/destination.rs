use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the destination listing: pagination plus an optional search
/// term (the backend matches it against name and location).
#[derive(Default)]
pub struct DestinationQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
}

impl Query for DestinationQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url
    }
}

impl DestinationQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{DestinationQuery, Query};

    #[test]
    fn destination_query_url() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(
            DestinationQuery::default().add_to_url(&url).to_string(),
            "https://example.com/?page=1&per_page=15"
        );
        assert_eq!(
            DestinationQuery::default()
                .with_search("Bromo")
                .with_page(2)
                .with_per_page(10)
                .add_to_url(&url)
                .to_string(),
            "https://example.com/?page=2&per_page=10&search=Bromo"
        );
    }

    #[test]
    fn destination_query_encodes_search() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(
            DestinationQuery::default()
                .with_search("Taman Nasional")
                .add_to_url(&url)
                .to_string(),
            "https://example.com/?page=1&per_page=15&search=Taman+Nasional"
        );
    }
}
