use url::Url;

use super::{
    common::{QueryCommon, SortDirection},
    Query,
};

/// Query for the admin checkout listing: pagination plus the review screen's
/// filter set. Only filters that are actually set are serialized.
#[derive(Default)]
pub struct CheckoutQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub payment_status: Option<String>,
    pub user_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortDirection>,
}

impl Query for CheckoutQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(payment_status) = &self.payment_status {
            url.query_pairs_mut()
                .append_pair("payment_status", payment_status.as_str());
        }
        if let Some(user_id) = &self.user_id {
            url.query_pairs_mut()
                .append_pair("user_id", user_id.as_str());
        }
        if let Some(date_from) = &self.date_from {
            url.query_pairs_mut()
                .append_pair("date_from", date_from.as_str());
        }
        if let Some(date_to) = &self.date_to {
            url.query_pairs_mut()
                .append_pair("date_to", date_to.as_str());
        }
        if let Some(sort_by) = &self.sort_by {
            url.query_pairs_mut()
                .append_pair("sort_by", sort_by.as_str());
        }
        if let Some(sort_order) = &self.sort_order {
            url.query_pairs_mut()
                .append_pair("sort_order", &sort_order.to_string());
        }
        url
    }
}

impl CheckoutQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_payment_status(mut self, payment_status: &str) -> Self {
        self.payment_status = Some(payment_status.to_string());
        self
    }

    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn with_date_range(mut self, from: &str, to: &str) -> Self {
        self.date_from = Some(from.to_string());
        self.date_to = Some(to.to_string());
        self
    }

    pub fn with_sort(mut self, sort_by: &str, sort_order: SortDirection) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self.sort_order = Some(sort_order);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CheckoutQuery, Query, SortDirection};

    #[test]
    fn checkout_query_url() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(
            CheckoutQuery::default().add_to_url(&url).to_string(),
            "https://example.com/?page=1&per_page=15"
        );
        assert_eq!(
            CheckoutQuery::default()
                .with_payment_status("paid")
                .with_date_range("2025-01-01", "2025-01-31")
                .with_sort("created_at", SortDirection::Desc)
                .add_to_url(&url)
                .to_string(),
            "https://example.com/?page=1&per_page=15&payment_status=paid&date_from=2025-01-01&date_to=2025-01-31&sort_by=created_at&sort_order=desc"
        );
    }
}
