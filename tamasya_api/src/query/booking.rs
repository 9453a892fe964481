use url::Url;

use super::{
    common::{QueryCommon, SortDirection},
    Query,
};

/// Query for the admin booking listing. `status` and `cancellation_status`
/// both filter the cancellation state; the backend accepts either name.
#[derive(Default)]
pub struct BookingQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub status: Option<String>,
    pub cancellation_status: Option<String>,
    pub payment_status: Option<String>,
    pub user_id: Option<i64>,
    pub destination_uuid: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortDirection>,
}

impl Query for BookingQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(status) = &self.status {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }
        if let Some(cancellation_status) = &self.cancellation_status {
            url.query_pairs_mut()
                .append_pair("cancellation_status", cancellation_status.as_str());
        }
        if let Some(payment_status) = &self.payment_status {
            url.query_pairs_mut()
                .append_pair("payment_status", payment_status.as_str());
        }
        if let Some(user_id) = self.user_id {
            url.query_pairs_mut()
                .append_pair("user_id", &user_id.to_string());
        }
        if let Some(destination_uuid) = &self.destination_uuid {
            url.query_pairs_mut()
                .append_pair("destination_uuid", destination_uuid.as_str());
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

impl BookingQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_cancellation_status(mut self, cancellation_status: &str) -> Self {
        self.cancellation_status = Some(cancellation_status.to_string());
        self
    }

    pub fn with_payment_status(mut self, payment_status: &str) -> Self {
        self.payment_status = Some(payment_status.to_string());
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_destination_uuid(mut self, destination_uuid: &str) -> Self {
        self.destination_uuid = Some(destination_uuid.to_string());
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
