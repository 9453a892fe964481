use std::str::FromStr;

use url::Url;

use super::{
    common::{QueryCommon, SortDirection},
    Query,
};

/// Query for the admin user listing. Sort parameters are always sent, as the
/// admin screens rely on a stable default ordering.
pub struct UserQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub role: Option<String>,
    pub sort_by: UserSortBy,
    pub sort_order: SortDirection,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            // The user management table pages by 5.
            common: QueryCommon {
                page: 1,
                per_page: 5,
            },
            search: None,
            role: None,
            sort_by: UserSortBy::default(),
            sort_order: SortDirection::default(),
        }
    }
}

impl Query for UserQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("sort_by", &self.sort_by.to_string());
        url.query_pairs_mut()
            .append_pair("sort_order", &self.sort_order.to_string());
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(role) = &self.role {
            url.query_pairs_mut().append_pair("role", role.as_str());
        }
        url
    }
}

impl UserQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_sort_by(mut self, sort_by: UserSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortDirection) -> Self {
        self.sort_order = sort_order;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSortBy {
    #[default]
    CreatedAt,
    Name,
    Email,
}

impl std::fmt::Display for UserSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserSortBy::CreatedAt => "created_at",
                UserSortBy::Name => "name",
                UserSortBy::Email => "email",
            }
        )
    }
}

impl FromStr for UserSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(UserSortBy::CreatedAt),
            "name" => Ok(UserSortBy::Name),
            "email" => Ok(UserSortBy::Email),
            _ => Err(()),
        }
    }
}
