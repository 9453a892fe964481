//! Destination management operations.

use serde_json::{json, Value};
use tamasya_api::endpoints;
use tamasya_api::types::{ApiResponse, Page};

use crate::error::AdminError;
use crate::norm::{self, page_from_envelope, unwrap_detail};
use crate::types::{Destination, DestinationInput, DestinationPatch, DEFAULT_OWNER_UUID};
use crate::{AdminApi, DestinationQuery};

impl AdminApi {
    /// Lists destinations with pagination and optional search.
    pub async fn destinations(
        &self,
        query: &DestinationQuery,
    ) -> Result<ApiResponse<Page<Destination>>, AdminError> {
        let page = query.common.page;
        let per_page = query.common.per_page;
        match self.client.get_with(endpoints::DESTINATIONS, query).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: page_from_envelope(&envelope, page, per_page, norm::destination),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Success".to_string(),
                    data: mock.list_destinations(page, per_page, query.search.as_deref()),
                })
            }),
        }
    }

    /// Fetches a single destination by uuid.
    pub async fn destination(&self, uuid: &str) -> Result<ApiResponse<Destination>, AdminError> {
        match self.client.get(&endpoints::destination_detail(uuid)).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::destination(unwrap_detail(&envelope.data, "destination")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                let destination = mock.find_destination(uuid).ok_or(AdminError::NotFound {
                    resource: "destination",
                    id: uuid.to_string(),
                })?;
                Ok(ApiResponse {
                    status: 200,
                    message: "Success".to_string(),
                    data: destination,
                })
            }),
        }
    }

    /// Creates a destination. An absent or empty owner id is replaced by the
    /// platform's default owner account before the request goes out.
    pub async fn create_destination(
        &self,
        input: &DestinationInput,
    ) -> Result<ApiResponse<Destination>, AdminError> {
        let payload = create_payload(input);
        match self.client.post(endpoints::DESTINATIONS, &payload).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::destination(unwrap_detail(&envelope.data, "destination")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 201,
                    message: "Destination created".to_string(),
                    data: mock.create_destination(input),
                })
            }),
        }
    }

    /// Applies a partial update. The patch never carries an owner id; the
    /// backend keeps the stored owner.
    pub async fn update_destination(
        &self,
        uuid: &str,
        patch: &DestinationPatch,
    ) -> Result<ApiResponse<Destination>, AdminError> {
        match self
            .client
            .patch(&endpoints::destination_detail(uuid), patch)
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::destination(unwrap_detail(&envelope.data, "destination")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Destination updated".to_string(),
                    data: mock.update_destination(uuid, patch)?,
                })
            }),
        }
    }

    /// Deletes a destination.
    pub async fn delete_destination(&self, uuid: &str) -> Result<ApiResponse<Value>, AdminError> {
        match self
            .client
            .delete(&endpoints::destination_detail(uuid))
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message,
                data: envelope.data,
            }),
            Err(err) => self.fall_back(err, |mock| {
                mock.delete_destination(uuid)?;
                Ok(ApiResponse {
                    status: 200,
                    message: "Destination deleted".to_string(),
                    data: json!({}),
                })
            }),
        }
    }
}

fn create_payload(input: &DestinationInput) -> Value {
    let owner_id = match input.owner_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_OWNER_UUID,
    };
    json!({
        "name": input.name,
        "location": input.location,
        "description": input.description,
        "price": input.price,
        "rating": input.rating,
        "categories": input.categories,
        "image_urls": input.image_urls,
        "owner_id": owner_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_defaults_owner_id() {
        let payload = create_payload(&DestinationInput {
            name: "Danau Toba".to_string(),
            ..Default::default()
        });
        assert_eq!(payload["owner_id"], DEFAULT_OWNER_UUID);

        let explicit = create_payload(&DestinationInput {
            owner_id: Some("someone-else".to_string()),
            ..Default::default()
        });
        assert_eq!(explicit["owner_id"], "someone-else");

        let empty = create_payload(&DestinationInput {
            owner_id: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(empty["owner_id"], DEFAULT_OWNER_UUID);
    }
}
