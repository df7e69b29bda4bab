//! HTTP client implementation.
//!
//! Provides the main client for the Push Lap Growth REST API: the request
//! pipeline (auth header, dispatch, response decoding, error mapping) and the
//! public sale and referral operations built on top of it.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::config::ClientConfig;
use super::error::{ClientError, FieldErrors};
use super::transport::{HttpTransport, RawRequest, RawResponse, Transport};
use crate::types::{NewReferral, NewSale, SaleUpdate};

/// HTTP client for the Push Lap Growth REST API.
///
/// Every operation returns the decoded JSON response body on success and a
/// [`ClientError`] on failure. Operations are sequential; the two
/// by-external-id conveniences perform a lookup round-trip followed by the
/// primitive operation, with no retry or rollback between the two.
#[derive(Clone)]
pub struct PushLapGrowthClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl PushLapGrowthClient {
    /// Creates a client with the given API token and the default transport
    /// bound to the production base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the HTTP client cannot be
    /// created.
    pub fn new(api_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::new(api_token))
    }

    /// Creates a client with the given configuration and the default
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Creates a client with a caller-supplied transport, for testing or
    /// customization.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates a new sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the payload.
    pub async fn create_sale(&self, sale: &NewSale) -> Result<Value, ClientError> {
        self.request(Method::POST, "sales", Vec::new(), Some(encode(sale)?))
            .await
    }

    /// Updates an existing sale, addressed by `sale_id` in the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the payload.
    pub async fn update_sale(&self, update: &SaleUpdate) -> Result<Value, ClientError> {
        self.request(Method::PUT, "sales", Vec::new(), Some(encode(update)?))
            .await
    }

    /// Deletes a sale by its internal numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the sale does not exist.
    pub async fn delete_sale(&self, sale_id: i64) -> Result<Value, ClientError> {
        self.request(
            Method::DELETE,
            "sales",
            Vec::new(),
            Some(serde_json::json!({ "saleId": sale_id })),
        )
        .await
    }

    /// Fetches a sale by its external identifier.
    ///
    /// The API answers the lookup with an array of sales; with a unique
    /// external id that array holds at most one record, which is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no sale matches, or any pipeline
    /// error from the lookup request.
    pub async fn get_sale_by_external_id(&self, external_id: &str) -> Result<Value, ClientError> {
        let data = self
            .request(
                Method::GET,
                "sales",
                vec![("saleExternalId".to_string(), external_id.to_string())],
                None,
            )
            .await?;

        match data.get(0) {
            Some(sale) => Ok(sale.clone()),
            None => Err(ClientError::NotFound {
                message: format!("Sale with external ID '{external_id}' not found."),
                status: None,
            }),
        }
    }

    /// Deletes a sale addressed by its external identifier.
    ///
    /// Resolves the external id to the internal numeric id, then deletes.
    /// Two sequential round-trips; if the delete fails after a successful
    /// lookup there is no compensation.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the delete fails.
    pub async fn delete_sale_by_external_id(&self, external_id: &str) -> Result<Value, ClientError> {
        let sale = self.get_sale_by_external_id(external_id).await?;
        self.delete_sale(sale_id_of(&sale, external_id)?).await
    }

    /// Updates a sale addressed by its external identifier.
    ///
    /// Resolves the external id to the internal numeric id and sends the
    /// update addressed to it. The caller's payload is taken by value and
    /// re-addressed; any `sale_id` already set on it is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the update fails.
    pub async fn update_sale_by_external_id(
        &self,
        external_id: &str,
        update: SaleUpdate,
    ) -> Result<Value, ClientError> {
        let sale = self.get_sale_by_external_id(external_id).await?;
        let update = update.with_sale_id(sale_id_of(&sale, external_id)?);
        self.update_sale(&update).await
    }

    /// Creates a new referral.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the payload.
    pub async fn create_referral(&self, referral: &NewReferral) -> Result<Value, ClientError> {
        self.request(Method::POST, "referrals", Vec::new(), Some(encode(referral)?))
            .await
    }

    /// Sends one request through the transport and decodes the outcome.
    ///
    /// The bearer token header is appended after any other headers so it can
    /// never be overridden. A 2xx response must carry a decodable JSON body;
    /// an empty or malformed body is surfaced as [`ClientError::Api`] rather
    /// than silently passing for success.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        // Appended last so no earlier header can shadow the credential.
        let headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.api_token),
        )];

        debug!(%method, path, "sending API request");

        let request = RawRequest {
            method,
            path: path.to_string(),
            headers,
            query,
            body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ClientError::Api {
                message: e.message,
                status: e.status,
            })?;

        debug!(status = response.status, path, "received API response");

        if response.is_success() {
            return serde_json::from_slice(&response.body).map_err(|e| ClientError::Api {
                message: format!("failed to decode response body: {e}"),
                status: Some(response.status),
            });
        }

        Err(error_from_response(&response))
    }
}

impl std::fmt::Debug for PushLapGrowthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushLapGrowthClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

/// Serializes a payload into a JSON body.
fn encode<T: Serialize>(payload: &T) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(|e| ClientError::Api {
        message: format!("failed to serialize request body: {e}"),
        status: None,
    })
}

/// Extracts the internal numeric id from a fetched sale record.
fn sale_id_of(sale: &Value, external_id: &str) -> Result<i64, ClientError> {
    sale.get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| ClientError::Api {
            message: format!("sale record for external ID '{external_id}' has no numeric 'id'"),
            status: None,
        })
}

/// Maps a non-2xx response onto the error taxonomy.
///
/// The body is decoded best-effort: a `message` key overrides the generic
/// status text, and for 422 the `errors` key is lifted into the validation
/// error's field map.
fn error_from_response(response: &RawResponse) -> ClientError {
    let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("request failed with status {}", response.status));

    match response.status {
        404 => ClientError::NotFound {
            message,
            status: Some(404),
        },
        422 => {
            let errors = body
                .get("errors")
                .and_then(|v| serde_json::from_value::<FieldErrors>(v.clone()).ok())
                .unwrap_or_default();
            ClientError::Validation {
                message,
                errors,
                status: 422,
            }
        }
        status => ClientError::Api {
            message,
            status: Some(status),
        },
    }
}
