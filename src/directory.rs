use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{Span, debug, error, field, instrument, warn};

use crate::auth::{AuthError, TokenSource};
use crate::backend::BackendSelector;
use crate::models::{ApplianceKind, ApplianceRecord, Appliances};
use crate::types::AccountId;
use crate::uri::{InvalidUriError, Uri};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to obtain an access token: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid endpoint URI: {0}")]
    InvalidEndpoint(#[from] InvalidUriError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response decoding failed: {0}")]
    ResponseDecoding(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/*
    GET /api/v1/getUserDetails

    response {
        accountId,
        ...
    }
*/
#[derive(Debug, Deserialize)]
struct UserDetails {
    #[serde(rename = "accountId")]
    account_id: AccountId,
}

/// Directory of the appliances registered to the authenticated account.
///
/// Fetching is a two-step sequence: resolve the account id from the
/// user-details endpoint, then retrieve and classify the appliance listing
/// scoped to that account. The classified listing is kept as one immutable
/// snapshot that is replaced wholesale on refresh.
pub struct ApplianceDirectory<T> {
    backend: BackendSelector,
    tokens: T,
    client: Client,
    appliances: Option<Appliances>,
}

impl<T: TokenSource> ApplianceDirectory<T> {
    /// Create a directory talking to `backend`, authenticating via `tokens`
    /// over the injected `client`.
    ///
    /// Timeouts, TLS and proxy behavior are whatever the injected client
    /// was built with.
    pub fn new(backend: BackendSelector, tokens: T, client: Client) -> Self {
        Self {
            backend,
            tokens,
            client,
            appliances: None,
        }
    }

    async fn get(&self, endpoint: &Uri) -> Result<Response, FetchError> {
        let token = self.tokens.access_token().await?;
        let response = self
            .client
            .get(endpoint.to_string())
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .header("User-Agent", "okhttp/3.12.0")
            .header("Pragma", "no-cache")
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        Ok(response)
    }

    /// Refresh the appliance snapshot from the backend.
    ///
    /// Returns `Ok(true)` when both calls succeeded and the listing was
    /// classified. A non-200 status from either call returns `Ok(false)`:
    /// before the account lookup completed the previous snapshot is left
    /// untouched, after it the snapshot has already been reset to empty.
    /// Transport failures and bodies that don't match the documented wire
    /// contract surface as errors; recovery is the caller's responsibility,
    /// no retries are made here.
    #[instrument(skip_all, fields(account = field::Empty, status = field::Empty), err)]
    pub async fn fetch_appliances(&mut self) -> Result<bool, FetchError> {
        let endpoint = self.backend.user_details_uri()?;
        debug!("requesting account details");
        let response = self.get(&endpoint).await?;
        let status = response.status();
        Span::current().record("status", status.as_u16());
        if status != StatusCode::OK {
            error!("failed to get account id: {status}");
            return Ok(false);
        }

        let details: UserDetails = serde_json::from_str(&response.text().await?)?;
        let account_id = details.account_id;
        Span::current().record("account", field::display(&account_id));

        let endpoint = self.backend.appliances_uri(&account_id)?;
        debug!("requesting appliance listing");
        let response = self.get(&endpoint).await?;
        let status = response.status();
        Span::current().record("status", status.as_u16());

        // The listing replaces whatever we knew before, starting from an
        // empty snapshot as soon as the backend has answered. A decoding
        // failure below leaves the empty snapshot in place.
        self.appliances = Some(Appliances::default());

        if status != StatusCode::OK {
            error!("failed to get appliances: {status}");
            return Ok(false);
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        self.appliances = Some(classify_listing(&body, &account_id)?);

        Ok(true)
    }

    /// The full snapshot from the last refresh, `None` until the first
    /// fetch has reached the appliance listing.
    pub fn appliances(&self) -> Option<&Appliances> {
        self.appliances.as_ref()
    }

    pub fn aircons(&self) -> Option<&[ApplianceRecord]> {
        self.appliances.as_ref().map(Appliances::aircons)
    }

    pub fn washer_dryers(&self) -> Option<&[ApplianceRecord]> {
        self.appliances.as_ref().map(Appliances::washer_dryers)
    }

    pub fn ovens(&self) -> Option<&[ApplianceRecord]> {
        self.appliances.as_ref().map(Appliances::ovens)
    }
}

/*
    GET /api/v2/appliance/all/account/{accountId}

    response {
        "{accountId}": {
            "{location}": [
                { SAID, APPLIANCE_NAME, DATA_MODEL_KEY, CATEGORY_NAME, MODEL_NO?, SERIAL? },
                ...
            ],
            ...
        }
    }
*/
fn classify_listing(body: &Value, account_id: &AccountId) -> Result<Appliances, FetchError> {
    let locations = body
        .get(account_id.as_str())
        .ok_or_else(|| {
            FetchError::UnexpectedShape(format!(
                "account {account_id} missing from appliance listing"
            ))
        })?
        .as_object()
        .ok_or_else(|| {
            FetchError::UnexpectedShape("appliance listing is not keyed by location".to_owned())
        })?;

    let mut snapshot = Appliances::default();
    for appliances in locations.values() {
        let appliances: Vec<ApplianceRecord> = serde_json::from_value(appliances.clone())?;
        for record in appliances {
            match ApplianceKind::from_data_model_key(&record.data_model_key) {
                Some(kind) => snapshot.push(kind, record),
                None => warn!(
                    "unsupported appliance data model {}",
                    record.data_model_key.to_lowercase()
                ),
            }
        }
    }

    Ok(snapshot)
}
