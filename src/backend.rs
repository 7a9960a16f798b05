use crate::types::AccountId;
use crate::uri::{InvalidUriError, Uri};

/// The resolved API origin for the appliance backend.
///
/// Region and brand selection happen before construction; the selector only
/// knows how to address endpoints relative to the origin it was given.
#[derive(Clone, Debug)]
pub struct BackendSelector {
    base_uri: Uri,
}

impl BackendSelector {
    pub fn new(base_uri: Uri) -> Self {
        Self { base_uri }
    }

    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    pub fn user_details_uri(&self) -> Result<Uri, InvalidUriError> {
        Uri::from_parts(self.base_uri.clone(), "/api/v1/getUserDetails", None)
    }

    pub fn appliances_uri(&self, account_id: &AccountId) -> Result<Uri, InvalidUriError> {
        Uri::from_parts(
            self.base_uri.clone(),
            format!("/api/v2/appliance/all/account/{account_id}").as_str(),
            None,
        )
    }
}
