/*
This crate is a thin client for the cloud backend that manages the
appliances registered to a user account.

It authenticates with a bearer token, resolves the account identifier and
retrieves the registered appliance listing, classifying every entry into
air conditioners, washer/dryers and ovens based on its data model key.
*/

mod auth;
mod backend;
mod directory;
mod models;
mod types;
mod uri;

pub use auth::{AuthError, FixedToken, TokenSource};
pub use backend::BackendSelector;
pub use directory::{ApplianceDirectory, FetchError};
pub use models::{ApplianceKind, ApplianceRecord, Appliances};
pub use types::{AccessToken, AccountId, Said};
pub use uri::{InvalidUriError, Uri};
