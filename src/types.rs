use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Deref;

/// Stable unique identifier for an appliance registered to the account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Said(String);

impl Deref for Said {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Said {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Said {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Said {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Said> for String {
    fn from(value: Said) -> Self {
        value.0
    }
}

/// A bearer token that is valid for the appliance API right now.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl Deref for AccessToken {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<AccessToken> for String {
    fn from(value: AccessToken) -> Self {
        value.0
    }
}

/// Identifier returned by the user-details endpoint, used to scope the
/// appliance listing request.
///
/// The backend serves it as a JSON number in the user details but keys the
/// appliance listing by its string form, so we canonicalize to a string on
/// the way in and accept either shape.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number account id, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn account_id_deserializes_from_number_or_string() {
        let from_number: AccountId = serde_json::from_value(json!(42)).unwrap();
        let from_string: AccountId = serde_json::from_value(json!("42")).unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn account_id_rejects_other_shapes() {
        assert!(serde_json::from_value::<AccountId>(json!({"id": 42})).is_err());
        assert!(serde_json::from_value::<AccountId>(json!(null)).is_err());
    }
}
