use serde::Deserialize;

use crate::types::Said;

/// A single appliance registered to the account.
///
/// Field names follow the wire contract of the appliance listing endpoint.
/// `MODEL_NO` and `SERIAL` are not guaranteed to be present and map to
/// `None` when absent.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplianceRecord {
    #[serde(rename = "SAID")]
    pub said: Said,

    #[serde(rename = "APPLIANCE_NAME")]
    pub name: String,

    #[serde(rename = "DATA_MODEL_KEY")]
    pub data_model_key: String,

    #[serde(rename = "CATEGORY_NAME")]
    pub category: String,

    #[serde(rename = "MODEL_NO")]
    pub model_number: Option<String>,

    #[serde(rename = "SERIAL")]
    pub serial_number: Option<String>,
}

/// Device-type buckets the directory knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceKind {
    AirConditioner,
    WasherDryer,
    Oven,
}

impl ApplianceKind {
    /// Classify a data model key into a device-type bucket.
    ///
    /// Matching is case-insensitive and by substring containment, with the
    /// first matching family winning. Returns `None` for keys this client
    /// does not recognize.
    pub fn from_data_model_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        if key.contains("airconditioner") {
            Some(ApplianceKind::AirConditioner)
        } else if key.contains("dryer") || key.contains("washer") {
            Some(ApplianceKind::WasherDryer)
        } else if key.contains("cooking_minerva") || key.contains("cooking_vsi") {
            Some(ApplianceKind::Oven)
        } else {
            None
        }
    }
}

/// Immutable snapshot of the classified appliances from one fetch.
///
/// The three buckets preserve server order: locations in their mapping
/// order, appliances in their sequence order within a location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appliances {
    aircons: Vec<ApplianceRecord>,
    washer_dryers: Vec<ApplianceRecord>,
    ovens: Vec<ApplianceRecord>,
}

impl Appliances {
    pub fn aircons(&self) -> &[ApplianceRecord] {
        &self.aircons
    }

    pub fn washer_dryers(&self) -> &[ApplianceRecord] {
        &self.washer_dryers
    }

    pub fn ovens(&self) -> &[ApplianceRecord] {
        &self.ovens
    }

    pub fn is_empty(&self) -> bool {
        self.aircons.is_empty() && self.washer_dryers.is_empty() && self.ovens.is_empty()
    }

    pub(crate) fn push(&mut self, kind: ApplianceKind, record: ApplianceRecord) {
        match kind {
            ApplianceKind::AirConditioner => self.aircons.push(record),
            ApplianceKind::WasherDryer => self.washer_dryers.push(record),
            ApplianceKind::Oven => self.ovens.push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_known_data_model_families() {
        assert_eq!(
            ApplianceKind::from_data_model_key("DDM_AIRCONDITIONER_V1"),
            Some(ApplianceKind::AirConditioner),
        );
        assert_eq!(
            ApplianceKind::from_data_model_key("DDM_TUMBLE_DRYER"),
            Some(ApplianceKind::WasherDryer),
        );
        assert_eq!(
            ApplianceKind::from_data_model_key("ddm_front_load_washer"),
            Some(ApplianceKind::WasherDryer),
        );
        assert_eq!(
            ApplianceKind::from_data_model_key("COOKING_MINERVA_V2"),
            Some(ApplianceKind::Oven),
        );
        assert_eq!(
            ApplianceKind::from_data_model_key("COOKING_VSI"),
            Some(ApplianceKind::Oven),
        );
        assert_eq!(ApplianceKind::from_data_model_key("UNKNOWN_TYPE"), None);
    }

    #[test]
    fn air_conditioner_wins_on_overlapping_keys() {
        // precedence matters if a key ever matches more than one family
        assert_eq!(
            ApplianceKind::from_data_model_key("AIRCONDITIONER_WASHER_COMBO"),
            Some(ApplianceKind::AirConditioner),
        );
        assert_eq!(
            ApplianceKind::from_data_model_key("WASHER_COOKING_MINERVA"),
            Some(ApplianceKind::WasherDryer),
        );
    }

    #[test]
    fn record_deserializes_from_wire_field_names() {
        let record: ApplianceRecord = serde_json::from_value(json!({
            "SAID": "S1",
            "APPLIANCE_NAME": "Oven1",
            "DATA_MODEL_KEY": "COOKING_MINERVA_V2",
            "CATEGORY_NAME": "Oven",
            "MODEL_NO": "M1",
            "SERIAL": "SN1",
        }))
        .unwrap();

        assert_eq!(record.said, Said::from("S1"));
        assert_eq!(record.name, "Oven1");
        assert_eq!(record.model_number.as_deref(), Some("M1"));
        assert_eq!(record.serial_number.as_deref(), Some("SN1"));
    }

    #[test]
    fn missing_optional_fields_map_to_none() {
        let record: ApplianceRecord = serde_json::from_value(json!({
            "SAID": "S1",
            "APPLIANCE_NAME": "Washer",
            "DATA_MODEL_KEY": "DDM_WASHER",
            "CATEGORY_NAME": "FabricCare",
        }))
        .unwrap();

        assert_eq!(record.model_number, None);
        assert_eq!(record.serial_number, None);
    }

    #[test]
    fn missing_required_fields_are_an_error() {
        let result: Result<ApplianceRecord, _> = serde_json::from_value(json!({
            "SAID": "S1",
            "APPLIANCE_NAME": "Washer",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn snapshot_buckets_by_kind_in_insertion_order() {
        let record = |said: &str, key: &str| ApplianceRecord {
            said: Said::from(said),
            name: said.to_owned(),
            data_model_key: key.to_owned(),
            category: "test".to_owned(),
            model_number: None,
            serial_number: None,
        };

        let mut snapshot = Appliances::default();
        snapshot.push(ApplianceKind::Oven, record("S1", "COOKING_VSI"));
        snapshot.push(ApplianceKind::WasherDryer, record("S2", "DDM_WASHER"));
        snapshot.push(ApplianceKind::Oven, record("S3", "COOKING_MINERVA"));

        assert!(snapshot.aircons().is_empty());
        assert_eq!(
            snapshot
                .ovens()
                .iter()
                .map(|r| r.said.as_str())
                .collect::<Vec<_>>(),
            vec!["S1", "S3"],
        );
        assert_eq!(snapshot.washer_dryers().len(), 1);
        assert!(!snapshot.is_empty());
        assert!(Appliances::default().is_empty());
    }
}
