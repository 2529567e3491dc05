// src/config/brewery.rs
use serde::{Serialize, Deserialize};

// Only `id` is guaranteed; unknown keys are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreweryRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brewery_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,

    // Address details, shown on the detail screen only
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

pub type BreweryList = Vec<BreweryRecord>;

impl BreweryRecord {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            brewery_type: None,
            city: None,
            state: None,
            phone: None,
            website_url: None,
            street: None,
            postal_code: None,
            country: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed brewery)")
    }

    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => String::from("—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_payload_with_nulls_and_extra_keys() {
        let json = r#"{
            "id": "5128df48-79fc-4f0f-8b52-d06be54d0cec",
            "name": "(405) Brewing Co",
            "brewery_type": "micro",
            "address_1": "1716 Topeka St",
            "street": "1716 Topeka St",
            "city": "Norman",
            "state": "Oklahoma",
            "postal_code": "73069-8224",
            "country": "United States",
            "longitude": -97.46818222,
            "latitude": 35.25738891,
            "phone": null,
            "website_url": "http://www.405brewing.com"
        }"#;

        let record: BreweryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "(405) Brewing Co");
        assert_eq!(record.brewery_type.as_deref(), Some("micro"));
        assert_eq!(record.phone, None);
        assert_eq!(record.location(), "Norman, Oklahoma");
    }

    #[test]
    fn missing_optional_keys_decode_to_none() {
        let record: BreweryRecord = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(record, BreweryRecord::new("abc"));
        assert_eq!(record.display_name(), "(unnamed brewery)");
        assert_eq!(record.location(), "—");
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(serde_json::from_str::<BreweryRecord>(r#"{"name": "No Id"}"#).is_err());
    }
}
