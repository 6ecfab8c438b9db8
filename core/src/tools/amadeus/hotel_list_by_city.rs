//! Hotel list by city tool

use crate::api::hotels::{HotelListResponse, HOTELS_BY_CITY_PATH};
use crate::api::AmadeusClient;
use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::amadeus::{invalid, require_non_empty};
use crate::tools::{Tool, ToolCall, ToolExample, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum RadiusUnit {
    #[default]
    #[serde(rename = "KM")]
    Kilometers,
    #[serde(rename = "MI")]
    Miles,
}

impl RadiusUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusUnit::Kilometers => "KM",
            RadiusUnit::Miles => "MI",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HotelSource {
    Bedbank,
    Directchain,
    #[default]
    All,
}

impl HotelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelSource::Bedbank => "BEDBANK",
            HotelSource::Directchain => "DIRECTCHAIN",
            HotelSource::All => "ALL",
        }
    }
}

fn default_radius() -> f64 {
    5.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListArgs {
    pub city_code: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub radius_unit: RadiusUnit,
    #[serde(default)]
    pub hotel_source: HotelSource,
    #[serde(default)]
    pub chain_code: Option<String>,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl HotelListArgs {
    fn validate(&self) -> Result<()> {
        require_non_empty("cityCode", &self.city_code)?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid(format!("radius must be a positive number, got {}", self.radius)));
        }
        Ok(())
    }

    /// Query string in the order the endpoint documents; optional filters
    /// only when set
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("cityCode", self.city_code.trim().to_string()),
            ("radius", self.radius.to_string()),
            ("radiusUnit", self.radius_unit.as_str().to_string()),
            ("hotelSource", self.hotel_source.as_str().to_string()),
        ];

        let filters = [
            ("chainCodes", &self.chain_code),
            ("amenities", &self.amenities),
            ("ratings", &self.rating),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                query.push((key, value.to_string()));
            }
        }

        query
    }
}

/// Lists hotels in a city with a single formatted address line each
pub struct HotelListByCityTool {
    api: Arc<AmadeusClient>,
}

impl HotelListByCityTool {
    pub fn new(api: Arc<AmadeusClient>) -> Self {
        Self { api }
    }

    /// JSON schema of the arguments
    pub fn parameters() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "cityCode": {
                    "type": "string",
                    "description": "The city code for which to retrieve hotel information."
                },
                "radius": {
                    "type": "number",
                    "description": "Maximum distance from the geographical coordinates in kilometers.",
                    "default": 5
                },
                "radiusUnit": {
                    "type": "string",
                    "enum": ["KM", "MI"],
                    "description": "Unit of measurement for the radius.",
                    "default": "KM"
                },
                "hotelSource": {
                    "type": "string",
                    "enum": ["BEDBANK", "DIRECTCHAIN", "ALL"],
                    "description": "Source of the hotels to retrieve.",
                    "default": "ALL"
                },
                "chainCode": {
                    "type": "string",
                    "description": "Filter hotels by chain code."
                },
                "amenities": {
                    "type": "string",
                    "description": "Filter hotels by amenities."
                },
                "rating": {
                    "type": "string",
                    "description": "Filter hotels by rating."
                }
            },
            "required": ["cityCode"]
        })
    }
}

#[async_trait]
impl Tool for HotelListByCityTool {
    fn name(&self) -> &str {
        "hotel_list_by_city"
    }

    fn description(&self) -> &str {
        "Retrieve a list of hotels by city from the Amadeus API."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Self::parameters()
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let args: HotelListArgs = call.arguments()?;
        args.validate()?;

        info!(city_code = %args.city_code, radius = args.radius, "Listing hotels by city");

        let response: HotelListResponse = self.api.get(HOTELS_BY_CITY_PATH, &args.query()).await?;
        let hotels = response.into_summaries();

        info!(count = hotels.len(), "Hotels listed");
        Ok(ToolResult::success(&call.id, serde_json::to_value(hotels)?))
    }

    fn examples(&self) -> Vec<ToolExample> {
        vec![
            ToolExample {
                description: "List hotels in Paris".to_string(),
                parameters: json!({ "cityCode": "PAR" }),
                expected_result: "List of {name, hotelId, address, rating} entries".to_string(),
            },
            ToolExample {
                description: "List 4 and 5 star hotels within 2 miles of London".to_string(),
                parameters: json!({
                    "cityCode": "LON",
                    "radius": 2,
                    "radiusUnit": "MI",
                    "rating": "4,5"
                }),
                expected_result: "Filtered list of hotels".to_string(),
            },
        ]
    }
}

impl_tool_factory!(
    HotelListByCityToolFactory,
    HotelListByCityTool,
    "hotel_list_by_city",
    "Retrieve a list of hotels by city from the Amadeus API."
);

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> HotelListArgs {
        ToolCall::new("hotel_list_by_city", value).arguments().unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let args = parse(json!({ "cityCode": "PAR" }));
        assert_eq!(
            args.query(),
            vec![
                ("cityCode", "PAR".to_string()),
                ("radius", "5".to_string()),
                ("radiusUnit", "KM".to_string()),
                ("hotelSource", "ALL".to_string()),
            ]
        );
    }

    #[test]
    fn test_optional_filters_renamed() {
        let args = parse(json!({
            "cityCode": "LON",
            "radius": 2.5,
            "radiusUnit": "MI",
            "hotelSource": "BEDBANK",
            "chainCode": "MC",
            "amenities": "SPA",
            "rating": "5"
        }));
        let query = args.query();
        assert!(query.contains(&("radius", "2.5".to_string())));
        assert!(query.contains(&("radiusUnit", "MI".to_string())));
        assert!(query.contains(&("hotelSource", "BEDBANK".to_string())));
        assert!(query.contains(&("chainCodes", "MC".to_string())));
        assert!(query.contains(&("amenities", "SPA".to_string())));
        assert!(query.contains(&("ratings", "5".to_string())));
    }

    #[test]
    fn test_blank_filters_skipped() {
        let args = parse(json!({ "cityCode": "PAR", "chainCode": "" }));
        assert!(!args.query().iter().any(|(key, _)| *key == "chainCodes"));
    }

    #[test]
    fn test_invalid_arguments() {
        let call = ToolCall::new("hotel_list_by_city", json!({ "cityCode": "PAR", "radiusUnit": "LEAGUES" }));
        assert!(call.arguments::<HotelListArgs>().is_err());

        assert!(parse(json!({ "cityCode": " " })).validate().is_err());
        assert!(parse(json!({ "cityCode": "PAR", "radius": -1 })).validate().is_err());
        assert!(parse(json!({ "cityCode": "PAR" })).validate().is_ok());
    }
}
