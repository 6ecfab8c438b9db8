//! Hotel offers search tool

use crate::api::offers::{HotelOffersResponse, HOTEL_OFFERS_PATH};
use crate::api::AmadeusClient;
use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::amadeus::invalid;
use crate::tools::{Tool, ToolCall, ToolExample, ToolResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const MAX_GUESTS: u8 = 9;
const MAX_ROOMS: u8 = 9;

/// Hotel ids may come as a comma separated string or as a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HotelIds {
    Joined(String),
    List(Vec<String>),
}

impl HotelIds {
    pub fn joined(&self) -> String {
        let ids: Vec<&str> = match self {
            HotelIds::Joined(joined) => joined.split(',').collect(),
            HotelIds::List(list) => list.iter().map(String::as_str).collect(),
        };
        ids.into_iter()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn one() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchArgs {
    pub hotel_ids: HotelIds,
    #[serde(default = "one")]
    pub adults: u8,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default = "one")]
    pub room_quantity: u8,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| invalid(format!("{} must be formatted as YYYY-MM-DD, got '{}'", field, value)))
}

impl HotelSearchArgs {
    fn validate(&self) -> Result<()> {
        if self.hotel_ids.joined().is_empty() {
            return Err(invalid("hotelIds cannot be empty"));
        }
        if !(1..=MAX_GUESTS).contains(&self.adults) {
            return Err(invalid(format!("adults must be between 1 and {}", MAX_GUESTS)));
        }
        if !(1..=MAX_ROOMS).contains(&self.room_quantity) {
            return Err(invalid(format!("roomQuantity must be between 1 and {}", MAX_ROOMS)));
        }

        let check_in = self
            .check_in_date
            .as_deref()
            .map(|d| parse_date("checkInDate", d))
            .transpose()?;
        let check_out = self
            .check_out_date
            .as_deref()
            .map(|d| parse_date("checkOutDate", d))
            .transpose()?;
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                return Err(invalid("checkOutDate must be after checkInDate"));
            }
        }

        Ok(())
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("hotelIds", self.hotel_ids.joined()),
            ("adults", self.adults.to_string()),
        ];
        if let Some(date) = &self.check_in_date {
            query.push(("checkInDate", date.clone()));
        }
        if let Some(date) = &self.check_out_date {
            query.push(("checkOutDate", date.clone()));
        }
        if let Some(range) = self.price_range.as_deref().filter(|r| !r.trim().is_empty()) {
            query.push(("priceRange", range.to_string()));
        }
        query.push(("roomQuantity", self.room_quantity.to_string()));
        query
    }
}

/// Searches availability and rates for a hotel
pub struct HotelSearchTool {
    api: Arc<AmadeusClient>,
}

impl HotelSearchTool {
    pub fn new(api: Arc<AmadeusClient>) -> Self {
        Self { api }
    }

    /// JSON schema of the arguments
    pub fn parameters() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "hotelIds": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "The IDs of the hotels to search for, as a comma separated string or a list."
                },
                "adults": {
                    "type": "integer",
                    "description": "The number of adults for the search.",
                    "minimum": 1,
                    "maximum": MAX_GUESTS,
                    "default": 1
                },
                "checkInDate": {
                    "type": "string",
                    "format": "date",
                    "description": "The check-in date for the hotel stay, formatted as 'YYYY-MM-DD'."
                },
                "checkOutDate": {
                    "type": "string",
                    "format": "date",
                    "description": "The check-out date for the hotel stay, formatted as 'YYYY-MM-DD'."
                },
                "priceRange": {
                    "type": "string",
                    "description": "The price range for the hotel search, formatted as 'min-max'."
                },
                "roomQuantity": {
                    "type": "integer",
                    "description": "The number of rooms to book.",
                    "minimum": 1,
                    "maximum": MAX_ROOMS,
                    "default": 1
                }
            },
            "required": ["hotelIds"]
        })
    }
}

#[async_trait]
impl Tool for HotelSearchTool {
    fn name(&self) -> &str {
        "hotel_search"
    }

    fn description(&self) -> &str {
        "Search for hotels and retrieve availability and rates information."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Self::parameters()
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let args: HotelSearchArgs = call.arguments()?;
        args.validate()?;

        let hotel_ids = args.hotel_ids.joined();
        info!(hotel_ids = %hotel_ids, adults = args.adults, "Searching hotel offers");

        let response: HotelOffersResponse = self.api.get(HOTEL_OFFERS_PATH, &args.query()).await?;
        let offers = response.into_summaries()?;

        info!(count = offers.len(), "Hotel offers found");
        Ok(ToolResult::success(&call.id, serde_json::to_value(offers)?))
    }

    fn examples(&self) -> Vec<ToolExample> {
        vec![
            ToolExample {
                description: "Check availability for one adult".to_string(),
                parameters: json!({ "hotelIds": "MCLONGHM" }),
                expected_result: "List of offers with price, room description and policies".to_string(),
            },
            ToolExample {
                description: "Search two rooms for specific dates".to_string(),
                parameters: json!({
                    "hotelIds": "MCLONGHM",
                    "adults": 2,
                    "checkInDate": "2026-11-01",
                    "checkOutDate": "2026-11-04",
                    "roomQuantity": 2
                }),
                expected_result: "List of offers for the requested stay".to_string(),
            },
        ]
    }
}

impl_tool_factory!(
    HotelSearchToolFactory,
    HotelSearchTool,
    "hotel_search",
    "Search for hotels and retrieve availability and rates information."
);

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> HotelSearchArgs {
        ToolCall::new("hotel_search", value).arguments().unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let args = parse(json!({ "hotelIds": "MCLONGHM" }));
        assert!(args.validate().is_ok());
        assert_eq!(
            args.query(),
            vec![
                ("hotelIds", "MCLONGHM".to_string()),
                ("adults", "1".to_string()),
                ("roomQuantity", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_hotel_ids_list_is_joined() {
        let args = parse(json!({ "hotelIds": ["MCLONGHM", " ADPAR001 ", ""] }));
        assert_eq!(args.hotel_ids.joined(), "MCLONGHM,ADPAR001");

        let args = parse(json!({ "hotelIds": "A, B" }));
        assert_eq!(args.hotel_ids.joined(), "A,B");
    }

    #[test]
    fn test_all_parameters_forwarded() {
        let args = parse(json!({
            "hotelIds": "MCLONGHM",
            "adults": 2,
            "checkInDate": "2026-11-01",
            "checkOutDate": "2026-11-04",
            "priceRange": "100-300",
            "roomQuantity": 2
        }));
        assert!(args.validate().is_ok());
        assert_eq!(
            args.query(),
            vec![
                ("hotelIds", "MCLONGHM".to_string()),
                ("adults", "2".to_string()),
                ("checkInDate", "2026-11-01".to_string()),
                ("checkOutDate", "2026-11-04".to_string()),
                ("priceRange", "100-300".to_string()),
                ("roomQuantity", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_schema_accepts_string_or_list() {
        let schema = HotelSearchTool::parameters();
        assert_eq!(schema["properties"]["hotelIds"]["type"], json!(["string", "array"]));
        assert_eq!(schema["properties"]["hotelIds"]["items"]["type"], json!("string"));
    }

    #[test]
    fn test_validation_failures() {
        assert!(parse(json!({ "hotelIds": " , " })).validate().is_err());
        assert!(parse(json!({ "hotelIds": "H", "adults": 0 })).validate().is_err());
        assert!(parse(json!({ "hotelIds": "H", "roomQuantity": 10 })).validate().is_err());
        assert!(parse(json!({ "hotelIds": "H", "checkInDate": "01/11/2026" }))
            .validate()
            .is_err());
        assert!(parse(json!({
            "hotelIds": "H",
            "checkInDate": "2026-11-04",
            "checkOutDate": "2026-11-01"
        }))
        .validate()
        .is_err());
    }
}
