//! Hotel list by city: wire models and result shaping

use serde::{Deserialize, Deserializer, Serialize};

pub const HOTELS_BY_CITY_PATH: &str = "/v1/reference-data/locations/hotels/by-city";

#[derive(Debug, Clone, Deserialize)]
pub struct HotelListResponse {
    pub data: Vec<HotelRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub name: String,
    pub hotel_id: String,
    #[serde(default)]
    pub address: Option<HotelAddress>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// The provider normally sends a structured address, but a bare string is
/// accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HotelAddress {
    Structured(StructuredAddress),
    Plain(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAddress {
    #[serde(default, deserialize_with = "lines_if_array")]
    pub lines: Option<Vec<String>>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Address lines only count when they arrive as an array; anything else is
/// ignored so the rest of the record still formats.
fn lines_if_array<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(line) => Some(line),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Simplified hotel entry returned to the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    pub name: String,
    pub hotel_id: String,
    pub address: String,
    pub rating: Option<u8>,
}

impl HotelAddress {
    /// Address lines, then city, then postal code, joined with ", ".
    /// Absent or blank segments are skipped.
    pub fn format(&self) -> String {
        match self {
            HotelAddress::Plain(text) => text.clone(),
            HotelAddress::Structured(address) => {
                let segments = address
                    .lines
                    .iter()
                    .flatten()
                    .chain(address.city_name.iter())
                    .chain(address.postal_code.iter())
                    .filter(|segment| !segment.trim().is_empty());

                let mut formatted = String::new();
                for segment in segments {
                    if !formatted.is_empty() {
                        formatted.push_str(", ");
                    }
                    formatted.push_str(segment);
                }
                formatted
            }
        }
    }
}

impl From<HotelRecord> for HotelSummary {
    fn from(record: HotelRecord) -> Self {
        Self {
            address: record
                .address
                .as_ref()
                .map(HotelAddress::format)
                .unwrap_or_default(),
            name: record.name,
            hotel_id: record.hotel_id,
            rating: record.rating,
        }
    }
}

impl HotelListResponse {
    pub fn into_summaries(self) -> Vec<HotelSummary> {
        self.data.into_iter().map(HotelSummary::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(lines: &[&str], city: Option<&str>, postal: Option<&str>) -> HotelAddress {
        HotelAddress::Structured(StructuredAddress {
            lines: Some(lines.iter().map(|l| l.to_string()).collect()),
            city_name: city.map(str::to_string),
            postal_code: postal.map(str::to_string),
            country_code: None,
        })
    }

    #[test]
    fn test_format_full_address() {
        let address = structured(&["A", "B"], Some("X"), Some("1"));
        assert_eq!(address.format(), "A, B, X, 1");
    }

    #[test]
    fn test_format_city_only_has_no_dangling_separator() {
        let address = structured(&[], Some("X"), None);
        assert_eq!(address.format(), "X");

        let address = HotelAddress::Structured(StructuredAddress {
            city_name: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(address.format(), "X");
    }

    #[test]
    fn test_format_lines_and_postal_without_city() {
        let address = structured(&["12 Rue de Rivoli"], None, Some("75001"));
        assert_eq!(address.format(), "12 Rue de Rivoli, 75001");
    }

    #[test]
    fn test_format_plain_string_is_verbatim() {
        let record: HotelRecord = serde_json::from_value(json!({
            "name": "Plain Hotel",
            "hotelId": "PLPAR001",
            "address": "Full Addr"
        }))
        .unwrap();
        assert_eq!(HotelSummary::from(record).address, "Full Addr");
    }

    #[test]
    fn test_missing_address_is_empty() {
        let record: HotelRecord = serde_json::from_value(json!({
            "name": "No Address",
            "hotelId": "NAPAR001"
        }))
        .unwrap();
        let summary = HotelSummary::from(record);
        assert_eq!(summary.address, "");
        assert_eq!(summary.rating, None);
    }

    #[test]
    fn test_summaries_preserve_order_and_fields() {
        let response: HotelListResponse = serde_json::from_value(json!({
            "data": [
                {
                    "chainCode": "AC",
                    "name": "ACROPOLIS HOTEL",
                    "hotelId": "ACPARH29",
                    "rating": 4,
                    "address": {
                        "lines": ["2 RUE DE L ARRIVEE"],
                        "cityName": "PARIS",
                        "postalCode": "75015",
                        "countryCode": "FR"
                    }
                },
                { "name": "SECOND", "hotelId": "XXPAR002" }
            ],
            "meta": { "count": 2 }
        }))
        .unwrap();

        let summaries = response.into_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            serde_json::to_value(&summaries[0]).unwrap(),
            json!({
                "name": "ACROPOLIS HOTEL",
                "hotelId": "ACPARH29",
                "address": "2 RUE DE L ARRIVEE, PARIS, 75015",
                "rating": 4
            })
        );
        assert_eq!(summaries[1].hotel_id, "XXPAR002");
    }

    #[test]
    fn test_format_keeps_segment_text() {
        let address = structured(&[" A ", "B", "  "], Some("X"), None);
        assert_eq!(address.format(), " A , B, X");
    }

    #[test]
    fn test_non_array_lines_are_skipped() {
        let response: HotelListResponse = serde_json::from_value(json!({
            "data": [{
                "name": "ODD LINES",
                "hotelId": "ODPAR001",
                "address": { "lines": "1 MAIN ST", "cityName": "PARIS", "postalCode": "75001" }
            }]
        }))
        .unwrap();

        let summaries = response.into_summaries();
        assert_eq!(summaries[0].address, "PARIS, 75001");
    }

    #[test]
    fn test_missing_hotel_id_fails_decoding() {
        let result = serde_json::from_value::<HotelListResponse>(json!({
            "data": [{ "name": "Nameless id" }]
        }));
        assert!(result.is_err());
    }
}
