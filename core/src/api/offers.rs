//! Hotel offers search: wire models and result shaping

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

pub const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";

#[derive(Debug, Clone, Deserialize)]
pub struct HotelOffersResponse {
    pub data: Vec<HotelOffers>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffers {
    pub hotel: OfferHotel,
    pub available: bool,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferHotel {
    pub name: String,
    #[serde(default)]
    pub hotel_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room: Room,
    pub price: Price,
    #[serde(default)]
    pub policies: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    pub description: RoomDescription,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomDescription {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub currency: String,
    pub total: String,
}

/// Simplified offer entry returned to the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub hotel_name: String,
    pub available: bool,
    pub offer_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub description: String,
    pub price: String,
    pub policies: Option<serde_json::Value>,
}

impl Price {
    /// Total followed directly by the currency code, e.g. "100.00USD"
    pub fn display(&self) -> String {
        format!("{}{}", self.total, self.currency)
    }
}

impl HotelOffersResponse {
    /// Offers of the first hotel in the response. Any further hotels are
    /// ignored.
    pub fn into_summaries(self) -> Result<Vec<OfferSummary>, ApiError> {
        let first = self.data.into_iter().next().ok_or_else(|| {
            ApiError::mapping(HOTEL_OFFERS_PATH, "response contains no hotel offers")
        })?;

        let HotelOffers {
            hotel,
            available,
            offers,
        } = first;

        Ok(offers
            .into_iter()
            .map(|offer| OfferSummary {
                hotel_name: hotel.name.clone(),
                available,
                price: offer.price.display(),
                offer_id: offer.id,
                check_in_date: offer.check_in_date,
                check_out_date: offer.check_out_date,
                description: offer.room.description.text,
                policies: offer.policies,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(id: &str, total: &str, currency: &str) -> serde_json::Value {
        json!({
            "id": id,
            "checkInDate": "2026-11-01",
            "checkOutDate": "2026-11-03",
            "room": {
                "type": "A1K",
                "description": { "text": "Superior King Room", "lang": "EN" }
            },
            "guests": { "adults": 1 },
            "price": { "currency": currency, "total": total, "base": "90.00" },
            "policies": { "paymentType": "guarantee", "cancellation": { "type": "FULL_STAY" } }
        })
    }

    #[test]
    fn test_price_concatenates_without_separator() {
        let price = Price {
            currency: "USD".to_string(),
            total: "100.00".to_string(),
        };
        assert_eq!(price.display(), "100.00USD");
    }

    #[test]
    fn test_only_first_hotel_is_mapped() {
        let response: HotelOffersResponse = serde_json::from_value(json!({
            "data": [
                {
                    "type": "hotel-offers",
                    "hotel": { "hotelId": "MCLONGHM", "name": "JW Marriott Grosvenor House London" },
                    "available": true,
                    "offers": [offer("OFFER1", "100.00", "USD"), offer("OFFER2", "250.50", "GBP")]
                },
                {
                    "hotel": { "hotelId": "OTHER", "name": "Other" },
                    "available": false,
                    "offers": [offer("OFFER3", "1.00", "EUR")]
                }
            ]
        }))
        .unwrap();

        let summaries = response.into_summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].offer_id, "OFFER1");
        assert_eq!(summaries[0].price, "100.00USD");
        assert_eq!(summaries[1].price, "250.50GBP");
        assert!(summaries.iter().all(|s| s.hotel_name == "JW Marriott Grosvenor House London"));
        assert_eq!(summaries[0].description, "Superior King Room");
        assert_eq!(
            summaries[0].policies.as_ref().unwrap()["paymentType"],
            json!("guarantee")
        );

        let rendered = serde_json::to_value(&summaries[0]).unwrap();
        assert!(rendered.get("hotelName").is_some());
        assert!(rendered.get("offerId").is_some());
        assert!(rendered.get("checkInDate").is_some());
    }

    #[test]
    fn test_empty_data_is_mapping_failure() {
        let response: HotelOffersResponse = serde_json::from_value(json!({ "data": [] })).unwrap();
        let err = response.into_summaries().unwrap_err();
        assert!(matches!(err, ApiError::Mapping { .. }));
    }

    #[test]
    fn test_missing_price_fails_decoding() {
        let mut broken = offer("OFFER1", "100.00", "USD");
        broken.as_object_mut().unwrap().remove("price");
        let result = serde_json::from_value::<HotelOffersResponse>(json!({
            "data": [{ "hotel": { "name": "H" }, "available": true, "offers": [broken] }]
        }));
        assert!(result.is_err());
    }
}
