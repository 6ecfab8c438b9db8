//! Hotel booking tool

use crate::api::booking::{
    BookingConfirmation, Guest, HotelOrderRequest, HotelOrderResponse, PaymentCardInfo,
    HOTEL_ORDERS_PATH,
};
use crate::api::AmadeusClient;
use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::amadeus::{invalid, require_non_empty};
use crate::tools::{Tool, ToolCall, ToolExample, ToolResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBookingArgs {
    pub guests: Vec<Guest>,
    pub hotel_offer_id: String,
    pub card_vendor_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub holder_name: String,
}

impl HotelBookingArgs {
    fn validate(&self) -> Result<()> {
        if self.guests.is_empty() {
            return Err(invalid("guests must contain at least one guest"));
        }
        for (index, guest) in self.guests.iter().enumerate() {
            for (field, value) in [
                ("title", &guest.title),
                ("firstName", &guest.first_name),
                ("lastName", &guest.last_name),
                ("phone", &guest.phone),
                ("email", &guest.email),
            ] {
                require_non_empty(&format!("guests[{}].{}", index, field), value)?;
            }
        }

        require_non_empty("hotelOfferId", &self.hotel_offer_id)?;
        require_non_empty("cardVendorCode", &self.card_vendor_code)?;
        require_non_empty("cardNumber", &self.card_number)?;
        require_non_empty("holderName", &self.holder_name)?;

        // chrono has no year-month type; pin the day to validate
        let valid_expiry = self.expiry_date.len() == 7
            && NaiveDate::parse_from_str(&format!("{}-01", self.expiry_date), "%Y-%m-%d").is_ok();
        if !valid_expiry {
            return Err(invalid(format!(
                "expiryDate must be formatted as YYYY-MM, got '{}'",
                self.expiry_date
            )));
        }

        Ok(())
    }

    fn into_request(self) -> Result<HotelOrderRequest> {
        let card = PaymentCardInfo {
            vendor_code: self.card_vendor_code,
            card_number: self.card_number,
            expiry_date: self.expiry_date,
            holder_name: self.holder_name,
        };
        HotelOrderRequest::new(self.guests, self.hotel_offer_id, card)
            .ok_or_else(|| invalid("guests must contain at least one guest"))
    }
}

/// Books a hotel offer for a list of guests, paying by credit card
pub struct HotelBookingTool {
    api: Arc<AmadeusClient>,
}

impl HotelBookingTool {
    pub fn new(api: Arc<AmadeusClient>) -> Self {
        Self { api }
    }

    /// JSON schema of the arguments
    pub fn parameters() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "guests": {
                    "type": "array",
                    "description": "List of guests for the hotel booking.",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "description": "Guest's title" },
                            "firstName": { "type": "string", "description": "Guest's first name" },
                            "lastName": { "type": "string", "description": "Guest's last name" },
                            "phone": { "type": "string", "description": "Guest's phone number" },
                            "email": { "type": "string", "description": "Guest's email" }
                        },
                        "required": ["title", "firstName", "lastName", "phone", "email"]
                    }
                },
                "hotelOfferId": {
                    "type": "string",
                    "description": "The hotel offer ID to book."
                },
                "cardVendorCode": {
                    "type": "string",
                    "description": "Credit Card Vendor Code for the booking."
                },
                "cardNumber": {
                    "type": "string",
                    "description": "Credit Card Number for the booking."
                },
                "expiryDate": {
                    "type": "string",
                    "description": "Expiry date of the credit card in 'YYYY-MM' format."
                },
                "holderName": {
                    "type": "string",
                    "description": "Name of the cardholder."
                }
            },
            "required": [
                "guests",
                "hotelOfferId",
                "cardVendorCode",
                "cardNumber",
                "expiryDate",
                "holderName"
            ]
        })
    }
}

#[async_trait]
impl Tool for HotelBookingTool {
    fn name(&self) -> &str {
        "book_hotel"
    }

    fn description(&self) -> &str {
        "Book a hotel using Amadeus API."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Self::parameters()
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let args: HotelBookingArgs = call.arguments()?;
        args.validate()?;

        info!(
            hotel_offer_id = %args.hotel_offer_id,
            guests = args.guests.len(),
            "Booking hotel offer"
        );

        let request = args.into_request()?;
        let response: HotelOrderResponse = self.api.post_json(HOTEL_ORDERS_PATH, &request).await?;
        let confirmation: BookingConfirmation = response.into_confirmation()?;

        info!(reference = %confirmation.reference, "Hotel booked");
        Ok(ToolResult::success(&call.id, serde_json::to_value(confirmation)?))
    }

    fn examples(&self) -> Vec<ToolExample> {
        vec![ToolExample {
            description: "Book an offer for one guest with a Visa card".to_string(),
            parameters: json!({
                "guests": [{
                    "title": "MR",
                    "firstName": "BOB",
                    "lastName": "SMITH",
                    "phone": "+33679278416",
                    "email": "bob.smith@email.com"
                }],
                "hotelOfferId": "4L8PRJPEN7",
                "cardVendorCode": "VI",
                "cardNumber": "4151289722471370",
                "expiryDate": "2030-08",
                "holderName": "BOB SMITH"
            }),
            expected_result: "Booking confirmation list and the order reference".to_string(),
        }]
    }
}

impl_tool_factory!(
    HotelBookingToolFactory,
    HotelBookingTool,
    "book_hotel",
    "Book a hotel using Amadeus API."
);

#[cfg(test)]
mod tests {
    use super::*;

    fn args(overrides: serde_json::Value) -> serde_json::Value {
        let mut base = json!({
            "guests": [{
                "title": "MS",
                "firstName": "ANN",
                "lastName": "LEE",
                "phone": "+15551234567",
                "email": "ann@example.com"
            }],
            "hotelOfferId": "OFFER1",
            "cardVendorCode": "VI",
            "cardNumber": "4151289722471370",
            "expiryDate": "2030-08",
            "holderName": "ANN LEE"
        });
        for (key, value) in overrides.as_object().unwrap() {
            base[key] = value.clone();
        }
        base
    }

    fn parse(value: serde_json::Value) -> Result<HotelBookingArgs> {
        ToolCall::new("book_hotel", value).arguments()
    }

    #[test]
    fn test_valid_arguments() {
        let args = parse(args(json!({}))).unwrap();
        assert!(args.validate().is_ok());

        let request = args.into_request().unwrap();
        assert_eq!(request.data.guests[0].tid, 1);
        assert_eq!(request.data.travel_agent.contact.email, "ann@example.com");
        assert_eq!(request.data.room_associations[0].hotel_offer_id, "OFFER1");
    }

    #[test]
    fn test_expiry_date_format() {
        for bad in ["2030-13", "08/2030", "2030-8", "2030-08-01"] {
            let args = parse(args(json!({ "expiryDate": bad }))).unwrap();
            assert!(args.validate().is_err(), "accepted expiry '{}'", bad);
        }
    }

    #[test]
    fn test_guest_fields_required() {
        let missing_email = json!({
            "guests": [{ "title": "MR", "firstName": "A", "lastName": "B", "phone": "1" }]
        });
        assert!(parse(args(missing_email)).is_err());

        let blank_phone = json!({
            "guests": [{ "title": "MR", "firstName": "A", "lastName": "B", "phone": " ", "email": "a@b.c" }]
        });
        let err = parse(args(blank_phone)).unwrap().validate().unwrap_err();
        assert!(err.to_string().contains("guests[0].phone"));
    }

    #[test]
    fn test_empty_guest_list_rejected() {
        let args = parse(args(json!({ "guests": [] }))).unwrap();
        assert!(args.validate().is_err());
    }
}
