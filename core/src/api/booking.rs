//! Hotel order booking: request body, wire models and result shaping

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

pub const HOTEL_ORDERS_PATH: &str = "/v2/booking/hotel-orders";

/// A guest as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Payment card used to guarantee the booking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCardInfo {
    pub vendor_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub holder_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelOrderRequest {
    pub data: HotelOrderData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOrderData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub guests: Vec<OrderGuest>,
    pub travel_agent: TravelAgent,
    pub room_associations: Vec<RoomAssociation>,
    pub payment: Payment,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGuest {
    pub tid: u32,
    #[serde(flatten)]
    pub guest: Guest,
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelAgent {
    pub contact: AgentContact,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentContact {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssociation {
    pub guest_references: Vec<GuestReference>,
    pub hotel_offer_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestReference {
    pub guest_reference: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub method: &'static str,
    pub payment_card: PaymentCard,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub payment_card_info: PaymentCardInfo,
}

impl HotelOrderRequest {
    /// Build the order body. Guests get 1-based ids in input order, the first
    /// guest's email becomes the travel agent contact and the single room is
    /// assigned to guest "1". Returns `None` when there are no guests.
    pub fn new(guests: Vec<Guest>, hotel_offer_id: String, card: PaymentCardInfo) -> Option<Self> {
        let contact_email = guests.first()?.email.clone();

        let guests = guests
            .into_iter()
            .zip(1u32..)
            .map(|(guest, tid)| OrderGuest { tid, guest })
            .collect();

        Some(Self {
            data: HotelOrderData {
                kind: "hotel-order",
                guests,
                travel_agent: TravelAgent {
                    contact: AgentContact {
                        email: contact_email,
                    },
                },
                room_associations: vec![RoomAssociation {
                    guest_references: vec![GuestReference {
                        guest_reference: "1".to_string(),
                    }],
                    hotel_offer_id,
                }],
                payment: Payment {
                    method: "CREDIT_CARD",
                    payment_card: PaymentCard {
                        payment_card_info: card,
                    },
                },
            },
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelOrderResponse {
    pub data: HotelOrder,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOrder {
    #[serde(default)]
    pub hotel_bookings: Vec<HotelBooking>,
    #[serde(default)]
    pub associated_records: Vec<AssociatedRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBooking {
    pub booking_status: String,
    #[serde(default)]
    pub hotel_provider_information: Vec<HotelProviderInformation>,
    #[serde(default)]
    pub hotel_offer: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelProviderInformation {
    pub confirmation_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssociatedRecord {
    pub reference: String,
}

/// Booking result returned to the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_confirmation_list: Vec<BookingConfirmationEntry>,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationEntry {
    pub booking_status: String,
    pub confirmation_number: String,
    pub hotel_offer_details: serde_json::Value,
}

impl HotelOrderResponse {
    pub fn into_confirmation(self) -> Result<BookingConfirmation, ApiError> {
        let HotelOrder {
            hotel_bookings,
            associated_records,
        } = self.data;

        let booking_confirmation_list = hotel_bookings
            .into_iter()
            .map(|booking| {
                let confirmation_number = booking
                    .hotel_provider_information
                    .into_iter()
                    .next()
                    .map(|info| info.confirmation_number)
                    .ok_or_else(|| {
                        ApiError::mapping(
                            HOTEL_ORDERS_PATH,
                            "hotel booking has no provider confirmation",
                        )
                    })?;

                Ok(BookingConfirmationEntry {
                    booking_status: booking.booking_status,
                    confirmation_number,
                    hotel_offer_details: booking.hotel_offer,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        let reference = associated_records
            .into_iter()
            .next()
            .map(|record| record.reference)
            .ok_or_else(|| {
                ApiError::mapping(HOTEL_ORDERS_PATH, "order has no associated record")
            })?;

        Ok(BookingConfirmation {
            booking_confirmation_list,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guest(n: usize) -> Guest {
        Guest {
            title: "MR".to_string(),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            phone: format!("+3367967{:04}", n),
            email: format!("guest{}@example.com", n),
        }
    }

    fn card() -> PaymentCardInfo {
        PaymentCardInfo {
            vendor_code: "VI".to_string(),
            card_number: "4151289722471370".to_string(),
            expiry_date: "2030-08".to_string(),
            holder_name: "First1 Last1".to_string(),
        }
    }

    #[test]
    fn test_guests_are_renumbered_in_order() {
        for n in 1..=4 {
            let guests: Vec<Guest> = (1..=n).map(guest).collect();
            let request = HotelOrderRequest::new(guests, "OFFER1".to_string(), card()).unwrap();

            let tids: Vec<u32> = request.data.guests.iter().map(|g| g.tid).collect();
            let expected: Vec<u32> = (1..=n as u32).collect();
            assert_eq!(tids, expected);
            assert_eq!(request.data.travel_agent.contact.email, "guest1@example.com");
        }
    }

    #[test]
    fn test_no_guests_builds_nothing() {
        assert!(HotelOrderRequest::new(Vec::new(), "OFFER1".to_string(), card()).is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = HotelOrderRequest::new(vec![guest(1), guest(2)], "OFFER1".to_string(), card())
            .unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "data": {
                    "type": "hotel-order",
                    "guests": [
                        {
                            "tid": 1, "title": "MR", "firstName": "First1", "lastName": "Last1",
                            "phone": "+33679670001", "email": "guest1@example.com"
                        },
                        {
                            "tid": 2, "title": "MR", "firstName": "First2", "lastName": "Last2",
                            "phone": "+33679670002", "email": "guest2@example.com"
                        }
                    ],
                    "travelAgent": { "contact": { "email": "guest1@example.com" } },
                    "roomAssociations": [
                        { "guestReferences": [{ "guestReference": "1" }], "hotelOfferId": "OFFER1" }
                    ],
                    "payment": {
                        "method": "CREDIT_CARD",
                        "paymentCard": {
                            "paymentCardInfo": {
                                "vendorCode": "VI",
                                "cardNumber": "4151289722471370",
                                "expiryDate": "2030-08",
                                "holderName": "First1 Last1"
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_confirmation_mapping() {
        let response: HotelOrderResponse = serde_json::from_value(json!({
            "data": {
                "type": "hotel-order",
                "id": "V0g2VFJaLzIwMjQtMDYtMDc=",
                "hotelBookings": [
                    {
                        "type": "hotel-booking",
                        "bookingStatus": "CONFIRMED",
                        "hotelProviderInformation": [
                            { "hotelProviderCode": "AR", "confirmationNumber": "15335419" },
                            { "hotelProviderCode": "XX", "confirmationNumber": "ignored" }
                        ],
                        "hotelOffer": { "id": "OFFER1", "price": { "total": "100.00" } }
                    }
                ],
                "associatedRecords": [
                    { "reference": "WH6TRZ", "originSystemCode": "GDS" }
                ]
            }
        }))
        .unwrap();

        let confirmation = response.into_confirmation().unwrap();
        assert_eq!(confirmation.reference, "WH6TRZ");
        assert_eq!(confirmation.booking_confirmation_list.len(), 1);
        let entry = &confirmation.booking_confirmation_list[0];
        assert_eq!(entry.booking_status, "CONFIRMED");
        assert_eq!(entry.confirmation_number, "15335419");
        assert_eq!(entry.hotel_offer_details["id"], json!("OFFER1"));
    }

    #[test]
    fn test_missing_reference_is_mapping_failure() {
        let response: HotelOrderResponse = serde_json::from_value(json!({
            "data": { "hotelBookings": [], "associatedRecords": [] }
        }))
        .unwrap();
        assert!(matches!(
            response.into_confirmation(),
            Err(ApiError::Mapping { .. })
        ));
    }

    #[test]
    fn test_missing_provider_information_is_mapping_failure() {
        let response: HotelOrderResponse = serde_json::from_value(json!({
            "data": {
                "hotelBookings": [{ "bookingStatus": "CONFIRMED", "hotelProviderInformation": [] }],
                "associatedRecords": [{ "reference": "REF" }]
            }
        }))
        .unwrap();
        assert!(response.into_confirmation().is_err());
    }
}
