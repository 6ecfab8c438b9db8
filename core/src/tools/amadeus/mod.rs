//! Amadeus hotel tools

pub mod access_token;
pub mod hotel_booking;
pub mod hotel_list_by_city;
pub mod hotel_search;

pub use access_token::{AccessTokenTool, AccessTokenToolFactory};
pub use hotel_booking::{HotelBookingTool, HotelBookingToolFactory};
pub use hotel_list_by_city::{HotelListByCityTool, HotelListByCityToolFactory};
pub use hotel_search::{HotelSearchTool, HotelSearchToolFactory};

use crate::error::{Result, ToolError};

/// Reject blank string arguments before any network call
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolError::InvalidParameters {
            message: format!("{} cannot be empty", field),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn invalid<S: Into<String>>(message: S) -> crate::error::Error {
    ToolError::InvalidParameters {
        message: message.into(),
    }
    .into()
}
