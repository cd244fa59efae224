//! Validated shipping address.

use core::fmt;

use serde::Serialize;

/// Errors that can occur when parsing a [`ShippingAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A required field is empty after trimming.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// The phone number is not exactly 10 digits.
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,
    /// The pincode is not exactly 6 digits.
    #[error("pincode must be exactly 6 digits")]
    InvalidPincode,
}

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Number of digits in a valid pincode.
pub const PINCODE_DIGITS: usize = 6;

/// Raw delivery address input, as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct AddressFields {
    pub name: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub pincode: String,
}

/// A validated, normalized delivery address.
///
/// Produced by [`ShippingAddress::parse`], which is the only constructor,
/// so holding one guarantees the fields passed validation. The normalized
/// form is the single string the order backend stores:
/// `"{name}, {phone}, {address_line}, {city} - {pincode}"`.
///
/// ## Constraints
///
/// - Every field must be non-empty after trimming
/// - Phone must be exactly 10 ASCII digits
/// - Pincode must be exactly 6 ASCII digits
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ShippingAddress(String);

impl ShippingAddress {
    /// Parse raw address fields into a normalized address.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty after trimming, if the phone
    /// number is not exactly 10 digits, or if the pincode is not exactly
    /// 6 digits.
    pub fn parse(fields: &AddressFields) -> Result<Self, AddressError> {
        let name = fields.name.trim();
        let phone = fields.phone.trim();
        let address_line = fields.address_line.trim();
        let city = fields.city.trim();
        let pincode = fields.pincode.trim();

        for (value, label) in [
            (name, "name"),
            (phone, "phone"),
            (address_line, "address"),
            (city, "city"),
            (pincode, "pincode"),
        ] {
            if value.is_empty() {
                return Err(AddressError::EmptyField(label));
            }
        }

        if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddressError::InvalidPhone);
        }

        if pincode.len() != PINCODE_DIGITS || !pincode.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddressError::InvalidPincode);
        }

        Ok(Self(format!(
            "{name}, {phone}, {address_line}, {city} - {pincode}"
        )))
    }

    /// Returns the normalized address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the address and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShippingAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_fields() -> AddressFields {
        AddressFields {
            name: "Asha Patel".to_string(),
            phone: "9876543210".to_string(),
            address_line: "14 MG Road".to_string(),
            city: "Anand".to_string(),
            pincode: "388001".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_address() {
        let address = ShippingAddress::parse(&valid_fields()).unwrap();
        assert_eq!(
            address.as_str(),
            "Asha Patel, 9876543210, 14 MG Road, Anand - 388001"
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut fields = valid_fields();
        fields.name = "  Asha Patel  ".to_string();
        fields.city = " Anand ".to_string();

        let address = ShippingAddress::parse(&fields).unwrap();
        assert_eq!(
            address.as_str(),
            "Asha Patel, 9876543210, 14 MG Road, Anand - 388001"
        );
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut fields = valid_fields();
        fields.city = "   ".to_string();

        assert_eq!(
            ShippingAddress::parse(&fields),
            Err(AddressError::EmptyField("city"))
        );
    }

    #[test]
    fn test_phone_wrong_length_rejected() {
        let mut fields = valid_fields();
        fields.phone = "12345".to_string();

        assert_eq!(
            ShippingAddress::parse(&fields),
            Err(AddressError::InvalidPhone)
        );
    }

    #[test]
    fn test_phone_non_digit_rejected() {
        let mut fields = valid_fields();
        fields.phone = "12345abcde".to_string();

        assert_eq!(
            ShippingAddress::parse(&fields),
            Err(AddressError::InvalidPhone)
        );
    }

    #[test]
    fn test_pincode_wrong_length_rejected() {
        let mut fields = valid_fields();
        fields.pincode = "38800".to_string();

        assert_eq!(
            ShippingAddress::parse(&fields),
            Err(AddressError::InvalidPincode)
        );
    }

    #[test]
    fn test_pincode_non_digit_rejected() {
        let mut fields = valid_fields();
        fields.pincode = "38800a".to_string();

        assert_eq!(
            ShippingAddress::parse(&fields),
            Err(AddressError::InvalidPincode)
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let address = ShippingAddress::parse(&valid_fields()).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"Asha Patel, 9876543210, 14 MG Road, Anand - 388001\"");
    }
}
