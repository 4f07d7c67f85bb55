//! Helper traits shared by connector implementations.

use error_stack::ResultExt;

use crate::{
    consts,
    errors::ConnectorError,
    masking::{PeekInterface, Secret},
    payment_method_data::Card,
    router_data::AddressDetails,
    router_request_types::{CaptureMethod, PaymentsAuthorizeData},
    types::{AmountConvertor, Currency, MinorUnit},
};

pub(crate) type Error = error_stack::Report<ConnectorError>;

pub(crate) fn convert_amount<T>(
    amount_convertor: &dyn AmountConvertor<Output = T>,
    amount: MinorUnit,
    currency: Currency,
) -> Result<T, Error> {
    amount_convertor
        .convert(amount, currency)
        .change_context(ConnectorError::AmountConversionFailed)
}

/// Generate an opaque id over the crate alphabet. Collisions are
/// astronomically unlikely within a process lifetime.
pub(crate) fn generate_id(length: usize) -> String {
    nanoid::nanoid!(length, &consts::ALPHABETS)
}

pub(crate) trait CardData {
    /// Expiry month zero-padded to two digits, as the gateway expects.
    fn get_card_expiry_month_2_digit(&self) -> Secret<String>;
    /// Expiry year as a four-digit number.
    fn get_expiry_year_as_4_digit_i32(&self) -> Result<Secret<i32>, Error>;
}

impl CardData for Card {
    fn get_card_expiry_month_2_digit(&self) -> Secret<String> {
        let month = self.card_exp_month.peek();
        if month.len() == 1 {
            Secret::new(format!("0{month}"))
        } else {
            Secret::new(month.clone())
        }
    }

    fn get_expiry_year_as_4_digit_i32(&self) -> Result<Secret<i32>, Error> {
        let year = self.card_exp_year.peek();
        let year = match year.len() {
            2 => format!("20{year}"),
            _ => year.clone(),
        };
        year.parse::<i32>()
            .map(Secret::new)
            .change_context(ConnectorError::RequestEncodingFailed)
    }
}

pub(crate) trait PaymentsAuthorizeRequestData {
    fn is_auto_capture(&self) -> bool;
}

impl PaymentsAuthorizeRequestData for PaymentsAuthorizeData {
    fn is_auto_capture(&self) -> bool {
        matches!(
            self.capture_method,
            Some(CaptureMethod::Automatic) | None
        )
    }
}

pub(crate) trait AddressDetailsData {
    /// First street line, when present and non-empty.
    fn get_optional_line1(&self) -> Option<Secret<String>>;
    /// Second street line, when present and non-empty.
    fn get_optional_line2(&self) -> Option<Secret<String>>;
    /// Postal code, passed through even when absent.
    fn get_optional_zip(&self) -> Option<Secret<String>>;
    /// City, passed through even when absent.
    fn get_optional_city(&self) -> Option<String>;
    /// State, passed through even when absent.
    fn get_optional_state(&self) -> Option<Secret<String>>;
    /// Country code, when present and non-empty.
    fn get_optional_country(&self) -> Option<String>;
}

fn non_empty(value: Option<&Secret<String>>) -> Option<Secret<String>> {
    value.filter(|value| !value.peek().is_empty()).cloned()
}

impl AddressDetailsData for AddressDetails {
    fn get_optional_line1(&self) -> Option<Secret<String>> {
        non_empty(self.line1.as_ref())
    }

    fn get_optional_line2(&self) -> Option<Secret<String>> {
        non_empty(self.line2.as_ref())
    }

    fn get_optional_zip(&self) -> Option<Secret<String>> {
        self.zip.clone()
    }

    fn get_optional_city(&self) -> Option<String> {
        self.city.clone()
    }

    fn get_optional_state(&self) -> Option<Secret<String>> {
        self.state.clone()
    }

    fn get_optional_country(&self) -> Option<String> {
        self.country.clone().filter(|country| !country.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_sized() {
        let first = generate_id(consts::ID_LENGTH);
        let second = generate_id(consts::ID_LENGTH);
        assert_eq!(first.len(), consts::ID_LENGTH);
        assert_ne!(first, second);
    }

    #[test]
    fn expiry_month_is_zero_padded() {
        let card = Card {
            card_number: "4920201996449560".parse().unwrap(),
            card_exp_month: Secret::new("9".to_string()),
            card_exp_year: Secret::new("2027".to_string()),
            card_cvc: Secret::new("879".to_string()),
            card_holder_name: None,
        };
        assert_eq!(card.get_card_expiry_month_2_digit().peek(), "09");
    }

    #[test]
    fn two_digit_year_is_expanded() {
        let card = Card {
            card_number: "4920201996449560".parse().unwrap(),
            card_exp_month: Secret::new("09".to_string()),
            card_exp_year: Secret::new("27".to_string()),
            card_cvc: Secret::new("879".to_string()),
            card_holder_name: None,
        };
        assert_eq!(
            *card.get_expiry_year_as_4_digit_i32().unwrap().peek(),
            2027
        );
    }
}
