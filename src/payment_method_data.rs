//! Payment instruments accepted by the adapter.

use std::str::FromStr;

use error_stack::report;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    errors::{CustomResult, ValidationError},
    masking::{PeekInterface, Secret, Strategy, WithType},
};

/// The payment instrument attached to a charge or authorize call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentMethodData {
    /// A payment card.
    Card(Card),
}

/// A payment card. Every field except the holder name is treated as PII and
/// masked in `Debug` output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Card {
    /// Primary account number.
    pub card_number: CardNumber,
    /// Expiry month, `1` through `12`.
    pub card_exp_month: Secret<String>,
    /// Four-digit expiry year.
    pub card_exp_year: Secret<String>,
    /// Card verification code.
    pub card_cvc: Secret<String>,
    /// Name of the cardholder as printed on the card.
    pub card_holder_name: Option<Secret<String>>,
}

/// Masking strategy for card numbers: first six and last four digits stay
/// visible, the rest is starred out.
pub struct CardNumberStrategy;

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(value: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = value.as_ref();
        if value.len() < 15 || value.len() > 19 {
            return WithType::fmt(&value, f);
        }
        write!(f, "{}{}{}", &value[..6], "*".repeat(value.len() - 10), &value[value.len() - 4..])
    }
}

/// A validated primary account number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardNumber(Secret<String, CardNumberStrategy>);

impl CardNumber {
    /// The full account number. Only the request builder should need this.
    pub fn peek(&self) -> &str {
        self.0.peek()
    }
}

impl FromStr for CardNumber {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(card_number: &str) -> CustomResult<Self, ValidationError> {
        let sanitized: String = card_number.split_whitespace().collect();
        if sanitized.len() < 8
            || sanitized.len() > 19
            || !sanitized.chars().all(|c| c.is_ascii_digit())
            || !luhn(&sanitized)
        {
            Err(report!(ValidationError::InvalidValue {
                message: "card number invalid".to_string()
            }))
        } else {
            Ok(Self(Secret::new(sanitized)))
        }
    }
}

impl Serialize for CardNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.peek())
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

fn luhn(number: &str) -> bool {
    number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum::<u32>()
        % 10
        == 0
}
