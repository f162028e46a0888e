//! Quote normalization
//!
//! Turns a decoded `GLOBAL_QUOTE` body into a [`QuoteResult`]. An empty quote
//! mapping means the provider was reached but knows nothing about the
//! symbol, which is reported as [`QuoteResult::NotFound`] rather than as a
//! transport failure.

use crate::api::models::{
    GlobalQuoteResponse, QUOTE_PRICE_FIELD, QUOTE_SYMBOL_FIELD, QUOTE_TRADING_DAY_FIELD,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Shown when the provider has no quote for the searched symbol
pub const NOT_FOUND_MESSAGE: &str =
    "No data found for the stock symbol. Try using the company symbol instead of the company name.";

/// Shown when the quote could not be retrieved at all
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Search for a valid stock symbol to receive filtered news and stock analytics.";

/// Normalized quote fields.
///
/// Fields are optional because the provider may return a non-empty quote
/// mapping that lacks some of them; that case is logged and tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Option<String>,
    pub price: Option<Decimal>,
    pub trading_day: Option<NaiveDate>,
}

/// Outcome of the quote pipeline for one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteResult {
    Success(Quote),
    NotFound,
    TransportError { message: String },
}

impl QuoteResult {
    /// Transport failure carrying the generic guidance message
    pub fn transport_error() -> Self {
        Self::TransportError {
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }

    /// User-facing message for the failure variants
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::TransportError { message } => Some(message),
        }
    }

    pub fn as_quote(&self) -> Option<&Quote> {
        match self {
            Self::Success(quote) => Some(quote),
            _ => None,
        }
    }
}

/// Normalize a decoded quote payload
pub fn normalize_quote(response: &GlobalQuoteResponse) -> QuoteResult {
    let fields = &response.global_quote;
    if fields.is_empty() {
        return QuoteResult::NotFound;
    }

    let symbol = text_field(fields.get(QUOTE_SYMBOL_FIELD)).map(str::to_string);
    let price = text_field(fields.get(QUOTE_PRICE_FIELD)).and_then(|raw| Decimal::from_str(raw).ok());
    let trading_day = text_field(fields.get(QUOTE_TRADING_DAY_FIELD))
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    if symbol.is_none() || price.is_none() || trading_day.is_none() {
        tracing::warn!(
            symbol_present = symbol.is_some(),
            price_present = price.is_some(),
            trading_day_present = trading_day.is_some(),
            "Quote payload is missing or has malformed fields"
        );
    }

    QuoteResult::Success(Quote {
        symbol,
        price,
        trading_day,
    })
}

fn text_field(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).map(str::trim).filter(|text| !text.is_empty())
}
