//! Daily price series transformation

use crate::api::models::{CLOSE_FIELD, DailySeriesResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closing price for one trading day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub closing_price: Decimal,
}

/// Price points in strictly ascending date order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from points in any order.
    ///
    /// Points are sorted by date; when a date repeats, the first point seen
    /// for it is kept.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.date);
        points.dedup_by_key(|point| point.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

/// Convert a decoded daily series into an ascending [`PriceSeries`].
///
/// Entries whose date key is not a zero-padded `YYYY-MM-DD` calendar date,
/// or whose close is absent or non-numeric, are dropped. The provider lists days newest first and map
/// order is not chronological, so ordering comes from an explicit sort.
pub fn transform_series(response: &DailySeriesResponse) -> PriceSeries {
    let input_len = response.time_series.len();

    let points: Vec<PricePoint> = response
        .time_series
        .iter()
        .filter_map(|(date, fields)| {
            let Some(date_value) = parse_date_key(date) else {
                tracing::warn!(date = %date, "Dropping series entry with malformed date");
                return None;
            };
            let Some(closing_price) = closing_price(fields) else {
                tracing::warn!(date = %date, "Dropping series entry without a numeric close");
                return None;
            };
            Some(PricePoint {
                date: date_value,
                closing_price,
            })
        })
        .collect();

    let series = PriceSeries::from_points(points);
    tracing::debug!(input = input_len, kept = series.len(), "Transformed daily series");
    series
}

/// Parse a date key, rejecting spellings such as `2024-5-7` that would alias
/// a canonical key
fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == key).then_some(date)
}

fn closing_price(fields: &Value) -> Option<Decimal> {
    match fields.get(CLOSE_FIELD)? {
        Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn response(body: Value) -> DailySeriesResponse {
        serde_json::from_value(json!({ "Time Series (Daily)": body })).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_is_ascending() {
        let series = transform_series(&response(json!({
            "2024-05-17": {"1. open": "186.1", "4. close": "187.42"},
            "2024-05-15": {"4. close": "183.10"},
            "2024-05-16": {"4. close": "185.00"},
            "2023-12-29": {"4. close": "163.55"}
        })));

        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![day(2023, 12, 29), day(2024, 5, 15), day(2024, 5, 16), day(2024, 5, 17)]
        );
        assert_eq!(series.last().unwrap().closing_price, dec!(187.42));
        assert!(series.points().windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn test_bad_entries_are_dropped() {
        let input = json!({
            "2024-05-17": {"4. close": "187.42"},
            "2024-05-16": {"4. close": "not a price"},
            "2024-05-15": {"1. open": "183.00"},
            "yesterday": {"4. close": "180.00"},
            "2024-05-14": "garbage",
            "2024-05-13": {"4. close": 181.5}
        });
        let series = transform_series(&response(input));

        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().date, day(2024, 5, 13));
        assert_eq!(series.first().unwrap().closing_price, dec!(181.5));
    }

    #[test]
    fn test_empty_series() {
        let series = transform_series(&response(json!({})));
        assert!(series.is_empty());
        assert!(series.first().is_none());
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let mut body = serde_json::Map::new();
        for i in 1..=28 {
            let close = if i % 3 == 0 { json!("x") } else { json!(format!("{i}.25")) };
            body.insert(format!("2024-02-{i:02}"), json!({ "4. close": close }));
        }
        let series = transform_series(&response(Value::Object(body)));

        assert!(series.len() <= 28);
        assert_eq!(series.len(), 19);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let input = response(json!({
            "2024-05-17": {"4. close": "187.42"},
            "2024-05-16": {"4. close": "185.00"}
        }));
        assert_eq!(transform_series(&input), transform_series(&input));
    }

    #[test]
    fn test_non_canonical_date_keys_are_dropped() {
        let body = json!({
            "2024-05-07": {"4. close": "100.00"},
            "2024-5-7": {"4. close": "999.00"},
            "2024-05-08": {"4. close": "101.00"}
        });

        let expected = vec![dec!(100.00), dec!(101.00)];
        for _ in 0..50 {
            let series = transform_series(&response(body.clone()));
            let closes: Vec<Decimal> = series.points().iter().map(|p| p.closing_price).collect();
            assert_eq!(closes, expected);
        }
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(parse_date_key("2024-05-07"), Some(day(2024, 5, 7)));
        assert_eq!(parse_date_key("2024-5-7"), None);
        assert_eq!(parse_date_key("2024-02-30"), None);
        assert_eq!(parse_date_key(" 2024-05-07"), None);
    }

    #[test]
    fn test_from_points_dedups_dates() {
        let series = PriceSeries::from_points(vec![
            PricePoint { date: day(2024, 1, 2), closing_price: dec!(2) },
            PricePoint { date: day(2024, 1, 1), closing_price: dec!(1) },
            PricePoint { date: day(2024, 1, 2), closing_price: dec!(3) },
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().closing_price, dec!(2));
    }
}
