use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use thiserror::Error;

use super::criteria::GuestCount;
use crate::utils::time::short_label;

pub const SEARCH_ROUTE: &str = "/search";

pub const LOCATION_PARAM: &str = "location";
pub const START_DATE_PARAM: &str = "startDate";
pub const END_DATE_PARAM: &str = "endDate";
pub const GUESTS_PARAM: &str = "numberOfGuests";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("missing query parameter `{0}`")]
    Missing(&'static str),
    #[error("query parameter `{param}` is not a date: {value}")]
    InvalidDate { param: &'static str, value: String },
}

/// Search criteria as carried in the `/search` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_guests: String,
}

impl SearchQuery {
    /// Query parameters in wire order with dates as ISO-8601 timestamps.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (LOCATION_PARAM, self.location.clone()),
            (START_DATE_PARAM, iso_timestamp(self.start_date)),
            (END_DATE_PARAM, iso_timestamp(self.end_date)),
            (GUESTS_PARAM, self.number_of_guests.clone()),
        ]
    }

    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Rebuilds a query from already-decoded parameter values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SearchQueryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |param: &'static str| lookup(param).ok_or(SearchQueryError::Missing(param));
        let date = |param: &'static str| {
            let value = required(param)?;
            parse_timestamp(&value).ok_or(SearchQueryError::InvalidDate { param, value })
        };

        Ok(Self {
            location: required(LOCATION_PARAM)?,
            start_date: date(START_DATE_PARAM)?,
            end_date: date(END_DATE_PARAM)?,
            number_of_guests: required(GUESTS_PARAM)?,
        })
    }

    pub fn guests(&self) -> GuestCount {
        GuestCount::new(self.number_of_guests.clone())
    }

    /// Header placeholder summarising the search, e.g. `Paris | 14 Oct - 16 Oct | 2 guests`.
    pub fn placeholder(&self) -> String {
        format!(
            "{} | {} - {} | {}",
            self.location,
            short_label(self.start_date),
            short_label(self.end_date),
            self.guests().label()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: &'static str,
    pub query: SearchQuery,
}

impl NavigationRequest {
    pub fn search(query: SearchQuery) -> Self {
        Self {
            path: SEARCH_ROUTE,
            query,
        }
    }

    pub fn href(&self) -> String {
        format!("{}?{}", self.path, self.query.to_query_string())
    }
}

/// UTC midnight of `date`, e.g. `2026-10-14T00:00:00.000Z`.
pub fn iso_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339 timestamps as well as bare `YYYY-MM-DD` dates.
pub fn parse_timestamp(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Decodes a raw `a=b&c=d` query string the way the router hands values over.
    fn from_query_string(raw: &str) -> Result<SearchQuery, SearchQueryError> {
        let pairs: Vec<(String, String)> = raw
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        SearchQuery::from_lookup(|param| {
            pairs
                .iter()
                .find(|(key, _)| key == param)
                .map(|(_, value)| value.clone())
        })
    }

    fn decode_component(raw: &str) -> String {
        urlencoding::decode(raw)
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| raw.to_string())
    }

    fn sample() -> SearchQuery {
        SearchQuery {
            location: "Paris".to_string(),
            start_date: day(2026, 10, 14),
            end_date: day(2026, 10, 16),
            number_of_guests: "2".to_string(),
        }
    }

    #[test]
    fn iso_timestamp_is_utc_midnight() {
        assert_eq!(iso_timestamp(day(2026, 1, 5)), "2026-01-05T00:00:00.000Z");
    }

    #[test]
    fn href_uses_search_route_and_encodes_values() {
        let request = NavigationRequest::search(SearchQuery {
            location: "New York & Co".to_string(),
            ..sample()
        });
        assert_eq!(
            request.href(),
            "/search?location=New%20York%20%26%20Co\
             &startDate=2026-10-14T00%3A00%3A00.000Z\
             &endDate=2026-10-16T00%3A00%3A00.000Z\
             &numberOfGuests=2"
        );
    }

    #[test]
    fn query_string_decodes_back() {
        let query = SearchQuery {
            location: "São Paulo & beyond".to_string(),
            number_of_guests: "-1".to_string(),
            ..sample()
        };
        let request = NavigationRequest::search(query.clone());
        let href = request.href();
        let (_, raw) = href.split_once('?').unwrap();
        assert_eq!(from_query_string(raw), Ok(query));
    }

    #[test]
    fn lookup_reports_missing_and_invalid_params() {
        let err = from_query_string("location=Oslo").unwrap_err();
        assert_eq!(err, SearchQueryError::Missing(START_DATE_PARAM));

        let err = from_query_string(
            "location=Oslo&startDate=soon&endDate=2026-10-16&numberOfGuests=1",
        )
        .unwrap_err();
        assert_eq!(
            err,
            SearchQueryError::InvalidDate {
                param: START_DATE_PARAM,
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn timestamps_with_offsets_map_to_utc_date() {
        assert_eq!(
            parse_timestamp("2026-10-14T23:30:00-02:00"),
            Some(day(2026, 10, 15))
        );
        assert_eq!(parse_timestamp("2026-10-14"), Some(day(2026, 10, 14)));
        assert_eq!(parse_timestamp("14/10/2026"), None);
    }

    #[test]
    fn placeholder_summary() {
        assert_eq!(sample().placeholder(), "Paris | 14 Oct - 16 Oct | 2 guests");
        let odd = SearchQuery {
            number_of_guests: "2.5".to_string(),
            ..sample()
        };
        assert_eq!(odd.placeholder(), "Paris | 14 Oct - 16 Oct | Guests not specified");
    }
}
