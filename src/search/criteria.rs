use chrono::NaiveDate;

use super::query::{NavigationRequest, SearchQuery};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of nights between the bounds. Inverted ranges count as zero.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }
}

/// Guest count exactly as typed into the numeric input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GuestCount(String);

impl GuestCount {
    /// Minimum hinted to the input element. Not enforced.
    pub const ADVISORY_MIN: u32 = 1;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parsed(&self) -> Option<u32> {
        self.0.trim().parse().ok()
    }

    /// Display text such as `2 guests`. Input that is not a whole number of
    /// guests is shown as unspecified rather than echoed.
    pub fn label(&self) -> String {
        match self.parsed() {
            Some(1) => "1 guest".to_string(),
            Some(n) if n >= Self::ADVISORY_MIN => format!("{n} guests"),
            _ => "Guests not specified".to_string(),
        }
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::ADVISORY_MIN.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query_text: String,
    pub date_range: DateRange,
    pub guest_count: GuestCount,
}

impl SearchCriteria {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            query_text: String::new(),
            date_range: DateRange::single_day(today),
            guest_count: GuestCount::default(),
        }
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            location: self.query_text.clone(),
            start_date: self.date_range.start,
            end_date: self.date_range.end,
            number_of_guests: self.guest_count.as_str().to_string(),
        }
    }
}

/// Receives the navigation requests issued by a search submission.
pub trait Navigate {
    fn navigate(&mut self, request: NavigationRequest);
}

impl<F> Navigate for F
where
    F: FnMut(NavigationRequest),
{
    fn navigate(&mut self, request: NavigationRequest) {
        self(request)
    }
}

/// State behind one search header instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHeaderState {
    criteria: SearchCriteria,
    min_date: NaiveDate,
}

impl SearchHeaderState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            criteria: SearchCriteria::new(today),
            min_date: today,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn query_text(&self) -> &str {
        &self.criteria.query_text
    }

    pub fn date_range(&self) -> DateRange {
        self.criteria.date_range
    }

    pub fn guest_count(&self) -> &GuestCount {
        &self.criteria.guest_count
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn picker_visible(&self) -> bool {
        !self.criteria.query_text.is_empty()
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.criteria.query_text = text.into();
    }

    /// Stores the picked range. Bounds earlier than the minimum date are
    /// raised to it; the order of the bounds is kept as given.
    pub fn select_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.criteria.date_range = DateRange::new(start.max(self.min_date), end.max(self.min_date));
    }

    pub fn set_guest_count(&mut self, raw: impl Into<String>) {
        self.criteria.guest_count = GuestCount::new(raw);
    }

    pub fn submit_search(&self, navigator: &mut impl Navigate) {
        let request = NavigationRequest::search(self.criteria.to_query());
        tracing::debug!(href = %request.href(), "submitting search");
        navigator.navigate(request);
    }

    pub fn cancel(&mut self) {
        self.criteria.query_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::SEARCH_ROUTE;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn submitted(state: &SearchHeaderState) -> Vec<NavigationRequest> {
        let mut requests = Vec::new();
        state.submit_search(&mut |request: NavigationRequest| requests.push(request));
        requests
    }

    #[test]
    fn initial_state() {
        let today = day(2026, 10, 14);
        let state = SearchHeaderState::new(today);
        assert_eq!(state.query_text(), "");
        assert_eq!(state.date_range(), DateRange::single_day(today));
        assert_eq!(state.guest_count().as_str(), "1");
        assert!(!state.picker_visible());
    }

    #[test]
    fn picker_visibility_follows_query_text() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        for text in ["P", "Pa", "", "Paris", " ", ""] {
            state.set_query_text(text);
            assert_eq!(state.picker_visible(), !text.is_empty(), "text {text:?}");
        }
    }

    #[test]
    fn future_range_is_stored_verbatim() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        let range = DateRange::new(day(2026, 11, 2), day(2026, 11, 5));
        state.select_date_range(range.start, range.end);
        assert_eq!(state.date_range(), range);
        state.select_date_range(range.start, range.end);
        assert_eq!(state.date_range(), range);
    }

    #[test]
    fn past_bounds_are_raised_to_min_date() {
        let today = day(2026, 10, 14);
        let mut state = SearchHeaderState::new(today);
        state.select_date_range(day(2026, 10, 1), day(2026, 10, 20));
        assert_eq!(state.date_range(), DateRange::new(today, day(2026, 10, 20)));
    }

    #[test]
    fn inverted_range_passes_through() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        state.select_date_range(day(2026, 12, 10), day(2026, 12, 1));
        assert_eq!(
            state.date_range(),
            DateRange::new(day(2026, 12, 10), day(2026, 12, 1))
        );
        assert_eq!(state.date_range().nights(), 0);
    }

    #[test]
    fn guest_count_is_kept_as_entered() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        for raw in ["0", "-3", "2.5", ""] {
            state.set_guest_count(raw);
            assert_eq!(state.guest_count().as_str(), raw);
        }
        state.set_guest_count(" 4 ");
        assert_eq!(state.guest_count().parsed(), Some(4));
        state.set_guest_count("2.5");
        assert_eq!(state.guest_count().parsed(), None);
    }

    #[test]
    fn guest_label_hides_unusable_input() {
        assert_eq!(GuestCount::new("1").label(), "1 guest");
        assert_eq!(GuestCount::new(" 3 ").label(), "3 guests");
        for raw in ["0", "-3", "2.5", "", "many"] {
            assert_eq!(GuestCount::new(raw).label(), "Guests not specified", "raw {raw:?}");
        }
    }

    #[test]
    fn cancel_clears_only_query_text() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        state.set_query_text("Lisbon");
        state.select_date_range(day(2026, 10, 20), day(2026, 10, 22));
        state.set_guest_count("3");
        state.cancel();
        assert_eq!(state.query_text(), "");
        assert!(!state.picker_visible());
        assert_eq!(
            state.date_range(),
            DateRange::new(day(2026, 10, 20), day(2026, 10, 22))
        );
        assert_eq!(state.guest_count().as_str(), "3");

        state.set_query_text("");
        state.set_query_text("");
        assert_eq!(state.query_text(), "");
    }

    #[test]
    fn submit_issues_one_request_with_current_state() {
        let mut state = SearchHeaderState::new(day(2026, 10, 14));
        state.set_guest_count("2");
        state.select_date_range(day(2026, 10, 18), day(2026, 10, 21));
        state.set_query_text("Rome");

        let requests = submitted(&state);
        assert_eq!(requests.len(), 1);
        let query = &requests[0].query;
        assert_eq!(query.location, "Rome");
        assert_eq!(query.start_date, day(2026, 10, 18));
        assert_eq!(query.end_date, day(2026, 10, 21));
        assert_eq!(query.number_of_guests, "2");
    }

    #[test]
    fn search_scenario() {
        let today = day(2026, 10, 14);
        let mut state = SearchHeaderState::new(today);
        assert_eq!(state.query_text(), "");
        assert_eq!(state.guest_count().as_str(), "1");
        assert_eq!(state.date_range(), DateRange::single_day(today));

        state.set_query_text("Paris");
        assert!(state.picker_visible());

        let (d1, d2) = (day(2026, 11, 3), day(2026, 11, 9));
        state.select_date_range(d1, d2);
        assert_eq!(state.date_range(), DateRange::new(d1, d2));

        let requests = submitted(&state);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, SEARCH_ROUTE);
        assert_eq!(
            requests[0].query.pairs(),
            vec![
                ("location", "Paris".to_string()),
                ("startDate", "2026-11-03T00:00:00.000Z".to_string()),
                ("endDate", "2026-11-09T00:00:00.000Z".to_string()),
                ("numberOfGuests", "1".to_string()),
            ]
        );
    }
}
