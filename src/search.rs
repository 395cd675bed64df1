pub mod criteria;
pub mod layout;
pub mod query;

pub use criteria::{DateRange, GuestCount, Navigate, SearchCriteria, SearchHeaderState};
pub use layout::{Breakpoint, PickerVariant, select_variant};
pub use query::{NavigationRequest, SEARCH_ROUTE, SearchQuery, SearchQueryError};
