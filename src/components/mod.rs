pub mod date_range_picker;
pub mod icons;
pub mod listing_card;
pub mod media_query;
pub mod search_header;

pub use date_range_picker::DateRangePicker;
pub use listing_card::{ListingCard, ListingSummaryCard};
pub use media_query::use_media_query;
pub use search_header::SearchHeader;
