pub mod carousel;
pub mod content;
pub mod listing;
pub mod page_state;
pub mod search;

pub use listing::{Listing, LISTINGS};
pub use page_state::PageState;
