//! State tracking for the crawl frontier

mod page_state;

pub use page_state::PageState;
