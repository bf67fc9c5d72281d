//! Pure list engines shared by every page: filtering and pagination.

pub mod filter;
pub mod pagination;

pub use filter::{category_options, filter, FilterState, Selector};
pub use pagination::{paginate, total_pages, Page, Pager, DEFAULT_PAGE_SIZE};
