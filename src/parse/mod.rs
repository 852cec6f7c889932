mod error;
mod national_site;
pub use error::Error;
mod remove_excess_whitespace;
mod state_directory;
mod state_listing;
mod static_selector;
mod text_from_selection;

pub use national_site::NationalSite;
pub use remove_excess_whitespace::normalize_state_name;
pub use state_directory::StateDirectory;
pub use state_listing::site_links;
