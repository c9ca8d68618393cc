// portfolio domain types
//
// everything the webapp needs to know about the site that is not markup lives here,
// so that the filtering and navigation rules can be exercised without a browser
pub mod carousel;
pub mod category;
pub mod config;
pub mod feedback;
pub mod motion;
pub mod profile;
pub mod project;
pub mod theme;
