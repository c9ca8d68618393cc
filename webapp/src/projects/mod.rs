pub mod card;

mod detail;
pub use detail::ProjectDetail;

mod search;
pub use search::Projects;
