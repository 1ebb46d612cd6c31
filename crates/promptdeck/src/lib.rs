pub mod card;
pub mod catalog;
pub mod feedback;
pub mod kind;
pub mod pagination;
pub mod query;

pub use card::{CardMetadata, ResourceCard, ResourceRecord, project_records};
pub use catalog::{FacetSpec, FacetValues, FilterGroup, FilterOption, build_filter_groups, slugify};
pub use feedback::Feedback;
pub use kind::ResourceKind;
pub use pagination::Pager;
pub use query::QueryState;
