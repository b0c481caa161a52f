pub mod parser;

pub mod filter;
pub use filter::{decompose, Channel, FilterError, FilterGroup, Predicate, WhereFilters};

pub mod catalog;
pub use catalog::{Catalog, Settings, SettingsError, ValueRule};

pub mod request;
pub use request::{ParamError, Params, QueryParams, TimeRange};

pub mod report;
