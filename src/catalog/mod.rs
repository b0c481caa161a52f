pub mod channel_catalog;
pub use channel_catalog::*;

pub mod value_rule;
pub use value_rule::*;

pub mod settings;
pub use settings::*;
