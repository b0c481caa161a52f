pub mod channel;
pub use channel::*;

pub mod predicate;
pub use predicate::*;

pub mod filter_error;
pub use filter_error::*;

pub mod enriched;
pub use enriched::*;

pub mod separability;
pub use separability::*;

pub mod groups;
pub use groups::*;

pub mod tautology;
pub use tautology::*;

pub mod decompose;
pub use decompose::*;
