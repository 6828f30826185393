//! Query Engine: stateless reads over a caller-owned `Session`.
//!
//! Every operation either returns its rows (possibly none) or a
//! `DatabaseError`; an empty result is not an error.

mod aggregation;
mod analysis;
mod lookup;
mod projection;
mod search;
mod selection;

pub use aggregation::*;
pub use analysis::*;
pub use lookup::*;
pub use projection::*;
pub use search::*;
pub use selection::*;
