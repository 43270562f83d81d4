//! Name handling for employee records
//!
//! - `normalize`: folds free-form display text to an ASCII-safe form
//! - `HonorificPolicy`: the stop-list of titles removed before splitting names

mod normalize;
mod policy;

pub use normalize::{map_umlauts, normalize, UMLAUT_MAP};
pub use policy::{HonorificPolicy, DEFAULT_HONORIFICS};
