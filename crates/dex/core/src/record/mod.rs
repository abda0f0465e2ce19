//! Catalog records and the immutable store that owns them.
//!
//! # Model
//!
//! - [`Field`]: the closed set of catalog columns, in display order
//! - [`Record`]: one row, values kept as catalog text
//! - [`BaseStats`]: typed view of the six base stats, source of every total
//! - [`RecordStore`]: the loaded catalog, indexed by [`RecordKey`]
//!
//! Invariant: for every record built from [`BaseStats`], `BST` equals the sum
//! of the six stats and `Head Stat Total + Body Stat Total == BST`.

mod entry;
mod field;
mod stats;
mod store;

pub use entry::{FALSE, Record, RecordKey, TRUE, parse_number};
pub use field::{Field, FieldKind};
pub use stats::{BaseStats, StatError};
pub use store::{RecordStore, StoreError};
