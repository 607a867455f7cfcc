// crates/eurostat-core/src/model/mod.rs
pub mod table;
pub mod value;
#[cfg(feature = "geodata")]
pub mod feature;

pub use table::{DatasetTable, Layout};
pub use value::Value;
#[cfg(feature = "geodata")]
pub use feature::{Attribute, Feature, FeatureCollection};
