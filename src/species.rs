pub mod catalog;
pub mod label;

pub use catalog::ClassCatalog;
pub use label::{ClassLabel, Species};
