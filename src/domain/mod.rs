mod attribute;

pub use attribute::{LocalAttribute, Mapping};
