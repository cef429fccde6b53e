use crate::domain::Mapping;

/// Receiver for mappings produced by a successful submission.
///
/// Closures taking a [`Mapping`] and `Vec<Mapping>` both qualify, so callers
/// can either react to each submission or simply collect them.
pub trait MappingSink {
    fn accept(&mut self, mapping: Mapping);
}

impl<F> MappingSink for F
where
    F: FnMut(Mapping),
{
    fn accept(&mut self, mapping: Mapping) {
        self(mapping)
    }
}

impl MappingSink for Vec<Mapping> {
    fn accept(&mut self, mapping: Mapping) {
        self.push(mapping);
    }
}
