use crate::data::pet::CreatedPet;

/// Ordered list of records created during one test case, used purely for
/// cross-assertion bookkeeping. Cleared at the start of each case; the
/// target application stays the source of truth for the records themselves.
#[derive(Debug, Default)]
pub struct CreatedRecords {
    records: Vec<CreatedPet>,
}

impl CreatedRecords {
    pub fn new() -> Self {
        CreatedRecords {
            records: Vec::new(),
        }
    }

    /// Reset at the start of a case.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn record(&mut self, pet: CreatedPet) {
        self.records.push(pet);
    }

    /// The most recently created record.
    pub fn last(&self) -> Option<&CreatedPet> {
        self.records.last()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatedPet> {
        self.records.iter()
    }
}
