use indexmap::IndexMap;
use log::debug;

use crate::data_structs::{
    Item,
    ItemFactory,
};
use crate::handler::{
    classes,
    fields,
};

/// Organism stubs for organisms other than the one being loaded, one per
/// taxon id.
///
/// Stubs are kept in creation order so that the finalize batch is stable.
#[derive(Debug, Clone, Default)]
pub struct OrganismRegistry {
    stubs: IndexMap<String, Item>,
}

impl OrganismRegistry {
    pub fn new() -> Self { Self::default() }

    /// Returns the stub for `taxon_id`, creating it on first use.
    pub fn get_or_create(
        &mut self,
        factory: &mut ItemFactory,
        taxon_id: &str,
    ) -> &Item {
        self.stubs
            .entry(taxon_id.to_string())
            .or_insert_with(|| {
                let mut organism = factory.make_item(classes::ORGANISM);
                organism.set_attribute(fields::TAXON_ID, taxon_id);
                debug!(
                    "Created organism stub {} for taxon {}",
                    organism.identifier(),
                    taxon_id
                );
                organism
            })
    }

    pub fn get(
        &self,
        taxon_id: &str,
    ) -> Option<&Item> {
        self.stubs.get(taxon_id)
    }

    pub fn stubs(&self) -> impl Iterator<Item = &Item> { self.stubs.values() }

    pub fn len(&self) -> usize { self.stubs.len() }

    pub fn is_empty(&self) -> bool { self.stubs.is_empty() }
}
