use hashbrown::HashSet;

use crate::data_structs::Item;
use crate::handler::organisms::OrganismRegistry;

/// Mutable state of one conversion run, shared by the per-record pass and
/// the finalize pass.
#[derive(Debug, Clone, Default)]
pub struct ConversionState {
    /// Genes held back until the whole stream has been seen, in input order.
    pub(crate) final_items:    Vec<Item>,
    /// Parent IDs of pseudogene features.
    pub(crate) pseudogene_ids: HashSet<String>,
    pub(crate) organisms:      OrganismRegistry,
}

impl ConversionState {
    pub fn new() -> Self { Self::default() }

    pub fn final_items(&self) -> &[Item] { &self.final_items }

    pub fn pseudogene_ids(&self) -> &HashSet<String> { &self.pseudogene_ids }

    pub fn organisms(&self) -> &OrganismRegistry { &self.organisms }

    pub(crate) fn defer(
        &mut self,
        item: Item,
    ) {
        self.final_items.push(item);
    }

    /// Drops buffered items without emitting them.
    pub fn clear_final_items(&mut self) { self.final_items.clear(); }
}
