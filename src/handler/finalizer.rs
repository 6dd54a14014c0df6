use hashbrown::HashMap;
use indexmap::IndexSet;
use log::{
    debug,
    info,
};

use crate::data_structs::Item;
use crate::handler::state::ConversionState;
use crate::handler::{
    classes,
    fields,
};

pub const DUPLICATE_SYMBOL_MARKER: &str = "-duplicate-symbol-";
pub const DUPLICATE_ORGANISM_DB_ID_MARKER: &str = "-duplicate-organismDbId-";

/// Second pass over the genes buffered during record processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredFinalizer;

impl DeferredFinalizer {
    /// Resolves duplicate symbols and organismDbIds, reclassifies
    /// pseudogene parents and returns the buffered genes followed by every
    /// organism stub.
    ///
    /// The final items buffer is drained.
    pub fn finalize(
        &self,
        state: &mut ConversionState,
    ) -> Vec<Item> {
        let mut genes = std::mem::take(&mut state.final_items);

        let symbol_duplicates = duplicated_indices(&genes, fields::SYMBOL);
        let organism_db_id_duplicates =
            duplicated_indices(&genes, fields::ORGANISM_DB_ID);

        rename_duplicates(
            &mut genes,
            &symbol_duplicates,
            fields::SYMBOL,
            DUPLICATE_SYMBOL_MARKER,
        );
        rename_duplicates(
            &mut genes,
            &organism_db_id_duplicates,
            fields::ORGANISM_DB_ID,
            DUPLICATE_ORGANISM_DB_ID_MARKER,
        );

        // Reads organismDbId after renaming.
        let mut pseudogenes = 0;
        for gene in genes.iter_mut() {
            let is_pseudogene = gene
                .attribute(fields::ORGANISM_DB_ID)
                .is_some_and(|id| state.pseudogene_ids.contains(id));
            if is_pseudogene {
                gene.reclassify(classes::PSEUDOGENE);
                pseudogenes += 1;
            }
        }

        info!(
            "Finalized {} genes: {} duplicate symbols, {} duplicate \
             organismDbIds, {} pseudogenes, {} organism stubs",
            genes.len(),
            symbol_duplicates.len(),
            organism_db_id_duplicates.len(),
            pseudogenes,
            state.organisms.len()
        );

        genes
            .into_iter()
            .chain(state.organisms.stubs().cloned())
            .collect()
    }
}

/// Positions of items sharing a value of `attribute` with another item, in
/// the order the collisions were first seen.
fn duplicated_indices(
    items: &[Item],
    attribute: &str,
) -> IndexSet<usize> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = IndexSet::new();

    for (idx, item) in items.iter().enumerate() {
        let Some(value) = item.attribute(attribute) else {
            continue;
        };
        match first_seen.get(value) {
            Some(&other) => {
                duplicates.insert(other);
                duplicates.insert(idx);
            },
            None => {
                first_seen.insert(value, idx);
            },
        }
    }
    duplicates
}

/// Appends `<marker><n>` to the attribute of every duplicate, n counting
/// from 1 across all duplicates.
fn rename_duplicates(
    items: &mut [Item],
    duplicates: &IndexSet<usize>,
    attribute: &str,
    marker: &str,
) {
    for (n, &idx) in duplicates.iter().enumerate() {
        let item = &mut items[idx];
        if let Some(value) = item.attribute(attribute) {
            let renamed = format!("{}{}{}", value, marker, n + 1);
            debug!(
                "Renaming {} {} of {} to {}",
                attribute,
                value,
                item.identifier(),
                renamed
            );
            item.set_attribute(attribute, renamed);
        }
    }
}
