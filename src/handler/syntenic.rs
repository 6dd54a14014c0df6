use std::str::FromStr;

use anyhow::anyhow;
use log::trace;

use crate::data_structs::enums::TargetSpecies;
use crate::data_structs::{
    Gff3Record,
    Item,
    ItemFactory,
    TO_SPECIES_ATTRIBUTE,
};
use crate::handler::organisms::OrganismRegistry;
use crate::handler::{
    classes,
    fields,
};

/// Creates the other-organism half of a syntenic region pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntenicRegionBuilder;

impl SyntenicRegionBuilder {
    /// Links `feature` to a new region in the organism named by the
    /// record's `to_species` attribute and returns that region.
    ///
    /// Both regions carry the record ID as `identifier`; they differ only in
    /// organism. Fails when the target organism is missing or unknown.
    pub fn build(
        &self,
        factory: &mut ItemFactory,
        organisms: &mut OrganismRegistry,
        feature: &mut Item,
        record: &Gff3Record,
    ) -> anyhow::Result<Item> {
        let abbreviation = record
            .first_attribute(TO_SPECIES_ATTRIBUTE)
            .ok_or_else(|| {
                anyhow!(
                    "syntenic region {} has no {} attribute",
                    record.id,
                    TO_SPECIES_ATTRIBUTE
                )
            })?;
        let species = TargetSpecies::from_str(abbreviation)?;

        let organism = organisms
            .get_or_create(factory, species.taxon_id())
            .identifier()
            .clone();
        feature.set_reference(fields::TARGET_ORGANISM, organism.clone());

        let mut target = factory.make_item(classes::SYNTENIC_REGION);
        target.set_reference(fields::ORGANISM, organism);
        target.set_attribute(fields::IDENTIFIER, record.id.as_str());

        feature.set_reference(
            fields::TARGET_SYNTENIC_REGION,
            target.identifier().clone(),
        );
        target.set_reference(
            fields::TARGET_SYNTENIC_REGION,
            feature.identifier().clone(),
        );
        trace!(
            "Paired syntenic region {} with {} in {}",
            feature.identifier(),
            target.identifier(),
            species
        );

        Ok(target)
    }
}
