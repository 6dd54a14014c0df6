use anyhow::Context;
use hashbrown::HashSet;
use log::{
    debug,
    trace,
    warn,
};

use crate::data_structs::enums::{
    ReferenceKind,
    SynonymType,
};
use crate::data_structs::typedef::ItemId;
use crate::data_structs::{
    Gff3Record,
    Item,
    ItemFactory,
    NAME_ATTRIBUTE,
    SECONDARY_SYNONYM_ATTRIBUTE,
    SYNONYM_ATTRIBUTE,
};
use crate::handler::references::ReferenceMap;
use crate::handler::state::ConversionState;
use crate::handler::synonyms::SynonymCollector;
use crate::handler::syntenic::SyntenicRegionBuilder;
use crate::handler::{
    classes,
    fields,
};

/// Record IDs starting with this are FlyBase accessions, not display ids.
pub const ORGANISM_ACCESSION_PREFIX: &str = "FB";
/// Accession prefix of transposable element insertions.
pub const TRANSPOSON_ACCESSION_PREFIX: &str = "FBti";
/// Database name of FlyBase cross-references.
pub const FLYBASE_DBXREF_DB: &str = "FlyBase";

/// Class renames applied in order before anything else reads the class.
const CLASS_RENAMES: [(&str, &str); 2] = [
    (classes::REGULATORY_REGION, classes::TF_MODULE),
    // CDS records became proteins in FlyBase 4.3
    (classes::PROTEIN, classes::TRANSLATION),
];

/// Classes whose `identifier` is taken from the record alias: downstream
/// tools know them by their annotation id (CG3702-PA), not the accession.
const ALIAS_IDENTIFIER_CLASSES: [&str; 2] =
    [classes::TRANSLATION, classes::MRNA];

/// Result of processing one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOutput {
    /// The feature itself, or `None` when it was deferred to finalize.
    pub feature: Option<Item>,
    /// Synonyms and other items derived from the record, in creation order.
    pub items:   Vec<Item>,
}

impl ProcessOutput {
    pub fn is_deferred(&self) -> bool { self.feature.is_none() }

    /// All emitted items, the feature first.
    pub fn into_items(self) -> Vec<Item> {
        self.feature
            .into_iter()
            .chain(self.items)
            .collect()
    }
}

/// Accessions of `FlyBase:<prefix>...` cross-references, in input order.
pub fn parse_flybase_ids<'a>(
    dbxrefs: &'a [String],
    prefix: &str,
) -> Vec<&'a str> {
    let pattern = format!("{}:{}", FLYBASE_DBXREF_DB, prefix);
    dbxrefs
        .iter()
        .filter(|dbxref| dbxref.starts_with(&pattern))
        .filter_map(|dbxref| {
            dbxref
                .split_once(':')
                .map(|(_, accession)| accession)
        })
        .collect()
}

/// Per-record pass of the FlyBase conversion.
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    factory:    ItemFactory,
    synonyms:   SynonymCollector,
    syntenic:   SyntenicRegionBuilder,
    references: &'static ReferenceMap,
}

impl RecordProcessor {
    pub fn new(
        factory: ItemFactory,
        data_source: ItemId,
    ) -> Self {
        Self {
            factory,
            synonyms: SynonymCollector::new(data_source),
            syntenic: SyntenicRegionBuilder,
            references: ReferenceMap::flybase(),
        }
    }

    pub fn factory(&self) -> &ItemFactory { &self.factory }

    /// Converts one record.
    ///
    /// Genes are moved into the state's final items and come back with
    /// `feature == None`. Fails only on syntenic regions with a missing or
    /// unsupported target organism.
    pub fn process(
        &mut self,
        state: &mut ConversionState,
        record: &Gff3Record,
    ) -> anyhow::Result<ProcessOutput> {
        let feature = self.make_feature(record);
        self.process_feature(state, feature, record)
    }

    /// Like [`RecordProcessor::process`], for a feature the caller already
    /// built from `record`.
    pub fn process_feature(
        &mut self,
        state: &mut ConversionState,
        mut feature: Item,
        record: &Gff3Record,
    ) -> anyhow::Result<ProcessOutput> {
        trace!("Processing {} ({})", record.id, record.class_fragment());
        let mut items = Vec::new();

        if !feature.has_attribute(fields::CURATED) {
            feature.set_attribute(fields::CURATED, "true");
        }

        let mut class = feature.class_fragment().to_string();
        for (from, to) in CLASS_RENAMES {
            if class == from {
                feature.reclassify(to);
                class = to.to_string();
            }
        }

        if record.id.starts_with(ORGANISM_ACCESSION_PREFIX) {
            feature.set_attribute(fields::ORGANISM_DB_ID, record.id.as_str());
            feature.remove_attribute(fields::IDENTIFIER);
        }

        // FlyBase models a pseudogene as a gene with a pseudogene child; the
        // child becomes a transcript and the parent gene is fixed in finalize.
        if class == classes::PSEUDOGENE {
            feature.remove_attribute(fields::SYMBOL);
            feature.reclassify(classes::TRANSCRIPT);
            class = classes::TRANSCRIPT.to_string();
            state
                .pseudogene_ids
                .extend(record.parents.iter().cloned());
            debug!(
                "Pseudogene {} marks parents {:?}",
                record.id, record.parents
            );
        }

        if ALIAS_IDENTIFIER_CLASSES.contains(&class.as_str()) {
            if let Some(alias) = record.alias() {
                feature.set_attribute(fields::IDENTIFIER, alias);
            }
        }

        if class == classes::TRANSPOSABLE_ELEMENT {
            for accession in
                parse_flybase_ids(record.dbxrefs(), TRANSPOSON_ACCESSION_PREFIX)
            {
                if !feature.has_attribute(fields::ORGANISM_DB_ID) {
                    feature.set_attribute(fields::ORGANISM_DB_ID, accession);
                }
                items.push(self.synonyms.create(
                    &mut self.factory,
                    &feature,
                    SynonymType::Identifier,
                    accession,
                ));
            }
        }

        let mut known: HashSet<String> = [
            fields::IDENTIFIER,
            fields::SYMBOL,
            fields::ORGANISM_DB_ID,
        ]
        .into_iter()
        .filter_map(|name| feature.attribute(name))
        .chain(
            items
                .iter()
                .filter(|item| item.class_fragment() == classes::SYNONYM)
                .filter_map(|item| item.attribute(fields::VALUE)),
        )
        .map(str::to_string)
        .collect();

        if class == classes::SYNTENIC_REGION {
            let target = self
                .syntenic
                .build(
                    &mut self.factory,
                    &mut state.organisms,
                    &mut feature,
                    record,
                )
                .with_context(|| {
                    format!("Failed to process syntenic region {}", record.id)
                })?;
            items.push(target);
        }

        let candidates = record
            .attribute_values(SECONDARY_SYNONYM_ATTRIBUTE)
            .iter()
            .chain(record.attribute_values(SYNONYM_ATTRIBUTE));
        for candidate in candidates {
            if known.insert(candidate.clone()) {
                items.push(self.synonyms.create(
                    &mut self.factory,
                    &feature,
                    SynonymType::classify(candidate),
                    candidate,
                ));
            }
        }

        if class == classes::GENE {
            trace!("Deferring gene {}", feature.identifier());
            state.defer(feature);
            return Ok(ProcessOutput {
                feature: None,
                items,
            });
        }

        self.wire_parents(&mut feature, &class, record);
        Ok(ProcessOutput {
            feature: Some(feature),
            items,
        })
    }

    /// Creates the feature item for a record: `identifier` from the record
    /// ID and `symbol` from its first `Name`.
    pub fn make_feature(
        &mut self,
        record: &Gff3Record,
    ) -> Item {
        let class = record.class_fragment();
        if record.id.is_empty() {
            return self.factory.make_item(class);
        }

        let mut feature = self.factory.make_feature(&record.id, class);
        feature.set_attribute(fields::IDENTIFIER, record.id.as_str());
        if let Some(name) = record.first_attribute(NAME_ATTRIBUTE) {
            feature.set_attribute(fields::SYMBOL, name);
        }
        feature
    }

    /// Points the feature's parent reference at its parents' identifiers.
    ///
    /// A parent not seen yet gets its identifier reserved. The reference
    /// dangles if no record with that ID ever follows.
    fn wire_parents(
        &mut self,
        feature: &mut Item,
        class: &str,
        record: &Gff3Record,
    ) {
        let Some(parent_ref) = self.references.get(class).copied() else {
            return;
        };
        if record.parents.is_empty() {
            return;
        }

        let parents: Vec<ItemId> = record
            .parents
            .iter()
            .map(|parent| {
                if self.factory.get(parent).is_none() {
                    debug!(
                        "Reserving identifier for parent {} of {}",
                        parent, record.id
                    );
                }
                self.factory.resolve(parent)
            })
            .collect();
        match parent_ref.kind {
            ReferenceKind::Single => {
                if parents.len() > 1 {
                    warn!(
                        "{} {} has {} parents for reference {}, using {}",
                        class,
                        record.id,
                        parents.len(),
                        parent_ref.name,
                        record.parents[0]
                    );
                }
                feature.set_reference(parent_ref.name, parents[0].clone());
            },
            ReferenceKind::Collection => {
                feature.set_reference(parent_ref.name, parents);
            },
        }
    }
}
