//! FlyBase-specific conversion of GFF3 records into target-model items.
//!
//! Conversion runs in two phases. [`RecordProcessor::process`] handles one
//! record at a time and emits its feature and derived items right away,
//! except for genes: those are buffered in the [`ConversionState`]. Once the
//! input is exhausted, [`DeferredFinalizer::finalize`] resolves duplicate
//! symbols and organismDbIds among the buffered genes, turns pseudogene
//! parents into pseudogenes and emits the genes together with the organism
//! stubs created along the way.
//!
//! [`FlyBaseHandler`] pairs both phases with one state and is the usual
//! entry point:
//!
//! ```
//! use flybase_gff::prelude::*;
//!
//! let mut handler = FlyBaseHandler::new(HandlerConfig::default());
//! let pseudogene = Gff3Record::new("FBtr0001", "Pseudogene")
//!     .with_parents(vec!["FBgn0001".into()]);
//! let gene = Gff3Record::new("FBgn0001", "Gene").with_name("aberrant");
//!
//! handler.process(&pseudogene).unwrap();
//! assert!(handler.process(&gene).unwrap().is_deferred());
//!
//! let finals = handler.finalize();
//! assert_eq!(finals[0].class_fragment(), "Pseudogene");
//! ```

mod config;
mod finalizer;
mod organisms;
mod processor;
mod references;
mod state;
mod synonyms;
mod syntenic;

pub use config::{
    HandlerConfig,
    DEFAULT_DATA_SOURCE,
    DEFAULT_ID_PREFIX,
    DEFAULT_NAMESPACE,
};
pub use finalizer::{
    DeferredFinalizer,
    DUPLICATE_ORGANISM_DB_ID_MARKER,
    DUPLICATE_SYMBOL_MARKER,
};
pub use organisms::OrganismRegistry;
pub use processor::{
    parse_flybase_ids,
    ProcessOutput,
    RecordProcessor,
    FLYBASE_DBXREF_DB,
    ORGANISM_ACCESSION_PREFIX,
    TRANSPOSON_ACCESSION_PREFIX,
};
pub use references::{
    ParentReference,
    ReferenceMap,
};
pub use state::ConversionState;
pub use synonyms::SynonymCollector;
pub use syntenic::SyntenicRegionBuilder;

use log::debug;

use crate::data_structs::{
    Gff3Record,
    Item,
    ItemFactory,
};

/// Class fragments of the target model.
pub mod classes {
    pub const GENE: &str = "Gene";
    pub const PSEUDOGENE: &str = "Pseudogene";
    pub const TRANSCRIPT: &str = "Transcript";
    pub const MRNA: &str = "MRNA";
    pub const PROTEIN: &str = "Protein";
    pub const TRANSLATION: &str = "Translation";
    pub const REGULATORY_REGION: &str = "RegulatoryRegion";
    pub const TF_MODULE: &str = "TFmodule";
    pub const TRANSPOSABLE_ELEMENT: &str = "TransposableElement";
    pub const SYNTENIC_REGION: &str = "SyntenicRegion";
    pub const SYNONYM: &str = "Synonym";
    pub const ORGANISM: &str = "Organism";
    pub const DATA_SOURCE: &str = "DataSource";
}

/// Attribute and reference names of the target model.
pub mod fields {
    pub const CURATED: &str = "curated";
    pub const IDENTIFIER: &str = "identifier";
    pub const SYMBOL: &str = "symbol";
    pub const ORGANISM_DB_ID: &str = "organismDbId";
    pub const TAXON_ID: &str = "taxonId";
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";

    pub const SUBJECT: &str = "subject";
    pub const SOURCE: &str = "source";
    pub const ORGANISM: &str = "organism";
    pub const TARGET_ORGANISM: &str = "targetOrganism";
    pub const TARGET_SYNTENIC_REGION: &str = "targetSyntenicRegion";
}

/// One conversion run: a record processor, a finalizer and the state they
/// share.
#[derive(Debug, Clone)]
pub struct FlyBaseHandler {
    processor:   RecordProcessor,
    finalizer:   DeferredFinalizer,
    state:       ConversionState,
    data_source: Item,
}

impl FlyBaseHandler {
    pub fn new(config: HandlerConfig) -> Self {
        let mut factory =
            ItemFactory::new(config.namespace.clone(), config.id_prefix.clone());
        let mut data_source = factory.make_item(classes::DATA_SOURCE);
        data_source.set_attribute(fields::NAME, config.data_source_name.as_str());
        debug!(
            "Created data source {} ({})",
            data_source.identifier(),
            config.data_source_name
        );

        let processor =
            RecordProcessor::new(factory, data_source.identifier().clone());
        Self {
            processor,
            finalizer: DeferredFinalizer,
            state: ConversionState::new(),
            data_source,
        }
    }

    /// The data source item synonyms refer to. Callers store it once.
    pub fn data_source(&self) -> &Item { &self.data_source }

    pub fn state(&self) -> &ConversionState { &self.state }

    pub fn processor(&self) -> &RecordProcessor { &self.processor }

    pub fn process(
        &mut self,
        record: &Gff3Record,
    ) -> anyhow::Result<ProcessOutput> {
        self.processor
            .process(&mut self.state, record)
    }

    /// Emits the deferred items. Call once, after the last record.
    pub fn finalize(&mut self) -> Vec<Item> {
        self.finalizer
            .finalize(&mut self.state)
    }

    /// Empties the final items buffer, e.g. before reusing the handler.
    pub fn clear_final_items(&mut self) { self.state.clear_final_items() }
}
