use crate::data_structs::enums::SynonymType;
use crate::data_structs::typedef::ItemId;
use crate::data_structs::{
    Item,
    ItemFactory,
};
use crate::handler::{
    classes,
    fields,
};

/// Builds Synonym items attributed to the data source of the run.
///
/// Deduplication of values is left to the caller.
#[derive(Debug, Clone)]
pub struct SynonymCollector {
    data_source: ItemId,
}

impl SynonymCollector {
    pub fn new(data_source: ItemId) -> Self { Self { data_source } }

    pub fn data_source(&self) -> &ItemId { &self.data_source }

    pub fn create(
        &self,
        factory: &mut ItemFactory,
        subject: &Item,
        synonym_type: SynonymType,
        value: &str,
    ) -> Item {
        let mut synonym = factory.make_item(classes::SYNONYM);
        synonym.set_attribute(fields::TYPE, synonym_type.as_str());
        synonym.set_attribute(fields::VALUE, value);
        synonym.set_reference(fields::SUBJECT, subject.identifier().clone());
        synonym.set_reference(fields::SOURCE, self.data_source.clone());
        synonym
    }
}
