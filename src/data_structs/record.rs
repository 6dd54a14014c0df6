use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::RecordAttributeMap;
use crate::utils::class_fragment;
use crate::with_field_fn;

pub const NAME_ATTRIBUTE: &str = "Name";
pub const SYNONYM_ATTRIBUTE: &str = "synonym";
pub const SECONDARY_SYNONYM_ATTRIBUTE: &str = "synonym_2nd";
pub const ALIAS_ATTRIBUTE: &str = "Alias";
pub const TO_SPECIES_ATTRIBUTE: &str = "to_species";

/// One parsed GFF3 line, as handed over by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gff3Record {
    pub id:         String,
    pub parents:    Vec<String>,
    /// Namespaced or bare target-model class name.
    pub class_name: String,
    pub attributes: RecordAttributeMap,
    pub alias:      Option<String>,
    pub dbxrefs:    Option<Vec<String>>,
}

impl Gff3Record {
    pub fn new(
        id: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    with_field_fn!(parents, Vec<String>);

    with_field_fn!(alias, Option<String>);

    with_field_fn!(dbxrefs, Option<Vec<String>>);

    /// Appends values to an attribute list.
    pub fn with_attribute<S: Into<String>>(
        mut self,
        key: &str,
        values: Vec<S>,
    ) -> Self {
        self.attributes
            .entry(key.to_string())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Sets the `Name` attribute.
    pub fn with_name(
        self,
        name: impl Into<String>,
    ) -> Self {
        self.with_attribute(NAME_ATTRIBUTE, vec![name.into()])
    }

    pub fn class_fragment(&self) -> &str { class_fragment(&self.class_name) }

    /// Values of an attribute, empty when it is absent.
    pub fn attribute_values(
        &self,
        key: &str,
    ) -> &[String] {
        self.attributes
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn first_attribute(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.attribute_values(key)
            .first()
            .map(String::as_str)
    }

    /// The record alias, falling back to the first `Alias` attribute.
    pub fn alias(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .or_else(|| self.first_attribute(ALIAS_ATTRIBUTE))
    }

    /// Cross-reference strings, empty when the record carries none.
    pub fn dbxrefs(&self) -> &[String] {
        self.dbxrefs
            .as_deref()
            .unwrap_or_default()
    }
}
