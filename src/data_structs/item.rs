use arcstr::ArcStr;
use hashbrown::{
    HashMap,
    HashSet,
};
use log::{
    debug,
    trace,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    AttributeMap,
    ItemId,
};
use crate::utils::{
    class_fragment,
    class_namespace,
};
use crate::getter_fn;

/// Value of a reference field: a single target or an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Single(ItemId),
    Collection(Vec<ItemId>),
}

impl Reference {
    /// All target identifiers, in order.
    pub fn targets(&self) -> &[ItemId] {
        match self {
            Reference::Single(id) => std::slice::from_ref(id),
            Reference::Collection(ids) => ids.as_slice(),
        }
    }
}

impl From<ItemId> for Reference {
    fn from(value: ItemId) -> Self { Reference::Single(value) }
}

impl From<Vec<ItemId>> for Reference {
    fn from(value: Vec<ItemId>) -> Self { Reference::Collection(value) }
}

/// An output entity of the target model.
///
/// The class name is fully namespaced and may be reassigned while the item
/// is processed; the identifier never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    identifier: ItemId,
    class_name: String,
    #[serde(default)]
    attributes: AttributeMap,
    #[serde(default)]
    references: indexmap::IndexMap<String, Reference>,
}

impl Item {
    pub fn new(
        identifier: ItemId,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            class_name: class_name.into(),
            attributes: Default::default(),
            references: Default::default(),
        }
    }

    getter_fn!(identifier, ItemId);

    getter_fn!(attributes, AttributeMap);

    getter_fn!(references, indexmap::IndexMap<String, Reference>);

    pub fn class_name(&self) -> &str { &self.class_name }

    /// Class name without the model namespace.
    pub fn class_fragment(&self) -> &str { class_fragment(&self.class_name) }

    /// Changes the class, keeping the namespace of the current class name.
    pub fn reclassify(
        &mut self,
        fragment: &str,
    ) {
        let class_name =
            format!("{}{}", class_namespace(&self.class_name), fragment);
        trace!(
            "Reclassifying {} from {} to {}",
            self.identifier,
            self.class_name,
            class_name
        );
        self.class_name = class_name;
    }

    pub fn has_attribute(
        &self,
        name: &str,
    ) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attribute(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
    }

    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.attributes
            .insert(name.into(), value.into());
    }

    /// Removes an attribute, preserving the order of the remaining ones.
    pub fn remove_attribute(
        &mut self,
        name: &str,
    ) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    pub fn reference(
        &self,
        name: &str,
    ) -> Option<&Reference> {
        self.references.get(name)
    }

    pub fn set_reference(
        &mut self,
        name: impl Into<String>,
        reference: impl Into<Reference>,
    ) {
        self.references
            .insert(name.into(), reference.into());
    }
}

/// Allocates item identifiers and keeps the mapping from GFF3 record IDs to
/// the identifiers of the features created for them.
#[derive(Debug, Clone)]
pub struct ItemFactory {
    namespace: ArcStr,
    prefix:    ArcStr,
    counter:   usize,
    gff_ids:   HashMap<String, ItemId>,
    /// GFF3 IDs that already have a feature.
    claimed:   HashSet<String>,
}

impl ItemFactory {
    pub fn new(
        namespace: impl Into<ArcStr>,
        prefix: impl Into<ArcStr>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            prefix:    prefix.into(),
            counter:   0,
            gff_ids:   HashMap::new(),
            claimed:   HashSet::new(),
        }
    }

    /// Fully namespaced name for a class fragment.
    pub fn qualify(
        &self,
        fragment: &str,
    ) -> String {
        format!("{}{}", self.namespace, fragment)
    }

    fn next_identifier(&mut self) -> ItemId {
        self.counter += 1;
        ItemId::from(format!("{}_{}", self.prefix, self.counter).as_str())
    }

    /// Creates an empty item of the given class with a fresh identifier.
    pub fn make_item(
        &mut self,
        fragment: &str,
    ) -> Item {
        let identifier = self.next_identifier();
        Item::new(identifier, self.qualify(fragment))
    }

    /// Identifier assigned to a GFF3 record ID, reserving one when the ID has
    /// not been seen yet.
    pub fn resolve(
        &mut self,
        gff_id: &str,
    ) -> ItemId {
        if let Some(id) = self.gff_ids.get(gff_id) {
            return id.clone();
        }
        let id = self.next_identifier();
        self.gff_ids
            .insert(gff_id.to_string(), id.clone());
        id
    }

    /// Identifier assigned to a GFF3 record ID, if any.
    pub fn get(
        &self,
        gff_id: &str,
    ) -> Option<&ItemId> {
        self.gff_ids.get(gff_id)
    }

    /// Creates the item for a GFF3 record.
    ///
    /// The first feature for an ID takes the identifier reserved for it.
    /// Later records repeating the ID get fresh identifiers, while parent
    /// references to the ID keep pointing at the first feature.
    pub fn make_feature(
        &mut self,
        gff_id: &str,
        fragment: &str,
    ) -> Item {
        let identifier = if self.claimed.insert(gff_id.to_string()) {
            self.resolve(gff_id)
        } else {
            let identifier = self.next_identifier();
            debug!(
                "Record ID {} seen again, assigning {}",
                gff_id, identifier
            );
            identifier
        };
        Item::new(identifier, self.qualify(fragment))
    }

    /// Number of identifiers allocated so far.
    pub fn allocated(&self) -> usize { self.counter }
}
