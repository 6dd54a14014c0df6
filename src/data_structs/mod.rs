//! Entity model shared by the conversion engine and its I/O.
//!
//! * [`Gff3Record`] is the parsed input line.
//! * [`Item`] is any output entity (features, synonyms, organisms, the data
//!   source), with attributes and references keyed by name.
//! * [`ItemFactory`] allocates item identifiers and maps GFF3 IDs onto them.

pub mod enums;
mod item;
mod record;
pub mod typedef;

pub use item::{
    Item,
    ItemFactory,
    Reference,
};
pub use record::{
    Gff3Record,
    ALIAS_ATTRIBUTE,
    NAME_ATTRIBUTE,
    SECONDARY_SYNONYM_ATTRIBUTE,
    SYNONYM_ATTRIBUTE,
    TO_SPECIES_ATTRIBUTE,
};
