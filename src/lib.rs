//! # flybase-gff
//!
//! `flybase-gff` converts FlyBase GFF3 feature records into items of an
//! InterMine-style target model. Parsing GFF3 and persisting items happen
//! elsewhere; this crate holds the FlyBase-specific rules in between.
//!
//! ## Key Features
//!
//! * **Per-record rules** ([`RecordProcessor`]): class corrections
//!   (`RegulatoryRegion` to `TFmodule`, `Protein` to `Translation`),
//!   organismDbId migration for FlyBase accessions, alias-based identifiers,
//!   pseudogene handling, transposable element ids, synonym extraction and
//!   parent reference wiring ([`ReferenceMap`]).
//! * **Cross-organism links** ([`SyntenicRegionBuilder`],
//!   [`OrganismRegistry`]): syntenic regions are paired with a region of the
//!   same id in the target organism, organism stubs are created once per
//!   taxon.
//! * **Deferred resolution** ([`DeferredFinalizer`]): genes are held back
//!   until the whole stream has been seen, then duplicate symbols and
//!   organismDbIds get numbered suffixes and pseudogene parents are
//!   reclassified.
//! * **JSON-lines I/O** ([`RecordReader`], [`ItemWriter`]).
//!
//! ## Usage
//!
//! ```
//! use flybase_gff::prelude::*;
//!
//! let mut handler = FlyBaseHandler::new(HandlerConfig::default());
//! let mut output = vec![handler.data_source().clone()];
//!
//! let records = vec![
//!     Gff3Record::new("FBgn0004053", "Gene").with_name("zen"),
//!     Gff3Record::new("FBgn0004054", "Gene").with_name("zen"),
//!     Gff3Record::new("FBtr0004053", "MRNA")
//!         .with_parents(vec!["FBgn0004053".into()]),
//! ];
//! for record in records.iter() {
//!     output.extend(handler.process(record)?.into_items());
//! }
//! output.extend(handler.finalize());
//!
//! let symbols: Vec<_> = output
//!     .iter()
//!     .filter_map(|item| item.attribute("symbol"))
//!     .collect();
//! assert_eq!(symbols, ["zen-duplicate-symbol-1", "zen-duplicate-symbol-2"]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! [`RecordProcessor`]: handler::RecordProcessor
//! [`ReferenceMap`]: handler::ReferenceMap
//! [`SyntenicRegionBuilder`]: handler::SyntenicRegionBuilder
//! [`OrganismRegistry`]: handler::OrganismRegistry
//! [`DeferredFinalizer`]: handler::DeferredFinalizer
//! [`RecordReader`]: io::RecordReader
//! [`ItemWriter`]: io::ItemWriter

pub mod data_structs;
pub mod exports;
pub mod handler;
pub mod io;
pub mod prelude;
pub mod utils;
