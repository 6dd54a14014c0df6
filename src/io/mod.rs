//! Line-delimited JSON I/O for records and items.
//!
//! The parser producing [`Gff3Record`](crate::data_structs::Gff3Record)s and
//! the store persisting items live outside this crate; these types are the
//! minimal glue for feeding a conversion run from, and writing it to, plain
//! files.

mod jsonl;

pub use jsonl::{
    ItemWriter,
    RecordReader,
};
