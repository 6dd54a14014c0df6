pub use crate::data_structs::enums::{
    ReferenceKind,
    SynonymType,
    TargetSpecies,
};
pub use crate::data_structs::typedef::*;
pub use crate::data_structs::{
    Gff3Record,
    Item,
    ItemFactory,
    Reference,
};
pub use crate::handler::{
    classes,
    fields,
    ConversionState,
    DeferredFinalizer,
    FlyBaseHandler,
    HandlerConfig,
    OrganismRegistry,
    ProcessOutput,
    RecordProcessor,
    ReferenceMap,
    SynonymCollector,
    SyntenicRegionBuilder,
};
pub use crate::io::{
    ItemWriter,
    RecordReader,
};
