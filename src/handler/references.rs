use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::data_structs::enums::ReferenceKind;

/// Field of a feature that receives its structural parent(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentReference {
    pub name: &'static str,
    pub kind: ReferenceKind,
}

const fn single(name: &'static str) -> ParentReference {
    ParentReference {
        name,
        kind: ReferenceKind::Single,
    }
}

const fn collection(name: &'static str) -> ParentReference {
    ParentReference {
        name,
        kind: ReferenceKind::Collection,
    }
}

// Region is left out: too many classes inherit from it.
// RNA parents are wired to the gene only; Gene.transcripts is filled in
// post-processing.
const PARENT_REFERENCES: [(&str, ParentReference); 16] = [
    ("Enhancer", single("gene")),
    ("Exon", collection("transcripts")),
    ("InsertionSite", collection("genes")),
    ("Intron", collection("transcripts")),
    ("MRNA", single("gene")),
    ("NcRNA", single("gene")),
    ("SnRNA", single("gene")),
    ("SnoRNA", single("gene")),
    ("TRNA", single("gene")),
    ("PointMutation", collection("genes")),
    ("PolyASite", collection("processedTranscripts")),
    ("RegulatoryRegion", single("gene")),
    ("SequenceVariant", collection("genes")),
    ("FivePrimeUTR", collection("MRNAs")),
    ("ThreePrimeUTR", collection("MRNAs")),
    ("CDS", collection("MRNAs")),
];

static FLYBASE_REFERENCES: Lazy<ReferenceMap> =
    Lazy::new(|| ReferenceMap::from_iter(PARENT_REFERENCES));

/// Read-only table from class fragment to its parent reference field.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    inner: HashMap<&'static str, ParentReference>,
}

impl ReferenceMap {
    /// The table used for FlyBase GFF3.
    pub fn flybase() -> &'static ReferenceMap { &FLYBASE_REFERENCES }

    pub fn get(
        &self,
        class_fragment: &str,
    ) -> Option<&ParentReference> {
        self.inner.get(class_fragment)
    }

    pub fn len(&self) -> usize { self.inner.len() }

    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}

impl FromIterator<(&'static str, ParentReference)> for ReferenceMap {
    fn from_iter<T: IntoIterator<Item = (&'static str, ParentReference)>>(
        iter: T
    ) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
