#![allow(dead_code)]
use flybase_gff::prelude::*;

/// A small FlyBase-like stream: a pseudogene gene, a protein-coding gene
/// with a transcript, exon, CDS and protein, a transposon and a syntenic
/// region pair.
pub fn demo_records() -> Vec<Gff3Record> {
    vec![
        Gff3Record::new("FBgn0001", "Gene").with_name("aberrant"),
        Gff3Record::new("FBtr0001", "Pseudogene")
            .with_name("aberrant-RA")
            .with_parents(vec!["FBgn0001".into()]),
        Gff3Record::new("FBgn0004053", "Gene")
            .with_name("zen")
            .with_attribute("synonym", vec!["zerknullt", "CG1046"])
            .with_attribute("synonym_2nd", vec!["z1", "zen"]),
        Gff3Record::new("FBtr0004053", "MRNA")
            .with_alias(Some("CG1046-RA".into()))
            .with_parents(vec!["FBgn0004053".into()]),
        Gff3Record::new("CG1046:1", "Exon").with_parents(vec!["FBtr0004053".into()]),
        Gff3Record::new("CDS_CG1046:1", "CDS").with_parents(vec!["FBtr0004053".into()]),
        Gff3Record::new("FBpp0004053", "Protein").with_alias(Some("CG1046-PA".into())),
        Gff3Record::new("roo{}1", "TransposableElement")
            .with_dbxrefs(Some(vec!["FlyBase:FBti0019082".into()])),
        Gff3Record::new("syn_X_1", "SyntenicRegion")
            .with_attribute("to_species", vec!["dpse"]),
        Gff3Record::new("FBgn0004054", "Gene").with_name("zen"),
    ]
}

/// Runs a whole conversion and returns every emitted item in output order.
pub fn convert(records: &[Gff3Record]) -> anyhow::Result<Vec<Item>> {
    let mut handler = FlyBaseHandler::new(HandlerConfig::default());
    let mut output = vec![handler.data_source().clone()];
    for record in records {
        output.extend(handler.process(record)?.into_items());
    }
    output.extend(handler.finalize());
    Ok(output)
}

pub fn find<'a>(
    items: &'a [Item],
    class: &str,
    field: &str,
    value: &str,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.class_fragment() == class)
        .filter(|item| item.attribute(field) == Some(value))
        .collect()
}
