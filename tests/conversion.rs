mod common;
use common::{
    convert,
    demo_records,
    find,
};
use flybase_gff::prelude::*;
use rstest::{
    fixture,
    rstest,
};

#[fixture]
#[once]
fn demo_output() -> Vec<Item> { convert(&demo_records()).unwrap() }

#[rstest]
fn finalize_batch_comes_last(demo_output: &Vec<Item>) {
    let tail: Vec<_> = demo_output[demo_output.len() - 4..]
        .iter()
        .map(|item| {
            (
                item.class_fragment(),
                item.attribute(fields::SYMBOL)
                    .or(item.attribute(fields::TAXON_ID)),
            )
        })
        .collect();

    assert_eq!(
        tail,
        vec![
            ("Pseudogene", Some("aberrant")),
            ("Gene", Some("zen-duplicate-symbol-1")),
            ("Gene", Some("zen-duplicate-symbol-2")),
            ("Organism", Some("7237")),
        ]
    );
}

#[rstest]
fn data_source_comes_first(demo_output: &Vec<Item>) {
    assert_eq!(demo_output[0].class_fragment(), classes::DATA_SOURCE);
    assert_eq!(demo_output[0].attribute(fields::NAME), Some("FlyBase"));
}

#[rstest]
fn every_gene_is_emitted_once(demo_output: &Vec<Item>) {
    let genes = demo_output
        .iter()
        .filter(|item| {
            matches!(item.class_fragment(), classes::GENE | classes::PSEUDOGENE)
        })
        .count();
    assert_eq!(genes, 3);
}

#[rstest]
fn pseudogene_child_is_transcript(demo_output: &Vec<Item>) {
    let transcripts =
        find(demo_output, classes::TRANSCRIPT, fields::ORGANISM_DB_ID, "FBtr0001");
    assert_eq!(transcripts.len(), 1);
    assert!(!transcripts[0].has_attribute(fields::SYMBOL));
}

#[rstest]
fn transcript_parts_point_at_mrna(demo_output: &Vec<Item>) {
    let gene = find(
        demo_output,
        classes::GENE,
        fields::ORGANISM_DB_ID,
        "FBgn0004053",
    )[0];
    let mrna = find(demo_output, classes::MRNA, fields::IDENTIFIER, "CG1046-RA")[0];
    let exon = find(demo_output, "Exon", fields::IDENTIFIER, "CG1046:1")[0];
    let cds = find(demo_output, "CDS", fields::IDENTIFIER, "CDS_CG1046:1")[0];

    assert_eq!(
        mrna.reference("gene"),
        Some(&Reference::Single(gene.identifier().clone()))
    );
    assert_eq!(
        exon.reference("transcripts").unwrap().targets(),
        std::slice::from_ref(mrna.identifier())
    );
    assert_eq!(
        cds.reference("MRNAs").unwrap().targets(),
        std::slice::from_ref(mrna.identifier())
    );
}

#[rstest]
fn protein_becomes_translation(demo_output: &Vec<Item>) {
    let translations =
        find(demo_output, classes::TRANSLATION, fields::IDENTIFIER, "CG1046-PA");
    assert_eq!(translations.len(), 1);
    assert_eq!(
        translations[0].attribute(fields::ORGANISM_DB_ID),
        Some("FBpp0004053")
    );
}

#[rstest]
fn gene_synonyms_are_emitted(demo_output: &Vec<Item>) {
    let gene = find(
        demo_output,
        classes::GENE,
        fields::ORGANISM_DB_ID,
        "FBgn0004053",
    )[0];
    let synonyms: Vec<_> = demo_output
        .iter()
        .filter(|item| item.class_fragment() == classes::SYNONYM)
        .filter(|item| {
            item.reference(fields::SUBJECT)
                == Some(&Reference::Single(gene.identifier().clone()))
        })
        .map(|item| {
            (
                item.attribute(fields::TYPE).unwrap(),
                item.attribute(fields::VALUE).unwrap(),
            )
        })
        .collect();

    assert_eq!(
        synonyms,
        vec![
            ("symbol", "z1"),
            ("symbol", "zerknullt"),
            ("identifier", "CG1046"),
        ]
    );
}

#[rstest]
fn transposon_gets_flybase_id(demo_output: &Vec<Item>) {
    let te = find(
        demo_output,
        classes::TRANSPOSABLE_ELEMENT,
        fields::IDENTIFIER,
        "roo{}1",
    )[0];
    assert_eq!(te.attribute(fields::ORGANISM_DB_ID), Some("FBti0019082"));
}

#[rstest]
fn syntenic_regions_share_identifier(demo_output: &Vec<Item>) {
    let regions = find(
        demo_output,
        classes::SYNTENIC_REGION,
        fields::IDENTIFIER,
        "syn_X_1",
    );
    assert_eq!(regions.len(), 2);
    assert_eq!(
        regions[0].reference(fields::TARGET_SYNTENIC_REGION),
        Some(&Reference::Single(regions[1].identifier().clone()))
    );
    assert_eq!(
        regions[1].reference(fields::TARGET_SYNTENIC_REGION),
        Some(&Reference::Single(regions[0].identifier().clone()))
    );
}

#[test]
fn identifiers_are_unique_per_item() {
    let output = convert(&demo_records()).unwrap();
    let mut ids: Vec<_> = output
        .iter()
        .map(|item| item.identifier().clone())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn unsupported_species_aborts_run() {
    let mut records = demo_records();
    records.insert(
        3,
        Gff3Record::new("syn_2L_1", "SyntenicRegion")
            .with_attribute("to_species", vec!["dvir"]),
    );
    let err = convert(&records).unwrap_err();
    assert!(format!("{:#}", err).contains("unknown organism abbreviation: dvir"));
}
