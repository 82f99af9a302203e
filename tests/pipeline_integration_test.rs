use calamine::{open_workbook_from_rs, Reader, Xlsx};
use nestable_gen::core::engine::CampaignEngine;
use nestable_gen::core::packager::{CSV_ENTRY_NAME, XLSX_ENTRY_NAME};
use nestable_gen::domain::model::OUTPUT_COLUMNS;
use nestable_gen::{CampaignPipeline, FixedClock, GeneratorError};
use std::io::{Cursor, Read};

const CONTACTS: &str = "\
first_name,last_name,email,role_need,company,industry,country,linkedin
Ada,Lovelace,ada@analytical.io,Data Engineer,Analytical Engines,fintech,UK,ada-l
Grace,Hopper,grace@cobol.dev,Backend Engineer,\"Cobol, Ltd\",govtech,US,
Alan,Turing,alan@bletchley.org,ML Engineer,Bletchley,security,UK,
Ada,Lovelace,  ADA@Analytical.IO ,Data Engineer, analytical engines ,fintech,UK,dup
Linus,Torvalds,linus@kernel.org,Kernel Developer,Kernel Org,open source,FI,
Margaret,Hamilton,margaret@apollo.space,QA Engineer,Apollo,aerospace,US,
Ken,Thompson,ken@bell.labs,,Bell Labs,telecom,US,
";

fn unpack(archive: &[u8]) -> (Vec<String>, Vec<u8>, Vec<u8>) {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
    let names: Vec<String> = zip.file_names().map(String::from).collect();

    let mut csv_data = Vec::new();
    zip.by_name(CSV_ENTRY_NAME)
        .unwrap()
        .read_to_end(&mut csv_data)
        .unwrap();

    let mut xlsx_data = Vec::new();
    zip.by_name(XLSX_ENTRY_NAME)
        .unwrap()
        .read_to_end(&mut xlsx_data)
        .unwrap();

    (names, csv_data, xlsx_data)
}

fn csv_rows(data: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data);
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

fn xlsx_rows(data: Vec<u8>) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(data)).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);

    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn test_end_to_end_dedup_and_archive_entries() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(11)));
    let (archive, summary) = engine.run_with_summary(CONTACTS.as_bytes()).unwrap();

    assert_eq!(summary.input_rows, 7);
    assert_eq!(summary.duplicates_removed, 1);
    assert_eq!(summary.output_rows, 6);

    assert_eq!(archive.content_type, "application/zip");
    assert_eq!(archive.filename, "nestable_campaign_outputs.zip");

    let (names, csv_data, _) = unpack(&archive.bytes);
    assert_eq!(names.len(), 2);
    assert!(names.contains(&CSV_ENTRY_NAME.to_string()));
    assert!(names.contains(&XLSX_ENTRY_NAME.to_string()));

    let rows = csv_rows(&csv_data);
    assert_eq!(rows[0], OUTPUT_COLUMNS);
    assert_eq!(rows.len(), 7); // header + 6 contacts

    // 第一次出現的 Ada 被保留，輸出維持原始大小寫
    let emails: Vec<&str> = rows[1..].iter().map(|r| r[2].as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "ada@analytical.io",
            "grace@cobol.dev",
            "alan@bletchley.org",
            "linus@kernel.org",
            "margaret@apollo.space",
            "ken@bell.labs",
        ]
    );
    assert!(rows[1..]
        .iter()
        .all(|r| r[14] == "Wrap-up: revisit in Q4 or compare profiles now?"));
}

#[test]
fn test_csv_and_xlsx_carry_identical_data() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(2)));
    let archive = engine.run(CONTACTS.as_bytes()).unwrap();
    let (_, csv_data, xlsx_data) = unpack(&archive.bytes);

    let from_csv = csv_rows(&csv_data);
    let from_xlsx = xlsx_rows(xlsx_data);

    assert_eq!(from_csv.len(), from_xlsx.len());
    for (csv_row, xlsx_row) in from_csv.iter().zip(&from_xlsx) {
        assert_eq!(csv_row, xlsx_row);
    }

    // Ken 沒有 role_need，兩種格式都是空字串
    let ken = from_xlsx.iter().find(|r| r[0] == "Ken").unwrap();
    assert_eq!(ken[4], "");
    assert_eq!(ken[6], "Adding  without slowing Bell Labs's roadmap");
}

#[test]
fn test_csv_rendering_reads_back_to_same_shape() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(7)));
    let archive = engine.run(CONTACTS.as_bytes()).unwrap();
    let (_, csv_data, _) = unpack(&archive.bytes);

    let table = nestable_gen::core::decoder::decode_table(&csv_data).unwrap();
    assert_eq!(table.columns(), OUTPUT_COLUMNS);
    assert_eq!(table.len(), 6);
    assert!(table.value(0, "Body 1").contains("\n\n"));
}

#[test]
fn test_schema_failure_lists_all_missing_columns() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(1)));
    let err = engine
        .run(b"first_name,last_name,email,company,industry,phone,website\nA,B,c@d.e,F,G,1,x\n")
        .unwrap_err();

    match err {
        GeneratorError::SchemaError { missing } => {
            assert_eq!(missing, vec!["role_need", "country"]);
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_decode_failure_is_client_error() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(1)));
    let err = engine.run(b"").unwrap_err();

    assert!(err.is_client_error());
    assert!(err.to_string().starts_with("CSV read error:"));
}

#[test]
fn test_header_only_upload_produces_empty_campaign() {
    let engine = CampaignEngine::new(CampaignPipeline::new(FixedClock::new(3)));
    let archive = engine
        .run(b"first_name,last_name,email,role_need,company,industry,country\n")
        .unwrap();
    let (_, csv_data, xlsx_data) = unpack(&archive.bytes);

    assert_eq!(csv_rows(&csv_data).len(), 1);
    assert_eq!(xlsx_rows(xlsx_data).len(), 1);
}
