use crate::domain::model::CampaignArchive;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub const CSV_ENTRY_NAME: &str = "nestable_b2b_campaign.csv";
pub const XLSX_ENTRY_NAME: &str = "nestable_b2b_campaign.xlsx";
pub const ARCHIVE_FILENAME: &str = "nestable_campaign_outputs.zip";
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// 將 CSV 與 XLSX 打包成單一 deflate 壓縮的 zip
pub fn package(csv_data: &[u8], xlsx_data: &[u8]) -> Result<CampaignArchive> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let bytes = {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        zip.start_file(CSV_ENTRY_NAME, options)?;
        zip.write_all(csv_data)?;

        zip.start_file(XLSX_ENTRY_NAME, options)?;
        zip.write_all(xlsx_data)?;

        let cursor = zip.finish()?;
        cursor.into_inner()
    };

    tracing::debug!("Packaged archive ({} bytes)", bytes.len());
    Ok(CampaignArchive {
        bytes,
        content_type: ARCHIVE_CONTENT_TYPE,
        filename: ARCHIVE_FILENAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_archive_has_two_named_deflated_entries() {
        let archive = package(b"a,b\n1,2\n", b"PK-fake-xlsx").unwrap();
        let mut zip = zip::ZipArchive::new(std::io::Cursor::new(archive.bytes)).unwrap();

        assert_eq!(zip.len(), 2);
        let names: Vec<String> = zip.file_names().map(String::from).collect();
        assert!(names.contains(&CSV_ENTRY_NAME.to_string()));
        assert!(names.contains(&XLSX_ENTRY_NAME.to_string()));

        let mut csv_entry = zip.by_name(CSV_ENTRY_NAME).unwrap();
        assert_eq!(csv_entry.compression(), CompressionMethod::Deflated);
        let mut content = String::new();
        csv_entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "a,b\n1,2\n");
    }

    #[test]
    fn test_transport_metadata() {
        let archive = package(b"", b"").unwrap();
        assert_eq!(archive.content_type, "application/zip");
        assert_eq!(
            archive.content_disposition(),
            "attachment; filename=nestable_campaign_outputs.zip"
        );
    }
}
