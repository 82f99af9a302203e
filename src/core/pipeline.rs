use crate::core::assembler::assemble;
use crate::core::decoder::decode_table;
use crate::core::dedup::dedupe_contacts;
use crate::core::encoder::{encode_csv, encode_xlsx};
use crate::core::packager::package;
use crate::core::schema::validate_columns;
use crate::core::sequence::SequenceGenerator;
use crate::core::{CampaignArchive, Clock, ContactRecord, Pipeline, Table, TransformResult};
use crate::utils::error::Result;

/// Contact table → outreach campaign archive.
pub struct CampaignPipeline<C: Clock> {
    generator: SequenceGenerator<C>,
}

impl<C: Clock> CampaignPipeline<C> {
    pub fn new(clock: C) -> Self {
        Self {
            generator: SequenceGenerator::new(clock),
        }
    }
}

impl<C: Clock> Pipeline for CampaignPipeline<C> {
    fn extract(&self, input: &[u8]) -> Result<Table> {
        tracing::info!("📥 Decoding upload ({} bytes)", input.len());
        let table = decode_table(input)?;
        // 先檢查欄位，再做任何生成工作
        validate_columns(&table)?;
        Ok(table)
    }

    fn transform(&self, table: Table) -> Result<TransformResult> {
        let input_rows = table.len();
        let deduped = dedupe_contacts(table);
        let duplicates_removed = input_rows - deduped.len();

        let contacts = ContactRecord::all_from(&deduped);
        tracing::info!(
            "✍️ Generating sequences for {} contacts ({})",
            contacts.len(),
            self.generator.current_quarter()
        );
        let output = assemble(contacts, &self.generator);

        Ok(TransformResult {
            output,
            input_rows,
            duplicates_removed,
        })
    }

    fn load(&self, result: TransformResult) -> Result<CampaignArchive> {
        let csv_data = encode_csv(&result.output)?;
        let xlsx_data = encode_xlsx(&result.output)?;
        let archive = package(&csv_data, &xlsx_data)?;

        tracing::info!(
            "📦 Archive ready: {} ({} bytes)",
            archive.filename,
            archive.bytes.len()
        );
        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::utils::error::GeneratorError;

    const HEADER: &str = "first_name,last_name,email,role_need,company,industry,country\n";

    #[test]
    fn test_extract_rejects_missing_columns_before_generation() {
        let pipeline = CampaignPipeline::new(FixedClock::new(1));
        let err = pipeline
            .extract(b"first_name,email\nAda,ada@x.com\n")
            .unwrap_err();
        match err {
            GeneratorError::SchemaError { missing } => assert_eq!(
                missing,
                vec!["last_name", "role_need", "company", "industry", "country"]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_transform_counts_duplicates() {
        let pipeline = CampaignPipeline::new(FixedClock::new(6));
        let input = format!(
            "{}Ada,L,ada@x.com,QA,X,retail,UK\nAda,L, ADA@X.COM ,QA,x ,retail,UK\nBo,M,bo@y.com,SRE,Y,saas,US\n",
            HEADER
        );
        let table = pipeline.extract(input.as_bytes()).unwrap();
        let result = pipeline.transform(table).unwrap();

        assert_eq!(result.input_rows, 3);
        assert_eq!(result.duplicates_removed, 1);
        assert_eq!(result.output.len(), 2);
        assert_eq!(result.output.rows[1].first_name, "Bo");
    }

    #[test]
    fn test_missing_values_become_empty_cells() {
        let pipeline = CampaignPipeline::new(FixedClock::new(6));
        let input = format!("{}Ada,,ada@x.com,,Acme\n", HEADER);
        let table = pipeline.extract(input.as_bytes()).unwrap();
        let result = pipeline.transform(table).unwrap();

        let row = &result.output.rows[0];
        assert_eq!(row.role_need, "");
        assert_eq!(row.industry, "");
        assert_eq!(
            row.sequence.step(1).unwrap().subject,
            "Adding  without slowing Acme's roadmap"
        );
    }
}
