use crate::core::sequence::SequenceGenerator;
use crate::domain::model::{ContactRecord, OutputRow, OutputTable};
use crate::domain::ports::Clock;

/// One output row per contact, same order.
pub fn assemble<C: Clock>(contacts: Vec<ContactRecord>, generator: &SequenceGenerator<C>) -> OutputTable {
    let rows = contacts
        .into_iter()
        .map(|contact| {
            let sequence = generator.generate_for(&contact);
            OutputRow {
                first_name: contact.first_name,
                last_name: contact.last_name,
                email: contact.email,
                company: contact.company,
                role_need: contact.role_need,
                industry: contact.industry,
                sequence,
            }
        })
        .collect();

    OutputTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::model::OUTPUT_COLUMNS;

    fn contact(first_name: &str, company: &str) -> ContactRecord {
        ContactRecord {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@{}.com", first_name.to_lowercase(), company.to_lowercase()),
            role_need: "Backend Engineer".to_string(),
            company: company.to_string(),
            industry: "logistics".to_string(),
            country: "UK".to_string(),
        }
    }

    #[test]
    fn test_rows_follow_input_order() {
        let generator = SequenceGenerator::new(FixedClock::new(8));
        let table = assemble(
            vec![contact("Zed", "Initech"), contact("Amy", "Acme")],
            &generator,
        );
        let first_names: Vec<&str> = table.rows.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(first_names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_cells_match_output_column_order() {
        let generator = SequenceGenerator::new(FixedClock::new(8));
        let table = assemble(vec![contact("Amy", "Acme")], &generator);
        let cells = table.rows[0].cells();

        assert_eq!(cells.len(), OUTPUT_COLUMNS.len());
        assert_eq!(&cells[..6], &["Amy", "Doe", "amy@acme.com", "Acme", "Backend Engineer", "logistics"]);
        assert_eq!(cells[6], "Adding Backend Engineer without slowing Acme's roadmap");
        assert_eq!(cells[14], "Wrap-up: revisit in Q3 or compare profiles now?");
        // country 不出現在輸出
        assert!(!cells.contains(&"UK"));
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let generator = SequenceGenerator::new(FixedClock::new(1));
        assert!(assemble(Vec::new(), &generator).is_empty());
    }
}
