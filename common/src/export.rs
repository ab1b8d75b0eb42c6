//! CSV export of the lead collection.
//!
//! Builds the file content as a string; the frontend wraps it in a data URL
//! and triggers the download. Every value is double-quoted with embedded
//! quotes doubled, so names and notes containing commas or quotes survive a
//! spreadsheet import.

use crate::model::lead::Lead;

const HEADER: [&str; 8] = [
    "First Name",
    "Last Name",
    "Company",
    "Email",
    "Phone",
    "Stage",
    "Deal Value",
    "Notes",
];

/// Renders the collection as CSV. One row per lead, rows newline-terminated.
pub fn leads_to_csv(leads: &[Lead]) -> String {
    let mut csv = String::new();
    push_row(&mut csv, HEADER.iter().map(|h| h.to_string()));
    for lead in leads {
        push_row(
            &mut csv,
            [
                lead.first_name.clone(),
                lead.last_name.clone(),
                lead.company.clone(),
                lead.email.clone(),
                lead.phone.clone(),
                lead.stage.label().to_string(),
                lead.deal_value.to_string(),
                lead.notes.clone(),
            ]
            .into_iter(),
        );
    }
    csv
}

/// Download name carrying the export moment, e.g. `leads-1756300000000.csv`.
pub fn export_filename(epoch_millis: u64) -> String {
    format!("leads-{epoch_millis}.csv")
}

fn push_row(csv: &mut String, cells: impl Iterator<Item = String>) {
    let row: Vec<String> = cells.map(|c| quote(&c)).collect();
    csv.push_str(&row.join(","));
    csv.push('\n');
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stage::Stage;

    fn lead() -> Lead {
        Lead {
            id: "1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Engines, \"Analytical\"".into(),
            position: String::new(),
            email: "ada@analytical.example".into(),
            phone: String::new(),
            deal_value: 2500,
            stage: Stage::Qualified,
            notes: "met at expo".into(),
            created_at: "2026-08-01T10:00:00".into(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn header_then_one_row_per_lead() {
        let csv = leads_to_csv(&[lead(), lead()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"First Name\",\"Last Name\",\"Company\",\"Email\",\"Phone\",\"Stage\",\"Deal Value\",\"Notes\""
        );
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let csv = leads_to_csv(&[lead()]);
        assert!(csv.contains("\"Engines, \"\"Analytical\"\"\""));
        assert!(csv.contains("\"Qualified\""));
        assert!(csv.contains("\"2500\""));
    }

    #[test]
    fn filename_carries_timestamp() {
        assert_eq!(export_filename(1756300000000), "leads-1756300000000.csv");
    }
}
