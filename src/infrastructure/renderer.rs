use crate::domain::{EntityFacts, InspectionReport};
use crate::ports::Renderer;

pub struct PrettyRenderer;

impl PrettyRenderer {
    pub fn new() -> Self { Self }
}

impl Renderer for PrettyRenderer {
    fn render(&self, report: &InspectionReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}  issued by {}  sha256={}  (days_left: {})\n",
            or_dash(&report.issued_to.common_name),
            or_dash(&report.issued_by.common_name),
            report.short_sha256(),
            report.days_left
        ));

        if report.is_expired() {
            out.push_str("⚠ CERTIFICATE EXPIRED!\n");
        } else if report.expires_soon() {
            out.push_str(&format!("⚠ CERTIFICATE EXPIRING in {} days!\n", report.days_left));
        }

        out.push('\n');
        out.push_str("ISSUED BY\n");
        push_entity(&mut out, &report.issued_by);

        out.push('\n');
        out.push_str("ISSUED TO\n");
        push_entity(&mut out, &report.issued_to);

        out.push('\n');
        out.push_str("VALIDITY\n");
        out.push_str(&format!("  issued on:    {}\n", report.issued_on));
        out.push_str(&format!("  expires on:   {}\n", report.expires_on));

        out.push('\n');
        out.push_str("FINGERPRINTS\n");
        out.push_str(&format!("  sha-1:    {}\n", report.sha1_fingerprint));
        out.push_str(&format!("  sha-256:  {}\n", report.sha256_fingerprint));

        out.push('\n');
        out.push_str("DETAILS\n");
        let width = report
            .table
            .rows()
            .iter()
            .map(|row| row.name.len())
            .max()
            .unwrap_or(0);
        for row in report.table.rows() {
            out.push_str(&format!("  {:<width$}  {}\n", row.name, row.value, width = width));
        }

        out
    }
}

fn push_entity(out: &mut String, facts: &EntityFacts) {
    out.push_str(&format!("  common name:  {}\n", or_dash(&facts.common_name)));
    out.push_str(&format!("  email:        {}\n", or_dash(&facts.email)));
    out.push_str(&format!("  organization: {}\n", or_dash(&facts.organization)));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self { Self }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &InspectionReport) -> String {
        let mut out = String::from("{\n");

        out.push_str("  \"issued_by\": {\n");
        push_entity_json(&mut out, &report.issued_by);
        out.push_str("  },\n");

        out.push_str("  \"issued_to\": {\n");
        push_entity_json(&mut out, &report.issued_to);
        out.push_str("  },\n");

        out.push_str("  \"validity\": {\n");
        out.push_str(&format!("    \"issued_on\": {:?},\n", report.issued_on));
        out.push_str(&format!("    \"expires_on\": {:?},\n", report.expires_on));
        out.push_str(&format!("    \"days_left\": {}\n", report.days_left));
        out.push_str("  },\n");

        out.push_str("  \"fingerprints\": {\n");
        out.push_str(&format!("    \"sha1\": {:?},\n", report.sha1_fingerprint));
        out.push_str(&format!("    \"sha256\": {:?}\n", report.sha256_fingerprint));
        out.push_str("  },\n");

        out.push_str(&format!(
            "  \"public_key_hex\": {:?},\n",
            report.table.raw_public_key_hex()
        ));

        out.push_str("  \"properties\": [\n");
        let rows = report.table.rows();
        for (i, row) in rows.iter().enumerate() {
            let comma = if i + 1 < rows.len() { "," } else { "" };
            out.push_str(&format!(
                "    {{ \"name\": {:?}, \"value\": {:?} }}{}\n",
                row.name, row.value, comma
            ));
        }
        out.push_str("  ]\n");

        out.push_str("}\n");
        out
    }
}

fn push_entity_json(out: &mut String, facts: &EntityFacts) {
    out.push_str(&format!("    \"common_name\": {:?},\n", facts.common_name));
    out.push_str(&format!("    \"email\": {:?},\n", facts.email));
    out.push_str(&format!("    \"organization\": {:?}\n", facts.organization));
}
