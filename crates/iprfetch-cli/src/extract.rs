//! Feature extraction
//!
//! Flattens one API response into fixed 10-field records, one per entry, in
//! response order. Absent or empty optional metadata renders as "-".

use crate::api::types::{EntryMetadata, EntryResponse};
use serde::Serialize;

/// Placeholder for absent or empty optional fields
const EMPTY_FIELD: &str = "-";

/// One flattened output row. Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub accession: String,
    pub name: String,
    pub source_database: String,
    pub entry_type: String,
    pub integrated: String,
    pub signatures: String,
    pub go_terms: String,
    pub protein_accession: String,
    pub protein_length: String,
    pub locations: String,
}

/// Flatten an API response into one record per entry.
///
/// Location spans aggregate over every entry in the response, so each row of
/// a response carries the identical list.
pub fn extract_features(response: &EntryResponse) -> Vec<FeatureRecord> {
    let locations = collect_locations(response);

    response
        .results
        .iter()
        .map(|entry| {
            let meta = &entry.metadata;
            let protein = entry.proteins.first();

            FeatureRecord {
                accession: meta.accession.clone(),
                name: or_placeholder(meta.name.as_deref()),
                source_database: meta.source_database.clone(),
                entry_type: meta.entry_type.clone(),
                integrated: or_placeholder(meta.integrated.as_deref()),
                signatures: join_signatures(meta),
                go_terms: join_go_terms(meta),
                protein_accession: protein
                    .map(|p| p.accession.to_uppercase())
                    .unwrap_or_else(|| EMPTY_FIELD.to_string()),
                protein_length: protein
                    .map(|p| p.protein_length.to_string())
                    .unwrap_or_else(|| EMPTY_FIELD.to_string()),
                locations: locations.clone(),
            }
        })
        .collect()
}

/// Substitute "-" for a missing or empty value
fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => EMPTY_FIELD.to_string(),
    }
}

/// Comma-join all signature accessions across all member-database groups
fn join_signatures(meta: &EntryMetadata) -> String {
    let Some(databases) = meta.member_databases.as_ref().filter(|m| !m.is_empty()) else {
        return EMPTY_FIELD.to_string();
    };

    databases
        .values()
        .filter_map(|group| group.as_object())
        .flat_map(|group| group.keys())
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-join GO-term identifiers
fn join_go_terms(meta: &EntryMetadata) -> String {
    match meta.go_terms.as_deref() {
        Some(terms) if !terms.is_empty() => terms
            .iter()
            .map(|term| term.identifier.as_str())
            .collect::<Vec<_>>()
            .join(","),
        _ => EMPTY_FIELD.to_string(),
    }
}

/// Comma-join every start..end fragment span found anywhere in the response
fn collect_locations(response: &EntryResponse) -> String {
    response
        .results
        .iter()
        .flat_map(|entry| entry.entry_protein_locations.as_deref().unwrap_or_default())
        .flat_map(|location| &location.fragments)
        .map(|fragment| format!("{}..{}", fragment.start, fragment.end))
        .collect::<Vec<_>>()
        .join(",")
}
