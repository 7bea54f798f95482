//! API response types
//!
//! Typed model of the InterPro entry/protein response. Only the fields the
//! extractor consumes are declared; everything else in the payload is
//! ignored. Optional fields mirror what the API actually nulls out or omits.

use serde::Deserialize;

/// Top-level response from the entry/protein endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryResponse {
    /// Entries matching the queried protein, in API order
    #[serde(default)]
    pub results: Vec<Entry>,
}

/// One domain/family/site annotation entry
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub metadata: EntryMetadata,

    /// Proteins the entry was matched against; the first one carries the
    /// accession and length reported in the flat record
    #[serde(default)]
    pub proteins: Vec<EntryProtein>,

    #[serde(default)]
    pub entry_protein_locations: Option<Vec<EntryLocation>>,
}

/// Entry metadata block
#[derive(Debug, Clone, Deserialize)]
pub struct EntryMetadata {
    pub accession: String,

    #[serde(default)]
    pub name: Option<String>,

    pub source_database: String,

    #[serde(rename = "type")]
    pub entry_type: String,

    /// InterPro accession this signature is integrated into, if any
    #[serde(default)]
    pub integrated: Option<String>,

    /// Member database name -> { signature accession -> signature name }.
    /// Kept as a raw JSON map so signature accessions come out in response
    /// order (serde_json is built with preserve_order).
    #[serde(default)]
    pub member_databases: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default)]
    pub go_terms: Option<Vec<GoTerm>>,
}

/// Gene Ontology annotation attached to an entry
#[derive(Debug, Clone, Deserialize)]
pub struct GoTerm {
    pub identifier: String,
}

/// Protein matched by an entry
#[derive(Debug, Clone, Deserialize)]
pub struct EntryProtein {
    pub accession: String,
    pub protein_length: u64,
}

/// A located match of an entry on a protein sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryLocation {
    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

/// A start..end residue span
#[derive(Debug, Clone, Deserialize)]
pub struct Fragment {
    pub start: i64,
    pub end: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_response() {
        let value = json!({
            "count": 1,
            "next": null,
            "results": [{
                "metadata": {
                    "accession": "IPR000001",
                    "name": "Kringle",
                    "source_database": "interpro",
                    "type": "domain",
                    "integrated": null,
                    "member_databases": {
                        "pfam": {"PF00051": "Kringle"},
                        "smart": {"SM00130": "KR"}
                    },
                    "go_terms": [
                        {"identifier": "GO:0005515", "name": "protein binding"}
                    ]
                },
                "proteins": [
                    {"accession": "p12345", "protein_length": 350}
                ],
                "entry_protein_locations": [
                    {"fragments": [{"start": 10, "end": 90}]}
                ]
            }]
        });

        let response: EntryResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.results.len(), 1);

        let entry = &response.results[0];
        assert_eq!(entry.metadata.accession, "IPR000001");
        assert_eq!(entry.metadata.name.as_deref(), Some("Kringle"));
        assert_eq!(entry.metadata.entry_type, "domain");
        assert_eq!(entry.metadata.integrated, None);
        assert_eq!(entry.proteins[0].accession, "p12345");
        assert_eq!(entry.proteins[0].protein_length, 350);

        let locations = entry.entry_protein_locations.as_ref().unwrap();
        assert_eq!(locations[0].fragments[0].start, 10);
        assert_eq!(locations[0].fragments[0].end, 90);
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let value = json!({
            "results": [{
                "metadata": {
                    "accession": "IPR000001",
                    "name": null,
                    "source_database": "interpro",
                    "type": "domain",
                    "integrated": null,
                    "member_databases": {},
                    "go_terms": []
                },
                "proteins": [{"accession": "p12345", "protein_length": 350}]
            }]
        });

        let response: EntryResponse = serde_json::from_value(value).unwrap();
        let entry = &response.results[0];
        assert_eq!(entry.metadata.name, None);
        assert!(entry.metadata.member_databases.as_ref().unwrap().is_empty());
        assert!(entry.entry_protein_locations.is_none());
    }

    #[test]
    fn test_deserialize_missing_results() {
        let response: EntryResponse = serde_json::from_value(json!({"count": 0})).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_member_databases_preserve_order() {
        let value = json!({
            "accession": "IPR000001",
            "name": "Kringle",
            "source_database": "interpro",
            "type": "domain",
            "member_databases": {
                "smart": {"SM00130": "KR"},
                "pfam": {"PF00051": "Kringle"}
            }
        });

        let meta: EntryMetadata = serde_json::from_value(value).unwrap();
        let keys: Vec<&String> = meta.member_databases.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["smart", "pfam"]);
    }
}
