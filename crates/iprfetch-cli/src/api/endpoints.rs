//! API endpoint URL builders
//!
//! Helper functions to construct InterPro API URLs.

/// Public InterPro REST API base URL
pub const INTERPRO_API_URL: &str = "https://www.ebi.ac.uk/interpro/api";

/// Fixed page size for entry queries. Additional pages are not requested.
pub const PAGE_SIZE: u32 = 200;

/// Extra metadata fields requested alongside each entry
pub const EXTRA_FIELDS: &str = "hierarchy,short_name";

/// Build the entry/protein lookup URL for one UniProt identifier
pub fn entry_protein_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/entry/all/protein/UniProt/{}/?page_size={}&extra_fields={}",
        base_url,
        urlencoding::encode(query),
        PAGE_SIZE,
        EXTRA_FIELDS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_protein_url() {
        let url = entry_protein_url(INTERPRO_API_URL, "P12345");
        assert_eq!(
            url,
            "https://www.ebi.ac.uk/interpro/api/entry/all/protein/UniProt/P12345/?page_size=200&extra_fields=hierarchy,short_name"
        );
    }

    #[test]
    fn test_entry_protein_url_custom_base() {
        let url = entry_protein_url("http://localhost:8000", "Q9Y6K9");
        assert_eq!(
            url,
            "http://localhost:8000/entry/all/protein/UniProt/Q9Y6K9/?page_size=200&extra_fields=hierarchy,short_name"
        );
    }

    #[test]
    fn test_entry_protein_url_encodes_identifier() {
        let url = entry_protein_url("http://localhost:8000", "P1 23/45");
        assert!(url.contains("/UniProt/P1%2023%2F45/"));
    }
}
