use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A SPARQL 1.1 query results document in its JSON serialization
/// (`application/sparql-results+json`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: SparqlHead,
    #[serde(default)]
    pub results: SparqlResults,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SparqlHead {
    /// The projected variable names, without the leading `?`.
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SparqlResults {
    /// One row per solution. Unbound variables are absent from the row.
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// One row of a query result, keyed by variable name.
pub type Binding = HashMap<String, RdfTerm>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    Uri,
    Literal,
    Bnode,
    /// Emitted by older SPARQL 1.0 endpoints instead of `literal` with a
    /// `datatype`.
    #[serde(rename = "typed-literal")]
    TypedLiteral,
}

/// An RDF term bound to a variable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RdfTerm {
    #[serde(rename = "type")]
    pub term_type: TermType,
    pub value: String,
    #[serde(rename = "xml:lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl RdfTerm {
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            term_type: TermType::Uri,
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            term_type: TermType::Literal,
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_wikidata_results() {
        let response: SparqlResponse = serde_json::from_value(json!({
            "head": { "vars": ["item", "itemLabel", "date"] },
            "results": {
                "bindings": [{
                    "item": { "type": "uri", "value": "http://www.wikidata.org/entity/Q12418" },
                    "itemLabel": { "xml:lang": "en", "type": "literal", "value": "Mona Lisa" },
                    "date": {
                        "datatype": "http://www.w3.org/2001/XMLSchema#dateTime",
                        "type": "literal",
                        "value": "1503-01-01T00:00:00Z"
                    }
                }]
            }
        }))
        .unwrap();

        assert_eq!(response.head.vars.len(), 3);
        let row = &response.results.bindings[0];
        assert_eq!(row["item"], RdfTerm::uri("http://www.wikidata.org/entity/Q12418"));
        assert_eq!(row["itemLabel"], RdfTerm::literal("Mona Lisa").with_lang("en"));
        assert_eq!(
            row["date"].datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#dateTime")
        );
    }

    #[test]
    fn tolerates_missing_sections() {
        let response: SparqlResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.bindings.is_empty());
    }
}
