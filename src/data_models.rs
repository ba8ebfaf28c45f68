use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_SORT_ORDER: &str = "UitspraakDatumDesc";
pub const DEFAULT_SEARCH_FIELD: &str = "AlleVelden";
pub const DEFAULT_PUBLICATION_STATUS: &str = "AlleenGepubliceerd";

/// Body of a POST to the search endpoint.
///
/// The filter arrays are always sent, always empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    pub start_row: u32,
    pub page_size: u32,
    pub should_return_highlights: bool,
    pub should_count_facets: bool,
    pub sort_order: String,
    pub search_terms: Vec<SearchTerm>,
    pub contentsoorten: Vec<String>,
    pub rechtsgebieden: Vec<String>,
    pub instanties: Vec<String>,
    pub datum_publicatie: Vec<String>,
    pub datum_uitspraak: Vec<String>,
    pub advanced: Advanced,
    pub correlation_id: String,
    pub proceduresoorten: Vec<String>,
}

impl SearchRequest {
    pub fn new(terms: Vec<SearchTerm>, page_size: u32, correlation_id: String) -> SearchRequest {
        SearchRequest {
            start_row: 0,
            page_size,
            should_return_highlights: true,
            should_count_facets: true,
            sort_order: DEFAULT_SORT_ORDER.to_string(),
            search_terms: terms,
            contentsoorten: vec![],
            rechtsgebieden: vec![],
            instanties: vec![],
            datum_publicatie: vec![],
            datum_uitspraak: vec![],
            advanced: Advanced::default(),
            correlation_id,
            proceduresoorten: vec![],
        }
    }

    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> SearchRequest {
        self.sort_order = sort_order.into();
        self
    }

    /// Copy of this request positioned at `start_row`.
    pub fn at_offset(&self, start_row: u32) -> SearchRequest {
        SearchRequest {
            start_row,
            ..self.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchTerm {
    pub term: String,
    pub field: String,
}

impl SearchTerm {
    pub fn new(term: impl Into<String>, field: impl Into<String>) -> SearchTerm {
        SearchTerm {
            term: term.into(),
            field: field.into(),
        }
    }

    pub fn all_fields(term: impl Into<String>) -> SearchTerm {
        SearchTerm::new(term, DEFAULT_SEARCH_FIELD)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Advanced {
    #[serde(rename = "PublicatieStatus")]
    pub publication_status: String,
}

impl Default for Advanced {
    fn default() -> Self {
        Advanced {
            publication_status: DEFAULT_PUBLICATION_STATUS.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SearchResponse {
    #[serde(rename = "Results", default, deserialize_with = "null_as_default")]
    pub results: Vec<CaseResult>,
}

/// One hit. Only `text_fragment` is inspected; the rest is carried through.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CaseResult {
    #[serde(rename = "Tekstfragment", deserialize_with = "null_as_default")]
    pub text_fragment: String,
    #[serde(rename = "Titel", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "TitelEmphasis", deserialize_with = "null_as_default")]
    pub title_emphasis: String,
    #[serde(rename = "InterneUrl", deserialize_with = "null_as_default")]
    pub internal_url: String,
    #[serde(rename = "DeeplinkUrl", deserialize_with = "null_as_default")]
    pub deeplink_url: String,
    #[serde(rename = "Uitspraakdatum", deserialize_with = "null_as_default")]
    pub ruling_date: String,
    #[serde(rename = "UitspraakdatumType", deserialize_with = "null_as_default")]
    pub ruling_date_type: String,
    #[serde(rename = "RelatieVerwijzingen", deserialize_with = "null_as_default")]
    pub related_references: Vec<RelatedReference>,
    #[serde(rename = "Publicatiedatum", deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(rename = "GerechtelijkProductType", deserialize_with = "null_as_default")]
    pub judicial_product_type: String,
    #[serde(rename = "Publicatiestatus", deserialize_with = "null_as_default")]
    pub publication_status: String,
    #[serde(rename = "PublicatiedatumDate", deserialize_with = "null_as_default")]
    pub publication_date_iso: String,
    #[serde(rename = "Proceduresoorten", deserialize_with = "null_as_default")]
    pub procedure_types: Vec<String>,
    #[serde(rename = "Vindplaatsen", deserialize_with = "null_as_default")]
    pub citation_sources: Vec<CitationSource>,
    #[serde(rename = "Rechtsgebieden", deserialize_with = "null_as_default")]
    pub legal_areas: Vec<String>,
    #[serde(rename = "InformatieNietGepubliceerdMessage", deserialize_with = "null_as_default")]
    pub not_published_message: String,
    #[serde(rename = "IsInactief", deserialize_with = "null_as_default")]
    pub is_inactive: bool,
}

impl CaseResult {
    pub fn new(title: &str, text_fragment: &str, deeplink_url: &str) -> CaseResult {
        CaseResult {
            title: title.to_string(),
            text_fragment: text_fragment.to_string(),
            deeplink_url: deeplink_url.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RelatedReference {
    #[serde(rename = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CitationSource {
    #[serde(rename = "Vindplaats", deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "VindplaatsAnnotator", deserialize_with = "null_as_default")]
    pub annotator: String,
    #[serde(rename = "VindplaatsUrl", deserialize_with = "null_as_default")]
    pub url: String,
}

// The API sends `null` for absent strings, flags and lists alike.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
