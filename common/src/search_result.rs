use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::search_const::RESULT_CARD_AUTHOR_LIMIT;
use crate::search_query::FacetField;

pub const FACET_PUBLICATION_YEAR: &str = "publication_year";

/// What the search endpoint answers for one page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: u64,
    pub results: Vec<ArticleResult>,
    #[serde(default)]
    pub facets: SearchFacets,
}

impl SearchResponse {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Parses `body`, falling back to the empty response when it is not the
    /// expected JSON document.
    pub fn from_json_or_empty(body: &str) -> Self {
        match Self::from_json(body) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("search response is not usable JSON: {}", e);
                Self::default()
            }
        }
    }
}

/// One facet value plus its document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    #[serde(deserialize_with = "loose_string")]
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
}

impl FacetBucket {
    pub fn new(key: impl Into<String>, doc_count: u64) -> Self {
        Self { key: key.into(), doc_count }
    }
}

/// Facet buckets keyed by dimension name (`publication_year`, `country`,
/// `journal`).
///
/// Deserializes both the plain `{"country": {"buckets": [..]}}` shape and the
/// filtered-aggregation shape
/// `{"_filter_country": {"doc_count": 9, "country": {"buckets": [..]}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchFacets(BTreeMap<String, FacetBuckets>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetBuckets {
    #[serde(default)]
    pub buckets: Vec<FacetBucket>,
}

impl SearchFacets {
    pub fn buckets(&self, dimension: &str) -> &[FacetBucket] {
        self.0.get(dimension).map(|b| b.buckets.as_slice()).unwrap_or_default()
    }

    pub fn publication_year(&self) -> &[FacetBucket] {
        self.buckets(FACET_PUBLICATION_YEAR)
    }

    pub fn facet(&self, field: FacetField) -> &[FacetBucket] {
        self.buckets(field.query_key())
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|b| b.buckets.is_empty())
    }

    pub fn with_buckets(mut self, dimension: impl Into<String>, buckets: Vec<FacetBucket>) -> Self {
        self.0.insert(dimension.into(), FacetBuckets { buckets });
        self
    }
}

impl<'de> Deserialize<'de> for SearchFacets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?
            .unwrap_or_default();
        let mut facets = BTreeMap::new();
        for (key, value) in raw {
            let dimension = key.strip_prefix("_filter_").unwrap_or(&key).to_string();
            let inner = match value.get(&dimension) {
                Some(nested) if nested.get("buckets").is_some() => nested.clone(),
                _ => value,
            };
            let Ok(buckets) = serde_json::from_value::<FacetBuckets>(inner) else {
                tracing::debug!("skipping facet {} with unexpected shape", key);
                continue;
            };
            facets.insert(dimension, buckets);
        }
        Ok(SearchFacets(facets))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleResult {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "loose_string")]
    pub title: String,
    #[serde(rename = "abstract", deserialize_with = "loose_string")]
    pub abstract_text: String,
    #[serde(deserialize_with = "nullable")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with = "loose_string")]
    pub publication_date: String,
    #[serde(deserialize_with = "nullable")]
    pub publication_info: Vec<PublicationInfo>,
    #[serde(deserialize_with = "nullable")]
    pub article_identifiers: Vec<ArticleIdentifier>,
}

impl ArticleResult {
    /// Authors as shown on a result card: at most five "Last, First" names,
    /// followed by "et al" when the list was cut.
    pub fn author_names_for_card(&self) -> Vec<String> {
        let mut names = self
            .authors
            .iter()
            .take(RESULT_CARD_AUTHOR_LIMIT)
            .map(Author::citation_name)
            .collect::<Vec<_>>();
        if self.authors.len() > RESULT_CARD_AUTHOR_LIMIT {
            names.push("et al".to_string());
        }
        names
    }

    pub fn primary_publication(&self) -> Option<&PublicationInfo> {
        self.publication_info.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "loose_string")]
    pub first_name: String,
    #[serde(deserialize_with = "loose_string")]
    pub last_name: String,
    pub orcid: Option<String>,
}

impl Author {
    /// "Last, First", skipping empty parts.
    pub fn citation_name(&self) -> String {
        [self.last_name.as_str(), self.first_name.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationInfo {
    #[serde(deserialize_with = "loose_string")]
    pub journal_title: String,
    #[serde(deserialize_with = "loose_string")]
    pub journal_volume: String,
    #[serde(deserialize_with = "loose_string")]
    pub journal_issue: String,
    #[serde(deserialize_with = "loose_string")]
    pub volume_year: String,
    #[serde(deserialize_with = "loose_string")]
    pub page_start: String,
    #[serde(deserialize_with = "loose_string")]
    pub page_end: String,
    #[serde(deserialize_with = "loose_string")]
    pub publisher: String,
}

impl PublicationInfo {
    /// e.g. `JHEP, Volume 2021 (2021) Issue 3 (Pages 12-40)`
    pub fn summary(&self) -> String {
        let mut text = self.journal_title.clone();
        if !self.journal_volume.is_empty() {
            text.push_str(&format!(", Volume {}", self.journal_volume));
        }
        if !self.volume_year.is_empty() {
            text.push_str(&format!(" ({})", self.volume_year));
        }
        let issue = self.journal_issue.trim_start_matches('0');
        if !issue.is_empty() {
            text.push_str(&format!(" Issue {}", issue));
        }
        let page_start = self.page_start.trim_start_matches('0');
        if !page_start.is_empty() {
            let page_end = self.page_end.trim_start_matches('0');
            if page_end.is_empty() {
                text.push_str(&format!(" (Page {})", page_start));
            } else {
                text.push_str(&format!(" (Pages {}-{})", page_start, page_end));
            }
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleIdentifier {
    #[serde(deserialize_with = "loose_string")]
    pub identifier_type: String,
    #[serde(deserialize_with = "loose_string")]
    pub identifier_value: String,
}

impl ArticleIdentifier {
    pub fn resolve_link(&self) -> String {
        if self.identifier_value.is_empty() {
            return "/".to_string();
        }
        match self.identifier_type.as_str() {
            "DOI" => format!("https://doi.org/{}", self.identifier_value),
            "arXiv" => format!("https://arxiv.org/abs/{}", self.identifier_value),
            _ => "/".to_string(),
        }
    }
}

/// Strings, numbers and null all land in a `String`.
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const API_BODY: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 11,
                "title": "Search for <i>CP</i> violation",
                "abstract": null,
                "authors": [{"first_name": "Ada", "last_name": "Byron", "orcid": null}],
                "publication_date": "2021-03-04",
                "publication_info": [{"journal_title": "JHEP", "journal_volume": "2021", "volume_year": 2021, "journal_issue": "03", "page_start": 12, "page_end": null}],
                "article_identifiers": [{"identifier_type": "DOI", "identifier_value": "10.1007/x"}]
            },
            {"id": 12, "title": "Second"}
        ],
        "facets": {
            "_filter_publication_year": {"doc_count": 2, "publication_year": {"buckets": [
                {"key": 1577836800000, "key_as_string": "2020-01-01T00:00:00.000Z", "doc_count": 1},
                {"key": "2021-01-01T00:00:00.000Z", "doc_count": 1}
            ]}},
            "_filter_country": {"doc_count": 2, "country": {"buckets": [{"key": "Japan", "doc_count": 2}]}},
            "journal": {"buckets": [{"key": "JHEP", "doc_count": 1}]}
        }
    }"#;

    #[test]
    fn parses_api_response_with_both_facet_shapes() {
        let response = SearchResponse::from_json(API_BODY).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].abstract_text, "");
        assert_eq!(response.results[0].publication_info[0].volume_year, "2021");
        assert_eq!(response.facets.publication_year().len(), 2);
        assert_eq!(response.facets.publication_year()[0].key, "1577836800000");
        assert_eq!(response.facets.facet(FacetField::Country), &[FacetBucket::new("Japan", 2)]);
        assert_eq!(response.facets.facet(FacetField::Journal), &[FacetBucket::new("JHEP", 1)]);
    }

    #[test]
    fn non_json_or_foreign_json_degrades_to_empty() {
        assert_eq!(SearchResponse::from_json_or_empty("<html>502 Bad Gateway</html>"), SearchResponse::default());
        assert!(SearchResponse::from_json(r#"{"detail": "Not found."}"#).is_err());
    }

    #[test]
    fn serialized_facets_deserialize_back() {
        let facets = SearchFacets::default().with_buckets("country", vec![FacetBucket::new("Chile", 4)]);
        let json = serde_json::to_string(&facets).unwrap();
        let back: SearchFacets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, facets);
    }

    #[test]
    fn author_list_is_cut_after_five() {
        let authors = (0..7)
            .map(|i| Author { first_name: format!("F{i}"), last_name: format!("L{i}"), orcid: None })
            .collect();
        let article = ArticleResult { authors, ..ArticleResult::default() };
        let names = article.author_names_for_card();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "L0, F0");
        assert_eq!(names[5], "et al");
    }

    #[test]
    fn identifier_links() {
        let doi = ArticleIdentifier { identifier_type: "DOI".into(), identifier_value: "10.1/abc".into() };
        let arxiv = ArticleIdentifier { identifier_type: "arXiv".into(), identifier_value: "2101.00001".into() };
        let other = ArticleIdentifier { identifier_type: "ISBN".into(), identifier_value: "123".into() };
        assert_eq!(doi.resolve_link(), "https://doi.org/10.1/abc");
        assert_eq!(arxiv.resolve_link(), "https://arxiv.org/abs/2101.00001");
        assert_eq!(other.resolve_link(), "/");
    }

    #[test]
    fn publication_summary_strips_leading_zeros() {
        let info = PublicationInfo {
            journal_title: "JHEP".into(),
            journal_volume: "2021".into(),
            volume_year: "2021".into(),
            journal_issue: "03".into(),
            page_start: "012".into(),
            page_end: "040".into(),
            ..PublicationInfo::default()
        };
        assert_eq!(info.summary(), "JHEP, Volume 2021 (2021) Issue 3 (Pages 12-40)");
    }
}
