//! Display labels for facet values. Presentation only: the raw bucket key is
//! what goes into the URL and to the API.

use std::borrow::Cow;

use crate::search_query::FacetField;
use crate::search_result::FacetBucket;

const JOURNAL_SHORT_NAMES: [(&str, &str); 4] = [
    ("Journal of Cosmology and Astroparticle Physics", "J. Cosm. and Astroparticle P."),
    ("Advances in High Energy Physics", "Adv. High Energy Phys."),
    ("Progress of Theoretical and Experimental Physics", "Prog. of Theor. and Exp. Phys."),
    ("Journal of High Energy Physics", "J. High Energy Phys."),
];

const COUNTRY_NAMES: [(&str, &str); 2] = [
    ("Taiwan, Province of China", "Taiwan"),
    ("Korea, Republic of", "South Korea"),
];

pub fn display_label(field: FacetField, key: &str) -> Cow<'_, str> {
    let table: &[(&str, &str)] = match field {
        FacetField::Journal => &JOURNAL_SHORT_NAMES,
        FacetField::Country => &COUNTRY_NAMES,
    };
    table
        .iter()
        .find(|(long, _)| *long == key)
        .map(|(_, short)| Cow::Borrowed(*short))
        .unwrap_or(Cow::Borrowed(key))
}

/// A bucket paired with the label the checkbox list shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledBucket {
    pub key: String,
    pub label: String,
    pub doc_count: u64,
}

/// Labels `buckets` for display. Countries are listed alphabetically by
/// label; journals keep the order the API returned.
pub fn labeled_buckets(field: FacetField, buckets: &[FacetBucket]) -> Vec<LabeledBucket> {
    let mut labeled = buckets
        .iter()
        .map(|b| LabeledBucket {
            key: b.key.clone(),
            label: display_label(field, &b.key).into_owned(),
            doc_count: b.doc_count,
        })
        .collect::<Vec<_>>();
    if field == FacetField::Country {
        labeled.sort_by(|a, b| a.label.cmp(&b.label));
    }
    labeled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_journals_are_shortened() {
        assert_eq!(display_label(FacetField::Journal, "Journal of High Energy Physics"), "J. High Energy Phys.");
        assert_eq!(display_label(FacetField::Journal, "Nuclear Physics B"), "Nuclear Physics B");
    }

    #[test]
    fn country_labels_are_rewritten_and_sorted_but_keys_kept() {
        let buckets = vec![
            FacetBucket::new("Taiwan, Province of China", 3),
            FacetBucket::new("Korea, Republic of", 5),
            FacetBucket::new("Japan", 8),
        ];
        let labeled = labeled_buckets(FacetField::Country, &buckets);
        let labels = labeled.iter().map(|b| b.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Japan", "South Korea", "Taiwan"]);
        assert_eq!(labeled[1].key, "Korea, Republic of");
    }

    #[test]
    fn journal_order_is_preserved() {
        let buckets = vec![FacetBucket::new("Z Journal", 1), FacetBucket::new("A Journal", 9)];
        let labeled = labeled_buckets(FacetField::Journal, &buckets);
        assert_eq!(labeled[0].key, "Z Journal");
    }
}
