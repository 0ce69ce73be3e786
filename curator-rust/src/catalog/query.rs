use super::filter::{FilterSelection, Period, Region};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_LABEL_LANGUAGES: &str = "[AUTO_LANGUAGE],pt,en";

/// Builds the SPARQL `SELECT` for one catalog page.
///
/// Every result is a painting (`wdt:P31 wd:Q3305213`) with an image, a
/// creator and an inception date. Results are ranked by sitelink count,
/// i.e. how many Wikimedia wikis reference the item.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    filter: FilterSelection,
    limit: usize,
    languages: String,
}

impl CatalogQuery {
    pub fn new(filter: FilterSelection) -> Self {
        Self {
            filter,
            limit: DEFAULT_PAGE_SIZE,
            languages: DEFAULT_LABEL_LANGUAGES.to_string(),
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub fn build(&self) -> String {
        let mut query = String::from(
            "SELECT DISTINCT ?item ?itemLabel ?image ?artistLabel ?date ?movementLabel ?sitelinks WHERE {\n  \
             ?item wdt:P31 wd:Q3305213;\n        \
             wdt:P18 ?image;\n        \
             wdt:P170 ?artist;\n        \
             wdt:P571 ?date;\n        \
             wikibase:sitelinks ?sitelinks.\n  \
             OPTIONAL { ?item wdt:P135 ?movement. }\n",
        );

        for clause in [
            region_clause(self.filter.region),
            date_filter(self.filter.period),
        ]
        .into_iter()
        .flatten()
        {
            query.push_str(&format!("  {clause}\n"));
        }

        query.push_str(&format!(
            "  SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{}\". }}\n}}\n\
             ORDER BY DESC(?sitelinks)\n\
             LIMIT {}\n",
            self.languages.replace('"', ""),
            self.limit
        ));

        query
    }
}

/// The year-range filter implied by `period`, absent for [`Period::All`].
pub fn date_filter(period: Period) -> Option<String> {
    period
        .year_range()
        .map(|(from, to)| format!("FILTER(YEAR(?date) >= {from} && YEAR(?date) <= {to})"))
}

/// The country→continent membership clause implied by `region`, absent for
/// [`Region::All`].
pub fn region_clause(region: Region) -> Option<String> {
    region
        .entity()
        .map(|continent| format!("?item wdt:P495 ?country. ?country wdt:P30 wd:{continent}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_query_has_required_patterns() {
        let query = CatalogQuery::new(FilterSelection::default()).build();

        for pattern in [
            "wdt:P31 wd:Q3305213",
            "wdt:P18 ?image",
            "wdt:P170 ?artist",
            "wdt:P571 ?date",
            "ORDER BY DESC(?sitelinks)",
            "LIMIT 20",
            "wikibase:language \"[AUTO_LANGUAGE],pt,en\"",
        ] {
            assert!(query.contains(pattern), "missing `{pattern}` in\n{query}");
        }
        assert!(!query.contains("FILTER("));
        assert!(!query.contains("wdt:P30"));
    }

    #[test]
    fn limit_and_languages_are_configurable() {
        let query = CatalogQuery::new(FilterSelection::default())
            .with_limit(12)
            .with_languages("en")
            .build();
        assert!(query.ends_with("LIMIT 12\n"));
        assert!(query.contains("wikibase:language \"en\""));
    }
}
