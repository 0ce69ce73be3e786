use arte_connectors::sparql::{SparqlClient, SparqlClientOptions, SparqlEndpoint};
use dotenvy::dotenv;

const QUERY: &str = r#"SELECT ?item ?itemLabel ?sitelinks WHERE {
  ?item wdt:P31 wd:Q3305213;
        wdt:P170 wd:Q5598;
        wikibase:sitelinks ?sitelinks.
  SERVICE wikibase:label { bd:serviceParam wikibase:language "en". }
}
ORDER BY DESC(?sitelinks)
LIMIT 5
"#;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let client = SparqlClient::new(SparqlClientOptions {
        endpoint: std::env::var("WIKIDATA_ENDPOINT").ok(),
        user_agent: std::env::var("CURATOR_USER_AGENT").ok(),
        ..Default::default()
    });

    let results = client.select(QUERY).await.expect("select failed");

    for binding in &results.bindings {
        let label = binding.get("itemLabel").map_or("?", |term| term.value.as_str());
        let sitelinks = binding.get("sitelinks").map_or("0", |term| term.value.as_str());
        println!("{label} ({sitelinks} sitelinks)");
    }
}
