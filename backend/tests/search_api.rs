use backend::api::search::{SearchApiClient, fetch_page_data, load_result_page};
use backend::config::SearchApiConfig;
use common::query_codec;
use common::result_page::{LoadState, ResultPageController};
use common::search_request::SearchRequestBuilder;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body() -> serde_json::Value {
    json!({
        "count": 45,
        "results": [{
            "id": 7,
            "title": "Search for <i>CP</i> violation",
            "abstract": null,
            "authors": [{"first_name": "Ada", "last_name": "Lovelace"}],
            "publication_date": "2021-03-01",
            "publication_info": [{"journal_title": "JHEP", "journal_volume": "2021"}],
            "article_identifiers": [{"identifier_type": "DOI", "identifier_value": "10.1/x"}]
        }],
        "facets": {
            "_filter_country": {"doc_count": 45, "country": {"buckets": [{"key": "Japan", "doc_count": 45}]}},
            "publication_year": {"buckets": [{"key": 2021, "doc_count": 45}]}
        }
    })
}

fn client_for(server: &MockServer) -> SearchApiClient {
    SearchApiClient::new(SearchApiConfig::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn loads_page_with_explicit_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "20"))
        .and(query_param("country", "Japan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ResultPageController::new();
    let state = load_result_page(&mut controller, &client, "country=Japan").await;

    assert_eq!(state, LoadState::Loaded);
    let data = controller.page_data();
    assert_eq!(data.count, 45);
    assert_eq!(data.results[0].id, 7);
    assert_eq!(data.results[0].abstract_text, "");
    assert_eq!(data.facets.buckets("country").len(), 1);
    assert_eq!(controller.page_count(), 3);

    // same query while loaded: no second request (`expect(1)` above)
    let state = load_result_page(&mut controller, &client, "?country=Japan").await;
    assert_eq!(state, LoadState::Loaded);
}

#[tokio::test]
async fn server_error_renders_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ResultPageController::new();
    let state = load_result_page(&mut controller, &client, "search=higgs").await;

    assert_eq!(state, LoadState::Failed);
    assert_eq!(controller.page_data().count, 0);
    assert!(controller.page_data().results.is_empty());
    assert!(controller.page_data().facets.is_empty());
    assert_eq!(controller.query().search, "higgs");
}

#[tokio::test]
async fn non_json_body_renders_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = SearchRequestBuilder::new(&query_codec::decode("")).build();
    assert!(client.fetch(&request).await.is_err());

    let data = fetch_page_data(&client, &request).await;
    assert_eq!(data.count, 0);
    assert!(data.results.is_empty());

    let mut controller = ResultPageController::new();
    assert_eq!(load_result_page(&mut controller, &client, "").await, LoadState::Failed);
}

#[tokio::test]
async fn failed_page_retries_on_resubmit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ResultPageController::new();
    assert_eq!(load_result_page(&mut controller, &client, "search=b").await, LoadState::Failed);
    assert_eq!(load_result_page(&mut controller, &client, "search=b").await, LoadState::Loaded);
    assert_eq!(controller.page_data().count, 45);
}

#[tokio::test]
async fn older_response_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .and(query_param("search", "old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1, "results": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search/article"))
        .and(query_param("search", "new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2, "results": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ResultPageController::new();
    let old_ticket = controller.navigate("search=old").unwrap();
    let new_ticket = controller.navigate("search=new").unwrap();

    let new_outcome = client.fetch(new_ticket.request()).await;
    let old_outcome = client.fetch(old_ticket.request()).await;
    assert!(controller.resolve(&new_ticket, new_outcome));
    assert!(!controller.resolve(&old_ticket, old_outcome));

    assert_eq!(controller.state(), LoadState::Loaded);
    assert_eq!(controller.page_data().count, 2);
}

#[tokio::test]
async fn export_requests_are_not_fetched() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let request = SearchRequestBuilder::new(&query_codec::decode("journal=JHEP")).build_export();
    assert!(client.fetch(&request).await.is_err());
    assert_eq!(
        client.url_for(&request),
        format!("{}/api/search/article?journal=JHEP&all=true&format=csv", server.uri())
    );
}
