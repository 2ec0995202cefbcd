//! End-to-end tests from a mocked sheet endpoint to what the UI shows.
//!
//! Each test starts its own wiremock server serving a sheet export, then
//! runs load → group → filter → selection → detail against it.

use helpdesk::catalog::{self, Topic};
use helpdesk::detail::{DetailModel, LinkMode, Media};
use helpdesk::feed::{build_client, load, FetchError};
use helpdesk::selection::SelectionState;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHEET: &str = r#"[
    {"Category": "Get Started", "Title": "Welcome to the **CRM**", "Content": "Log in with your **work email**.\nThen invite your team.", "Icon Url": "https://cdn.example.com/play.svg"},
    {"Category": "Integrations", "Title": "Connect Gmail", "Content": "", "Image Url": "https://drive.google.com/file/d/IMG_A/view, https://drive.google.com/open?id=IMG_B ,"},
    {"Category": "", "Title": "Draft row"},
    {"Category": "Get Started", "Title": "Create your first lead", "Video Url": "https://drive.google.com/file/d/VID_1/view?usp=sharing"},
    {"Category": "Integrations", "Title": "Connect Outlook", "Content": 42}
]"#;

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/HelpTopics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("Content-Type", "application/json"),
        )
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/HelpTopics", server.uri())
}

fn titles(topics: &[Topic]) -> Vec<&str> {
    topics.iter().map(|t| t.title.as_str()).collect()
}

#[tokio::test]
async fn test_sheet_groups_into_categories() {
    let server = serve(SHEET).await;
    let rows = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);

    let groups = catalog::group(&rows);
    let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(names, vec!["Get Started", "Integrations"]);
    assert_eq!(
        titles(&groups[0].topics),
        vec!["Welcome to the **CRM**", "Create your first lead"]
    );
    assert_eq!(
        groups[0].icon_url.as_deref(),
        Some("https://cdn.example.com/play.svg")
    );
    assert_eq!(
        groups[1].topics[0].image,
        vec![
            "https://drive.google.com/file/d/IMG_A/view".to_string(),
            "https://drive.google.com/open?id=IMG_B".to_string(),
        ]
    );
    assert_eq!(groups[1].topics[1].content, "42");
}

#[tokio::test]
async fn test_search_and_selection_flow() {
    let server = serve(SHEET).await;
    let rows = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap();

    let mut state = SelectionState::new();
    state.load(catalog::group(&rows));
    assert_eq!(
        state.selected().map(|t| t.title.as_str()),
        Some("Welcome to the **CRM**")
    );

    state.set_query("CONNECT");
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.visible()[0].category, "Integrations");
    assert_eq!(state.expanded(), Some(0));

    assert!(state.select_visible(0, 1));
    state.clear_query();
    assert_eq!(state.visible().len(), 2);
    assert_eq!(state.expanded(), None);
    assert_eq!(
        state.selected().map(|t| t.title.as_str()),
        Some("Connect Outlook")
    );
}

#[tokio::test]
async fn test_detail_models_for_loaded_topics() {
    let server = serve(SHEET).await;
    let rows = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap();
    let groups = catalog::group(&rows);

    let welcome = DetailModel::from_topic(&groups[0].topics[0], LinkMode::Preview);
    assert_eq!(welcome.paragraphs.len(), 2);
    assert!(welcome.paragraphs[0].iter().any(|s| s.is_strong()));
    assert_eq!(welcome.media, Media::None);

    let lead = DetailModel::from_topic(&groups[0].topics[1], LinkMode::Direct);
    assert_eq!(
        lead.media,
        Media::Video("https://drive.google.com/file/d/VID_1/preview".into())
    );

    let gmail = DetailModel::from_topic(&groups[1].topics[0], LinkMode::Direct);
    assert_eq!(
        gmail.media.links(),
        &[
            "https://drive.google.com/uc?export=view&id=IMG_A".to_string(),
            "https://drive.google.com/uc?export=view&id=IMG_B".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_outline_matches_filtered_tree() {
    let server = serve(SHEET).await;
    let rows = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap();
    let groups = catalog::filter(&catalog::group(&rows), "lead");
    assert_eq!(
        catalog::outline(&groups),
        "▶ Get Started (1)\n  - Create your first lead\n"
    );
}

#[tokio::test]
async fn test_server_error_yields_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus(503)));
}

#[tokio::test]
async fn test_empty_sheet_gives_empty_center() {
    let server = serve("[]").await;
    let rows = load(&build_client().unwrap(), &endpoint(&server))
        .await
        .unwrap();

    let mut state = SelectionState::new();
    state.load(catalog::group(&rows));
    assert!(state.visible().is_empty());
    assert!(state.selected().is_none());
}
