//! Shared scaffolding for the integration tests: a mock SCIM server plus a
//! kittest harness running the full app.

use console_ui::ConsoleApp;
use console_ui::state::State;
use egui_kittest::Harness;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    // Held so the server outlives the harness.
    _mock_server: MockServer,
    pub harness: Harness<'a, ConsoleApp>,
}

impl TestCtx<'_> {
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scim2/Users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_payload()))
            .mount(&mock_server)
            .await;

        Self::from_server(mock_server)
    }

    pub async fn new_app_with_status(status: u16) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scim2/Users"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        Self::from_server(mock_server)
    }

    fn from_server(mock_server: MockServer) -> Self {
        let app = ConsoleApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }
}

fn users_payload() -> serde_json::Value {
    json!({
        "totalResults": 2,
        "Resources": [
            {
                "id": "u-1",
                "userName": "PRIMARY/jdoe",
                "name": { "givenName": "Jane", "familyName": "Doe" },
                "emails": ["jdoe@example.org"],
                "meta": { "lastModified": "2024-05-01T10:00:00Z" }
            },
            {
                "id": "u-2",
                "userName": "alice",
                "emails": [{ "value": "alice@example.org" }],
                "urn:scim:wso2:schema": {
                    "idpType": "Google",
                    "userSource": "DEFAULT",
                    "userSourceId": "idp-9"
                }
            }
        ]
    })
}
