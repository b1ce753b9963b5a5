use mcpverse::mcp::{
    McpverseServer,
    types::{GetEntryParams, ListEntriesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, extract_tool_error_text, extract_tool_result_json, fixture_catalog,
};

fn list_params(registry_path: String) -> ListEntriesParams {
    ListEntriesParams {
        registry_path,
        category: None,
        offset: None,
        limit: None,
    }
}

// ============================================================================
// list_entries tests
// ============================================================================

#[tokio::test]
async fn test_list_entries_all() {
    let fixture = fixture_catalog().unwrap();
    let server = McpverseServer::new();

    let result = server
        .list_entries(Parameters(list_params(fixture.registry())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(
        json_result["categories"],
        json!(["Communication", "Database", "database"])
    );
    let ids: Vec<&str> = json_result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["slack", "postgres", "sqlite", "notes"]);
    assert_eq!(json_result["items"][0]["official"], true);
    assert_eq!(json_result["items"][0]["hasInstallation"], true);
    assert_eq!(json_result["items"][2]["hasInstallation"], false);
    assert_eq!(json_result["pagination"]["hasMore"], false);
    assert_eq!(json_result["pagination"]["limit"], 50);
}

#[tokio::test]
async fn test_list_entries_category_is_case_insensitive() {
    let fixture = fixture_catalog().unwrap();
    let server = McpverseServer::new();

    let params = ListEntriesParams {
        category: Some("DATABASE".to_string()),
        ..list_params(fixture.registry())
    };
    let result = server.list_entries(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["items"][0]["id"], "postgres");
    assert_eq!(json_result["items"][1]["id"], "sqlite");
}

#[tokio::test]
async fn test_list_entries_pagination() {
    let fixture = fixture_catalog().unwrap();
    let server = McpverseServer::new();

    let params = ListEntriesParams {
        offset: Some(1),
        limit: Some(2),
        ..list_params(fixture.registry())
    };
    let result = server.list_entries(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "postgres");
    assert_eq!(json_result["pagination"]["hasMore"], true);

    let params = ListEntriesParams {
        offset: Some(3),
        limit: Some(500),
        ..list_params(fixture.registry())
    };
    let result = server.list_entries(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["pagination"]["limit"], 100);
    assert_eq!(json_result["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_list_entries_missing_registry_is_error() {
    let server = McpverseServer::new();

    let result = server
        .list_entries(Parameters(list_params(
            "/nonexistent/mcpverse.json".to_string(),
        )))
        .await;

    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to load registry"));
    assert!(err.message.contains("/nonexistent/mcpverse.json"));
}

#[tokio::test]
async fn test_registry_is_cached_per_path() {
    let fixture = fixture_catalog().unwrap();
    let server = McpverseServer::new();

    server
        .list_entries(Parameters(list_params(fixture.registry())))
        .await
        .unwrap();

    // The document is read once; later edits are not picked up.
    fixture.write_registry(&json!({})).unwrap();

    let result = server
        .list_entries(Parameters(list_params(fixture.registry())))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 4);

    // A new server starts with an empty cache.
    let result = McpverseServer::new()
        .list_entries(Parameters(list_params(fixture.registry())))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 0);
}

// ============================================================================
// get_entry tests
// ============================================================================

#[tokio::test]
async fn test_get_entry() {
    let fixture = fixture_catalog().unwrap();
    let server = McpverseServer::new();

    let params = Parameters(GetEntryParams {
        registry_path: fixture.registry(),
        id: "postgres".to_string(),
    });
    let result = server.get_entry(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["id"], "postgres");
    assert_eq!(json_result["name"], "Postgres");
    assert_eq!(json_result["installation"]["command"], "docker");
    assert_eq!(
        json_result["installation"]["variables"]["SCHEMA"]["placeholder"],
        "public"
    );
}

#[tokio::test]
async fn test_get_entry_unknown_id() {
    let fixture = McpTestFixture::with_registry(&json!({ "a": { "name": "A" } })).unwrap();
    let server = McpverseServer::new();

    let params = Parameters(GetEntryParams {
        registry_path: fixture.registry(),
        id: "b".to_string(),
    });
    let result = server.get_entry(params).await.unwrap();

    assert_eq!(
        extract_tool_error_text(&result),
        "No MCP found with id \"b\""
    );
}
