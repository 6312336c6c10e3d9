//! Gauge MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - convert: Convert a value between two units of one category
//! - convert_all: Convert a value into every unit of its category
//! - swap: Convert in the reverse direction (to -> from)
//! - list_categories: List categories, optionally for one group
//! - list_units: List the units of a category
//! - format: Render a number with the canonical result formatting

mod tools;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use gauge_units::{Catalog, CatalogError};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "gauge";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Optional catalog file, from the environment
fn catalog_path() -> Option<PathBuf> {
    env::var_os("GAUGE_CATALOG_PATH").map(PathBuf::from)
}

/// Load the configured catalog, falling back to the built-in one
fn load_catalog() -> Result<Catalog, CatalogError> {
    match catalog_path() {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::from_path(&path)
        }
        None => {
            info!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub(crate) struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub(crate) struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub(crate) struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    pub(crate) fn parse_error(message: impl Into<String>) -> Self {
        McpError { code: -32700, message: message.into(), data: None }
    }

    pub(crate) fn method_not_found(method: &str) -> Self {
        McpError { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let catalog = match load_catalog() {
        Ok(c) => c,
        Err(e) => {
            error!("failed to load catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Gauge MCP server started");
    info!(categories = catalog.categories().count(), "catalog ready");

    let stdin = io::stdin();
    let reader = io::BufReader::new(stdin.lock());
    let stdout = io::stdout();

    match serve(&catalog, reader, stdout.lock()) {
        Ok(()) => {
            info!("server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read requests line by line until EOF, writing one response line per
/// request that carries an id
fn serve<R: BufRead, W: Write>(catalog: &Catalog, reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "received");

        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = handle_request(catalog, &request);
                // Notifications (no id) should NOT receive a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    continue;
                }
                response
            }
            Err(e) => {
                warn!("error parsing request: {}", e);
                McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: None,
                    result: None,
                    error: Some(McpError::parse_error(format!("Parse error: {}", e))),
                }
            }
        };

        let response_json = serde_json::to_string(&response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", response_json)?;
        writer.flush()?;
    }

    info!("client disconnected (EOF)");
    Ok(())
}

fn handle_request(catalog: &Catalog, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(tools::list()),
        "tools/call" => handle_tool_call(catalog, &request.params),

        _ => Err(McpError::method_not_found(&request.method)),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion between units of one category"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Gauge converts values between units of the same category (length, mass, temperature, fuel economy, ...). Use list_categories and list_units to discover unit symbols, then convert or convert_all."
    }))
}

fn handle_tool_call(catalog: &Catalog, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    tools::call(catalog, name, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Vec<JsonValue> {
        let catalog = Catalog::builtin();
        let mut out = Vec::new();
        serve(&catalog, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initialize() {
        let responses = run(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test"}}}"#);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "gauge");
    }

    #[test]
    fn test_notification_gets_no_response() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","method":"initialized"}"#, "\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#, "\n",
        );
        let responses = run(input);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 2);
    }

    #[test]
    fn test_parse_error() {
        let responses = run("{not json\n");
        assert_eq!(responses[0]["error"]["code"], -32700);
    }

    #[test]
    fn test_unknown_method() {
        let responses = run(r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#);
        assert_eq!(responses[0]["error"]["code"], -32601);
    }

    #[test]
    fn test_tool_call_convert() {
        let responses = run(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"convert","arguments":{"value":0,"from":"°C","to":"°F"}}}"#);
        let result = &responses[0]["result"];
        assert_eq!(result["isError"], false);
        assert_eq!(result["formattedValue"], "32");
        assert_eq!(result["content"][0]["text"], "0 °C = 32 °F");
    }

    #[test]
    fn test_tool_call_missing_params() {
        let responses = run(r#"{"jsonrpc":"2.0","id":5,"method":"tools/call"}"#);
        assert_eq!(responses[0]["error"]["code"], -32602);
    }
}
