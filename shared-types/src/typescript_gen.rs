use crate::{CreateMessageRequest, ErrorResponse, HealthResponse, MessageItem};
use std::error::Error;
use ts_rs::{ExportError, TS};

type Exporter = fn() -> Result<String, ExportError>;

const EXPORTERS: &[(&str, Exporter)] = &[
    ("MessageItem", MessageItem::export_to_string),
    ("CreateMessageRequest", CreateMessageRequest::export_to_string),
    ("HealthResponse", HealthResponse::export_to_string),
    ("ErrorResponse", ErrorResponse::export_to_string),
];

/// Every type served by the board API, in export order
pub fn api_type_names() -> Vec<&'static str> {
    EXPORTERS.iter().map(|(name, _)| *name).collect()
}

/// Renders the named types as one TypeScript snippet without ts-rs headers.
pub fn generate_typescript_definitions(type_names: &[&str]) -> Result<String, Box<dyn Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let definitions = type_names
        .iter()
        .map(|name| export_type(name).map(|def| strip_generated_header(&def)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(definitions
        .into_iter()
        .filter(|def| !def.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn Error>> {
    let (_, export) = EXPORTERS
        .iter()
        .find(|(known, _)| *known == name)
        .ok_or_else(|| format!("Unknown type: '{name}'. Known types: {:?}", api_type_names()))?;

    Ok(export()?)
}

fn strip_generated_header(type_def: &str) -> String {
    type_def
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("import type") && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
