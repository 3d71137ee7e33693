//! JSON API for tooling that wants structured output instead of SDL.
//!
//! Every function takes schema text and returns a JSON envelope string
//! `{ "success": bool, "data"?: ..., "error"?: string }`.

use serde::Serialize;

use crate::catalogs::{CONVERTER_VERSION, PRELUDE_SCALARS};
use crate::schema::translate_schema;
use crate::types::RenderedType;

#[derive(Debug, Serialize)]
pub struct JsonResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured form of a converted schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    pub converter_version: &'static str,
    pub scalars: Vec<&'static str>,
    pub types: Vec<RenderedType>,
}

/// Build the structured document for `content`.
pub fn schema_document(content: &str) -> SchemaDocument {
    SchemaDocument {
        converter_version: CONVERTER_VERSION,
        scalars: PRELUDE_SCALARS.to_vec(),
        types: translate_schema(content),
    }
}

/// Convert Prisma schema text and return the envelope as compact JSON.
pub fn convert_to_json(content: &str) -> String {
    encode(content, false)
}

/// Same as [`convert_to_json`], pretty-printed with a trailing newline.
pub fn convert_to_json_pretty(content: &str) -> String {
    let mut out = encode(content, true);
    out.push('\n');
    out
}

fn encode(content: &str, pretty: bool) -> String {
    let result = std::panic::catch_unwind(|| schema_document(content));

    let envelope = match result {
        Ok(doc) => JsonResult {
            success: true,
            data: Some(doc),
            error: None,
        },
        Err(_) => JsonResult {
            success: false,
            data: None,
            error: Some("Internal converter panic".to_string()),
        },
    };

    let encoded = if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    };

    encoded.unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":{}}}"#,
            serde_json::Value::String(format!("JSON serialization error: {e}"))
        )
    })
}
