use log::info;
use std::fs;
use std::path::Path;

use crate::catalogs::PRELUDE_SCALARS;
use crate::error::ConvertError;
use crate::json::convert_to_json_pretty;
use crate::segmenter::segment;
use crate::translator::translate_block;
use crate::types::*;

/// Segment and translate a whole Prisma schema, one rendered type per model.
pub fn translate_schema(content: &str) -> Vec<RenderedType> {
    segment(content).iter().map(translate_block).collect()
}

/// Convert every model in `content` to GraphQL type text, in source order.
pub fn convert_prisma_to_graphql(content: &str) -> Vec<String> {
    translate_schema(content)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Convert a single raw model block to GraphQL type text.
pub fn convert_model_to_graphql(block: &RawModelBlock) -> String {
    translate_block(block).to_string()
}

/// Assemble the full GraphQL document: scalar prelude, then every type,
/// each followed by a blank line.
pub fn assemble(types: &[String]) -> String {
    let mut out = String::new();
    for scalar in PRELUDE_SCALARS {
        out.push_str("scalar ");
        out.push_str(scalar);
        out.push('\n');
    }
    out.push('\n');
    for ty in types {
        out.push_str(ty);
        out.push_str("\n\n");
    }
    out
}

/// Render a Prisma schema into a complete GraphQL schema document.
pub fn render_schema(content: &str) -> String {
    assemble(&convert_prisma_to_graphql(content))
}

/// Read `input`, convert it, and write GraphQL SDL to `output`.
pub fn convert_schema(input: &Path, output: &Path) -> Result<ConvertSummary, ConvertError> {
    convert_schema_as(input, output, OutputFormat::Sdl)
}

/// Like [`convert_schema`], writing the chosen output format.
pub fn convert_schema_as(
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<ConvertSummary, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let content = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let types = convert_prisma_to_graphql(&content);
    let model_count = types.len();
    let rendered = match format {
        OutputFormat::Sdl => assemble(&types),
        OutputFormat::Json => convert_to_json_pretty(&content),
    };

    fs::write(output, rendered).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "converted {model_count} models from {} to {}",
        input.display(),
        output.display()
    );

    Ok(ConvertSummary {
        model_count,
        output: output.to_path_buf(),
    })
}
