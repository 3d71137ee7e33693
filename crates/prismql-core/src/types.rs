use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Segmenter output (internal, not serialized)
// ---------------------------------------------------------------------------

/// The raw lines of one `model` declaration, from the declaration line up to
/// and including the line whose `}` closed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawModelBlock {
    pub name: String,
    pub lines: Vec<String>,
}

impl RawModelBlock {
    /// Lines between the declaration and the closing line.
    pub fn body(&self) -> &[String] {
        if self.lines.len() < 2 {
            return &[];
        }
        &self.lines[1..self.lines.len() - 1]
    }
}

/// One parsed field line. Derived per line, never stored past translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Raw type expression as written, markers included (`Post[]`, `String?`).
    pub source_type: String,
    /// Type name with `?` and `[]` stripped.
    pub base_type: String,
    pub is_list: bool,
    pub is_nullable: bool,
    pub has_relation_annotation: bool,
}

// ---------------------------------------------------------------------------
// Rendered GraphQL types (serialized to JSON output)
// ---------------------------------------------------------------------------

/// The element type of a GraphQL field: either a built-in/custom scalar or a
/// reference to another generated object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum TypeRef {
    Scalar(String),
    Model(String),
}

impl TypeRef {
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Scalar(name) | TypeRef::Model(name) => name,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, TypeRef::Model(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetType {
    pub base: TypeRef,
    /// Rendered as `[Base!]`; list elements are always non-null.
    pub list: bool,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.list {
            write!(f, "[{}!]", self.base.name())
        } else {
            f.write_str(self.base.name())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedField {
    pub name: String,
    pub target_type: TargetType,
    pub required: bool,
}

impl fmt::Display for RenderedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required = if self.required { "!" } else { "" };
        write!(f, "{}: {}{}", self.name, self.target_type, required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedType {
    pub name: String,
    pub fields: Vec<RenderedField>,
}

impl fmt::Display for RenderedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "type {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        f.write_str("}")
    }
}

// ---------------------------------------------------------------------------
// Driver results
// ---------------------------------------------------------------------------

/// File format written by the whole-schema driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GraphQL schema definition language.
    #[default]
    Sdl,
    /// The JSON envelope produced by [`crate::json::convert_to_json`].
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sdl" | "graphql" => Ok(OutputFormat::Sdl),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected sdl or json)")),
        }
    }
}

/// What a whole-schema conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub model_count: usize,
    pub output: PathBuf,
}
