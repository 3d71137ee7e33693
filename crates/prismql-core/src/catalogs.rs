use std::collections::HashMap;
use std::sync::LazyLock;

/// Prisma primitive type names mapped to their GraphQL scalar.
/// Types not in this map are treated as references to other models.
pub static TYPE_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Int", "ID");
    m.insert("String", "String");
    m.insert("Boolean", "Boolean");
    m.insert("DateTime", "DateTime");
    m.insert("Float", "Float");
    m.insert("Json", "JSON");
    m.insert("Decimal", "Float");
    m
});

/// Custom scalars declared at the top of every generated schema, in order.
pub const PRELUDE_SCALARS: [&str; 2] = ["DateTime", "JSON"];

// Source markers
pub const MODEL_KEYWORD: &str = "model";
pub const BLOCK_DIRECTIVE: &str = "@@";
pub const LINE_COMMENT: &str = "//";
pub const FIELD_ATTRIBUTE: char = '@';
pub const OPTIONAL_MARKER: char = '?';
pub const LIST_MARKER: &str = "[]";
pub const RELATION_OPEN: &str = "@relation(";

/// Converter version, reported in the JSON envelope.
pub const CONVERTER_VERSION: &str = env!("CARGO_PKG_VERSION");
