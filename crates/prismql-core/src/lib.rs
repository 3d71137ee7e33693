pub mod casing;
pub mod catalogs;
pub mod error;
pub mod json;
pub mod schema;
pub mod segmenter;
pub mod translator;
pub mod types;

pub use casing::to_pascal_case;
pub use catalogs::{CONVERTER_VERSION, PRELUDE_SCALARS, TYPE_MAP};
pub use error::ConvertError;
pub use json::{convert_to_json, convert_to_json_pretty, schema_document};
pub use schema::{
    assemble, convert_model_to_graphql, convert_prisma_to_graphql, convert_schema,
    convert_schema_as, render_schema, translate_schema,
};
pub use segmenter::segment;
pub use translator::{map_type, parse_field_line, render_field, translate_block};
pub use types::*;
