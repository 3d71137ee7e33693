use log::trace;

use crate::casing::to_pascal_case;
use crate::catalogs::{
    BLOCK_DIRECTIVE, FIELD_ATTRIBUTE, LINE_COMMENT, LIST_MARKER, OPTIONAL_MARKER,
    RELATION_OPEN, TYPE_MAP,
};
use crate::types::*;

/// Translate one raw model block into a GraphQL object type.
///
/// The declaration and closing lines are not read; every other line is
/// either a field or silently skipped.
pub fn translate_block(block: &RawModelBlock) -> RenderedType {
    let fields = block
        .body()
        .iter()
        .filter_map(|line| parse_field_line(line))
        .map(|field| render_field(&field))
        .collect();

    RenderedType {
        name: to_pascal_case(&block.name),
        fields,
    }
}

/// Parse one line of a model body.
///
/// Returns `None` for blank lines, `@@` directives, comment lines and lines
/// that do not carry both a name and a type.
pub fn parse_field_line(line: &str) -> Option<FieldDescriptor> {
    let line = line.trim();

    if line.is_empty() || line.starts_with(BLOCK_DIRECTIVE) || line.starts_with(LINE_COMMENT) {
        return None;
    }

    let without_comment = line.split(LINE_COMMENT).next().unwrap_or_default();
    let clean = without_comment
        .split(FIELD_ATTRIBUTE)
        .next()
        .unwrap_or_default()
        .trim();
    if clean.is_empty() {
        trace!("skipping attribute-only line: {line}");
        return None;
    }

    let mut parts = clean.split_whitespace();
    let (Some(name), Some(source_type)) = (parts.next(), parts.next()) else {
        trace!("skipping field without a type: {line}");
        return None;
    };

    if source_type.contains(FIELD_ATTRIBUTE) {
        return None;
    }

    let is_nullable = source_type.contains(OPTIONAL_MARKER);
    let is_list = source_type.contains(LIST_MARKER);
    let base_type = source_type
        .replace(OPTIONAL_MARKER, "")
        .replace(LIST_MARKER, "");

    Some(FieldDescriptor {
        name: name.to_string(),
        source_type: source_type.to_string(),
        base_type,
        is_list,
        is_nullable,
        has_relation_annotation: line.contains(RELATION_OPEN),
    })
}

/// Map a bare Prisma type name to its GraphQL element type.
pub fn map_type(base_type: &str) -> TypeRef {
    match TYPE_MAP.get(base_type) {
        Some(scalar) => TypeRef::Scalar((*scalar).to_string()),
        None => TypeRef::Model(to_pascal_case(base_type)),
    }
}

/// Decide the GraphQL shape of a parsed field.
///
/// Relation-annotated fields and model references are always optional;
/// scalars follow the `?` marker only.
pub fn render_field(field: &FieldDescriptor) -> RenderedField {
    let base = map_type(&field.base_type);
    let nullable = field.is_nullable || field.has_relation_annotation || base.is_model();

    RenderedField {
        name: field.name.clone(),
        target_type: TargetType {
            base,
            list: field.is_list,
        },
        required: !nullable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(name: &str, body: &[&str]) -> RawModelBlock {
        let mut lines = vec![format!("model {name} {{")];
        lines.extend(body.iter().map(|l| l.to_string()));
        lines.push("}".into());
        RawModelBlock {
            name: name.into(),
            lines,
        }
    }

    #[test]
    fn parse_plain_field() {
        let field = parse_field_line("  name String").unwrap();
        assert_eq!(
            field,
            FieldDescriptor {
                name: "name".into(),
                source_type: "String".into(),
                base_type: "String".into(),
                is_list: false,
                is_nullable: false,
                has_relation_annotation: false,
            }
        );
    }

    #[test]
    fn parse_markers() {
        let bio = parse_field_line("bio String?").unwrap();
        assert!(bio.is_nullable);
        assert!(!bio.is_list);
        assert_eq!(bio.base_type, "String");

        let posts = parse_field_line("posts post[]").unwrap();
        assert!(posts.is_list);
        assert!(!posts.is_nullable);
        assert_eq!(posts.base_type, "post");
        assert_eq!(posts.source_type, "post[]");
    }

    #[test]
    fn parse_strips_attributes_and_comments() {
        let with_attr = parse_field_line("id Int @id @default(autoincrement())").unwrap();
        assert_eq!(with_attr.name, "id");
        assert_eq!(with_attr.base_type, "Int");

        let plain = parse_field_line("age Int").unwrap();
        let commented = parse_field_line("age Int // optional later").unwrap();
        assert_eq!(commented, plain);
    }

    #[test]
    fn parse_detects_relation_annotation() {
        let field =
            parse_field_line("author User @relation(fields: [authorId], references: [id])")
                .unwrap();
        assert!(field.has_relation_annotation);
        assert_eq!(field.base_type, "User");
    }

    #[test]
    fn parse_skips_non_field_lines() {
        for line in [
            "",
            "   ",
            "@@id([a, b])",
            "  @@map(\"users\")",
            "// comment",
            "@unique",
            "orphan",
            "orphan // no type",
            "name@unique String",
        ] {
            assert_eq!(parse_field_line(line), None, "line: {line:?}");
        }
    }

    #[test]
    fn parse_ignores_extra_tokens() {
        let field = parse_field_line("email String unexpected tokens").unwrap();
        assert_eq!(field.name, "email");
        assert_eq!(field.base_type, "String");
    }

    #[test]
    fn map_scalars_and_references() {
        assert_eq!(map_type("Int"), TypeRef::Scalar("ID".into()));
        assert_eq!(map_type("Json"), TypeRef::Scalar("JSON".into()));
        assert_eq!(map_type("Decimal"), TypeRef::Scalar("Float".into()));
        assert_eq!(map_type("post_comment"), TypeRef::Model("PostComment".into()));
        assert_eq!(map_type("Role"), TypeRef::Model("Role".into()));
    }

    #[test]
    fn list_elements_are_always_required() {
        let field = parse_field_line("scores Float?[]").unwrap();
        let rendered = render_field(&field);
        assert_eq!(rendered.to_string(), "scores: [Float!]");

        let tags = render_field(&parse_field_line("tags String[]").unwrap());
        assert_eq!(tags.to_string(), "tags: [String!]!");
    }

    #[test]
    fn references_are_nullable_even_without_marker() {
        let author = render_field(&parse_field_line("author User").unwrap());
        assert!(!author.required);
        assert_eq!(author.to_string(), "author: User");

        let fk = render_field(&parse_field_line("authorId Int @relation(\"x\")").unwrap());
        assert!(!fk.required);
        assert_eq!(fk.to_string(), "authorId: ID");
    }

    #[test]
    fn translate_user_profile() {
        let ty = translate_block(&block(
            "user_profile",
            &["  id Int @id", "  name String", "  bio String?", "  posts post[] "],
        ));
        assert_eq!(
            ty.to_string(),
            "type UserProfile {\n  id: ID!\n  name: String!\n  bio: String\n  posts: [Post!]\n}"
        );
    }

    #[test]
    fn translate_skips_directives_and_blank_lines() {
        let ty = translate_block(&block(
            "post",
            &[
                "  id Int @id",
                "",
                "  // audit",
                "  createdAt DateTime @default(now())",
                "  @@index([createdAt])",
            ],
        ));
        let names: Vec<_> = ty.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "createdAt"]);
        assert_eq!(ty.fields[1].to_string(), "createdAt: DateTime!");
    }

    #[test]
    fn translate_does_not_read_first_and_last_lines() {
        let raw = RawModelBlock {
            name: "Tag".into(),
            lines: vec!["model Tag { id Int".into(), "label String".into(), "}".into()],
        };
        let ty = translate_block(&raw);
        assert_eq!(ty.fields.len(), 1);
        assert_eq!(ty.fields[0].name, "label");
    }

    #[test]
    fn translate_preserves_scalar_field_order() {
        let body = [
            "a Int", "b String", "c Boolean", "d DateTime", "e Float", "f Json", "g Decimal",
        ];
        let ty = translate_block(&block("all_scalars", &body));
        let rendered: Vec<_> = ty.fields.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "a: ID!",
                "b: String!",
                "c: Boolean!",
                "d: DateTime!",
                "e: Float!",
                "f: JSON!",
                "g: Float!",
            ]
        );
    }
}
