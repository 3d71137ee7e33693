/// Convert a snake_case identifier to PascalCase.
///
/// Splits on `_` and uppercases the first character of every segment; the
/// rest of each segment is kept as written. Already-PascalCase input is
/// returned unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
