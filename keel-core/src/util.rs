use crate::SqlBuffer;

/// Writes each value through `f`, putting `separator` between the ones that produced output.
pub fn separated_by<T, F>(
    out: &mut SqlBuffer,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut SqlBuffer, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.append(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Converts a camel case name into snake case.
///
/// The first character is lowered, every following upper case character is lowered and prefixed
/// by an underscore unless the previous character already is one.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + name.len() / 2);
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return result;
    };
    result.extend(first.to_lowercase());
    let mut previous = first;
    for c in chars {
        if c.is_uppercase() {
            if previous != '_' {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous = c;
    }
    result
}

/// Truncates `name` to at most `max_length` characters.
pub fn truncate_name(name: &str, max_length: u32) -> &str {
    match name.char_indices().nth(max_length as usize) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}
