use log::debug;

/// Remove one pair of parentheses that encloses the whole expression.
///
/// `(1 + 2) * (3 + 4)` is returned unchanged because its first `(` closes
/// before the end of the string.
pub fn strip_outer_parens(expression: &str) -> &str {
    let trimmed = expression.trim();

    let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return trimmed;
    };

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    debug!("Outer parentheses of '{}' do not match", trimmed);
                    return trimmed;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if depth == 0 { inner } else { trimmed }
}
