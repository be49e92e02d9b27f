use std::borrow::Cow;

/// Rewrite `^` parameter markers to the driver's positional `?` markers.
///
/// Markers are replaced left-to-right, one per bound argument. A marker
/// escaped as `\^` is passed through literally (both characters, no
/// argument consumed); inside a quoted string MySQL drops the
/// unrecognized backslash escape, so the server sees a plain `^`. No
/// other context is special: quoted literals and comments are rewritten
/// like any other text.
///
/// Callers that bind no arguments skip expansion entirely and send the
/// statement text verbatim.
///
/// Returns a borrowed `Cow` when no marker was replaced.
#[must_use]
pub fn expand_placeholders(sql: &str) -> Cow<'_, str> {
    let bytes = sql.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' if bytes.get(idx + 1) == Some(&b'^') => idx += 2,
            b'^' => {
                let buf = out.get_or_insert_with(|| String::with_capacity(sql.len()));
                buf.push_str(&sql[copied..idx]);
                buf.push('?');
                idx += 1;
                copied = idx;
            }
            _ => idx += 1,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&sql[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(sql),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_markers_in_order() {
        let sql = "select * from t where a = ^ and b = ^";
        let res = expand_placeholders(sql);
        assert_eq!(res, "select * from t where a = ? and b = ?");
    }

    #[test]
    fn escaped_marker_stays_literal() {
        let sql = r"select 2 \^ 3, name from t where id = ^";
        let res = expand_placeholders(sql);
        assert_eq!(res, r"select 2 \^ 3, name from t where id = ?");
    }

    #[test]
    fn escape_applies_to_next_marker_only() {
        let res = expand_placeholders(r"\^^");
        assert_eq!(res, r"\^?");
    }

    #[test]
    fn literals_are_not_special() {
        let res = expand_placeholders("select '^' from t");
        assert_eq!(res, "select '?' from t");
    }

    #[test]
    fn no_markers_borrows() {
        let sql = "select 1";
        assert!(matches!(expand_placeholders(sql), Cow::Borrowed(_)));
    }

    #[test]
    fn only_escaped_markers_borrows() {
        let sql = r"select 2 \^ 3";
        let res = expand_placeholders(sql);
        assert!(matches!(res, Cow::Borrowed(_)));
        assert_eq!(res, sql);
    }

    #[test]
    fn multibyte_text_survives() {
        let res = expand_placeholders("select 'héllo', ^ from t");
        assert_eq!(res, "select 'héllo', ? from t");
    }
}
