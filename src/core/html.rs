// src/core/html.rs
//! Case-insensitive tag scanning over raw HTML. No DOM; the scraped page is a
//! flat table so locating `<tr>`/`<td>` blocks by position is enough.

/// ASCII-lowercase; non-ASCII chars pass through so byte offsets line up.
pub fn to_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Start of the next `open` tag at or after byte `from` in lowercased text.
/// The tag name must end there, so `<tr` does not match `<track`.
fn find_open(lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(open)? + at;
        match lc.as_bytes().get(start + open.len()).copied() {
            None | Some(b'>' | b'/') => return Some(start),
            Some(b) if b.is_ascii_whitespace() => return Some(start),
            _ => at = start + open.len(),
        }
    }
}

/// Every `open` element in document order, case-insensitive. An element runs
/// until the first of `ends`, the next `open` tag, or the end of `s`; the
/// terminator is not part of the block. End tags HTML lets a page omit
/// (`<td>a<td>b`, `<tr>` without `</tr>`) still split correctly.
pub fn element_blocks_ci<'a>(s: &'a str, open: &str, ends: &[&str]) -> Vec<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open);
    let ends: Vec<String> = ends.iter().map(|e| to_lower(e)).collect();

    let mut out = Vec::new();
    let mut from = 0;
    while let Some(start) = find_open(&lc, &open, from) {
        let body = start + open.len();
        let mut end = find_open(&lc, &open, body).unwrap_or(s.len());
        for e in &ends {
            if let Some(rel) = lc[body..end].find(e.as_str()) {
                end = body + rel;
            }
        }
        out.push(&s[start..end]);
        from = end;
    }
    out
}

/// Text after the opening tag's `>`. Any closing tag is left for `strip_tags`.
pub fn inner_after_open_tag(block: &str) -> &str {
    block.find('>').map_or("", |oe| &block[oe + 1..])
}

/// Drop anything inside `<...>` and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_regardless_of_case() {
        let doc = "<TR class=\"team\"><td>A</td></TR><tr><TD>B</TD></tr>";
        let rows = element_blocks_ci(doc, "<tr", &["</tr"]);
        assert_eq!(rows.len(), 2);
        let cells = element_blocks_ci(rows[1], "<td", &["</td"]);
        assert_eq!(cells, vec!["<TD>B"]);
        assert_eq!(inner_after_open_tag(cells[0]), "B");
    }

    #[test]
    fn omitted_end_tags_still_split() {
        let doc = "<table><tr><td>A<td>1<tr><td>B<td>2</table><p>after";
        let rows = element_blocks_ci(doc, "<tr", &["</tr", "</table"]);
        assert_eq!(rows, vec!["<tr><td>A<td>1", "<tr><td>B<td>2"]);
        let cells = element_blocks_ci(rows[1], "<td", &["</td", "</tr"]);
        assert_eq!(cells, vec!["<td>B", "<td>2"]);
    }

    #[test]
    fn tag_name_must_end_at_match() {
        let doc = "<track src=x><tr><td>A</td></tr>";
        assert_eq!(element_blocks_ci(doc, "<tr", &["</tr"]), vec!["<tr><td>A</td>"]);
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("  <a href=x>Boston\n   Bruins</a> "), "Boston Bruins");
    }
}
