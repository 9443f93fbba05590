// src/core/sanitize.rs

/// Decode the handful of entities the scraped table actually uses.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Visible text of one `<td>` block.
pub fn cell_text(block: &str) -> String {
    let inner = super::html::inner_after_open_tag(block);
    normalize_ws(&normalize_entities(&super::html::strip_tags(inner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amp_decodes_last() {
        assert_eq!(normalize_entities("A&amp;lt;B"), "A&lt;B");
    }

    #[test]
    fn cell_text_trims_and_decodes() {
        assert_eq!(cell_text("<td class=\"name\">\n  St.&nbsp;Louis   Blues\n</td>"), "St. Louis Blues");
    }
}
