// src/core/html.rs
//
// Just enough HTML scanning to read cells out of a roster table.
// Case-insensitive on tag names; no nesting awareness.

/// Iterator over `<tag ...>...</tag>` blocks, yielding the full block text.
pub struct TagBlocks<'a> {
    src: &'a str,
    // ASCII-lowercased copy; byte offsets line up with `src`
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(src: &'a str, tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        Self {
            src,
            lc: src.to_ascii_lowercase(),
            open: join!("<", &tag),
            close: join!("</", &tag, ">"),
            pos: 0,
        }
    }

    /// Find the next opening tag that is really `<tag` and not `<tagfoo`.
    fn next_open(&self, from: usize) -> Option<usize> {
        let mut at = from;
        loop {
            let start = self.lc.get(at..)?.find(&self.open)? + at;
            let after = start + self.open.len();
            match self.lc.as_bytes().get(after) {
                Some(b) if b.is_ascii_alphanumeric() => at = after,
                _ => return Some(start),
            }
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.next_open(self.pos)?;
        let open_end = self.src[start..].find('>')? + start + 1;
        let end = match self.lc[open_end..].find(&self.close) {
            Some(rel) => open_end + rel + self.close.len(),
            // Unclosed cell/row: runs to the next sibling or the end
            None => self.next_open(open_end).unwrap_or(self.src.len()),
        };
        self.pos = end;
        Some(&self.src[start..end])
    }
}

/// Text between the end of the opening tag and the start of the closing tag.
pub fn inner_after_open_tag(block: &str) -> &str {
    let Some(oe) = block.find('>') else { return "" };
    match block.rfind("</") {
        Some(cs) if cs > oe => &block[oe + 1..cs],
        _ => &block[oe + 1..],
    }
}

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
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

/// Plain-text cells of one `<tr>` block.
pub fn row_cells(tr: &str) -> Vec<String> {
    TagBlocks::new(tr, "td")
        .map(|td| strip_tags(inner_after_open_tag(td)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_rows_and_cells_case_insensitively() {
        let html = "<TABLE><TR class=a><TD>One</TD><td><b>Two</b></td></TR>\
                    <tr><td>Three &amp; four</td></tr></TABLE>";
        let rows: Vec<Vec<String>> = TagBlocks::new(html, "tr").map(row_cells).collect();
        assert_eq!(rows, vec![vec![s!("One"), s!("Two")], vec![s!("Three & four")]]);
    }

    #[test]
    fn does_not_confuse_similar_tags() {
        let html = "<track src=x><tr><td>a</td></tr><tbody></tbody>";
        let rows: Vec<&str> = TagBlocks::new(html, "tr").collect();
        assert_eq!(rows, vec!["<tr><td>a</td></tr>"]);
        let cells = row_cells("<tr><th>h</th><td>x</td></tr>");
        assert_eq!(cells, vec!["x"]);
    }

    #[test]
    fn unclosed_cells_stop_at_next_cell() {
        let cells = row_cells("<tr><td>a<td>b</td></tr>");
        assert_eq!(cells, vec!["a", "b"]);
    }
}
