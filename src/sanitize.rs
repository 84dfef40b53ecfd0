use std::sync::LazyLock;

use regex::Regex;

/// Elements whose whole content is dropped before text analysis.
static HTML_BLOCKS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<pre\b[^>]*>.*?</pre\s*>|<code\b[^>]*>.*?</code\s*>",
    )
    .unwrap()
});

/// Tags that separate words when removed.
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:address|article|aside|blockquote|br|caption|dd|div|dl|dt|figcaption|figure|footer|h[1-6]|header|hr|li|main|nav|ol|p|section|table|tbody|td|tfoot|th|thead|tr|ul)\b[^>]*>",
    )
    .unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove script, style, pre and code elements and HTML comments with their content.
pub fn remove_html_blocks(text: &str) -> String {
    HTML_BLOCKS_RE.replace_all(text, "").into_owned()
}

/// Remove all tags, keeping their text. Block-level tags become a space so
/// words on either side of them stay apart.
pub fn strip_html_tags(text: &str) -> String {
    let spaced = BLOCK_TAG_RE.replace_all(text, " ");
    TAG_RE.replace_all(&spaced, "").into_owned()
}

/// Map typographic single and double quotes to their ASCII forms.
pub fn normalize_quotes(text: &str) -> String {
    text.chars().map(normalize_quote).collect()
}

pub(crate) fn normalize_quote(c: char) -> char {
    match c {
        '‘' | '’' | '‛' | '`' | '´' | '′' => '\'',
        '“' | '”' | '„' | '‟' | '″' => '"',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_keeps_inline_words_joined() {
        assert_eq!(strip_html_tags("<p>Hello <b>wor</b>ld</p>"), " Hello world ");
    }

    #[test]
    fn test_strip_tags_separates_blocks() {
        assert_eq!(strip_html_tags("<p>one</p><p>two</p>").split_whitespace().count(), 2);
        assert_eq!(strip_html_tags("one<br/>two").split_whitespace().count(), 2);
    }

    #[test]
    fn test_remove_html_blocks() {
        let html = "<p>keep</p><script>var x = 1;</script><!-- note -->\
            <pre>drop\nthis</pre><CODE>x</CODE>";
        assert_eq!(remove_html_blocks(html), "<p>keep</p>");
    }

    #[test]
    fn test_normalize_quotes() {
        assert_eq!(normalize_quotes("it’s “fine”"), "it's \"fine\"");
    }
}
