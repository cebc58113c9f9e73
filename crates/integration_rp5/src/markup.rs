//! Small helpers over `scraper` shared by the navigator and the extractor

use scraper::{ElementRef, Html, Selector};

use crate::Rp5Error;

/// Compile a built-in selector
pub(crate) fn selector(css: &'static str) -> Result<Selector, Rp5Error> {
    Selector::parse(css).map_err(|e| Rp5Error::InvalidSelector {
        selector: css,
        message: e.to_string(),
    })
}

/// First descendant of `scope` matching `css`
pub(crate) fn first_in<'a>(
    scope: ElementRef<'a>,
    css: &'static str,
) -> Result<Option<ElementRef<'a>>, Rp5Error> {
    Ok(scope.select(&selector(css)?).next())
}

/// First element of the whole document matching `css`
pub(crate) fn first_in_document<'a>(
    document: &'a Html,
    css: &'static str,
) -> Result<Option<ElementRef<'a>>, Rp5Error> {
    Ok(document.select(&selector(css)?).next())
}

/// Concatenated text of an element and its descendants, untrimmed
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Drop the first `n` characters (not bytes) of `s`
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(idx, _)| &s[idx..])
}

/// Nearest element named `name` that starts before `anchor` in document
/// order; ancestors of `anchor` count
pub(crate) fn preceding_element<'a>(
    document: &'a Html,
    anchor: ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    let mut nearest = None;
    for node in document.root_element().descendants() {
        if node.id() == anchor.id() {
            return nearest;
        }
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == name {
                nearest = Some(element);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_chars_counts_characters() {
        assert_eq!(skip_chars("Завтра: ясно", 8), "ясно");
        assert_eq!(skip_chars("abc", 3), "");
        assert_eq!(skip_chars("abc", 10), "");
        assert_eq!(skip_chars("abc", 0), "abc");
    }

    #[test]
    fn text_of_joins_descendants() {
        let doc = Html::parse_fragment("<p>a<b>b</b> c</p>");
        let p = first_in_document(&doc, "p").unwrap().unwrap();
        assert_eq!(text_of(p), "ab c");
    }

    #[test]
    fn preceding_element_finds_previous_sibling_branch() {
        let doc = Html::parse_document(
            "<div><b>first</b><b>second</b><i>x</i><span id=\"t\"></span></div>",
        );
        let span = first_in_document(&doc, "span#t").unwrap().unwrap();
        let b = preceding_element(&doc, span, "b").unwrap();
        assert_eq!(text_of(b), "second");
    }

    #[test]
    fn preceding_element_includes_ancestors() {
        let doc = Html::parse_document("<b>outer <span id=\"t\">in</span></b>");
        let span = first_in_document(&doc, "span#t").unwrap().unwrap();
        let b = preceding_element(&doc, span, "b").unwrap();
        assert_eq!(text_of(b), "outer in");
    }

    #[test]
    fn preceding_element_ignores_following() {
        let doc = Html::parse_document("<span id=\"t\"></span><b>after</b>");
        let span = first_in_document(&doc, "span#t").unwrap().unwrap();
        assert!(preceding_element(&doc, span, "b").is_none());
    }

    #[test]
    fn invalid_selector_is_an_error() {
        assert!(matches!(
            selector("div[["),
            Err(Rp5Error::InvalidSelector { .. })
        ));
    }
}
