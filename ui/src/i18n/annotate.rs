//! Dictionary application over annotated markup.
//!
//! Parts of the page that are not rendered by components (the `<title>`, meta
//! tags in `index.html`) carry annotations instead:
//!
//! ```text
//! data-i18n="hero.title"                       text content
//! data-i18n-type="html"                        ...as inner markup
//! data-i18n-attrs="placeholder:a.b; aria-label:a.c"
//! data-i18n-content="meta.description"         shorthand for content:<key>
//! ```
//!
//! A pass resolves every annotation against one dictionary. Unknown keys and
//! malformed pairs leave their target untouched.

use super::Dictionary;

pub const TEXT_KEY_ATTR: &str = "data-i18n";
pub const HTML_FLAG_ATTR: &str = "data-i18n-type";
pub const ATTR_MAP_ATTR: &str = "data-i18n-attrs";
pub const CONTENT_KEY_ATTR: &str = "data-i18n-content";

/// CSS selector matching every annotated element.
pub const ANNOTATED_SELECTOR: &str = "[data-i18n], [data-i18n-attrs], [data-i18n-content]";

/// One annotated element.
pub trait AnnotatedNode {
    fn attribute(&self, name: &str) -> Option<String>;
    /// Upper-case tag name, as the DOM reports it.
    fn tag_name(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_markup(&self, markup: &str);
    fn set_attribute(&self, name: &str, value: &str);
}

/// The document a translator writes into.
pub trait AnnotatedDocument {
    fn annotated_nodes(&self) -> Vec<Box<dyn AnnotatedNode>>;
    fn set_language_attribute(&self, code: &str);
}

/// Documents without annotated markup (desktop webview, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedDocument;

impl AnnotatedDocument for DetachedDocument {
    fn annotated_nodes(&self) -> Vec<Box<dyn AnnotatedNode>> {
        Vec::new()
    }

    fn set_language_attribute(&self, _code: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrTarget {
    /// Pseudo attribute `text`: replace text content.
    Text,
    /// Pseudo attribute `html`: replace inner markup.
    Markup,
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrBinding {
    pub target: AttrTarget,
    pub key: String,
}

/// Parse `attr:key` pairs separated by `;` or `,`. Pairs without a colon, an
/// attribute name or a key come back as `Err(raw_pair)`; empty segments are
/// dropped silently.
pub fn parse_attr_map(raw: &str) -> Vec<Result<AttrBinding, String>> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let Some((attr, key)) = pair.split_once(':') else {
                return Err(pair.to_string());
            };
            let (attr, key) = (attr.trim(), key.trim());
            if attr.is_empty() || key.is_empty() {
                return Err(pair.to_string());
            }
            let target = match attr {
                "text" => AttrTarget::Text,
                "html" => AttrTarget::Markup,
                other => AttrTarget::Attribute(other.to_string()),
            };
            Ok(AttrBinding {
                target,
                key: key.to_string(),
            })
        })
        .collect()
}

/// What one pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub texts: usize,
    pub attributes: usize,
    pub missing: Vec<String>,
    pub malformed: Vec<String>,
}

/// Apply `dictionary` to every node in one synchronous pass.
pub fn apply_dictionary(dictionary: &Dictionary, nodes: &[Box<dyn AnnotatedNode>]) -> ApplyReport {
    let mut report = ApplyReport::default();

    for node in nodes {
        // Document metadata must never receive markup.
        let is_title = node.tag_name().eq_ignore_ascii_case("title");

        if let Some(key) = node.attribute(TEXT_KEY_ATTR).filter(|k| !k.trim().is_empty()) {
            let key = key.trim();
            match dictionary.resolve(key) {
                Some(value) => {
                    let as_markup = !is_title
                        && node
                            .attribute(HTML_FLAG_ATTR)
                            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("html"));
                    if as_markup {
                        node.set_markup(value);
                    } else {
                        node.set_text(value);
                    }
                    report.texts += 1;
                }
                None => report.missing.push(key.to_string()),
            }
        }

        if let Some(key) = node.attribute(CONTENT_KEY_ATTR).filter(|k| !k.trim().is_empty()) {
            let key = key.trim();
            match dictionary.resolve(key) {
                Some(value) => {
                    node.set_attribute("content", value);
                    report.attributes += 1;
                }
                None => report.missing.push(key.to_string()),
            }
        }

        let Some(map) = node.attribute(ATTR_MAP_ATTR) else {
            continue;
        };
        for binding in parse_attr_map(&map) {
            let binding = match binding {
                Ok(binding) => binding,
                Err(raw) => {
                    report.malformed.push(raw);
                    continue;
                }
            };
            let Some(value) = dictionary.resolve(&binding.key) else {
                report.missing.push(binding.key);
                continue;
            };
            match binding.target {
                AttrTarget::Text => {
                    node.set_text(value);
                    report.texts += 1;
                }
                AttrTarget::Markup if is_title => {
                    node.set_text(value);
                    report.texts += 1;
                }
                AttrTarget::Markup => {
                    node.set_markup(value);
                    report.texts += 1;
                }
                AttrTarget::Attribute(name) => {
                    node.set_attribute(&name, value);
                    report.attributes += 1;
                }
            }
        }
    }

    report
}

#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;

    use super::{AnnotatedDocument, AnnotatedNode, ANNOTATED_SELECTOR};

    /// The live browser document.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WebDocument;

    struct ElementNode(web_sys::Element);

    impl AnnotatedNode for ElementNode {
        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get_attribute(name)
        }

        fn tag_name(&self) -> String {
            self.0.tag_name()
        }

        fn set_text(&self, text: &str) {
            self.0.set_text_content(Some(text));
        }

        fn set_markup(&self, markup: &str) {
            self.0.set_inner_html(markup);
        }

        fn set_attribute(&self, name: &str, value: &str) {
            if self.0.set_attribute(name, value).is_err() {
                tracing::warn!("[i18n] could not set attribute {name}");
            }
        }
    }

    impl AnnotatedDocument for WebDocument {
        fn annotated_nodes(&self) -> Vec<Box<dyn AnnotatedNode>> {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Vec::new();
            };
            let Ok(list) = document.query_selector_all(ANNOTATED_SELECTOR) else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|index| list.get(index))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .map(|element| Box::new(ElementNode(element)) as Box<dyn AnnotatedNode>)
                .collect()
        }

        fn set_language_attribute(&self, code: &str) {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                if let Err(err) = root.set_attribute("lang", code) {
                    tracing::warn!("[i18n] could not set lang={code} on <html>: {err:?}");
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeDocument, FakeElement};
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_json_str(
            r#"{
                "a": { "b": "X" },
                "meta": { "title": "Title <b>bold</b>", "description": "Desc" },
                "form": { "placeholder": "you@company.com", "aria": "Email", "rich": "<em>hi</em>" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn attr_map_parsing_skips_malformed_pairs() {
        let parsed = parse_attr_map("placeholder:form.placeholder; aria-label : form.aria,,nocolon;:key;attr:; html:x");
        assert_eq!(
            parsed,
            vec![
                Ok(AttrBinding {
                    target: AttrTarget::Attribute("placeholder".into()),
                    key: "form.placeholder".into()
                }),
                Ok(AttrBinding {
                    target: AttrTarget::Attribute("aria-label".into()),
                    key: "form.aria".into()
                }),
                Err("nocolon".into()),
                Err(":key".into()),
                Err("attr:".into()),
                Ok(AttrBinding {
                    target: AttrTarget::Markup,
                    key: "x".into()
                }),
            ]
        );
    }

    #[test]
    fn text_markup_and_attributes_are_applied() {
        let heading = FakeElement::new("h1", &[("data-i18n", "a.b")], "old");
        let rich = FakeElement::new(
            "p",
            &[("data-i18n", "form.rich"), ("data-i18n-type", "html")],
            "old",
        );
        let input = FakeElement::new(
            "input",
            &[("data-i18n-attrs", "placeholder:form.placeholder;aria-label:form.aria")],
            "",
        );
        let meta = FakeElement::new("meta", &[("data-i18n-content", "meta.description")], "");
        let doc = FakeDocument::new(vec![heading.clone(), rich.clone(), input.clone(), meta.clone()]);

        let report = apply_dictionary(&dict(), &doc.annotated_nodes());

        assert_eq!(heading.rendered(), "X");
        assert_eq!(rich.rendered(), "<em>hi</em>");
        assert_eq!(input.attr("placeholder").as_deref(), Some("you@company.com"));
        assert_eq!(input.attr("aria-label").as_deref(), Some("Email"));
        assert_eq!(meta.attr("content").as_deref(), Some("Desc"));
        assert_eq!(report.texts, 2);
        assert_eq!(report.attributes, 3);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn title_never_receives_markup() {
        let title = FakeElement::new(
            "title",
            &[("data-i18n", "meta.title"), ("data-i18n-type", "html")],
            "old",
        );
        let via_attrs = FakeElement::new("title", &[("data-i18n-attrs", "html:meta.title")], "old");
        let doc = FakeDocument::new(vec![title.clone(), via_attrs.clone()]);

        apply_dictionary(&dict(), &doc.annotated_nodes());

        assert!(title.markup.borrow().is_none());
        assert_eq!(*title.text.borrow(), "Title <b>bold</b>");
        assert!(via_attrs.markup.borrow().is_none());
        assert_eq!(*via_attrs.text.borrow(), "Title <b>bold</b>");
    }

    #[test]
    fn missing_keys_leave_targets_untouched() {
        let heading = FakeElement::new("h2", &[("data-i18n", "a.c")], "original");
        let input = FakeElement::new(
            "input",
            &[
                ("data-i18n-attrs", "placeholder:a.missing;broken;aria-label:a.b"),
                ("placeholder", "keep me"),
            ],
            "",
        );
        let doc = FakeDocument::new(vec![heading.clone(), input.clone()]);

        let report = apply_dictionary(&dict(), &doc.annotated_nodes());

        assert_eq!(heading.rendered(), "original");
        assert_eq!(input.attr("placeholder").as_deref(), Some("keep me"));
        assert_eq!(input.attr("aria-label").as_deref(), Some("X"));
        assert_eq!(report.missing, vec!["a.c".to_string(), "a.missing".to_string()]);
        assert_eq!(report.malformed, vec!["broken".to_string()]);
    }

    #[test]
    fn repeated_pass_is_byte_identical() {
        let doc = FakeDocument::new(vec![
            FakeElement::new("h1", &[("data-i18n", "a.b")], "old"),
            FakeElement::new("p", &[("data-i18n", "form.rich"), ("data-i18n-type", "html")], ""),
            FakeElement::new("input", &[("data-i18n-attrs", "placeholder:form.placeholder")], ""),
        ]);
        apply_dictionary(&dict(), &doc.annotated_nodes());
        let first = doc.snapshot();
        apply_dictionary(&dict(), &doc.annotated_nodes());
        assert_eq!(first, doc.snapshot());
    }

    #[test]
    fn detached_document_has_no_nodes() {
        assert!(DetachedDocument.annotated_nodes().is_empty());
        let report = apply_dictionary(&dict(), &DetachedDocument.annotated_nodes());
        assert_eq!(report, ApplyReport::default());
    }
}
