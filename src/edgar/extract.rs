// Business-section extraction from 10-K HTML.
//
// EDGAR filings rarely use heading tags. Section headers are ordinary text
// runs rendered bold through inline styles (`<font style="...">` in older
// filings, `<span style="...">` in newer ones) or through <b>/<strong>
// wrappers. The walk below leans on that convention: an element counts as a
// header when its styled text run is bold. Everything between the header
// containing the start label and the header containing the stop label is
// the section.
//
// A filing where the label never shows up in a bold run yields None, and
// the caller drops that document from the working set. No retries, no fallback
// heading synonyms.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

/// The Business section pulled out of one filing.
#[derive(Debug, Clone)]
pub struct ExtractedSection {
    /// Sub-headers recorded while walking the section, in document order.
    pub headers: Vec<String>,
    /// Section body text, whitespace-normalized.
    pub text: String,
}

/// Parse an inline style attribute into a key/value map.
///
/// "font-family:Helvetica,sans-serif;font-weight:bold;" becomes
/// {"font-family": "Helvetica,sans-serif", "font-weight": "bold"}.
/// Fragments without a ':' separator are skipped.
pub fn parse_style(attr: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for fragment in attr.split(';') {
        let mut parts = fragment.splitn(2, ':');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if !key.trim().is_empty() {
                result.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }
    result
}

/// How an element reads in the bold-header convention.
enum RunKind {
    Header,
    Paragraph,
}

/// Classify a body child element, or None when it carries no styled run at
/// all (navigation junk, page markers, horizontal rules).
fn classify(el: ElementRef) -> Option<RunKind> {
    let bold_sel = Selector::parse("b, strong").unwrap();
    if el.select(&bold_sel).next().is_some() || matches!(el.value().name(), "b" | "strong") {
        return Some(RunKind::Header);
    }

    let styled = styled_run_style(el)?;
    let bold = styled
        .get("font-weight")
        .map(|w| w == "bold" || w == "700")
        .unwrap_or(false);

    if bold {
        Some(RunKind::Header)
    } else {
        Some(RunKind::Paragraph)
    }
}

/// Find the style map of the element's first styled text run: the element's
/// own style attribute, or the first font/span descendant carrying one.
fn styled_run_style(el: ElementRef) -> Option<HashMap<String, String>> {
    if let Some(attr) = el.value().attr("style") {
        return Some(parse_style(attr));
    }

    let styled_sel = Selector::parse("font[style], span[style]").unwrap();
    el.select(&styled_sel)
        .next()
        .and_then(|run| run.value().attr("style"))
        .map(parse_style)
}

/// Collapse an element's text content to single-spaced form.
fn element_text(el: ElementRef) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the section bracketed by two header labels from a filing.
///
/// Walks the body's element children in document order. Recording starts at
/// the bold run whose text contains `start_label` and stops at the one
/// containing `stop_label` (both case-insensitive). Bold runs inside the
/// bracket are recorded as sub-headers; anything else styled is body text.
///
/// Recorded "headers" longer than 100 characters are bold paragraphs the
/// filing styled oddly; their text is folded back into the section body.
///
/// Returns None when no body text was recorded, which the caller treats as
/// an extraction miss.
pub fn extract_section(
    html: &str,
    start_label: &str,
    stop_label: &str,
) -> Option<ExtractedSection> {
    let document = Html::parse_document(html);
    let body_sel = Selector::parse("body").unwrap();
    let body = document.select(&body_sel).next()?;

    let start_label = start_label.to_lowercase();
    let stop_label = stop_label.to_lowercase();

    let mut recording = false;
    let mut headers: Vec<String> = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();

    for child in body.children() {
        let Some(el) = ElementRef::wrap(child) else {
            continue;
        };
        let Some(kind) = classify(el) else {
            continue;
        };
        let text = element_text(el);
        if text.is_empty() {
            continue;
        }

        match kind {
            RunKind::Header => {
                let lower = text.to_lowercase();
                if lower.contains(&start_label) {
                    recording = true;
                }
                if lower.contains(&stop_label) {
                    break;
                }
                if recording {
                    headers.push(text);
                }
            }
            RunKind::Paragraph => {
                if recording {
                    paragraphs.push(text);
                }
            }
        }
    }

    // Bold paragraphs misread as headers: fold their text back into the body.
    for header in &headers {
        if header.chars().count() > 100 {
            paragraphs.push(header.clone());
        }
    }

    if paragraphs.is_empty() {
        return None;
    }

    Some(ExtractedSection {
        headers,
        text: paragraphs.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_style_basic() {
        let style = parse_style("font-family:Helvetica,sans-serif;font-size:11pt;font-weight:bold;");
        assert_eq!(style.get("font-weight").map(String::as_str), Some("bold"));
        assert_eq!(
            style.get("font-family").map(String::as_str),
            Some("Helvetica,sans-serif")
        );
        assert_eq!(style.get("font-size").map(String::as_str), Some("11pt"));
    }

    #[test]
    fn parse_style_tolerates_junk_fragments() {
        let style = parse_style("font-weight:bold;;broken;:orphan;");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("font-weight").map(String::as_str), Some("bold"));
    }

    #[test]
    fn parse_style_empty() {
        assert!(parse_style("").is_empty());
    }

    const FILING: &str = r#"
        <html><body>
        <div><font style="font-size:10pt">Table of contents and other preamble text.</font></div>
        <div><font style="font-weight:bold">Item 1. Business</font></div>
        <div><font style="font-size:10pt">The company designs consumer electronics and software platforms.</font></div>
        <div><font style="font-weight:bold">Products</font></div>
        <div><font style="font-size:10pt">Hardware products include phones and    tablets.</font></div>
        <div><font style="font-weight:bold">Item 1A. Risk Factors</font></div>
        <div><font style="font-size:10pt">Competition could harm our margins.</font></div>
        </body></html>
    "#;

    #[test]
    fn extracts_text_between_labels() {
        let section = extract_section(FILING, "business", "risk factors").unwrap();
        assert!(section.text.contains("consumer electronics"));
        assert!(section.text.contains("phones and tablets"));
        assert!(!section.text.contains("preamble"));
        assert!(!section.text.contains("Competition could harm"));
    }

    #[test]
    fn records_subsection_headers() {
        let section = extract_section(FILING, "business", "risk factors").unwrap();
        assert_eq!(section.headers, vec!["Item 1. Business", "Products"]);
    }

    #[test]
    fn whitespace_is_normalized() {
        let section = extract_section(FILING, "business", "risk factors").unwrap();
        assert!(section.text.contains("phones and tablets"));
        assert!(!section.text.contains("  "));
    }

    #[test]
    fn missing_header_returns_none() {
        let html = r#"
            <html><body>
            <div><font style="font-size:10pt">No headers anywhere in this one.</font></div>
            </body></html>
        "#;
        assert!(extract_section(html, "business", "risk factors").is_none());
    }

    #[test]
    fn header_with_no_following_text_returns_none() {
        let html = r#"
            <html><body>
            <div><font style="font-weight:bold">Item 1. Business</font></div>
            <div><font style="font-weight:bold">Item 1A. Risk Factors</font></div>
            </body></html>
        "#;
        assert!(extract_section(html, "business", "risk factors").is_none());
    }

    #[test]
    fn bold_tags_count_as_headers() {
        let html = r#"
            <html><body>
            <div><b>Item 1. Business</b></div>
            <div><span style="font-size:10pt">We operate retail stores worldwide.</span></div>
            <div><b>Item 1A. Risk Factors</b></div>
            </body></html>
        "#;
        let section = extract_section(html, "business", "risk factors").unwrap();
        assert!(section.text.contains("retail stores"));
    }

    #[test]
    fn long_bold_paragraph_folds_into_body() {
        let long_bold = "Our strategy is built around long-lived customer relationships, \
                         recurring revenue streams, and disciplined capital allocation across \
                         every operating segment we report.";
        assert!(long_bold.chars().count() > 100);
        let html = format!(
            r#"<html><body>
            <div><font style="font-weight:bold">Item 1. Business</font></div>
            <div><font style="font-size:10pt">Overview paragraph.</font></div>
            <div><font style="font-weight:bold">{long_bold}</font></div>
            <div><font style="font-weight:bold">Item 1A. Risk Factors</font></div>
            </body></html>"#
        );
        let section = extract_section(&html, "business", "risk factors").unwrap();
        assert!(section.text.contains("recurring revenue streams"));
    }

    #[test]
    fn unstyled_elements_are_skipped() {
        let html = r#"
            <html><body>
            <div><font style="font-weight:bold">Item 1. Business</font></div>
            <div>Bare navigation text with no styled run.</div>
            <div><font style="font-size:10pt">Styled body text.</font></div>
            <div><font style="font-weight:bold">Item 1A. Risk Factors</font></div>
            </body></html>
        "#;
        let section = extract_section(html, "business", "risk factors").unwrap();
        assert!(section.text.contains("Styled body text"));
        assert!(!section.text.contains("navigation"));
    }
}
