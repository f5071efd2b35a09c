//! Server-rendered pages for the upload flow.
//!
//! One render cycle is one HTTP exchange: the index page shows the title and
//! upload form only; the result page re-renders the form plus either the
//! extracted text or the no-text warning.

use axum::response::Html;

pub const PAGE_TITLE: &str = "이미지 텍스트 추출기";
pub const UPLOAD_PROMPT: &str = "글자가 담긴 이미지를 올려 주세요 (jpg, jpeg, png)";
pub const RESULT_LABEL: &str = "추출된 텍스트";
pub const NO_TEXT_NOTICE: &str = "텍스트를 찾지 못했습니다 😢";

/// Handler for `GET /`: the upload form, nothing else.
pub async fn index() -> Html<String> {
    Html(index_page())
}

pub(crate) fn index_page() -> String {
    page(&upload_form())
}

/// Result of a successful render cycle: the recognized text, or the fixed
/// warning when the provider returned no annotations.
pub(crate) fn result_page(filename: &str, text: Option<&str>) -> String {
    let result = match text {
        Some(text) => format!(
            "<section class=\"result\"><h2>{label}</h2>\
             <p class=\"filename\">{name}</p>\
             <pre class=\"extracted-text\">{text}</pre></section>",
            label = RESULT_LABEL,
            name = escape_html(filename),
            text = escape_html(text),
        ),
        None => format!(
            "<section class=\"result\"><p class=\"warning\">{NO_TEXT_NOTICE}</p></section>"
        ),
    };
    page(&format!("{}{result}", upload_form()))
}

/// An error page for rejected uploads and provider failures.
pub(crate) fn error_page(notice: &str) -> String {
    let result = format!(
        "<section class=\"result\"><p class=\"error\">{}</p></section>",
        escape_html(notice)
    );
    page(&format!("{}{result}", upload_form()))
}

fn upload_form() -> String {
    format!(
        "<form class=\"upload\" action=\"/extract\" method=\"post\" enctype=\"multipart/form-data\">\
         <label for=\"image\">{UPLOAD_PROMPT}</label>\
         <input id=\"image\" type=\"file\" name=\"image\" accept=\".jpg,.jpeg,.png\" required>\
         <button type=\"submit\">텍스트 추출</button>\
         </form>"
    )
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{PAGE_TITLE}</title>\
         <style>\
         body{{font-family:sans-serif;margin:0;background:#fafafa;color:#222}}\
         main{{max-width:640px;margin:3rem auto;padding:0 1rem}}\
         .upload{{display:flex;flex-direction:column;gap:.75rem;margin:1.5rem 0}}\
         .result{{border-top:1px solid #ddd;padding-top:1rem}}\
         .extracted-text{{background:#fff;border:1px solid #ddd;padding:1rem;white-space:pre-wrap}}\
         .filename{{color:#666;font-size:.875rem}}\
         .warning{{color:#8a6d3b}}\
         .error{{color:#a94442}}\
         </style></head>\
         <body><main><h1>{PAGE_TITLE}</h1>{body}</main></body></html>"
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_title_and_form_only() {
        let html = index_page();
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(html.contains("accept=\".jpg,.jpeg,.png\""));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"extracted-text\""));
        assert!(!html.contains(NO_TEXT_NOTICE));
    }

    #[test]
    fn result_page_renders_text_verbatim() {
        let html = result_page("stop.jpg", Some("정지"));
        assert!(html.contains(RESULT_LABEL));
        assert!(html.contains(">정지</pre>"));
        assert!(!html.contains(NO_TEXT_NOTICE));
    }

    #[test]
    fn result_page_escapes_markup_in_text() {
        let html = result_page("evil.png", Some("<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_result_shows_warning_and_no_text_block() {
        let html = result_page("blank.png", None);
        assert!(html.contains(NO_TEXT_NOTICE));
        assert!(!html.contains("class=\"extracted-text\""));
    }

    #[test]
    fn error_page_carries_the_notice() {
        let html = error_page("실패했습니다");
        assert!(html.contains("실패했습니다"));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn escaping_covers_reserved_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
