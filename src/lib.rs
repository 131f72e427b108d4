pub mod datetime;
pub mod dom;
pub mod models;
pub mod render;

use anyhow::Context;

pub use dom::{el, Document, Element, Node};
pub use models::{Event, EventListing, Venue};
pub use render::{render_meetup_info, RenderError, CONTAINER_ID};

/// Decodes a JSON event listing, renders its first event into the page's
/// `#next-event` container, and returns the updated page markup.
pub fn render_next_event(page_html: &str, payload_json: &str) -> anyhow::Result<String> {
    let listing: EventListing =
        serde_json::from_str(payload_json).context("unable to decode event payload")?;
    let mut document = Document::parse(page_html);
    render_meetup_info(&mut document, &listing).context("unable to render the next event")?;
    Ok(document.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str =
        "<html><head></head><body><div id=\"next-event\"></div></body></html>";

    const SAMPLE_PAYLOAD: &str = r#"{
        "entries": [{
            "name": "Monthly Meetup",
            "link": "https://example.com/events/42",
            "time": "2025-03-05T14:00:00",
            "venue": {"name": "The Forge", "addressLine": "100 Main St"},
            "description": "<p>Lightning talks.</p>"
        }]
    }"#;

    #[test]
    fn renders_page_end_to_end() {
        let page = render_next_event(SAMPLE_PAGE, SAMPLE_PAYLOAD).expect("render page");
        assert!(page.contains(
            "<h3><a href=\"https://example.com/events/42\">Monthly Meetup</a></h3>"
        ));
        assert!(page.contains("<strong>When? </strong>Wednesday, March 5, 2025 @ 2:00pm"));
        assert!(page.contains("<div><p>Lightning talks.</p></div>"));
    }

    #[test]
    fn reports_payload_errors() {
        let err = render_next_event(SAMPLE_PAGE, "not json").expect_err("bad payload");
        assert!(err.to_string().contains("payload"));
    }

    #[test]
    fn reports_render_errors() {
        let err = render_next_event("<html><body></body></html>", SAMPLE_PAYLOAD)
            .expect_err("missing container");
        assert!(err
            .chain()
            .any(|cause| cause.to_string().contains("next-event")));
    }
}
