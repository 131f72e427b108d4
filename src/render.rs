use thiserror::Error;

use crate::datetime::format_day_and_time;
use crate::dom::{el, Document};
use crate::models::EventListing;

pub const CONTAINER_ID: &str = "next-event";

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("event listing has no entries")]
    EmptyListing,
    #[error("no element with id {0:?} in the document")]
    MissingContainer(&'static str),
}

/// Appends the first event of the listing to the `#next-event` container as
/// four nodes: heading, date line, venue line, raw description. Append-only;
/// calling twice appends a second fragment.
pub fn render_meetup_info(
    document: &mut Document,
    listing: &EventListing,
) -> Result<(), RenderError> {
    let meetup = listing.entries.first().ok_or(RenderError::EmptyListing)?;

    let name = el(
        "h3",
        "",
        vec![el("a", &meetup.name, Vec::new(), &[("href", meetup.link.as_str())]).into()],
        &[],
    );

    let day_and_time = format_day_and_time(&meetup.time);
    let when = el(
        "p",
        &day_and_time,
        vec![el("strong", "When? ", Vec::new(), &[]).into()],
        &[],
    );

    let venue_link = format!("{}, {}", meetup.venue.name, meetup.venue.address_line);
    // The venue text goes into the map URL as-is, without percent-encoding.
    let venue_url = format!("{MAPS_SEARCH_URL}{venue_link}");
    let venue = el(
        "p",
        "",
        vec![
            el("strong", "Where will we be? ", Vec::new(), &[]).into(),
            el("a", &venue_link, Vec::new(), &[("href", venue_url.as_str())]).into(),
        ],
        &[],
    );

    let mut description = el("div", "", Vec::new(), &[]);
    description.set_inner_html(&meetup.description);

    let container = document
        .element_by_id_mut(CONTAINER_ID)
        .ok_or(RenderError::MissingContainer(CONTAINER_ID))?;
    container.append_child(name.into());
    container.append_child(when.into());
    container.append_child(venue.into());
    container.append_child(description.into());

    Ok(())
}
