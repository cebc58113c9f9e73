//! Location navigator
//!
//! RP5 lays out its location tree (world → country → region → city) on
//! listing pages. Two page layouts exist, so listing is split into two
//! named strategies: [`CountryMapLinks`] is tried first and
//! [`HeadingLinks`] only when the first finds nothing.

use std::num::IntErrorKind;

use domain::Location;
use scraper::Html;
use tracing::{debug, trace};

use crate::{
    Rp5Config, Rp5Error, SelectionError,
    markup::{first_in, selector, text_of},
    urlencoding::quote,
};

/// A rule that extracts child locations from a parsed listing page
pub trait ListingStrategy {
    /// Strategy name for logging
    fn name(&self) -> &'static str;

    /// Extract locations in document order
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in selector fails to compile.
    fn extract(&self, document: &Html, config: &Rp5Config) -> Result<Vec<Location>, Rp5Error>;
}

/// Primary rule: one location per `div.country_map_links` group
///
/// The group's anchor href is appended directly to the base URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryMapLinks;

impl CountryMapLinks {
    /// Container selector
    pub const CONTAINER: &'static str = "div.country_map_links";
}

impl ListingStrategy for CountryMapLinks {
    fn name(&self) -> &'static str {
        "country_map_links"
    }

    fn extract(&self, document: &Html, config: &Rp5Config) -> Result<Vec<Location>, Rp5Error> {
        anchor_locations(document, Self::CONTAINER, |path| {
            format!("{}{path}", config.base())
        })
    }
}

/// Fallback rule: one location per level-3 heading
///
/// Heading hrefs are relative, so they are joined with an explicit `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingLinks;

impl HeadingLinks {
    /// Container selector
    pub const CONTAINER: &'static str = "h3";
}

impl ListingStrategy for HeadingLinks {
    fn name(&self) -> &'static str {
        "heading_links"
    }

    fn extract(&self, document: &Html, config: &Rp5Config) -> Result<Vec<Location>, Rp5Error> {
        anchor_locations(document, Self::CONTAINER, |path| {
            format!("{}/{path}", config.base())
        })
    }
}

/// Take the first anchor inside every element matching `container`
fn anchor_locations(
    document: &Html,
    container: &'static str,
    join: impl Fn(&str) -> String,
) -> Result<Vec<Location>, Rp5Error> {
    let container_selector = selector(container)?;
    let mut locations = Vec::new();

    for element in document.select(&container_selector) {
        let Some(anchor) = first_in(element, "a")? else {
            trace!(container, "Skipping element without anchor");
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            trace!(container, "Skipping anchor without href");
            continue;
        };

        locations.push(Location::new(text_of(anchor), join(&quote(href))));
    }

    Ok(locations)
}

/// Parse a listing page with the primary strategy, falling back to the
/// heading strategy when the primary yields nothing
///
/// # Errors
///
/// Returns an error only if a built-in selector fails to compile.
pub fn parse_locations(html: &str, config: &Rp5Config) -> Result<Vec<Location>, Rp5Error> {
    let document = Html::parse_document(html);

    let primary = CountryMapLinks.extract(&document, config)?;
    if !primary.is_empty() {
        debug!(strategy = CountryMapLinks.name(), count = primary.len(), "Listing parsed");
        return Ok(primary);
    }

    let fallback = HeadingLinks.extract(&document, config)?;
    debug!(strategy = HeadingLinks.name(), count = fallback.len(), "Listing parsed");
    Ok(fallback)
}

/// Resolve a 1-based ordinal typed by the user
///
/// # Errors
///
/// - `SelectionError::WrongFormat` if `input` is not an integer
/// - `SelectionError::NotInList` if it is outside `1..=locations.len()`
pub fn select_location<'a>(
    locations: &'a [Location],
    input: &str,
) -> Result<&'a Location, SelectionError> {
    let trimmed = input.trim();
    let not_in_list = || SelectionError::NotInList {
        input: trimmed.to_string(),
        len: locations.len(),
    };

    let ordinal: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(not_in_list());
        },
        Err(_) => {
            return Err(SelectionError::WrongFormat {
                input: trimmed.to_string(),
            });
        },
    };

    usize::try_from(ordinal)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| locations.get(idx))
        .ok_or_else(not_in_list)
}
