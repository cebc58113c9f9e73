//! Weather extractor
//!
//! RP5 renders today's observations and tomorrow's forecast in unrelated
//! fragments of the city page, so each day has its own extractor type.
//!
//! The condition phrase is isolated by fixed character offsets from
//! literal markers in the site's localized text. The markers and offsets
//! are named constants below and pinned by fixture tests. When a marker
//! is absent the condition is left out of the result; the text is never
//! sliced from a fallback position.

use std::time::Instant;

use domain::{ForecastDay, WeatherField, WeatherInfo};
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::{
    Rp5Error,
    markup::{first_in, first_in_document, preceding_element, skip_chars, text_of},
};

/// Id of the container holding today's archived observations
pub const ARCHIVE_CONTAINER_ID: &str = "archiveString";

/// Id of the container holding the short forecast
pub const FORECAST_CONTAINER_ID: &str = "forecastShort-content";

/// Token that the condition phrase follows (end of the Fahrenheit reading)
///
/// Text without this token yields no condition.
pub const CONDITION_MARKER: &str = "F,";

/// Characters from the start of [`CONDITION_MARKER`] to the condition phrase
pub const CONDITION_OFFSET: usize = 3;

/// Day label that opens tomorrow's forecast text
///
/// Forecast text without this label yields no condition.
pub const TOMORROW_MARKER: &str = "Завтра:";

/// Characters from the start of [`TOMORROW_MARKER`] to the text searched
/// for [`CONDITION_MARKER`]
pub const TOMORROW_OFFSET: usize = 28;

/// Histogram receiving the duration of every extraction, labelled by `day`
pub const EXTRACTION_DURATION_METRIC: &str = "rp5_extraction_duration_seconds";

const ARCHIVE_CONTAINER: &str = "div#archiveString";
const ARCHIVE_TEMP: &str = "div.ArchiveTemp";
const ARCHIVE_TEMP_FEELING: &str = "div.ArchiveTempFeeling";
const FORECAST_CONTAINER: &str = "div#forecastShort-content";
const SECOND_PART: &str = "span.second-part";
const CURRENT_VALUE: &str = "span.t_0";

/// Extraction logic for one [`ForecastDay`]
pub trait DayExtractor {
    /// The day this extractor handles
    fn day(&self) -> ForecastDay;

    /// Extract weather from a parsed city page
    ///
    /// # Errors
    ///
    /// Returns `Rp5Error::PageStructure` if a required element is missing.
    fn extract(&self, document: &Html) -> Result<WeatherInfo, Rp5Error>;
}

/// Today's weather from the archive container
#[derive(Debug, Clone, Copy, Default)]
pub struct TodayExtractor;

impl DayExtractor for TodayExtractor {
    fn day(&self) -> ForecastDay {
        ForecastDay::Today
    }

    fn extract(&self, document: &Html) -> Result<WeatherInfo, Rp5Error> {
        let container = first_in_document(document, ARCHIVE_CONTAINER)?
            .ok_or(Rp5Error::missing(ARCHIVE_CONTAINER))?;

        let mut info = WeatherInfo::new();

        if let Some(condition) = condition_after_marker(&text_of(container)) {
            info.set(WeatherField::Condition, condition);
        }
        if let Some(temp) = nested_value(container, ARCHIVE_TEMP)? {
            info.set(WeatherField::Temperature, temp);
        }
        if let Some(feels_like) = nested_value(container, ARCHIVE_TEMP_FEELING)? {
            info.set(WeatherField::FeelsLike, feels_like);
        }

        Ok(info)
    }
}

/// Tomorrow's weather from the short-forecast container
///
/// The forecast has no feels-like reading, so that field is never set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomorrowExtractor;

impl DayExtractor for TomorrowExtractor {
    fn day(&self) -> ForecastDay {
        ForecastDay::Tomorrow
    }

    fn extract(&self, document: &Html) -> Result<WeatherInfo, Rp5Error> {
        let container = first_in_document(document, FORECAST_CONTAINER)?
            .ok_or(Rp5Error::missing(FORECAST_CONTAINER))?;
        let second_part =
            first_in(container, SECOND_PART)?.ok_or(Rp5Error::missing(SECOND_PART))?;

        let mut info = WeatherInfo::new();

        match preceding_element(document, second_part, "b") {
            Some(bold) => {
                if let Some(condition) = tomorrow_condition(&text_of(bold)) {
                    info.set(WeatherField::Condition, condition);
                }
            },
            None => debug!("No forecast text precedes the second part"),
        }
        if let Some(temp) = first_in(second_part, CURRENT_VALUE)? {
            info.set(WeatherField::Temperature, text_of(temp));
        }

        Ok(info)
    }
}

/// Parse `html` and run the extractor for `day`, recording its duration
///
/// # Errors
///
/// Returns `Rp5Error::PageStructure` if the page lacks a required container.
pub fn extract(html: &str, day: ForecastDay) -> Result<WeatherInfo, Rp5Error> {
    let start = Instant::now();
    let document = Html::parse_document(html);

    let result = match day {
        ForecastDay::Today => TodayExtractor.extract(&document),
        ForecastDay::Tomorrow => TomorrowExtractor.extract(&document),
    };

    let elapsed = start.elapsed();
    metrics::histogram!(EXTRACTION_DURATION_METRIC, "day" => day.as_str())
        .record(elapsed.as_secs_f64());
    debug!(
        day = %day,
        elapsed_us = elapsed.as_micros(),
        ok = result.is_ok(),
        "RP5 extraction finished"
    );

    result
}

/// Text of the current-value span inside the `outer` block of `container`
fn nested_value(container: ElementRef<'_>, outer: &'static str) -> Result<Option<String>, Rp5Error> {
    let Some(block) = first_in(container, outer)? else {
        return Ok(None);
    };
    Ok(first_in(block, CURRENT_VALUE)?.map(text_of))
}

/// Everything from [`CONDITION_OFFSET`] characters past the first
/// [`CONDITION_MARKER`]; `None` if the marker is absent or nothing follows
fn condition_after_marker(text: &str) -> Option<String> {
    let start = text.find(CONDITION_MARKER)?;
    let condition = skip_chars(&text[start..], CONDITION_OFFSET);
    (!condition.is_empty()).then(|| condition.to_string())
}

/// Reduce the forecast text past [`TOMORROW_MARKER`], then isolate the
/// condition phrase in it
fn tomorrow_condition(text: &str) -> Option<String> {
    let start = text.find(TOMORROW_MARKER)?;
    condition_after_marker(skip_chars(&text[start..], TOMORROW_OFFSET))
}
