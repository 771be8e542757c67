//! Console report for one API response.
//!
//! The report covers the first period of the first series only:
//!
//! ```text
//! Series title: (Seas) Unemployment Rate
//! ...
//! Area type: National
//!
//! Year: 2018
//! Period: M01
//! Period name: January
//! Value: 4.1
//! Footnotes:
//!     P - preliminary
//! Net change:
//!     1 month: 0.0
//! ...
//! ```
//!
//! The catalog block, the footnotes and the change calculations are optional
//! and are left out entirely when the response does not carry them.

use crate::error::RenderError;
use crate::models::{Catalog, Change, Footnote, Period, ResponseEnvelope};
use log::warn;
use std::io::Write;

/// Prefix the API uses in `message` when a series id does not exist, while
/// still reporting `REQUEST_SUCCEEDED`.
pub const INVALID_SERIES_PREFIX: &str = "Invalid Series";

/// Write the report for `envelope` to `out`.
///
/// Server status and messages are printed before any error is returned, so the
/// caller only has to turn the error into a failing exit status.
pub fn render<W: Write>(envelope: &ResponseEnvelope, out: &mut W) -> Result<(), RenderError> {
    if !envelope.succeeded() {
        writeln!(out, "Server error: {}", envelope.status)?;
        for m in &envelope.messages {
            writeln!(out, "{}", m)?;
        }
        return Err(RenderError::ServerStatus {
            status: envelope.status.clone(),
        });
    }

    for m in &envelope.messages {
        writeln!(out, "{}", m)?;
    }
    if let Some(first) = envelope.messages.first()
        && first.starts_with(INVALID_SERIES_PREFIX)
    {
        return Err(RenderError::InvalidSeries {
            message: first.clone(),
        });
    }

    let series = envelope
        .results
        .series
        .first()
        .ok_or(RenderError::MissingSeries)?;
    let period = series
        .periods
        .first()
        .ok_or_else(|| RenderError::MissingPeriod {
            series_id: series.series_id.clone(),
        })?;

    if let Some(catalog) = &series.catalog {
        write_catalog(out, catalog)?;
    }
    write_period(out, period)?;
    write_footnotes(out, &period.footnotes)?;
    if let Some(calc) = &period.calculations {
        writeln!(out, "Net change:")?;
        write_change(out, &calc.net_change)?;
        writeln!(out, "Percent change:")?;
        write_change(out, &calc.percent_change)?;
    }
    Ok(())
}

fn write_catalog<W: Write>(out: &mut W, c: &Catalog) -> std::io::Result<()> {
    writeln!(out, "Series title: {}", c.title)?;
    writeln!(out, "Series ID: {}", c.id)?;
    writeln!(out, "Seasonality: {}", c.seasonality)?;
    writeln!(out, "Survey name: {}", c.survey_name)?;
    writeln!(out, "Survey abbreviation: {}", c.survey_abbreviation)?;
    writeln!(out, "Measure data type: {}", c.measure_data_type)?;
    writeln!(out, "Area: {}", c.area)?;
    writeln!(out, "Area type: {}", c.area_type)?;
    writeln!(out)
}

fn write_period<W: Write>(out: &mut W, p: &Period) -> std::io::Result<()> {
    writeln!(out, "Year: {}", p.year)?;
    writeln!(out, "Period: {}", p.period_number)?;
    writeln!(out, "Period name: {}", p.period_name)?;
    writeln!(out, "Value: {}", p.value)
}

/// The API sends `[{}]` when a period has no footnotes, so only the first
/// entry decides whether the section is printed at all.
fn write_footnotes<W: Write>(out: &mut W, footnotes: &[Footnote]) -> std::io::Result<()> {
    match footnotes.first() {
        Some(first) if first.code.is_some() => {}
        _ => return Ok(()),
    }
    writeln!(out, "Footnotes:")?;
    for (i, f) in footnotes.iter().enumerate() {
        match (&f.code, &f.text) {
            (Some(code), Some(text)) => writeln!(out, "\t{} - {}", code, text)?,
            _ => warn!("skipping incomplete footnote #{}: {:?}", i, f),
        }
    }
    Ok(())
}

fn write_change<W: Write>(out: &mut W, c: &Change) -> std::io::Result<()> {
    writeln!(out, "\t1 month: {}", c.one_month)?;
    writeln!(out, "\t3 months: {}", c.three_months)?;
    writeln!(out, "\t6 months: {}", c.six_months)?;
    writeln!(out, "\t12 months: {}", c.twelve_months)
}
