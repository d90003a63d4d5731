//! Screenshot file names.
//!
//! `<yyyyMMdd-hhmmss-fff>-<tag>.png`, where the tag names the render mode
//! that was active. Two captures in the same millisecond and mode share a
//! name; the later one overwrites.

use chrono::{DateTime, Local, TimeZone};
use tso_config::RenderMode;

// Hours are on the 12-hour clock with no AM/PM marker.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%I%M%S-%3f";

#[inline]
pub fn mode_tag(mode: Option<RenderMode>) -> &'static str {
    match mode {
        Some(RenderMode::Main) => "ao",
        Some(RenderMode::Ambient) => "amb",
        Some(RenderMode::DepthMap) => "d",
        Some(RenderMode::NormalMap) => "n",
        Some(RenderMode::Occlusion) => "o",
        Some(RenderMode::Diffusion) => "df",
        Some(RenderMode::Shadow) => "shadow",
        None => "none",
    }
}

pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// File name from an already formatted timestamp.
pub fn file_name(mode: Option<RenderMode>, stamp: &str) -> String {
    format!("{stamp}-{}.png", mode_tag(mode))
}

pub fn file_name_at<Tz: TimeZone>(mode: Option<RenderMode>, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    file_name(mode, &timestamp(at))
}

pub fn file_name_now(mode: Option<RenderMode>) -> String {
    file_name_at(mode, &Local::now())
}
