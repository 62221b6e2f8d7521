use tabled::Tabled;

use crate::types::{Device, SearchItem, Track};

#[derive(Tabled)]
pub struct TrackRow {
    #[tabled(rename = "#")]
    pub number: String,
    pub name: String,
    pub artists: String,
    pub duration: String,
}

impl TrackRow {
    pub fn from_track(track: &Track) -> Self {
        TrackRow {
            number: track
                .track_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            name: track.name.clone(),
            artists: track.artist_names(),
            duration: track.duration_ms.map(format_duration).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct SearchRow {
    pub kind: String,
    pub name: String,
    pub uri: String,
}

impl SearchRow {
    pub fn new(kind: &str, item: &SearchItem) -> Self {
        SearchRow {
            kind: kind.trim_end_matches('s').to_string(),
            name: item.name().to_string(),
            uri: item.uri().to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct DeviceRow {
    pub name: String,
    pub kind: String,
    pub active: String,
    pub volume: String,
}

impl DeviceRow {
    pub fn from_device(device: &Device) -> Self {
        DeviceRow {
            name: device.name.clone(),
            kind: device.kind.clone(),
            active: if device.is_active == Some(true) { "yes" } else { "" }.to_string(),
            volume: device
                .volume_percent
                .map(|v| format!("{}%", v))
                .unwrap_or_default(),
        }
    }
}

/// `m:ss` for track lengths.
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
