use clap::Subcommand;
use serde_json::Value;
use tabled::Table;

use super::{report, session, spinner, table::DeviceRow, table::format_duration};
use crate::{info, spotify::QueryOptions, success, warning};

#[derive(Subcommand, Debug, Clone)]
pub enum PlayerCommand {
    /// Show what is playing and on which device
    Status,

    /// List available devices
    Devices,

    /// Set the volume, 0 to 100
    Volume { percent: i64 },

    /// Turn shuffle on or off
    Shuffle { state: String },

    /// Set repeat mode: off, track or context
    Repeat { mode: String },
}

pub async fn player(command: PlayerCommand) {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };
    let client = &session.client;

    match command {
        PlayerCommand::Status => {
            let pb = spinner("Fetching playback state...");
            let result = client
                .get_playback_state(&token, &QueryOptions::new().additional_types("episode"))
                .await;
            pb.finish_and_clear();

            match result {
                Ok(Some(state)) => {
                    let item = state
                        .item
                        .as_ref()
                        .map(|i| i.name().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let progress = state.progress_ms.map(format_duration).unwrap_or_default();
                    let length = state
                        .item
                        .as_ref()
                        .and_then(|i| i.duration_ms())
                        .map(format_duration)
                        .unwrap_or_default();
                    info!(
                        "{} {} [{}/{}] on {} (shuffle {}, repeat {})",
                        if state.is_playing == Some(true) { "Playing" } else { "Paused" },
                        item,
                        progress,
                        length,
                        state
                            .device
                            .as_ref()
                            .map(|d| d.name.as_str())
                            .unwrap_or("unknown device"),
                        if state.shuffle_state == Some(true) { "on" } else { "off" },
                        state.repeat_state.as_deref().unwrap_or("off")
                    );
                }
                Ok(None) => warning!("Nothing is playing right now."),
                Err(e) => report(&e),
            }
        }
        PlayerCommand::Devices => match client.get_available_devices(&token).await {
            Ok(devices) if devices.is_empty() => warning!("No active devices found."),
            Ok(devices) => {
                let rows: Vec<DeviceRow> = devices.iter().map(DeviceRow::from_device).collect();
                println!("{}", Table::new(rows));
            }
            Err(e) => report(&e),
        },
        PlayerCommand::Volume { percent } => {
            match client.set_playback_volume(&token, percent, None).await {
                Ok(()) => success!("Volume set to {}%", percent),
                Err(e) => report(&e),
            }
        }
        PlayerCommand::Shuffle { state } => {
            match client
                .toggle_playback_shuffle(&token, shuffle_state(&state), None)
                .await
            {
                Ok(()) => success!("Shuffle {}", state),
                Err(e) => report(&e),
            }
        }
        PlayerCommand::Repeat { mode } => {
            match client.set_repeat_mode(&token, &mode, None).await {
                Ok(()) => success!("Repeat mode set to {}", mode),
                Err(e) => report(&e),
            }
        }
    }
}

// Anything but on/off is forwarded as is and rejected by validation.
fn shuffle_state(state: &str) -> Value {
    match state.to_lowercase().as_str() {
        "on" | "true" => Value::Bool(true),
        "off" | "false" => Value::Bool(false),
        _ => Value::String(state.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_words() {
        assert_eq!(shuffle_state("ON"), Value::Bool(true));
        assert_eq!(shuffle_state("off"), Value::Bool(false));
        assert_eq!(shuffle_state("maybe"), Value::String("maybe".to_string()));
    }
}
