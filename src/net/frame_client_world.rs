//! Media, location, onboarding and map frame handlers.

#[cfg(test)]
#[path = "frame_client_world_test.rs"]
mod frame_client_world_test;

use crate::net::frame_client::frame_client_requests::{
    SYSCALL_LOCATION_SETTINGS, SYSCALL_MAP_GEOCODE, SYSCALL_MEDIA_AUDIO_TOGGLE, SYSCALL_ONBOARDING_STEP,
};
use crate::net::types::{Frame, FrameStatus, number_to_i64};
use crate::state::loader::{LoaderState, OnboardingStep};
use crate::state::map::{GeocodeResult, MapState};
use crate::state::media::MediaState;

fn is_update(frame: &Frame, syscall: &str) -> bool {
    frame.syscall == syscall && matches!(frame.status, FrameStatus::Done | FrameStatus::Item)
}

fn bool_field(frame: &Frame, key: &str) -> Option<bool> {
    frame.data.get(key).and_then(serde_json::Value::as_bool)
}

/// Apply `media:audio:toggle` and `location:settings` responses.
pub fn apply_media_frame(media: &mut MediaState, frame: &Frame) -> bool {
    if is_update(frame, SYSCALL_MEDIA_AUDIO_TOGGLE) {
        if let Some(enabled) = bool_field(frame, "enabled") {
            media.cam_audio_enabled = enabled;
        }
        return true;
    }

    if is_update(frame, SYSCALL_LOCATION_SETTINGS) {
        if let Some(enabled) = bool_field(frame, "instance_media_chat_enabled") {
            media.instance_media_chat_enabled = enabled;
            if !enabled {
                media.cam_audio_enabled = false;
            }
        }
        return true;
    }

    false
}

/// Apply `onboarding:step` progress. Either field may be sent alone.
pub fn apply_onboarding_frame(loader: &mut LoaderState, frame: &Frame) -> bool {
    if !is_update(frame, SYSCALL_ONBOARDING_STEP) {
        return false;
    }

    if let Some(step) = frame
        .data
        .get("step")
        .and_then(|v| serde_json::from_value::<OnboardingStep>(v.clone()).ok())
    {
        loader.set_step(step);
    }

    if let Some(count) = frame
        .data
        .get("objects_to_load")
        .and_then(number_to_i64)
        .and_then(|n| u32::try_from(n).ok())
    {
        loader.set_objects_to_load(count);
    }

    true
}

/// Apply `map:geocode` results.
pub fn apply_map_frame(map: &mut MapState, frame: &Frame) -> bool {
    if !frame.is_done(SYSCALL_MAP_GEOCODE) {
        return false;
    }
    let results = frame
        .data
        .get("results")
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<GeocodeResult>(item.clone()).ok())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    map.set_results(results);
    true
}
