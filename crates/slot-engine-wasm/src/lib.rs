//! WASM bindings for slot-engine.
//!
//! Exposes free slot computation, first-fit search, and conflict detection to
//! a browser booking form via `wasm-bindgen`. All complex types are passed as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Deserialize;
use slot_engine::{BookingOccupancy, Granularity, OperatingWindow, SlotConfig, TimeOfDay};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for bookings passed from JavaScript.
///
/// The duration is signed so that bad form input degrades to "blocks nothing"
/// instead of failing the whole computation.
#[derive(Deserialize)]
struct OccupancyInput {
    start: String,
    total_duration_minutes: i64,
}

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    s.parse().map_err(|e| js_err("Invalid time", e))
}

/// Convert a JSON array of `{start, total_duration_minutes}` objects.
fn parse_bookings_json(json: &str) -> Result<Vec<BookingOccupancy>, JsValue> {
    let inputs: Vec<OccupancyInput> =
        serde_json::from_str(json).map_err(|e| js_err("Invalid bookings JSON", e))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_time(&input.start)?;
            Ok(BookingOccupancy::from_signed(
                start,
                input.total_duration_minutes,
            ))
        })
        .collect()
}

/// Parse an optional `SlotConfig` JSON object; `None` or `""` means defaults.
fn parse_config(json: Option<String>) -> Result<(OperatingWindow, Granularity), JsValue> {
    let config: SlotConfig = match json.as_deref().map(str::trim) {
        None | Some("") => SlotConfig::default(),
        Some(text) => serde_json::from_str(text).map_err(|e| js_err("Invalid config JSON", e))?,
    };
    config.validate().map_err(|e| js_err("Invalid config", e))
}

fn to_json_labels(slots: &[TimeOfDay]) -> Result<String, JsValue> {
    let labels: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
    serde_json::to_string(&labels).map_err(|e| js_err("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute free slot start times for a day.
///
/// `bookings_json` is a JSON array of `{start: "HH:MM", total_duration_minutes}`.
/// `config_json` is an optional `{granularity_minutes, open, close}` object; any
/// missing field takes its default (30, "08:00", "20:00"). Returns a JSON array
/// of `"HH:MM"` strings in ascending order.
#[wasm_bindgen(js_name = "computeFreeSlots")]
pub fn compute_free_slots(
    bookings_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let (window, granularity) = parse_config(config_json)?;

    let free = slot_engine::compute_free_slots(&bookings, &window, granularity);
    to_json_labels(&free)
}

/// Find the earliest start with `duration_minutes` of consecutive free slots.
///
/// Returns the `"HH:MM"` string, or `undefined` when nothing fits.
#[wasm_bindgen(js_name = "findFirstFit")]
pub fn find_first_fit(
    bookings_json: &str,
    duration_minutes: u32,
    config_json: Option<String>,
) -> Result<Option<String>, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let (window, granularity) = parse_config(config_json)?;

    Ok(
        slot_engine::find_first_fit(&bookings, &window, granularity, duration_minutes)
            .map(|t| t.to_string()),
    )
}

/// List the slots a proposed booking shares with existing bookings.
///
/// `proposed_json` is a single `{start, total_duration_minutes}` object and
/// `bookings_json` an array of them. Returns a JSON array of `"HH:MM"` strings;
/// an empty array means the proposal is conflict-free.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(
    proposed_json: &str,
    bookings_json: &str,
    granularity_minutes: u32,
) -> Result<String, JsValue> {
    let proposed: OccupancyInput =
        serde_json::from_str(proposed_json).map_err(|e| js_err("Invalid proposed JSON", e))?;
    let proposed = BookingOccupancy::from_signed(
        parse_time(&proposed.start)?,
        proposed.total_duration_minutes,
    );
    let existing = parse_bookings_json(bookings_json)?;
    let granularity =
        Granularity::new(granularity_minutes).map_err(|e| js_err("Invalid granularity", e))?;

    let conflicts = slot_engine::find_conflicts(&proposed, &existing, granularity);
    to_json_labels(&conflicts)
}
