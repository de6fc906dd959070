use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WoodshedError};
use crate::model::PracticeStatus;
use crate::naming::INSTRUMENTS;

/// Show one status-level setting, or all of them.
pub fn get(status: &PracticeStatus, key: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match key {
        None => {
            result.add_message(CmdMessage::info(format!(
                "decay-rate = {}",
                status.decay_rate_percent_per_day
            )));
            result.add_message(CmdMessage::info(format!(
                "instrument = {}",
                status.focus_instrument
            )));
        }
        Some("decay-rate") => {
            result.add_message(CmdMessage::info(format!(
                "decay-rate = {}",
                status.decay_rate_percent_per_day
            )));
        }
        Some("instrument") => {
            result.add_message(CmdMessage::info(format!(
                "instrument = {}",
                status.focus_instrument
            )));
        }
        Some(other) => {
            return Err(WoodshedError::Api(format!("unknown config key: {}", other)));
        }
    }
    Ok(result)
}

/// Set a status-level setting.
pub fn set(status: &mut PracticeStatus, key: &str, value: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_changed();
    match key {
        "decay-rate" => {
            let rate: f64 = value
                .parse()
                .map_err(|_| WoodshedError::Api(format!("not a number: {}", value)))?;
            if !(0.0..=100.0).contains(&rate) {
                return Err(WoodshedError::Api(
                    "decay-rate must be between 0 and 100".to_string(),
                ));
            }
            status.decay_rate_percent_per_day = rate;
            result.add_message(CmdMessage::success(format!("decay-rate = {}", rate)));
        }
        "instrument" => {
            if !INSTRUMENTS.contains(&value) {
                return Err(WoodshedError::Api(format!(
                    "unknown instrument: {} (expected one of {})",
                    value,
                    INSTRUMENTS.join(", ")
                )));
            }
            status.focus_instrument = value.to_string();
            result.add_message(CmdMessage::success(format!("instrument = {}", value)));
        }
        other => {
            return Err(WoodshedError::Api(format!("unknown config key: {}", other)));
        }
    }
    Ok(result)
}
