use chrono::Utc;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WoodshedError};
use crate::model::{kind_of_key, set_key_of, ItemKind, PracticeItem, PracticeStatus};

/// Streak length at which the mastery score reaches 100.
const STREAK_TARGET: u32 = 10;

fn practiced_kind(key: &str) -> Result<ItemKind> {
    match kind_of_key(key) {
        Some(ItemKind::Tune) => Ok(ItemKind::Tune),
        Some(ItemKind::Part) => Ok(ItemKind::Part),
        Some(ItemKind::Set) => Err(WoodshedError::Api(
            "sets are organizational and cannot be practiced directly; pick a tune or part"
                .to_string(),
        )),
        None => Err(WoodshedError::Api(format!("not a valid item id: {}", key))),
    }
}

/// Start a practice session: reset the item's streak and score, and
/// remember the chosen instrument for the item's set.
pub fn start(
    status: &mut PracticeStatus,
    key: &str,
    instrument: Option<&str>,
) -> Result<CmdResult> {
    let kind = practiced_kind(key)?;

    if let Some(instrument) = instrument {
        if let Some(set_key) = set_key_of(key) {
            status
                .set_instruments
                .insert(set_key, instrument.to_string());
        }
        status.focus_instrument = instrument.to_string();
    }

    let item = PracticeItem::new(kind);
    status.items.insert(key.to_string(), item.clone());

    let mut result = CmdResult::default()
        .with_items(vec![(key.to_string(), item)])
        .with_changed();
    result.add_message(CmdMessage::info(format!(
        "session started for {} {}",
        kind, key
    )));
    Ok(result)
}

/// Record a successful repetition: streak up, score toward 100.
pub fn record_success(status: &mut PracticeStatus, key: &str) -> Result<CmdResult> {
    practiced_kind(key)?;
    let item = status
        .items
        .get_mut(key)
        .ok_or_else(|| WoodshedError::ItemNotFound(key.to_string()))?;

    let now = Utc::now();
    item.streak += 1;
    item.score = (item.streak as f64 / STREAK_TARGET as f64 * 100.0).min(100.0);
    item.last_practiced = Some(now);
    item.last_score_updated = Some(now);

    let snapshot = item.clone();
    let mut result = CmdResult::default()
        .with_items(vec![(key.to_string(), snapshot.clone())])
        .with_changed();
    result.add_message(CmdMessage::success(format!(
        "streak {} (score {:.0})",
        snapshot.streak, snapshot.score
    )));
    Ok(result)
}

/// Record a failed repetition: back to zero.
pub fn record_fail(status: &mut PracticeStatus, key: &str) -> Result<CmdResult> {
    reset_item(status, key, "streak reset after fail")
}

/// Reset an item's streak and score.
pub fn reset(status: &mut PracticeStatus, key: &str) -> Result<CmdResult> {
    reset_item(status, key, "item reset")
}

fn reset_item(status: &mut PracticeStatus, key: &str, note: &str) -> Result<CmdResult> {
    practiced_kind(key)?;
    let item = status
        .items
        .get_mut(key)
        .ok_or_else(|| WoodshedError::ItemNotFound(key.to_string()))?;
    *item = PracticeItem::new(item.kind);

    let snapshot = item.clone();
    let mut result = CmdResult::default()
        .with_items(vec![(key.to_string(), snapshot)])
        .with_changed();
    result.add_message(CmdMessage::info(note));
    Ok(result)
}
