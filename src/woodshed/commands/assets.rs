use crate::assets::{part_assets, set_assets, tune_assets};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WoodshedError};
use crate::model::{set_key_of, PracticeStatus, SetRecord};

/// Resolve the PDF/WAV paths for a set, tune, or part id against the
/// discovered records. `instrument` overrides the set's configured one.
pub fn run(
    sets: &[SetRecord],
    status: &PracticeStatus,
    key: &str,
    instrument: Option<&str>,
) -> Result<CmdResult> {
    let set_key =
        set_key_of(key).ok_or_else(|| WoodshedError::Api(format!("not a valid item id: {}", key)))?;
    let set = sets
        .iter()
        .find(|set| set.id.key() == set_key)
        .ok_or_else(|| WoodshedError::ItemNotFound(key.to_string()))?;
    let instrument = instrument.unwrap_or_else(|| status.instrument_for_set(&set_key));

    let (pdf, wav) = if key == set_key {
        set_assets(set, instrument)
    } else if let Some(part) = set.parts.iter().find(|part| part.id.key() == key) {
        let (pdf, wav) = part_assets(part);
        (Some(pdf), Some(wav))
    } else if let Some(tune) = set.tunes.iter().find(|tune| tune.id.key() == key) {
        tune_assets(&set.path, &tune.name, instrument)
    } else {
        return Err(WoodshedError::ItemNotFound(key.to_string()));
    };

    let mut result = CmdResult::default();
    if pdf.is_none() {
        result.add_message(CmdMessage::warning(format!("no score PDF for {}", key)));
    }
    if wav.is_none() {
        result.add_message(CmdMessage::warning(format!("no recording for {}", key)));
    }
    result.asset_paths = [pdf, wav].into_iter().flatten().collect();
    Ok(result)
}
