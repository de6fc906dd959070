use chrono::{DateTime, Utc};

use crate::commands::{CmdMessage, CmdResult};
use crate::decay::apply_decay;
use crate::error::Result;
use crate::model::PracticeStatus;

/// Apply on-launch score decay to all tunes.
pub fn run(status: &mut PracticeStatus, now: DateTime<Utc>) -> Result<CmdResult> {
    let decayed = apply_decay(status, now);
    let mut result = CmdResult::default();
    result.changed = decayed > 0;
    if decayed > 0 {
        result.add_message(CmdMessage::info(format!("decayed {} tune scores", decayed)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, PracticeItem};
    use chrono::Duration;

    #[test]
    fn reports_change_only_when_something_decayed() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        assert!(!run(&mut status, now).unwrap().changed);

        let mut tune = PracticeItem::new(ItemKind::Tune);
        tune.score = 50.0;
        tune.last_score_updated = Some(now - Duration::days(2));
        status.items.insert("a|b|tune".into(), tune);

        let result = run(&mut status, now).unwrap();
        assert!(result.changed);
        assert_eq!(result.messages.len(), 1);
    }
}
