//! Score decay, applied on launch.
//!
//! Only tunes decay. Parts keep their score until reset, and sets carry
//! no practice state at all.

use chrono::{DateTime, Utc};

use crate::model::{ItemKind, PracticeStatus};

/// Decay every tune's score by `decay_rate_percent_per_day` percentage
/// points per day since `last_score_updated`, clamped at zero and rounded
/// to one decimal, then stamp `last_score_updated` with `now`. Items
/// never scored are left alone. Returns how many items decayed.
pub fn apply_decay(status: &mut PracticeStatus, now: DateTime<Utc>) -> usize {
    let rate = status.decay_rate_percent_per_day;
    let mut decayed = 0;
    for item in status.items.values_mut() {
        if item.kind != ItemKind::Tune {
            continue;
        }
        let Some(last) = item.last_score_updated else {
            continue;
        };
        let days = (now - last).num_seconds() as f64 / 86_400.0;
        if days <= 0.0 {
            continue;
        }
        let next = (item.score - rate * days).max(0.0);
        item.score = (next * 10.0).round() / 10.0;
        item.last_score_updated = Some(now);
        decayed += 1;
    }
    decayed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PracticeItem;
    use chrono::Duration;

    fn tune_scored(score: f64, last: DateTime<Utc>) -> PracticeItem {
        let mut item = PracticeItem::new(ItemKind::Tune);
        item.score = score;
        item.last_score_updated = Some(last);
        item
    }

    #[test]
    fn decay_reduces_tune_score() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        status
            .items
            .insert("a|b|tune".into(), tune_scored(50.0, now - Duration::days(5)));

        let decayed = apply_decay(&mut status, now);
        assert_eq!(decayed, 1);
        // 5 days at 1%/day: 50 - 5 = 45
        assert_eq!(status.items["a|b|tune"].score, 45.0);
        assert_eq!(status.items["a|b|tune"].last_score_updated, Some(now));
    }

    #[test]
    fn decay_clamps_at_zero() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        status
            .items
            .insert("a|b|tune".into(), tune_scored(3.0, now - Duration::days(30)));

        apply_decay(&mut status, now);
        assert_eq!(status.items["a|b|tune"].score, 0.0);
    }

    #[test]
    fn decay_skips_parts() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        let mut part = PracticeItem::new(ItemKind::Part);
        part.score = 30.0;
        part.last_score_updated = Some(now - Duration::days(10));
        status.items.insert("a|b|Parts|p".into(), part);

        let decayed = apply_decay(&mut status, now);
        assert_eq!(decayed, 0);
        assert_eq!(status.items["a|b|Parts|p"].score, 30.0);
    }

    #[test]
    fn decay_skips_sets() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        let mut set = PracticeItem::new(ItemKind::Set);
        set.score = 40.0;
        set.last_score_updated = Some(now - Duration::days(10));
        status.items.insert("a|b".into(), set);

        assert_eq!(apply_decay(&mut status, now), 0);
        assert_eq!(status.items["a|b"].score, 40.0);
    }

    #[test]
    fn decay_skips_unscored_items() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        status
            .items
            .insert("a|b|tune".into(), PracticeItem::new(ItemKind::Tune));

        assert_eq!(apply_decay(&mut status, now), 0);
        assert!(status.items["a|b|tune"].last_score_updated.is_none());
    }

    #[test]
    fn custom_decay_rate() {
        let now = Utc::now();
        let mut status = PracticeStatus::default();
        status.decay_rate_percent_per_day = 2.0;
        status
            .items
            .insert("a|b|tune".into(), tune_scored(50.0, now - Duration::days(5)));

        apply_decay(&mut status, now);
        assert_eq!(status.items["a|b|tune"].score, 40.0);
    }
}
