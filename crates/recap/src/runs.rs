//! Scoring-Run Detection
//!
//! Walks the scoring subsequence of a game in order, accumulating
//! consecutive same-team points. A streak closes when the other team
//! scores (or the game ends) and is kept if it reached the configured
//! threshold. Runs are reported in order of occurrence, not magnitude.

use pbp_events::{NormalizedEvent, ScoringRun};

/// Detects scoring runs of at least `point_threshold` unanswered points.
pub fn detect_runs(events: &[NormalizedEvent], point_threshold: u32) -> Vec<ScoringRun> {
    let mut runs = Vec::new();
    let mut current: Option<ScoringRun> = None;

    for event in events.iter().filter(|e| e.is_scoring()) {
        match current.as_mut() {
            Some(run) if run.team == event.team => run.points += event.points,
            _ => {
                flush(&mut current, point_threshold, &mut runs);
                current = Some(ScoringRun::new(event.team.clone(), event.points));
            }
        }
    }
    flush(&mut current, point_threshold, &mut runs);

    runs
}

fn flush(current: &mut Option<ScoringRun>, point_threshold: u32, runs: &mut Vec<ScoringRun>) {
    if let Some(run) = current.take() {
        if run.points >= point_threshold {
            runs.push(run);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbp_events::{EventKind, TeamSide};

    fn score(team: &str, kind: EventKind) -> NormalizedEvent {
        NormalizedEvent::new(1, "10:00", TeamSide::Home, team, "Player", kind, "shot")
    }

    fn rebound(team: &str) -> NormalizedEvent {
        NormalizedEvent::new(1, "10:00", TeamSide::Home, team, "Player", EventKind::Rebound, "rebound")
    }

    #[test]
    fn test_five_straight_twos_then_answer_is_one_run() {
        // 10 unanswered points close as a single run once the other
        // team scores
        let mut events: Vec<NormalizedEvent> =
            (0..5).map(|_| score("BOS", EventKind::TwoMade)).collect();
        events.push(score("GSW", EventKind::TwoMade));

        let runs = detect_runs(&events, 8);
        assert_eq!(runs, vec![ScoringRun::new("BOS", 10)]);
    }

    #[test]
    fn test_streak_below_threshold_is_dropped() {
        let events = vec![
            score("BOS", EventKind::ThreeMade),
            score("BOS", EventKind::TwoMade),
            score("GSW", EventKind::TwoMade),
        ];
        assert!(detect_runs(&events, 8).is_empty());
    }

    #[test]
    fn test_pending_streak_flushes_at_end_of_game() {
        let events = vec![
            score("GSW", EventKind::TwoMade),
            score("BOS", EventKind::ThreeMade),
            score("BOS", EventKind::ThreeMade),
            score("BOS", EventKind::TwoMade),
        ];
        let runs = detect_runs(&events, 8);
        assert_eq!(runs, vec![ScoringRun::new("BOS", 8)]);
    }

    #[test]
    fn test_non_scoring_events_do_not_break_a_streak() {
        let events = vec![
            score("BOS", EventKind::TwoMade),
            rebound("GSW"),
            score("BOS", EventKind::ThreeMade),
            rebound("BOS"),
            score("BOS", EventKind::ThreeMade),
            score("GSW", EventKind::FreeThrowMade),
        ];
        let runs = detect_runs(&events, 8);
        assert_eq!(runs, vec![ScoringRun::new("BOS", 8)]);
    }

    #[test]
    fn test_runs_report_in_chronological_order() {
        let mut events: Vec<NormalizedEvent> =
            (0..4).map(|_| score("GSW", EventKind::TwoMade)).collect();
        events.extend((0..5).map(|_| score("BOS", EventKind::TwoMade)));
        events.push(score("GSW", EventKind::TwoMade));

        let runs = detect_runs(&events, 8);
        assert_eq!(
            runs,
            vec![ScoringRun::new("GSW", 8), ScoringRun::new("BOS", 10)]
        );
    }

    #[test]
    fn test_no_scoring_events_means_no_runs() {
        let events = vec![rebound("BOS"), rebound("GSW")];
        assert!(detect_runs(&events, 8).is_empty());
        assert!(detect_runs(&[], 8).is_empty());
    }
}
