//! Classification Rules
//!
//! The ordered keyword rule table and the hint dispatch. Precedence is
//! load-bearing: three-point and free-throw markers must be tested before
//! the generic shot/layup/dunk markers, otherwise a "3PT Layup" would
//! classify as a plain two-point shot.

use pbp_events::{ActionHint, EventKind};

/// Marker for a missed attempt anywhere in the upper-cased description.
const MISS_MARKER: &str = "MISS";

/// Token that makes generic shot keywords a false positive
/// ("shot clock" violations contain "SHOT").
const CLOCK_TOKEN: &str = "CLOCK";

/// One keyword rule: a predicate over the upper-cased description plus
/// the kind pair it resolves to. Non-shot rules carry the same kind in
/// both slots.
struct KindRule {
    matches: fn(&str) -> bool,
    made: EventKind,
    missed: EventKind,
}

impl KindRule {
    const fn shot(matches: fn(&str) -> bool, made: EventKind, missed: EventKind) -> Self {
        Self { matches, made, missed }
    }

    const fn plain(matches: fn(&str) -> bool, kind: EventKind) -> Self {
        Self {
            matches,
            made: kind,
            missed: kind,
        }
    }
}

/// Keyword rules in precedence order; the first match wins.
const RULES: &[KindRule] = &[
    KindRule::shot(
        |d| d.contains("3PT"),
        EventKind::ThreeMade,
        EventKind::ThreeMissed,
    ),
    KindRule::shot(
        |d| {
            (d.contains("SHOT") || d.contains("JUMPER") || d.contains("FADEAWAY"))
                && !d.contains(CLOCK_TOKEN)
        },
        EventKind::TwoMade,
        EventKind::TwoMissed,
    ),
    KindRule::shot(
        |d| d.contains("LAYUP"),
        EventKind::LayupMade,
        EventKind::LayupMissed,
    ),
    KindRule::shot(
        |d| d.contains("DUNK"),
        EventKind::DunkMade,
        EventKind::DunkMissed,
    ),
    KindRule::shot(
        |d| d.contains("FREE THROW"),
        EventKind::FreeThrowMade,
        EventKind::FreeThrowMissed,
    ),
    KindRule::plain(|d| d.contains("REBOUND"), EventKind::Rebound),
    KindRule::plain(
        |d| d.contains("FOUL") && d.contains("TURNOVER"),
        EventKind::FoulTurnover,
    ),
    KindRule::plain(|d| d.contains("FOUL"), EventKind::Foul),
    KindRule::plain(|d| d.contains("STEAL"), EventKind::Steal),
    KindRule::plain(|d| d.contains("TURNOVER"), EventKind::Turnover),
    KindRule::plain(|d| d.contains("BLOCK"), EventKind::Block),
    KindRule::plain(|d| d.contains("SUB"), EventKind::Substitution),
    KindRule::plain(|d| d.contains("TIMEOUT"), EventKind::Timeout),
];

/// Classifies an upper-cased description by the keyword table.
///
/// Unrecognized text is [`EventKind::Other`], never an error.
pub fn kind_from_description(upper: &str) -> EventKind {
    let missed = upper.contains(MISS_MARKER);
    for rule in RULES {
        if (rule.matches)(upper) {
            return if missed { rule.missed } else { rule.made };
        }
    }
    EventKind::Other
}

/// Resolves a recognized action hint to a kind, refined by the
/// description: `MISS` selects the missed variant, a two-point hint is
/// specialized to its layup/dunk display variants, and a foul hint with
/// turnover text resolves to the combined kind.
pub fn kind_from_hint(hint: ActionHint, upper: &str) -> EventKind {
    let missed = upper.contains(MISS_MARKER);
    match hint {
        ActionHint::ThreePoint => {
            if missed {
                EventKind::ThreeMissed
            } else {
                EventKind::ThreeMade
            }
        }
        ActionHint::TwoPoint => {
            if upper.contains("LAYUP") {
                if missed {
                    EventKind::LayupMissed
                } else {
                    EventKind::LayupMade
                }
            } else if upper.contains("DUNK") {
                if missed {
                    EventKind::DunkMissed
                } else {
                    EventKind::DunkMade
                }
            } else if missed {
                EventKind::TwoMissed
            } else {
                EventKind::TwoMade
            }
        }
        ActionHint::FreeThrow => {
            if missed {
                EventKind::FreeThrowMissed
            } else {
                EventKind::FreeThrowMade
            }
        }
        ActionHint::Rebound => EventKind::Rebound,
        ActionHint::Foul => {
            if upper.contains("TURNOVER") {
                EventKind::FoulTurnover
            } else {
                EventKind::Foul
            }
        }
        ActionHint::Turnover => EventKind::Turnover,
        ActionHint::Steal => EventKind::Steal,
        ActionHint::Block => EventKind::Block,
        ActionHint::Timeout => EventKind::Timeout,
        ActionHint::Substitution => EventKind::Substitution,
        ActionHint::JumpBall => EventKind::JumpBall,
        ActionHint::PeriodStart => EventKind::PeriodStart,
        ActionHint::PeriodEnd => EventKind::PeriodEnd,
    }
}
