//! Celebratory messages shown after a session is logged.
//!
//! Selection depends only on the collection size after the insert; the store
//! itself knows nothing about celebrations.

use rand::Rng;

pub const FIRST_SESSION_MESSAGE: &str =
    "🎊 First session logged! This is the start of something great!";
pub const FIVE_SESSIONS_MESSAGE: &str = "🔥 5 sessions! You're building a strong habit!";
pub const TEN_SESSIONS_MESSAGE: &str = "💎 10 sessions! You're a practice champion!";
pub const FULL_WEEK_MESSAGE: &str = "🎯 A full week of practice! You're dedicated!";

/// Generic encouragement, picked uniformly when no milestone applies.
pub const ENCOURAGEMENT_POOL: [&str; 10] = [
    "🌟 Awesome job! You're on fire!",
    "🎉 Amazing work! Keep it up!",
    "💪 You're crushing it! So proud!",
    "🚀 Fantastic! You're a superstar!",
    "✨ Brilliant! Practice makes perfect!",
    "🎯 Nailed it! You're getting better every day!",
    "🏆 Champion mindset! Keep going!",
    "⭐ Incredible! You're unstoppable!",
    "🎸 Rock star performance!",
    "🌈 Way to go! You're doing great!",
];

/// Which message family a session count falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    FirstSession,
    FiveSessions,
    TenSessions,
    FullWeek,
    Encouragement,
}

impl MilestoneKind {
    /// Applies the tie-break order: 1, then 5, then 10, then multiples of 7.
    pub fn for_count(session_count: usize) -> Self {
        match session_count {
            1 => Self::FirstSession,
            5 => Self::FiveSessions,
            10 => Self::TenSessions,
            n if n % 7 == 0 => Self::FullWeek,
            _ => Self::Encouragement,
        }
    }
}

/// Picks the message for `session_count`.
///
/// The random source is only consulted for `MilestoneKind::Encouragement`.
pub fn motivational_message<R: Rng + ?Sized>(session_count: usize, rng: &mut R) -> &'static str {
    match MilestoneKind::for_count(session_count) {
        MilestoneKind::FirstSession => FIRST_SESSION_MESSAGE,
        MilestoneKind::FiveSessions => FIVE_SESSIONS_MESSAGE,
        MilestoneKind::TenSessions => TEN_SESSIONS_MESSAGE,
        MilestoneKind::FullWeek => FULL_WEEK_MESSAGE,
        MilestoneKind::Encouragement => {
            ENCOURAGEMENT_POOL[rng.gen_range(0..ENCOURAGEMENT_POOL.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn milestones_follow_tie_break_order() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(motivational_message(1, &mut rng), FIRST_SESSION_MESSAGE);
        assert_eq!(motivational_message(5, &mut rng), FIVE_SESSIONS_MESSAGE);
        assert_eq!(motivational_message(10, &mut rng), TEN_SESSIONS_MESSAGE);
        assert_eq!(motivational_message(7, &mut rng), FULL_WEEK_MESSAGE);
        assert_eq!(motivational_message(14, &mut rng), FULL_WEEK_MESSAGE);
        assert_eq!(motivational_message(21, &mut rng), FULL_WEEK_MESSAGE);
    }

    #[test]
    fn other_counts_draw_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in [2, 3, 4, 6, 8, 9, 11, 13] {
            let message = motivational_message(count, &mut rng);
            assert!(ENCOURAGEMENT_POOL.contains(&message), "{message}");
        }
    }

    #[test]
    fn pool_draws_cover_every_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<_> = (0..500).map(|_| motivational_message(3, &mut rng)).collect();
        assert_eq!(seen.len(), ENCOURAGEMENT_POOL.len());
    }

    #[test]
    fn for_count_classifies() {
        assert_eq!(MilestoneKind::for_count(3), MilestoneKind::Encouragement);
        assert_eq!(MilestoneKind::for_count(28), MilestoneKind::FullWeek);
        assert_eq!(MilestoneKind::for_count(35), MilestoneKind::FullWeek);
    }
}
