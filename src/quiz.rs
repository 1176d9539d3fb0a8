//! Quiz round selection.

use crate::domain::Question;
use rand::seq::SliceRandom;

/// Pick a uniformly random question that has not been shown yet.
///
/// Returns `None` when the pool is exhausted: every candidate has already
/// been shown (pool size equals the previous-question count), or no unseen
/// candidate remains. The unseen subset is materialized once and sampled
/// once, so the draw stays uniform over unseen questions with bounded cost.
pub fn pick_unseen<'a>(candidates: &'a [Question], previous: &[i64]) -> Option<&'a Question> {
    if candidates.len() == previous.len() {
        return None;
    }

    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(&mut rand::thread_rng()).copied()
}
