//! Double round-robin schedule (circle method).

use crate::models::Fixture;

/// Rounds of fixtures for one division.
///
/// The first team stays fixed while the rest rotate one step per round.
/// An odd field gets a bye slot whose pairings are dropped. The second half
/// repeats the first with home and away swapped, so for an even `n` every
/// ordered pair meets exactly once over `2 * (n - 1)` rounds.
pub fn generate_balanced_schedule<S: AsRef<str>>(team_ids: &[S]) -> Vec<Vec<Fixture>> {
    if team_ids.is_empty() {
        return Vec::new();
    }

    let mut slots: Vec<Option<&str>> = team_ids.iter().map(|id| Some(id.as_ref())).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }
    let n = slots.len();

    let mut first_half = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let round: Vec<Fixture> = (0..n / 2)
            .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
                (Some(home), Some(away)) => Some(Fixture::new(home, away)),
                _ => None,
            })
            .collect();
        first_half.push(round);

        // keep slot 0, move the last slot to position 1
        slots[1..].rotate_right(1);
    }

    let second_half: Vec<Vec<Fixture>> = first_half
        .iter()
        .map(|round| {
            round
                .iter()
                .map(|f| Fixture::new(f.away_team_id.clone(), f.home_team_id.clone()))
                .collect()
        })
        .collect();

    first_half.into_iter().chain(second_half).collect()
}
