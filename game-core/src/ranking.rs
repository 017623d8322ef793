use std::cmp::Ordering;
use std::collections::BTreeMap;

use game_types::{Game, RankingEntry, Score, UserId};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    losses: u32,
    games: u32,
}

/// Derives per-user standings from the full score history. Nothing here is
/// stored; rankings are recomputed on demand and are safe to run against an
/// eventually consistent snapshot of the scores.
pub struct ScoreBook;

impl ScoreBook {
    /// Ranks users by net win ratio, (wins - losses) / games played, where
    /// every score record counts as one game regardless of outcome.
    ///
    /// Sorting is descending by ratio; ties order deterministically by user
    /// id (the aggregation map iterates in id order and the sort is
    /// stable). Rank is the 1-based position in the sorted order.
    pub fn rankings(scores: &[Score]) -> Vec<RankingEntry> {
        let mut tallies: BTreeMap<UserId, Tally> = BTreeMap::new();
        for score in scores {
            let tally = tallies.entry(score.user_id).or_default();
            if score.won {
                tally.wins += 1;
            } else if score.lost {
                tally.losses += 1;
            }
            tally.games += 1;
        }

        let mut ratios: Vec<(UserId, f64)> = tallies
            .into_iter()
            // games == 0 cannot occur for an aggregated user; guarded so a
            // future refactor cannot introduce a division by zero.
            .filter(|(_, tally)| tally.games > 0)
            .map(|(user_id, tally)| {
                let net = f64::from(tally.wins) - f64::from(tally.losses);
                (user_id, net / f64::from(tally.games))
            })
            .collect();

        ratios.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ratios
            .into_iter()
            .enumerate()
            .map(|(index, (user_id, net_win_ratio))| RankingEntry {
                user_id,
                rank: index as u32 + 1,
                net_win_ratio,
            })
            .collect()
    }

    /// Mean move count over terminal games; `None` until one finishes.
    pub fn average_moves(games: &[Game]) -> Option<f64> {
        let mut count = 0u32;
        let mut total = 0u32;
        for game in games.iter().filter(|g| g.is_over()) {
            count += 1;
            total += u32::from(game.moves);
        }
        if count == 0 {
            None
        } else {
            Some(f64::from(total) / f64::from(count))
        }
    }
}
