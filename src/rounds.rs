//! Round Progression
//!
//! Pure operations over an ordered collection of interview rounds.
//! Every operation takes the current collection and either produces a full
//! replacement or reports that nothing changed. Constraint violations
//! (removing the last round, adding past the cap, unknown ids) are silent
//! no-ops, never errors.

use crate::models::{Round, RoundStatus};

/// Upper bound on rounds per application
pub const MAX_ROUNDS: usize = 5;

/// Result of a round operation
#[derive(Debug, Clone, PartialEq)]
pub enum RoundEdit {
    /// Full replacement collection
    Changed(Vec<Round>),
    /// Operation was absorbed as a no-op
    Unchanged,
}

impl RoundEdit {
    /// Replacement collection, or `None` when the edit was a no-op
    pub fn into_changed(self) -> Option<Vec<Round>> {
        match self {
            RoundEdit::Changed(next) => Some(next),
            RoundEdit::Unchanged => None,
        }
    }
}

/// Hand a changed collection to `notify`; no-ops never reach it
pub fn dispatch_edit(edit: RoundEdit, notify: impl FnOnce(Vec<Round>)) {
    if let Some(next) = edit.into_changed() {
        notify(next);
    }
}

/// Append a new upcoming round with the next free id
pub fn add_round(rounds: &[Round]) -> RoundEdit {
    if rounds.len() >= MAX_ROUNDS {
        return RoundEdit::Unchanged;
    }
    let next_id = rounds.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let mut next = rounds.to_vec();
    next.push(Round::new(next_id, RoundStatus::Upcoming));
    log::debug!("[ROUNDS] added round {} ({} total)", next_id, next.len());
    RoundEdit::Changed(next)
}

/// Drop the round with `id`; the last remaining round cannot be removed.
///
/// Remaining rounds keep their ids and statuses, so removing the current
/// round leaves the collection without one.
pub fn remove_round(rounds: &[Round], id: u32) -> RoundEdit {
    if rounds.len() <= 1 || !rounds.iter().any(|r| r.id == id) {
        return RoundEdit::Unchanged;
    }
    let next: Vec<Round> = rounds.iter().filter(|r| r.id != id).cloned().collect();
    log::debug!("[ROUNDS] removed round {} ({} left)", id, next.len());
    RoundEdit::Changed(next)
}

/// Mark `id` completed and promote the element after it (array order, not id order)
pub fn complete_round(rounds: &[Round], id: u32) -> RoundEdit {
    let Some(pos) = rounds.iter().position(|r| r.id == id) else {
        return RoundEdit::Unchanged;
    };
    let mut next = rounds.to_vec();
    next[pos].status = RoundStatus::Completed;
    if let Some(following) = next.get_mut(pos + 1) {
        following.status = RoundStatus::Current;
    }
    log::debug!("[ROUNDS] completed round {}", id);
    RoundEdit::Changed(next)
}

/// Replace notes, interviewer and date of `id`; status is left alone.
/// Blank interviewer or date is stored as `None`, anything else as entered.
pub fn update_notes(
    rounds: &[Round],
    id: u32,
    notes: &str,
    interviewer: &str,
    date: &str,
) -> RoundEdit {
    if !rounds.iter().any(|r| r.id == id) {
        return RoundEdit::Unchanged;
    }
    let next = rounds
        .iter()
        .map(|r| {
            if r.id != id {
                return r.clone();
            }
            Round {
                notes: notes.to_string(),
                interviewer: non_empty(interviewer),
                date: non_empty(date),
                ..r.clone()
            }
        })
        .collect();
    RoundEdit::Changed(next)
}

/// Move `id` to `to_index` (clamped to the end); ids and statuses are kept
pub fn move_round(rounds: &[Round], id: u32, to_index: usize) -> RoundEdit {
    let Some(from) = rounds.iter().position(|r| r.id == id) else {
        return RoundEdit::Unchanged;
    };
    let to = to_index.min(rounds.len() - 1);
    if from == to {
        return RoundEdit::Unchanged;
    }
    let mut next = rounds.to_vec();
    let round = next.remove(from);
    next.insert(to, round);
    log::debug!("[ROUNDS] moved round {} from {} to {}", id, from, to);
    RoundEdit::Changed(next)
}

/// Which round's detail panel is open; toggling the open one closes it
pub fn toggle_expanded(expanded: Option<u32>, id: u32) -> Option<u32> {
    if expanded == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// (completed, total) for the tracker header
pub fn progress(rounds: &[Round]) -> (usize, usize) {
    let completed = rounds
        .iter()
        .filter(|r| r.status == RoundStatus::Completed)
        .count();
    (completed, rounds.len())
}

/// First round in array order marked current
pub fn current_round(rounds: &[Round]) -> Option<&Round> {
    rounds.iter().find(|r| r.status == RoundStatus::Current)
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: u32, status: RoundStatus) -> Round {
        Round::new(id, status)
    }

    fn ids(rounds: &[Round]) -> Vec<u32> {
        rounds.iter().map(|r| r.id).collect()
    }

    fn statuses(rounds: &[Round]) -> Vec<RoundStatus> {
        rounds.iter().map(|r| r.status).collect()
    }

    fn changed(edit: RoundEdit) -> Vec<Round> {
        match edit {
            RoundEdit::Changed(next) => next,
            RoundEdit::Unchanged => panic!("expected a change"),
        }
    }

    #[test]
    fn test_walkthrough_scenarios() {
        // 1. add to a single current round
        let start = vec![round(1, RoundStatus::Current)];
        let s1 = changed(add_round(&start));
        assert_eq!(ids(&s1), vec![1, 2]);
        assert_eq!(statuses(&s1), vec![RoundStatus::Current, RoundStatus::Upcoming]);

        // 2. complete the first
        let s2 = changed(complete_round(&s1, 1));
        assert_eq!(statuses(&s2), vec![RoundStatus::Completed, RoundStatus::Current]);

        // 3. remove the completed one
        let s3 = changed(remove_round(&s2, 1));
        assert_eq!(ids(&s3), vec![2]);
        assert_eq!(s3[0].status, RoundStatus::Current);

        // 4. cannot remove the last round
        assert_eq!(remove_round(&s3, 2), RoundEdit::Unchanged);

        // 5. cannot add past the cap
        let full: Vec<Round> = (1..=5).map(|id| round(id, RoundStatus::Upcoming)).collect();
        assert_eq!(add_round(&full), RoundEdit::Unchanged);
    }

    #[test]
    fn test_add_uses_max_id_not_position() {
        let rounds = vec![
            round(4, RoundStatus::Completed),
            round(9, RoundStatus::Current),
            round(2, RoundStatus::Upcoming),
        ];
        let next = changed(add_round(&rounds));
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, 10);
        assert_eq!(next[3].status, RoundStatus::Upcoming);
        assert!(next[3].notes.is_empty());
        assert_eq!(&next[..3], &rounds[..]);
    }

    #[test]
    fn test_add_to_empty_starts_at_one() {
        let next = changed(add_round(&[]));
        assert_eq!(ids(&next), vec![1]);
    }

    #[test]
    fn test_remove_single_round_is_noop() {
        let rounds = vec![round(7, RoundStatus::Completed)];
        assert_eq!(remove_round(&rounds, 7), RoundEdit::Unchanged);
        assert_eq!(remove_round(&rounds, 99), RoundEdit::Unchanged);
    }

    #[test]
    fn test_remove_current_does_not_promote() {
        let rounds = vec![
            round(1, RoundStatus::Completed),
            round(2, RoundStatus::Current),
            round(3, RoundStatus::Upcoming),
        ];
        let next = changed(remove_round(&rounds, 2));
        assert_eq!(ids(&next), vec![1, 3]);
        assert!(current_round(&next).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let rounds = vec![round(1, RoundStatus::Current), round(2, RoundStatus::Upcoming)];
        assert_eq!(remove_round(&rounds, 5), RoundEdit::Unchanged);
    }

    #[test]
    fn test_complete_last_leaves_no_current() {
        let rounds = vec![round(1, RoundStatus::Completed), round(2, RoundStatus::Current)];
        let next = changed(complete_round(&rounds, 2));
        assert_eq!(statuses(&next), vec![RoundStatus::Completed, RoundStatus::Completed]);
        assert!(current_round(&next).is_none());
    }

    #[test]
    fn test_complete_promotes_array_successor_not_next_id() {
        let rounds = vec![
            round(3, RoundStatus::Current),
            round(1, RoundStatus::Upcoming),
            round(2, RoundStatus::Upcoming),
        ];
        let next = changed(complete_round(&rounds, 3));
        assert_eq!(
            statuses(&next),
            vec![RoundStatus::Completed, RoundStatus::Current, RoundStatus::Upcoming]
        );
        assert_eq!(ids(&next), vec![3, 1, 2]);
    }

    #[test]
    fn test_complete_touches_only_target_and_successor() {
        let rounds = vec![
            round(1, RoundStatus::Completed),
            round(2, RoundStatus::Current),
            round(3, RoundStatus::Upcoming),
            round(4, RoundStatus::Upcoming),
        ];
        let next = changed(complete_round(&rounds, 2));
        assert_eq!(
            statuses(&next),
            vec![
                RoundStatus::Completed,
                RoundStatus::Completed,
                RoundStatus::Current,
                RoundStatus::Upcoming
            ]
        );
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let rounds = vec![round(1, RoundStatus::Current)];
        assert_eq!(complete_round(&rounds, 2), RoundEdit::Unchanged);
    }

    #[test]
    fn test_update_notes_only_touches_target_fields() {
        let rounds = vec![
            round(1, RoundStatus::Completed),
            round(2, RoundStatus::Current),
        ];
        let next = changed(update_notes(&rounds, 2, "Asked about caching", "Dana", ""));
        assert_eq!(next[0], rounds[0]);
        assert_eq!(next[1].id, 2);
        assert_eq!(next[1].status, RoundStatus::Current);
        assert_eq!(next[1].notes, "Asked about caching");
        assert_eq!(next[1].interviewer.as_deref(), Some("Dana"));
        assert_eq!(next[1].date, None);
    }

    #[test]
    fn test_update_notes_keeps_values_as_entered() {
        let rounds = vec![round(1, RoundStatus::Current)];
        let next = changed(update_notes(&rounds, 1, "", " Dana ", "2026-11-02"));
        assert_eq!(next[0].interviewer.as_deref(), Some(" Dana "));
        assert_eq!(next[0].date.as_deref(), Some("2026-11-02"));

        let blank = changed(update_notes(&next, 1, "", "   ", ""));
        assert_eq!(blank[0].interviewer, None);
        assert_eq!(blank[0].date, None);
    }

    #[test]
    fn test_update_notes_unknown_id_is_noop() {
        let rounds = vec![round(1, RoundStatus::Current)];
        assert_eq!(update_notes(&rounds, 3, "x", "y", "z"), RoundEdit::Unchanged);
    }

    #[test]
    fn test_move_round_keeps_ids_and_statuses() {
        let rounds = vec![
            round(1, RoundStatus::Completed),
            round(2, RoundStatus::Current),
            round(3, RoundStatus::Upcoming),
        ];
        let next = changed(move_round(&rounds, 3, 0));
        assert_eq!(ids(&next), vec![3, 1, 2]);
        assert_eq!(
            statuses(&next),
            vec![RoundStatus::Upcoming, RoundStatus::Completed, RoundStatus::Current]
        );

        let clamped = changed(move_round(&rounds, 1, 42));
        assert_eq!(ids(&clamped), vec![2, 3, 1]);

        assert_eq!(move_round(&rounds, 2, 1), RoundEdit::Unchanged);
        assert_eq!(move_round(&rounds, 8, 0), RoundEdit::Unchanged);
    }

    fn dispatched(edit: RoundEdit) -> Vec<Vec<Round>> {
        let mut calls = Vec::new();
        dispatch_edit(edit, |next| calls.push(next));
        calls
    }

    #[test]
    fn test_dispatch_skips_noops() {
        let single = vec![round(1, RoundStatus::Current)];
        let full: Vec<Round> = (1..=5).map(|id| round(id, RoundStatus::Upcoming)).collect();

        assert!(dispatched(add_round(&full)).is_empty());
        assert!(dispatched(remove_round(&single, 1)).is_empty());
        assert!(dispatched(complete_round(&single, 9)).is_empty());
        assert!(dispatched(move_round(&single, 1, 0)).is_empty());
        assert!(dispatched(update_notes(&single, 4, "x", "", "")).is_empty());

        // expanding a panel is not a round edit at all
        let expanded = toggle_expanded(None, 1);
        assert_eq!(expanded, Some(1));
        assert_eq!(single, vec![round(1, RoundStatus::Current)]);
    }

    #[test]
    fn test_dispatch_passes_full_replacement() {
        let rounds = vec![round(1, RoundStatus::Current), round(2, RoundStatus::Upcoming)];
        let calls = dispatched(complete_round(&rounds, 1));
        assert_eq!(calls.len(), 1);
        assert_eq!(ids(&calls[0]), vec![1, 2]);
        assert_eq!(statuses(&calls[0]), vec![RoundStatus::Completed, RoundStatus::Current]);

        let calls = dispatched(add_round(&rounds));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 3);
        assert_eq!(&calls[0][..2], &rounds[..]);
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
        assert_eq!(toggle_expanded(Some(1), 2), Some(2));
    }

    #[test]
    fn test_progress_and_current() {
        let rounds = vec![
            round(1, RoundStatus::Completed),
            round(2, RoundStatus::Current),
            round(3, RoundStatus::Current),
        ];
        assert_eq!(progress(&rounds), (1, 3));
        // several current rounds are allowed; the first one wins
        assert_eq!(current_round(&rounds).map(|r| r.id), Some(2));
    }
}
