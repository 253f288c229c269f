//! Read-only projections over an analysis result for rendering.
//! Pure functions only, nothing here mutates or performs I/O.

use crate::model::{AnalysisResult, GameTactics, Outcome, TacticEvent};

/// Styling bucket for an outcome column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayClass {
    Positive,
    Negative,
    Caution,
    Neutral,
}

/// Total mapping from an outcome key to its styling bucket. Keys the service
/// may add later fall back to `Neutral`.
pub fn classify(outcome_key: &str) -> DisplayClass {
    match Outcome::from_key(outcome_key) {
        Some(Outcome::Executed) => DisplayClass::Positive,
        Some(Outcome::Missed) => DisplayClass::Negative,
        Some(Outcome::Allowed) => DisplayClass::Caution,
        None => DisplayClass::Neutral,
    }
}

pub fn total_by_outcome(result: &AnalysisResult, outcome: Outcome) -> usize {
    result
        .iter()
        .map(|(_, tactics)| tactics.events(outcome).len())
        .sum()
}

/// Games in service order, duplicates included.
pub fn game_entries(result: &AnalysisResult) -> Vec<(&str, &GameTactics)> {
    result.iter().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTotals {
    pub executed: usize,
    pub missed: usize,
    pub allowed: usize,
}

impl OutcomeTotals {
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Executed => self.executed,
            Outcome::Missed => self.missed,
            Outcome::Allowed => self.allowed,
        }
    }
}

pub fn summarize(result: &AnalysisResult) -> OutcomeTotals {
    OutcomeTotals {
        executed: total_by_outcome(result, Outcome::Executed),
        missed: total_by_outcome(result, Outcome::Missed),
        allowed: total_by_outcome(result, Outcome::Allowed),
    }
}

/// "game_1" -> "GAME 1". Only the first underscore becomes a space.
pub fn game_title(game_id: &str) -> String {
    game_id.replacen('_', " ", 1).to_uppercase()
}

/// "Piece: Bb5 → Nc6". The target is only shown alongside a piece; empty
/// strings count as absent.
pub fn event_detail(event: &TacticEvent) -> Option<String> {
    let piece = event.piece.as_deref().filter(|s| !s.is_empty())?;
    Some(match event.target.as_deref().filter(|s| !s.is_empty()) {
        Some(target) => format!("Piece: {piece} → {target}"),
        None => format!("Piece: {piece}"),
    })
}

/// Borrowed view of a successful analysis.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    pub fn totals(&self) -> OutcomeTotals {
        summarize(self.result)
    }

    pub fn games(&self) -> impl Iterator<Item = GameView<'a>> + 'a {
        self.result.iter().map(|(id, tactics)| GameView { id, tactics })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub id: &'a str,
    pub tactics: &'a GameTactics,
}

impl<'a> GameView<'a> {
    pub fn title(&self) -> String {
        game_title(self.id)
    }

    /// Executed, missed and allowed columns, in that order.
    pub fn columns(&self) -> impl Iterator<Item = OutcomeColumn<'a>> + 'a {
        let tactics = self.tactics;
        Outcome::ALL.into_iter().map(move |outcome| OutcomeColumn {
            outcome,
            class: classify(outcome.key()),
            events: tactics.events(outcome),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutcomeColumn<'a> {
    pub outcome: Outcome,
    pub class: DisplayClass,
    pub events: &'a [TacticEvent],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TacticKind;

    fn missed_twice() -> GameTactics {
        GameTactics {
            missed: vec![
                TacticEvent::new(8, TacticKind::Pin),
                TacticEvent::new(21, TacticKind::Skewer),
            ],
            ..GameTactics::default()
        }
    }

    fn single_game() -> AnalysisResult {
        let game = GameTactics {
            executed: vec![TacticEvent::new(5, TacticKind::Pin).with_pieces("Bb5", "Nc6")],
            ..GameTactics::default()
        };
        vec![("game_1".to_string(), game)].into_iter().collect()
    }

    #[test]
    fn test_totals_over_empty_result() {
        let result = AnalysisResult::default();
        assert_eq!(total_by_outcome(&result, Outcome::Executed), 0);
        assert_eq!(summarize(&result), OutcomeTotals::default());
        assert!(game_entries(&result).is_empty());
    }

    #[test]
    fn test_totals_single_game() {
        let result = single_game();
        assert_eq!(total_by_outcome(&result, Outcome::Executed), 1);
        assert_eq!(total_by_outcome(&result, Outcome::Missed), 0);
        assert_eq!(total_by_outcome(&result, Outcome::Allowed), 0);
    }

    #[test]
    fn test_totals_sum_across_games() {
        let result: AnalysisResult = vec![
            ("game_1".to_string(), missed_twice()),
            ("game_2".to_string(), missed_twice()),
        ]
        .into_iter()
        .collect();
        assert_eq!(total_by_outcome(&result, Outcome::Missed), 4);
        assert_eq!(summarize(&result).get(Outcome::Missed), 4);
    }

    #[test]
    fn test_totals_scale_linearly() {
        let result: AnalysisResult = (1..=500)
            .map(|i| (format!("game_{i}"), missed_twice()))
            .collect();
        assert_eq!(total_by_outcome(&result, Outcome::Missed), 1000);
        assert_eq!(total_by_outcome(&result, Outcome::Executed), 0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("executed"), DisplayClass::Positive);
        assert_eq!(classify("missed"), DisplayClass::Negative);
        assert_eq!(classify("allowed"), DisplayClass::Caution);
        assert_eq!(classify("unknown_outcome"), DisplayClass::Neutral);
        assert_eq!(classify(""), DisplayClass::Neutral);
        assert_eq!(classify("Executed"), DisplayClass::Neutral);
    }

    #[test]
    fn test_game_entries_keep_order_and_duplicates() {
        let result: AnalysisResult = ["game_2", "game_10", "game_1", "game_2"]
            .into_iter()
            .map(|id| (id.to_string(), GameTactics::default()))
            .collect();
        let ids: Vec<&str> = game_entries(&result).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["game_2", "game_10", "game_1", "game_2"]);
    }

    #[test]
    fn test_game_title() {
        assert_eq!(game_title("game_1"), "GAME 1");
        assert_eq!(game_title("round_2_board_3"), "ROUND 2_BOARD_3");
        assert_eq!(game_title("final"), "FINAL");
    }

    #[test]
    fn test_event_detail() {
        let pin = TacticEvent::new(5, TacticKind::Pin);
        assert_eq!(event_detail(&pin), None);
        assert_eq!(
            event_detail(&pin.clone().with_pieces("Bb5", "Nc6")).as_deref(),
            Some("Piece: Bb5 → Nc6")
        );

        let piece_only = TacticEvent {
            piece: Some("Re1".into()),
            ..TacticEvent::new(14, TacticKind::Skewer)
        };
        assert_eq!(event_detail(&piece_only).as_deref(), Some("Piece: Re1"));

        let target_only = TacticEvent {
            target: Some("Qd8".into()),
            ..TacticEvent::new(14, TacticKind::Skewer)
        };
        assert_eq!(event_detail(&target_only), None);

        let blank = TacticEvent::new(7, TacticKind::Pin).with_pieces("", "");
        assert_eq!(event_detail(&blank), None);
        let blank_target = TacticEvent::new(7, TacticKind::Pin).with_pieces("Bg5", "");
        assert_eq!(event_detail(&blank_target).as_deref(), Some("Piece: Bg5"));
    }

    #[test]
    fn test_result_view_columns() {
        let result = single_game();
        let view = ResultView::new(&result);
        assert_eq!(view.totals().executed, 1);

        let games: Vec<GameView> = view.games().collect();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title(), "GAME 1");

        let columns: Vec<OutcomeColumn> = games[0].columns().collect();
        let outcomes: Vec<Outcome> = columns.iter().map(|c| c.outcome).collect();
        assert_eq!(outcomes, Outcome::ALL.to_vec());
        assert_eq!(columns[0].class, DisplayClass::Positive);
        assert_eq!(columns[0].events.len(), 1);
        assert!(columns[1].events.is_empty());
        assert_eq!(columns[2].class, DisplayClass::Caution);
    }
}
