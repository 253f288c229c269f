//! Plain-text rendering of an analysis, used by `analyze-pgn`.

use std::fmt;

use crate::model::{AnalysisResult, Outcome};
use crate::view::{event_detail, DisplayClass, OutcomeColumn, ResultView};

/// Renders summary counters followed by one section per game.
pub struct Report<'a>(pub &'a AnalysisResult);

fn marker(class: DisplayClass) -> char {
    match class {
        DisplayClass::Positive => '+',
        DisplayClass::Negative => '-',
        DisplayClass::Caution => '!',
        DisplayClass::Neutral => '*',
    }
}

/// "executed" -> "Executed"
fn capitalized(outcome: Outcome) -> String {
    let key = outcome.key();
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_column(f: &mut fmt::Formatter<'_>, column: &OutcomeColumn<'_>) -> fmt::Result {
    writeln!(
        f,
        "  [{}] {} ({})",
        marker(column.class),
        capitalized(column.outcome),
        column.events.len()
    )?;

    if column.events.is_empty() {
        return writeln!(f, "      No tactics found");
    }

    for event in column.events {
        writeln!(f, "      Move {:<4} {}", event.move_number, event.tactic.label())?;
        if let Some(detail) = event_detail(event) {
            writeln!(f, "        {detail}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = ResultView::new(self.0);
        let totals = view.totals();

        for outcome in Outcome::ALL {
            writeln!(f, "{:<22}{}", outcome.heading(), totals.get(outcome))?;
        }

        if self.0.is_empty() {
            return writeln!(f, "\nNo games analyzed");
        }

        for game in view.games() {
            writeln!(f, "\n== {} ==", game.title())?;
            for column in game.columns() {
                write_column(f, &column)?;
            }
        }
        Ok(())
    }
}
