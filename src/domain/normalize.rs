// src/domain/normalize.rs
use tracing::debug;

use crate::domain::{Deck, Flashcard};

/// Repair loosely structured generator output into a strict tab-separated deck.
///
/// Models return the requested `front<TAB>back` layout most of the time, but
/// known failure modes show up often enough to handle: stray blank lines, a
/// line break injected inside what should be a single field, and duplicated
/// tab characters. The pass works line by line, in order:
///
/// - blank and whitespace-only lines are dropped;
/// - a line without a tab is held as a pending continuation: when a tabbed
///   line follows, the pending text is a wrapped piece of its front field and
///   is rejoined with a space;
/// - a tabbed line becomes a card: first segment is the front, all remaining
///   segments merge into the back (extra tabs never drop content);
/// - pending lines that never attach to a card are kept verbatim, unparsed.
///
/// Total function: any input yields a deck, empty input yields an empty deck.
pub fn normalize(raw: &str) -> Deck {
    let mut deck = Deck::new();
    let mut pending: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Stray carriage returns inside a line are delimiter noise, not content.
        let line = line.replace('\r', " ");
        let line = line.trim();

        if !line.contains('\t') {
            pending.push(line.to_string());
            continue;
        }

        let mut segments = line.split('\t');
        let mut front = segments.next().unwrap_or_default().trim().to_string();
        if !pending.is_empty() {
            front = format!("{} {}", pending.join(" "), front);
            pending.clear();
        }
        let back = segments.collect::<Vec<_>>().join(" ").trim().to_string();
        deck.push_card(Flashcard::new(front, back));
    }

    // Leftover lines with no delimiter anywhere: keep them as-is rather than
    // lose user-visible content.
    for line in pending {
        debug!(%line, "keeping line without field delimiter verbatim");
        deck.push_unparsed(line);
    }

    deck
}
