//! Position planning for card moves.
//!
//! Active cards of a list carry a dense zero-based `position` sequence.
//! The planners compute the final visible order of every affected list and
//! emit a write for each card whose stored position differs, so the batch
//! stays minimal for dense lists and quietly compacts any gap an earlier
//! archive left behind. The service applies the batch as one transaction,
//! so no intermediate state is readable.

use boardkit_domain::{Card, ListId};
use boardkit_store::CardWrite;

/// Positions every card at its index in the final order, skipping cards
/// already in place.
fn renumber(order: &[&Card]) -> Vec<CardWrite> {
    order
        .iter()
        .enumerate()
        .filter(|(index, c)| c.position != *index as i32)
        .map(|(index, c)| CardWrite::SetPosition {
            id: c.id,
            position: index as i32,
        })
        .collect()
}

/// Clients compute the target slot against the visible length, which for a
/// same-list move still includes the dragged card, so an end-of-list drop
/// arrives one past the last slot. Clamp instead of validating.
fn slot(target_position: i32, len: usize) -> usize {
    (target_position.max(0) as usize).min(len)
}

/// Plan a move within one list.
///
/// `siblings` are the active cards of the list *excluding* the moved card,
/// ordered by position. The moved card is spliced in at the target slot
/// and the list renumbered from zero.
pub fn plan_same_list_move(siblings: &[Card], card: &Card, target_position: i32) -> Vec<CardWrite> {
    let mut order: Vec<&Card> = siblings.iter().collect();
    order.insert(slot(target_position, order.len()), card);
    renumber(&order)
}

/// Plan a move across lists.
///
/// The source list closes the departing card's gap, the target list opens
/// one at the target slot, and the moved card lands with its new list and
/// position, all in the same batch.
pub fn plan_cross_list_move(
    source_siblings: &[Card],
    target_cards: &[Card],
    card: &Card,
    target_list_id: ListId,
    target_position: i32,
) -> Vec<CardWrite> {
    let source: Vec<&Card> = source_siblings.iter().collect();
    let mut writes = renumber(&source);

    let mut order: Vec<&Card> = target_cards.iter().collect();
    order.insert(slot(target_position, order.len()), card);
    for (index, c) in order.iter().enumerate() {
        if c.id == card.id {
            writes.push(CardWrite::MoveToList {
                id: card.id,
                list_id: target_list_id,
                position: index as i32,
            });
        } else if c.position != index as i32 {
            writes.push(CardWrite::SetPosition {
                id: c.id,
                position: index as i32,
            });
        }
    }
    writes
}
