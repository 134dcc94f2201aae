use serde::{Deserialize, Serialize};

use super::basic::Card;
use super::melds::{GroupedHand, MeldKind};

/// One displayed block of a grouped hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Meld(MeldKind),
    Remaining,
}

impl GroupedHand {
    /// Blocks in display order: every meld (straight flushes, fours, threes)
    /// followed by the remainder. The remainder is always present, even when
    /// empty.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[Card])> + '_ {
        self.melds()
            .map(|(kind, cards)| (Section::Meld(kind), cards))
            .chain(std::iter::once((
                Section::Remaining,
                self.remaining_cards.as_slice(),
            )))
    }

    /// All cards flattened in display order.
    pub fn display_order(&self) -> Vec<Card> {
        self.sections()
            .flat_map(|(_, cards)| cards.iter().copied())
            .collect()
    }

    /// Display slot of the first card of each section, in `sections()` order.
    /// Selection indices are expressed in these slots.
    pub fn group_start_slots(&self) -> Vec<usize> {
        self.sections()
            .scan(0, |next, (_, cards)| {
                let start = *next;
                *next += cards.len();
                Some(start)
            })
            .collect()
    }

    /// For each card in display order, its index in `hand`.
    ///
    /// Cards are matched on rank and suit, each hand position used at most
    /// once. `None` marks a card that has no unused match in `hand`, which
    /// only happens when seeded melds came from another hand.
    pub fn hand_positions(&self, hand: &[Card]) -> Vec<Option<usize>> {
        let mut used = vec![false; hand.len()];
        self.display_order()
            .into_iter()
            .map(|card| {
                let pos = hand
                    .iter()
                    .enumerate()
                    .position(|(i, c)| !used[i] && *c == card)?;
                used[pos] = true;
                Some(pos)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::basic::parse_hand;
    use crate::game::cards::grouping::group;

    #[test]
    fn test_sections_follow_display_order() {
        let hand = parse_hand("KD 7C 7H 3S 4S 5S 7D").unwrap();
        let grouped = group(&hand, None);

        let sections: Vec<Section> = grouped.sections().map(|(section, _)| section).collect();
        assert_eq!(
            sections,
            vec![
                Section::Meld(MeldKind::StraightFlush),
                Section::Meld(MeldKind::ThreeOfAKind),
                Section::Remaining,
            ]
        );
        assert_eq!(
            grouped.display_order(),
            parse_hand("3S 4S 5S 7C 7H 7D KD").unwrap()
        );
        assert_eq!(grouped.group_start_slots(), vec![0, 3, 6]);
    }

    #[test]
    fn test_start_slots_use_actual_meld_lengths() {
        let hand = parse_hand("6H 7H 8H 9H 10H QS QH QD QC 2C").unwrap();
        let grouped = group(&hand, None);
        assert_eq!(grouped.group_start_slots(), vec![0, 5, 9]);
    }

    #[test]
    fn test_hand_positions_map_back_to_hand() {
        let hand = parse_hand("KD 7C 7H 3S 4S 5S 7D").unwrap();
        let grouped = group(&hand, None);

        assert_eq!(
            grouped.hand_positions(&hand),
            vec![
                Some(3),
                Some(4),
                Some(5),
                Some(1),
                Some(2),
                Some(6),
                Some(0)
            ]
        );
    }

    #[test]
    fn test_hand_positions_mark_foreign_seed_cards() {
        let seed = group(&parse_hand("AS 2S 3S").unwrap(), None);
        let hand = parse_hand("9D").unwrap();
        let grouped = group(&hand, Some(seed));

        assert_eq!(
            grouped.hand_positions(&hand),
            vec![None, None, None, Some(0)]
        );
    }

    #[test]
    fn test_empty_hand_has_only_remaining_section() {
        let grouped = group(&[], None);
        assert_eq!(grouped.sections().count(), 1);
        assert_eq!(grouped.group_start_slots(), vec![0]);
        assert!(grouped.hand_positions(&[]).is_empty());
    }
}
