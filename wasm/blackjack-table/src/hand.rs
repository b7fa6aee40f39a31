use crate::deck::{Card, Rank};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandValue {
    pub total: u16,
    pub soft: bool,
}

pub fn card_value(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 11,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
    }
}

/// Aces are demoted from 11 to 1 one at a time, only as far as needed to
/// stay at or under 21.
pub fn hand_value(hand: &[Card]) -> HandValue {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in hand {
        total = total.saturating_add(card_value(card.rank));
        if card.rank == Rank::Ace {
            aces += 1;
        }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue { total, soft: aces > 0 && total <= 21 }
}

/// Value of the first `limit` cards, e.g. the dealer's up card alone.
pub fn visible_value(hand: &[Card], limit: usize) -> HandValue {
    hand_value(&hand[..limit.min(hand.len())])
}

pub fn is_blackjack(hand: &[Card]) -> bool {
    hand.len() == 2 && hand_value(hand).total == 21
}

pub fn is_bust(hand: &[Card]) -> bool {
    hand_value(hand).total > 21
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, Suit};

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Spades)).collect()
    }

    #[test]
    fn test_card_values() {
        assert_eq!(card_value(Rank::Ace), 11);
        assert_eq!(card_value(Rank::King), 10);
        assert_eq!(card_value(Rank::Jack), 10);
        assert_eq!(card_value(Rank::Ten), 10);
        assert_eq!(card_value(Rank::Seven), 7);
        assert_eq!(card_value(Rank::Two), 2);
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(hand_value(&[]), HandValue { total: 0, soft: false });
    }

    #[test]
    fn test_soft_and_hard_aces() {
        assert_eq!(hand_value(&hand(&[Rank::Ace, Rank::Ace])), HandValue { total: 12, soft: true });
        assert_eq!(
            hand_value(&hand(&[Rank::Ace, Rank::Ace, Rank::Eight])),
            HandValue { total: 20, soft: true }
        );
        assert_eq!(
            hand_value(&hand(&[Rank::Ace, Rank::Six, Rank::Nine])),
            HandValue { total: 16, soft: false }
        );
        assert_eq!(
            hand_value(&hand(&[Rank::Ace, Rank::Ace, Rank::King])),
            HandValue { total: 12, soft: false }
        );
    }

    #[test]
    fn test_blackjack_and_bust() {
        assert!(is_blackjack(&hand(&[Rank::Ace, Rank::King])));
        assert!(!is_blackjack(&hand(&[Rank::Seven, Rank::Seven, Rank::Seven])));
        assert!(is_bust(&hand(&[Rank::King, Rank::Queen, Rank::Five])));
        assert_eq!(hand_value(&hand(&[Rank::King, Rank::Queen, Rank::Five])).total, 25);
        assert!(!is_bust(&hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])));
    }

    #[test]
    fn test_whole_deck_total_does_not_overflow() {
        let value = hand_value(&Deck::ordered());
        assert_eq!(value, HandValue { total: 340, soft: false });
        assert!(is_bust(&Deck::ordered()));
    }

    #[test]
    fn test_visible_value_counts_only_leading_cards() {
        let dealer = hand(&[Rank::Nine, Rank::Ace]);
        assert_eq!(visible_value(&dealer, 1).total, 9);
        assert_eq!(visible_value(&dealer, 2).total, 20);
        assert_eq!(visible_value(&dealer, 5).total, 20);
    }
}
