use std::fmt;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// HTML entity name, also used as the card's CSS class.
    pub fn entity(&self) -> &'static str {
        match self {
            Suit::Diamonds => "diams",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "j",
            Rank::Queen => "q",
            Rank::King => "k",
            Rank::Ace => "a",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code().to_uppercase(), self.suit.symbol())
    }
}

/// A single 52-card deck. Cards are drawn from the end of the pile.
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new(seed: u64) -> Self {
        Self::shuffled(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::shuffled(SmallRng::from_entropy())
    }

    /// Deck in a fixed order; the last card is drawn first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Deck {
            cards,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// Rank-major ordering: every suit of a rank before the next rank.
    pub fn ordered() -> Vec<Card> {
        Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect()
    }

    fn shuffled(rng: SmallRng) -> Self {
        let mut deck = Deck {
            cards: Self::ordered(),
            rng,
        };
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            log::debug!("deck exhausted, reshuffling a fresh 52");
            self.cards = Self::ordered();
            self.shuffle();
        }
        self.cards.pop().expect("deck should not be empty")
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
