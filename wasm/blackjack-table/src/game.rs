use serde::Serialize;

use crate::{
    deck::{Card, Deck},
    hand::{hand_value, is_blackjack, is_bust, visible_value},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Win,
    Bust,
    Push,
}

impl GameStatus {
    /// Text shown in the result element; empty while the round is open.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "",
            GameStatus::Win => "win",
            GameStatus::Bust => "bust",
            GameStatus::Push => "push",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameRules {
    pub dealer_stands_on: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules { dealer_stands_on: 17 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub rank: &'static str,
    pub suit: &'static str,
    pub label: String,
    pub face_down: bool,
}

impl CardView {
    fn new(card: &Card, face_down: bool) -> Self {
        CardView {
            rank: card.rank.code(),
            suit: card.suit.entity(),
            label: card.to_string(),
            face_down,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub result: &'static str,
    pub player_hand: Vec<CardView>,
    pub dealer_hand: Vec<CardView>,
    pub player_points: u16,
    pub dealer_points: u16,
    pub player_score: u32,
    pub dealer_score: u32,
    pub hole_revealed: bool,
    pub hit_enabled: bool,
    pub stand_enabled: bool,
    pub cards_remaining: usize,
}

pub struct BlackjackGame {
    deck: Deck,
    rules: GameRules,
    player_hand: Vec<Card>,
    dealer_hand: Vec<Card>,
    player_points: u16,
    dealer_points: u16,
    player_score: u32,
    dealer_score: u32,
    status: GameStatus,
    hole_revealed: bool,
    hit_enabled: bool,
    stand_enabled: bool,
}

impl BlackjackGame {
    pub fn new(deck: Deck, rules: GameRules) -> Self {
        Self::with_scores(deck, rules, 0, 0)
    }

    pub fn with_scores(deck: Deck, rules: GameRules, player_score: u32, dealer_score: u32) -> Self {
        BlackjackGame {
            deck,
            rules,
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            player_points: 0,
            dealer_points: 0,
            player_score,
            dealer_score,
            status: GameStatus::Running,
            hole_revealed: false,
            hit_enabled: false,
            stand_enabled: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer_hand
    }

    pub fn player_points(&self) -> u16 {
        self.player_points
    }

    pub fn dealer_points(&self) -> u16 {
        self.dealer_points
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.dealer_score)
    }

    pub fn hit_enabled(&self) -> bool {
        self.hit_enabled
    }

    pub fn stand_enabled(&self) -> bool {
        self.stand_enabled
    }

    fn deal_card(&mut self) -> Card {
        let card = self.deck.draw();
        log::debug!("drew {card}, {} left in deck", self.deck.remaining());
        card
    }

    pub fn new_round(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.status = GameStatus::Running;
        self.hole_revealed = false;
        self.hit_enabled = true;
        self.stand_enabled = true;

        self.player_hand = vec![self.deal_card(), self.deal_card()];
        self.dealer_hand = vec![self.deal_card(), self.deal_card()];
        self.update_points();
        log::info!(
            "new round: player {} ({}), dealer shows {}",
            self.player_hand[0],
            self.player_points,
            self.dealer_hand[0]
        );

        if self.player_points == 21 {
            let outcome = if is_blackjack(&self.dealer_hand) {
                GameStatus::Push
            } else {
                GameStatus::Win
            };
            self.finish(outcome);
        }
    }

    pub fn restart(&mut self, deck: Deck) {
        self.deck = deck;
        self.new_round();
    }

    pub fn hit(&mut self) -> Result<GameStatus, String> {
        self.ensure_running()?;
        if !self.hit_enabled {
            return Err("hit is disabled at 21".to_string());
        }

        if self.player_points < 21 {
            let card = self.deal_card();
            self.player_hand.push(card);
            self.update_points();
        }

        if is_bust(&self.player_hand) {
            self.finish(GameStatus::Bust);
        } else if self.player_points == 21 {
            // another card can only bust
            self.hit_enabled = false;
        }
        Ok(self.status)
    }

    pub fn stand(&mut self) -> Result<GameStatus, String> {
        self.ensure_running()?;
        self.hole_revealed = true;
        self.update_points();

        self.play_dealer();

        let outcome = if self.dealer_points > 21 {
            GameStatus::Win
        } else if self.player_points < self.dealer_points {
            GameStatus::Bust
        } else if self.player_points == self.dealer_points {
            GameStatus::Push
        } else {
            GameStatus::Win
        };
        self.finish(outcome);
        Ok(self.status)
    }

    /// Dealer draws to the standing threshold and stands on soft totals too.
    fn play_dealer(&mut self) {
        while self.dealer_points < u16::from(self.rules.dealer_stands_on) {
            let card = self.deal_card();
            self.dealer_hand.push(card);
            self.update_points();
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let dealer_hand = self
            .dealer_hand
            .iter()
            .enumerate()
            .map(|(index, card)| CardView::new(card, index == 1 && !self.hole_revealed))
            .collect();
        GameSnapshot {
            status: self.status,
            result: self.status.as_str(),
            player_hand: self.player_hand.iter().map(|card| CardView::new(card, false)).collect(),
            dealer_hand,
            player_points: self.player_points,
            dealer_points: self.dealer_points,
            player_score: self.player_score,
            dealer_score: self.dealer_score,
            hole_revealed: self.hole_revealed,
            hit_enabled: self.hit_enabled,
            stand_enabled: self.stand_enabled,
            cards_remaining: self.deck.remaining(),
        }
    }

    fn ensure_running(&self) -> Result<(), String> {
        if self.player_hand.is_empty() {
            return Err("no round has been dealt".to_string());
        }
        if self.status != GameStatus::Running {
            return Err(format!("round is over ({})", self.status.as_str()));
        }
        Ok(())
    }

    fn update_points(&mut self) {
        self.player_points = hand_value(&self.player_hand).total;
        self.dealer_points = if self.hole_revealed {
            hand_value(&self.dealer_hand).total
        } else {
            visible_value(&self.dealer_hand, 1).total
        };
    }

    fn finish(&mut self, outcome: GameStatus) {
        self.status = outcome;
        self.hole_revealed = true;
        self.update_points();
        match outcome {
            GameStatus::Win => self.player_score += 1,
            GameStatus::Bust => self.dealer_score += 1,
            _ => {}
        }
        self.hit_enabled = false;
        self.stand_enabled = false;
        log::info!(
            "round over: {} (player {} vs dealer {}), score {}-{}",
            outcome.as_str(),
            self.player_points,
            self.dealer_points,
            self.player_score,
            self.dealer_score
        );
    }
}
