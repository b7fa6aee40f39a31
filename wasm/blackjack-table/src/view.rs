use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

use crate::{
    config::Selectors,
    game::{CardView, GameSnapshot},
};

/// Handles to every page element the table writes to.
pub struct TableView {
    document: Document,
    player_points: Element,
    dealer_points: Element,
    player_hand: Element,
    dealer_hand: Element,
    player_score: Element,
    dealer_score: Element,
    game_result: Element,
    hit: HtmlButtonElement,
    stand: HtmlButtonElement,
    restart: HtmlButtonElement,
}

impl TableView {
    pub fn bind(document: Document, selectors: &Selectors) -> Result<Self, JsValue> {
        Ok(TableView {
            player_points: find(&document, &selectors.player_points)?,
            dealer_points: find(&document, &selectors.dealer_points)?,
            player_hand: find(&document, &selectors.player_hand)?,
            dealer_hand: find(&document, &selectors.dealer_hand)?,
            player_score: find(&document, &selectors.player_score)?,
            dealer_score: find(&document, &selectors.dealer_score)?,
            game_result: find(&document, &selectors.game_result)?,
            hit: button(&document, &selectors.hit)?,
            stand: button(&document, &selectors.stand)?,
            restart: button(&document, &selectors.restart)?,
            document,
        })
    }

    pub fn hit_button(&self) -> &HtmlButtonElement {
        &self.hit
    }

    pub fn stand_button(&self) -> &HtmlButtonElement {
        &self.stand
    }

    pub fn restart_button(&self) -> &HtmlButtonElement {
        &self.restart
    }

    /// `<li class="card [back] rank-<code> <suit>">` with a rank and a suit span.
    pub fn render_card(&self, card: &CardView) -> Result<Element, JsValue> {
        let wrapper = self.document.create_element("li")?;
        let class = if card.face_down {
            format!("card back rank-{} {}", card.rank, card.suit)
        } else {
            format!("card rank-{} {}", card.rank, card.suit)
        };
        wrapper.set_class_name(&class);

        let rank = self.document.create_element("span")?;
        rank.set_class_name("rank");
        rank.set_inner_html(&card.rank.to_uppercase());

        let suit = self.document.create_element("span")?;
        suit.set_class_name("suit");
        suit.set_inner_html(&format!("&{};", card.suit));

        wrapper.append_child(&rank)?;
        wrapper.append_child(&suit)?;
        Ok(wrapper)
    }

    pub fn render(&self, snapshot: &GameSnapshot) -> Result<(), JsValue> {
        self.render_hand(&self.player_hand, &snapshot.player_hand)?;
        self.render_hand(&self.dealer_hand, &snapshot.dealer_hand)?;

        if snapshot.player_hand.is_empty() {
            self.player_points.set_text_content(Some(""));
            self.dealer_points.set_text_content(Some(""));
        } else {
            self.player_points
                .set_text_content(Some(&snapshot.player_points.to_string()));
            self.dealer_points
                .set_text_content(Some(&snapshot.dealer_points.to_string()));
        }

        self.player_score
            .set_text_content(Some(&snapshot.player_score.to_string()));
        self.dealer_score
            .set_text_content(Some(&snapshot.dealer_score.to_string()));
        self.game_result.set_text_content(Some(snapshot.result));

        self.hit.set_disabled(!snapshot.hit_enabled);
        self.stand.set_disabled(!snapshot.stand_enabled);
        Ok(())
    }

    fn render_hand(&self, target: &Element, cards: &[CardView]) -> Result<(), JsValue> {
        target.set_inner_html("");
        for card in cards {
            let node = self.render_card(card)?;
            target.append_child(&node)?;
        }
        Ok(())
    }
}

fn find(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {selector}")))
}

fn button(document: &Document, selector: &str) -> Result<HtmlButtonElement, JsValue> {
    find(document, selector)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| JsValue::from_str(&format!("Element {selector} is not a button")))
}
