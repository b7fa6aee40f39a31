use std::{cell::RefCell, rc::Rc};

use js_sys::Function;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, HtmlButtonElement};

pub mod config;
pub mod deck;
pub mod game;
pub mod hand;
mod logger;
pub mod view;

use config::TableConfig;
use deck::Deck;
use game::{BlackjackGame, GameStatus};
use view::TableView;

#[derive(Clone, Copy, Debug)]
enum TableAction {
    Hit,
    Stand,
    Restart,
}

struct Table {
    game: BlackjackGame,
    view: TableView,
    seed: Option<u64>,
    deals: u64,
    on_round_end: Option<Function>,
}

impl Table {
    /// Seeded tables get a different, reproducible shuffle for every deal.
    fn fresh_deck(&mut self) -> Deck {
        self.deals += 1;
        match self.seed {
            Some(seed) => Deck::new(seed.wrapping_add(self.deals)),
            None => Deck::from_entropy(),
        }
    }

    fn apply(&mut self, action: TableAction) -> Result<(), String> {
        match action {
            TableAction::Hit => self.game.hit().map(|_| ()),
            TableAction::Stand => self.game.stand().map(|_| ()),
            TableAction::Restart => {
                let deck = self.fresh_deck();
                self.game.restart(deck);
                Ok(())
            }
        }
    }
}

/// Runs `action`, re-renders, then notifies the round-end listener outside
/// the borrow so the callback may read the table state.
fn dispatch(table: &Rc<RefCell<Table>>, action: TableAction) -> Result<(), JsValue> {
    let notify = {
        let mut table = table.borrow_mut();
        let was_running = table.game.status() == GameStatus::Running;
        table
            .apply(action)
            .map_err(|err| JsValue::from_str(&format!("{action:?} rejected: {err}")))?;
        let snapshot = table.game.snapshot();
        table.view.render(&snapshot)?;

        let finished = snapshot.status != GameStatus::Running;
        let just_finished = finished && (was_running || matches!(action, TableAction::Restart));
        let callback = table.on_round_end.clone().filter(|_| just_finished);
        callback.map(|callback| (callback, snapshot))
    };

    if let Some((callback, snapshot)) = notify {
        callback.call3(
            &JsValue::NULL,
            &JsValue::from_str(snapshot.result),
            &JsValue::from(snapshot.player_score),
            &JsValue::from(snapshot.dealer_score),
        )?;
    }
    Ok(())
}

fn listen(
    table: &Rc<RefCell<Table>>,
    button: &HtmlButtonElement,
    action: TableAction,
) -> Result<Closure<dyn FnMut(Event)>, JsValue> {
    let table = Rc::clone(table);
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(err) = dispatch(&table, action) {
            log::warn!("{err:?}");
        }
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    Ok(handler)
}

#[wasm_bindgen]
pub struct BlackjackTable {
    inner: Rc<RefCell<Table>>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl BlackjackTable {
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.inner.borrow().game.snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn hit(&self) -> Result<(), JsValue> {
        dispatch(&self.inner, TableAction::Hit)
    }

    pub fn stand(&self) -> Result<(), JsValue> {
        dispatch(&self.inner, TableAction::Stand)
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        dispatch(&self.inner, TableAction::Restart)
    }

    /// `callback(result, playerScore, dealerScore)` after every finished round.
    pub fn on_round_end(&self, callback: Function) {
        self.inner.borrow_mut().on_round_end = Some(callback);
    }
}

fn parse_config(config: JsValue) -> Result<TableConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(TableConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))
}

fn bind_table(config: &TableConfig) -> Result<Table, JsValue> {
    console_error_panic_hook::set_once();
    config
        .validate()
        .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))?;
    let level = config
        .level_filter()
        .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))?;
    logger::init(level);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let view = TableView::bind(document, &config.selectors)?;

    Ok(Table {
        game: BlackjackGame::with_scores(
            Deck::stacked(Vec::new()),
            config.to_game_rules(),
            config.player_score,
            config.dealer_score,
        ),
        view,
        seed: config.seed,
        deals: 0,
        on_round_end: None,
    })
}

fn open_table(mut table: Table, deck: Deck) -> Result<BlackjackTable, JsValue> {
    table.game.restart(deck);
    table.view.render(&table.game.snapshot())?;
    log::info!("blackjack table ready");

    let inner = Rc::new(RefCell::new(table));
    let listeners = {
        let table = inner.borrow();
        vec![
            listen(&inner, table.view.hit_button(), TableAction::Hit)?,
            listen(&inner, table.view.stand_button(), TableAction::Stand)?,
            listen(&inner, table.view.restart_button(), TableAction::Restart)?,
        ]
    };

    Ok(BlackjackTable {
        inner,
        _listeners: listeners,
    })
}

#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<BlackjackTable, JsValue> {
    let config = parse_config(config)?;
    let mut table = bind_table(&config)?;
    let deck = table.fresh_deck();
    open_table(table, deck)
}

/// Like [`mount`], but deals the first round from `deck`. Restarts draw
/// fresh decks from the configured seed or entropy as usual.
pub fn mount_with_deck(config: &TableConfig, deck: Deck) -> Result<BlackjackTable, JsValue> {
    let table = bind_table(config)?;
    open_table(table, deck)
}
