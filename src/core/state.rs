//! Game state: the sole mutator of the card model.
//!
//! ## GameState
//!
//! Owns the stock, the tableau columns and the history log. Every mutation
//! is announced through the event dispatcher; the state never renders.
//!
//! Player actions never fail loudly. An empty stock stops a deal, an
//! illegal auto-move emits `AutoMoveFailed`, and a move with no destination
//! is a silent no-op. Only layout and snapshot restoration return errors,
//! since those indicate a host bug.
//!
//! ## Invariants
//!
//! - Every card belongs to exactly one pile
//! - After `start_new`, the ids across all piles are exactly
//!   `0..rules.card_count()`
//! - Every non-empty column's top card is face up after `start_new`,
//!   `deal_from_stock`, `use_stock`, `auto_move` and `flip_top_cards`
//!   return. `with_layout` and `from_snapshot` keep the piles exactly as
//!   given; call `flip_top_cards` to normalize a hand-built layout

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::RuleSet;
use super::error::EngineError;
use super::history::History;
use super::rng::{random_shuffle_number, GameRng};
use super::snapshot::Snapshot;
use crate::cards::{build_decks, Card, CardId, CardStack};
use crate::events::{EventDispatcher, GameEvent, ListenerId};
use crate::rules::{check_sequence, choose_target, TargetTier, DESCENDING};

/// Result of an auto-move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoMoveOutcome {
    /// The run starting at `(from, row)` now sits on column `to`.
    Moved {
        from: usize,
        row: usize,
        to: usize,
        tier: TargetTier,
    },
    /// The card is unknown, face down, or heads an invalid run.
    Failed,
    /// The run is valid but no column accepts it.
    NoTarget,
}

impl AutoMoveOutcome {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, AutoMoveOutcome::Moved { .. })
    }
}

/// Complete game state.
#[derive(Debug)]
pub struct GameState {
    rules: RuleSet,
    shuffle_number: u64,
    stock: CardStack,
    tableau: Vec<CardStack>,
    history: History,
    dispatcher: EventDispatcher,
}

impl GameState {
    /// Create an empty game. Call `start_new` to deal.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        let tableau = vec![CardStack::new(); rules.columns()];
        Self {
            rules,
            shuffle_number: 0,
            stock: CardStack::new(),
            tableau,
            history: History::new(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Build a state from explicit piles.
    ///
    /// Fails if `tableau` does not have one pile per column or a card id
    /// appears twice. Cards need not form a full deck. Face-down column
    /// tops are kept as given.
    pub fn with_layout(
        rules: RuleSet,
        stock: CardStack,
        tableau: Vec<CardStack>,
    ) -> Result<Self, EngineError> {
        if tableau.len() != rules.columns() {
            return Err(EngineError::ColumnCountMismatch {
                expected: rules.columns(),
                found: tableau.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for card in stock.iter().chain(tableau.iter().flat_map(CardStack::iter)) {
            if !seen.insert(card.id) {
                return Err(EngineError::DuplicateCard(card.id));
            }
        }

        Ok(Self {
            rules,
            shuffle_number: 0,
            stock,
            tableau,
            history: History::new(),
            dispatcher: EventDispatcher::new(),
        })
    }

    /// Restore a state captured with [`GameState::snapshot`].
    ///
    /// Listeners are not part of a snapshot; subscribe again afterwards.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, EngineError> {
        let mut state = Self::with_layout(snapshot.rules, snapshot.stock, snapshot.tableau)?;
        state.shuffle_number = snapshot.shuffle_number;
        state.history = snapshot.history;
        Ok(state)
    }

    /// Capture piles, history and the shuffle number.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rules: self.rules.clone(),
            shuffle_number: self.shuffle_number,
            stock: self.stock.clone(),
            tableau: self.tableau.clone(),
            history: self.history.clone(),
        }
    }

    // === Listeners ===

    /// Register a listener for every subsequent event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.dispatcher.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    fn emit(&mut self, event: GameEvent) {
        self.dispatcher.emit(&event);
    }

    // === Dealing ===

    /// Shuffle a fresh set of decks and make the opening deal.
    ///
    /// A `shuffle_number` of 0 picks one at random. The same number always
    /// produces the same deal; it is returned so the host can store it as
    /// the replay key.
    pub fn start_new(&mut self, shuffle_number: u64) -> u64 {
        let shuffle_number = if shuffle_number == 0 {
            random_shuffle_number()
        } else {
            shuffle_number
        };

        let seed = self.rules.seed_string(shuffle_number);
        log::debug!("starting new game with seed {}", seed);

        let mut cards = build_decks(self.rules.deck_count());
        GameRng::from_seed_str(&seed).shuffle(&mut cards);

        self.shuffle_number = shuffle_number;
        self.stock = CardStack::from_cards(cards);
        self.tableau = vec![CardStack::new(); self.rules.columns()];
        self.history.clear();

        self.emit(GameEvent::CreatedStock {
            cards: self.stock.as_slice().to_vec(),
        });

        self.deal_from_stock(self.rules.initial_deal());
        shuffle_number
    }

    /// Deal up to `count` cards round-robin onto the tableau, then flip
    /// column tops.
    ///
    /// Stops quietly when the stock runs out. Returns the number dealt.
    pub fn deal_from_stock(&mut self, count: usize) -> usize {
        let columns = self.tableau.len();
        let mut dealt = 0;

        for i in 0..count {
            let Some(card) = self.stock.pop() else {
                log::debug!("stock exhausted after {} of {} cards", dealt, count);
                break;
            };
            let col = i % columns;
            self.tableau[col].push(card);
            let row = self.tableau[col].len() - 1;
            log::trace!("dealt {} to ({}, {})", card, col, row);
            self.emit(GameEvent::DealFromStock { card, col, row });
            dealt += 1;
        }

        self.flip_top_cards();
        dealt
    }

    /// Deal one card to every column: the player's draw action.
    pub fn use_stock(&mut self) -> usize {
        let dealt = self.deal_from_stock(self.tableau.len());
        if dealt > 0 {
            self.add_history(format!("dealt {} cards from stock", dealt));
        }
        dealt
    }

    /// Turn up every face-down column top. Returns how many were flipped.
    pub fn flip_top_cards(&mut self) -> usize {
        let mut flipped = 0;

        for col in 0..self.tableau.len() {
            let row = self.tableau[col].len().saturating_sub(1);
            let Some(top) = self.tableau[col].top_mut() else {
                continue;
            };
            if top.face_up {
                continue;
            }
            top.face_up = true;
            let card = *top;
            log::trace!("flipped {} at ({}, {})", card, col, row);
            self.emit(GameEvent::FlipTopCard { card, col, row });
            flipped += 1;
        }

        flipped
    }

    // === Moves ===

    /// Move the run headed by `card_id` to the best accepting column.
    ///
    /// Fails without mutation when the card is not a face-up tableau card
    /// or its run is not a descending same-suit sequence. Does nothing when
    /// no column accepts the run.
    pub fn auto_move(&mut self, card_id: CardId) -> AutoMoveOutcome {
        let Some((col, row)) = self.find_card(card_id) else {
            return self.fail_auto_move(card_id, "card is not on the tableau");
        };
        let column = self.tableau[col].as_slice();
        let card = column[row];
        let is_run = check_sequence(column, row, DESCENDING);

        if !card.face_up {
            return self.fail_auto_move(card_id, "card is face down");
        }
        if !is_run {
            return self.fail_auto_move(card_id, "run is not a sequence");
        }

        let Some((target, tier)) = choose_target(&self.tableau, col, &card) else {
            log::debug!("auto-move {}: no accepting column", card);
            return AutoMoveOutcome::NoTarget;
        };

        let run = self.tableau[col].split_off(row);
        let moved = run.len();
        self.tableau[target].extend(run);
        log::debug!(
            "auto-move {}: {} cards from column {} to column {} ({:?})",
            card,
            moved,
            col,
            target,
            tier
        );

        self.emit(GameEvent::MoveStack {
            card,
            row,
            col,
            target_col: target,
        });
        self.flip_top_cards();
        self.add_history(format!(
            "moved {} ({} cards) from column {} to column {}",
            card, moved, col, target
        ));

        AutoMoveOutcome::Moved {
            from: col,
            row,
            to: target,
            tier,
        }
    }

    fn fail_auto_move(&mut self, card_id: CardId, reason: &str) -> AutoMoveOutcome {
        log::debug!("auto-move {} failed: {}", card_id, reason);
        self.emit(GameEvent::AutoMoveFailed { card: card_id });
        AutoMoveOutcome::Failed
    }

    /// Ask listeners to redraw everything from current state.
    pub fn safety_redraw(&mut self) {
        self.emit(GameEvent::SafetyRedraw);
    }

    // === History ===

    /// Append a history entry and announce it.
    pub fn add_history(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        self.history.push(entry.clone());
        self.emit(GameEvent::HistoryAdded { entry });
    }

    /// Not implemented: the history holds descriptions only, so there is
    /// nothing to rewind. Leaves the state untouched.
    pub fn undo(&mut self) {
        log::debug!("undo requested; not supported");
    }

    /// Not implemented; see [`GameState::undo`].
    pub fn redo(&mut self) {
        log::debug!("redo requested; not supported");
    }

    // === Queries ===

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Shuffle number of the current deal (0 before the first deal).
    #[must_use]
    pub fn shuffle_number(&self) -> u64 {
        self.shuffle_number
    }

    #[must_use]
    pub fn stock(&self) -> &CardStack {
        &self.stock
    }

    #[must_use]
    pub fn tableau(&self) -> &[CardStack] {
        &self.tableau
    }

    #[must_use]
    pub fn column(&self, col: usize) -> Option<&CardStack> {
        self.tableau.get(col)
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn redo_stack(&self) -> &im::Vector<String> {
        self.history.redo_stack()
    }

    /// `(column, row)` of a tableau card.
    #[must_use]
    pub fn find_card(&self, card_id: CardId) -> Option<(usize, usize)> {
        self.tableau
            .iter()
            .enumerate()
            .find_map(|(col, pile)| pile.position(card_id).map(|row| (col, row)))
    }

    /// Look up a card anywhere (stock or tableau).
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards().find(|card| card.id == card_id)
    }

    /// Every card: stock bottom to top, then each column bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.tableau.iter().flat_map(CardStack::iter))
    }

    /// Number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len() + self.tableau.iter().map(CardStack::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::events::{EventKind, EventQueue};

    fn small_rules() -> RuleSet {
        RuleSet::new("test", 1, 4, 8).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let state = GameState::new(RuleSet::spider());
        assert_eq!(state.tableau().len(), 10);
        assert_eq!(state.card_count(), 0);
        assert_eq!(state.shuffle_number(), 0);
    }

    #[test]
    fn test_start_new_spider_layout() {
        let mut state = GameState::new(RuleSet::spider());
        let used = state.start_new(7);

        assert_eq!(used, 7);
        assert_eq!(state.shuffle_number(), 7);
        assert_eq!(state.card_count(), 104);
        assert_eq!(state.stock().len(), 50);

        let heights: Vec<_> = state.tableau().iter().map(CardStack::len).collect();
        assert_eq!(heights, vec![6, 6, 6, 6, 5, 5, 5, 5, 5, 5]);

        for pile in state.tableau() {
            let (top, rest) = pile.as_slice().split_last().unwrap();
            assert!(top.face_up);
            assert!(rest.iter().all(|c| !c.face_up));
        }
        assert!(state.stock().iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_start_new_random_number() {
        let mut state = GameState::new(small_rules());
        let used = state.start_new(0);
        assert_ne!(used, 0);
        assert_eq!(state.shuffle_number(), used);
    }

    #[test]
    fn test_start_new_event_order() {
        let mut state = GameState::new(small_rules());
        let queue = EventQueue::new();
        state.subscribe(queue.listener());

        state.start_new(3);
        let kinds: Vec<_> = queue.drain().iter().map(GameEvent::kind).collect();

        assert_eq!(kinds[0], EventKind::CreatedStock);
        assert_eq!(
            kinds[1..9].iter().filter(|k| **k == EventKind::DealFromStock).count(),
            8
        );
        assert_eq!(&kinds[9..], &[EventKind::FlipTopCard; 4]);
    }

    #[test]
    fn test_start_new_resets_history() {
        let mut state = GameState::new(small_rules());
        state.start_new(3);
        state.use_stock();
        assert_eq!(state.history().len(), 1);

        state.start_new(4);
        assert!(state.history().is_empty());
        assert_eq!(state.card_count(), 52);
    }

    #[test]
    fn test_deal_rows_and_columns() {
        let mut state = GameState::new(RuleSet::new("test", 1, 3, 0).unwrap());
        state.start_new(11);
        let queue = EventQueue::new();
        state.subscribe(queue.listener());

        state.deal_from_stock(5);

        let placements: Vec<_> = queue
            .drain()
            .into_iter()
            .filter_map(|event| match event {
                GameEvent::DealFromStock { col, row, .. } => Some((col, row)),
                _ => None,
            })
            .collect();
        assert_eq!(placements, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_use_stock_on_empty_stock() {
        let rules = RuleSet::new("test", 1, 4, 52).unwrap();
        let mut state = GameState::new(rules);
        state.start_new(5);
        assert!(state.stock().is_empty());

        let before = state.snapshot();
        assert_eq!(state.use_stock(), 0);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_partial_deal_when_stock_runs_low() {
        let rules = RuleSet::new("test", 1, 10, 50).unwrap();
        let mut state = GameState::new(rules);
        state.start_new(5);
        assert_eq!(state.stock().len(), 2);

        assert_eq!(state.use_stock(), 2);
        assert!(state.stock().is_empty());
        assert_eq!(state.card_count(), 52);
        assert_eq!(
            state.history().last().map(String::as_str),
            Some("dealt 2 cards from stock")
        );
    }

    #[test]
    fn test_flip_idempotent() {
        let mut state = GameState::new(small_rules());
        state.start_new(9);
        assert_eq!(state.flip_top_cards(), 0);
    }

    #[test]
    fn test_with_layout_rejects_duplicates() {
        let card = Card::new(CardId(1), Rank::Ace, Suit::Spades);
        let result = GameState::with_layout(
            RuleSet::new("test", 1, 2, 0).unwrap(),
            CardStack::from_cards(vec![card]),
            vec![CardStack::from_cards(vec![card]), CardStack::new()],
        );
        assert_eq!(result.unwrap_err(), EngineError::DuplicateCard(CardId(1)));
    }

    #[test]
    fn test_with_layout_rejects_column_count() {
        let result = GameState::with_layout(
            RuleSet::new("test", 1, 3, 0).unwrap(),
            CardStack::new(),
            vec![CardStack::new()],
        );
        assert_eq!(
            result.unwrap_err(),
            EngineError::ColumnCountMismatch {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_with_layout_keeps_face_down_tops() {
        let buried = Card::new(CardId(4), Rank::Five, Suit::Clubs);
        let mut state = GameState::with_layout(
            RuleSet::new("test", 1, 2, 0).unwrap(),
            CardStack::new(),
            vec![CardStack::from_cards(vec![buried]), CardStack::new()],
        )
        .unwrap();

        assert!(!state.column(0).and_then(CardStack::top).unwrap().face_up);

        let restored = GameState::from_snapshot(state.snapshot()).unwrap();
        assert!(!restored.column(0).and_then(CardStack::top).unwrap().face_up);

        assert_eq!(state.flip_top_cards(), 1);
        assert!(state.column(0).and_then(CardStack::top).unwrap().face_up);
    }

    #[test]
    fn test_auto_move_unknown_card() {
        let mut state = GameState::new(small_rules());
        state.start_new(2);
        let queue = EventQueue::new();
        state.subscribe(queue.listener());

        assert_eq!(state.auto_move(CardId(999)), AutoMoveOutcome::Failed);
        assert_eq!(queue.drain(), vec![GameEvent::AutoMoveFailed { card: CardId(999) }]);
    }

    #[test]
    fn test_auto_move_stock_card_fails() {
        let mut state = GameState::new(small_rules());
        state.start_new(2);
        let in_stock = state.stock().top().map(|c| c.id).unwrap();
        assert_eq!(state.auto_move(in_stock), AutoMoveOutcome::Failed);
    }

    #[test]
    fn test_auto_move_face_down_fails() {
        let mut state = GameState::new(small_rules());
        state.start_new(2);
        let buried = state.column(0).and_then(|c| c.get(0)).map(|c| c.id).unwrap();
        assert_eq!(state.auto_move(buried), AutoMoveOutcome::Failed);
    }

    #[test]
    fn test_undo_redo_are_no_ops() {
        let mut state = GameState::new(small_rules());
        state.start_new(8);
        state.use_stock();
        let before = state.snapshot();

        state.undo();
        state.redo();

        assert_eq!(state.snapshot(), before);
        assert!(state.redo_stack().is_empty());
    }

    #[test]
    fn test_card_lookup() {
        let mut state = GameState::new(small_rules());
        state.start_new(8);

        for id in 0..52 {
            assert!(state.card(CardId(id)).is_some());
        }
        assert!(state.card(CardId(52)).is_none());

        let top = state.column(2).and_then(CardStack::top).copied().unwrap();
        assert_eq!(state.find_card(top.id), Some((2, 1)));
    }
}
