use crate::action::{Action, ActionKind, ActionParseError, Answer, Question};
use crate::cards::{contains_half, contains_pair, sorted_cards, Card, Suit};
use crate::deck::{validate_deal, DealError, Deck};
use crate::events::GameEvent;
use crate::player::{next_of, partner_of, AskLevel, Player, Seat, SEATS};
use crate::ranking::legal_follow;
use crate::rules::{ConfigError, Ruleset};
use crate::scoring::{evaluate, HandResult, TRICKS_PER_HAND};
use crate::snapshot::{EndInfo, StateSnapshot};
use crate::trick::Trick;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Cards moved in each direction of the exchange.
pub const EXCHANGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Auction,
    ExchangeOut,
    ExchangeBack,
    Promote,
    Ask,
    Answer,
    Trick,
    Done,
}

impl Phase {
    pub const fn tag(self) -> &'static str {
        match self {
            Phase::Auction => "AUCTION",
            Phase::ExchangeOut => "EXCHANGE_OUT",
            Phase::ExchangeBack => "EXCHANGE_BACK",
            Phase::Promote => "PROMOTE",
            Phase::Ask => "ASK",
            Phase::Answer => "ANSWER",
            Phase::Trick => "TRICK",
            Phase::Done => "DONE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PhaseParseError {
    #[error("invalid phase: '{0}'")]
    Invalid(String),
}

impl FromStr for Phase {
    type Err = PhaseParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUCTION" => Ok(Phase::Auction),
            "EXCHANGE_OUT" => Ok(Phase::ExchangeOut),
            "EXCHANGE_BACK" => Ok(Phase::ExchangeBack),
            "PROMOTE" => Ok(Phase::Promote),
            "ASK" => Ok(Phase::Ask),
            "ANSWER" => Ok(Phase::Answer),
            "TRICK" => Ok(Phase::Trick),
            "DONE" => Ok(Phase::Done),
            _ => Err(PhaseParseError::Invalid(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the hand is finished")]
    Finished,
    #[error("illegal action {action} in phase {phase}")]
    Illegal { action: Action, phase: Phase },
    #[error(transparent)]
    Parse(#[from] ActionParseError),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// One hand of Marjapussi, from the auction to the final trick.
///
/// The game only changes through [`Game::act_action`]; anything not listed
/// by [`Game::legal_actions`] is rejected without touching the state.
///
/// ```
/// use marjapussi::game::{Game, Phase};
/// use marjapussi::rules::Ruleset;
///
/// let mut game = Game::with_seed(Ruleset::default(), 7).unwrap();
/// assert_eq!(game.phase(), Phase::Auction);
/// while let Some(action) = game.legal_actions().first().copied() {
///     game.act_action(&action).unwrap();
/// }
/// assert_eq!(game.phase(), Phase::Done);
/// assert_eq!(game.tricks().len(), 9);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) rules: Ruleset,
    pub(crate) players: [Player; SEATS],
    pub(crate) phase: Phase,
    pub(crate) game_value: u32,
    pub(crate) trump: Option<Suit>,
    pub(crate) current: Seat,
    pub(crate) playing_player: Option<Seat>,
    /// Trump suits in declaration order.
    pub(crate) declared: Vec<Suit>,
    pub(crate) passed_out: Vec<Card>,
    pub(crate) passed_back: Vec<Card>,
    pub(crate) tricks: Vec<Trick>,
    pub(crate) current_trick: Trick,
    pub(crate) pending_question: Option<Question>,
    pub(crate) original_hands: [Vec<Card>; SEATS],
    history: Vec<Action>,
    events: Vec<GameEvent>,
    result: Option<HandResult>,
}

impl Game {
    /// New hand with a freshly shuffled deck.
    pub fn new(rules: Ruleset) -> Result<Self, SetupError> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(rules, seed)
    }

    /// New hand whose deal is reproducible from `seed`.
    pub fn with_seed(rules: Ruleset, seed: u64) -> Result<Self, SetupError> {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        Self::from_hands(rules, deck.deal())
    }

    /// New hand from an explicit deal of 9 cards per seat.
    pub fn from_hands(rules: Ruleset, hands: [Vec<Card>; SEATS]) -> Result<Self, SetupError> {
        rules.validate()?;
        validate_deal(&hands)?;
        let original_hands = hands.map(|h| sorted_cards(&h));
        let players = std::array::from_fn(|seat| Player::new(seat, original_hands[seat].clone()));
        let phase = rules.start_phase;
        let game_value = rules.start_value;
        info!(start_phase = %phase, game_value, "cards dealt");
        Ok(Self {
            rules,
            players,
            phase,
            game_value,
            trump: None,
            current: 0,
            playing_player: None,
            declared: Vec::new(),
            passed_out: Vec::with_capacity(EXCHANGE_SIZE),
            passed_back: Vec::with_capacity(EXCHANGE_SIZE),
            tricks: Vec::with_capacity(TRICKS_PER_HAND),
            current_trick: Trick::new(),
            pending_question: None,
            original_hands,
            history: Vec::new(),
            events: Vec::new(),
            result: None,
        })
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current bid value
    pub fn game_value(&self) -> u32 {
        self.game_value
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Seat expected to act next
    pub fn player_at_turn(&self) -> Seat {
        self.current
    }

    /// Auction winner, if anyone took the game.
    pub fn playing_player(&self) -> Option<Seat> {
        self.playing_player
    }

    pub fn declared_trumps(&self) -> &[Suit] {
        &self.declared
    }

    pub fn passed_out(&self) -> &[Card] {
        &self.passed_out
    }

    pub fn passed_back(&self) -> &[Card] {
        &self.passed_back
    }

    /// Completed tricks in play order.
    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    /// 1-based number of the trick being played (9 once the hand is done).
    pub fn trick_number(&self) -> usize {
        if self.phase == Phase::Done {
            self.tricks.len()
        } else {
            self.tricks.len() + 1
        }
    }

    pub fn is_first_trick(&self) -> bool {
        self.tricks.is_empty()
    }

    pub fn pending_question(&self) -> Option<Question> {
        self.pending_question
    }

    /// Every accepted action, in order.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn original_hands(&self) -> &[Vec<Card>; SEATS] {
        &self.original_hands
    }

    /// Final evaluation; `None` until the phase is [`Phase::Done`].
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state_dict(&self) -> StateSnapshot {
        StateSnapshot::from_game(self)
    }

    pub fn end_info(&self) -> EndInfo {
        EndInfo::from_game(self)
    }

    /// Legal actions for the player at turn; empty only once the hand is done.
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::Auction => self.legal_auction(),
            Phase::ExchangeOut => self.legal_exchange_out(),
            Phase::ExchangeBack => self.legal_exchange_back(),
            Phase::Promote => self.legal_promote(),
            Phase::Ask => self.legal_ask(),
            Phase::Answer => self.legal_answer(),
            Phase::Trick => self.legal_trick(),
            Phase::Done => Vec::new(),
        }
    }

    pub fn legal_action_strings(&self) -> Vec<String> {
        self.legal_actions().iter().map(Action::to_string).collect()
    }

    /// Apply `action` if it is currently legal.
    pub fn act_action(&mut self, action: &Action) -> Result<(), ActionError> {
        if self.phase == Phase::Done {
            warn!(action = %action, "action after the hand finished");
            return Err(ActionError::Finished);
        }
        if !self.legal_actions().contains(action) {
            warn!(action = %action, phase = %self.phase, "rejected illegal action");
            return Err(ActionError::Illegal { action: *action, phase: self.phase });
        }
        debug!(seat = action.seat, phase = %self.phase, action = %action, "applying action");
        self.history.push(*action);

        let seat = action.seat;
        match action.kind {
            ActionKind::Bid(value) => self.act_auction(seat, value),
            ActionKind::PassOut(card) => self.act_exchange_out(seat, card),
            ActionKind::PassBack(card) => self.act_exchange_back(seat, card),
            ActionKind::Promote(value) => self.act_promote(seat, value),
            ActionKind::Ask(question) => self.act_ask(seat, question),
            ActionKind::Answer(answer) => self.act_answer(seat, answer),
            ActionKind::Play(card) => self.act_trick(seat, card),
        }
        Ok(())
    }

    /// Parse an encoded action (`<seat>,<TAG>,<payload>`) and apply it.
    pub fn act_action_str(&mut self, action: &str) -> Result<(), ActionError> {
        let action: Action = action.parse()?;
        self.act_action(&action)
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        debug!(%from, %to, "phase change");
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    fn undeclared_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(move |s| !self.declared.contains(s))
    }

    fn value_actions(&self, kind: fn(u32) -> ActionKind) -> Vec<Action> {
        std::iter::once(0)
            .chain(self.rules.raises_above(self.game_value))
            .map(|v| Action::new(self.current, kind(v)))
            .collect()
    }

    // ---- auction ----

    fn legal_auction(&self) -> Vec<Action> {
        self.value_actions(ActionKind::Bid)
    }

    fn act_auction(&mut self, seat: Seat, value: u32) {
        if value > self.game_value {
            self.game_value = value;
            self.players[seat].bid = value;
            debug!(seat, value, "bid raised");
            self.events.push(GameEvent::BidRaised { seat, value });
        } else {
            self.players[seat].still_bidding = false;
            debug!(seat, "bidder dropped");
            self.events.push(GameEvent::BidderDropped { seat });
        }

        let active: Vec<Seat> = (0..SEATS).filter(|&s| self.players[s].still_bidding).collect();
        match active.as_slice() {
            [only] if self.game_value > self.rules.start_value => self.auction_won(*only),
            [] | [_] => self.nobody_plays(),
            _ => self.current = self.next_bidder(seat),
        }
    }

    fn next_bidder(&self, from: Seat) -> Seat {
        let mut seat = next_of(from);
        while !self.players[seat].still_bidding && seat != from {
            seat = next_of(seat);
        }
        seat
    }

    fn nobody_plays(&mut self) {
        self.playing_player = None;
        self.current = 0;
        info!(game_value = self.game_value, "nobody takes the game");
        self.events.push(GameEvent::AuctionWon { playing: None, value: self.game_value });
        self.set_phase(Phase::Trick);
    }

    fn auction_won(&mut self, seat: Seat) {
        self.playing_player = Some(seat);
        self.current = partner_of(seat);
        info!(seat, game_value = self.game_value, "auction won");
        self.events.push(GameEvent::AuctionWon { playing: Some(seat), value: self.game_value });
        self.set_phase(Phase::ExchangeOut);
    }

    // ---- exchange ----

    fn hand_actions(&self, kind: fn(Card) -> ActionKind) -> Vec<Action> {
        let seat = self.current;
        self.players[seat].hand.iter().map(|&c| Action::new(seat, kind(c))).collect()
    }

    fn legal_exchange_out(&self) -> Vec<Action> {
        self.hand_actions(ActionKind::PassOut)
    }

    fn act_exchange_out(&mut self, seat: Seat, card: Card) {
        self.players[seat].remove_card(card);
        self.passed_out.push(card);
        if self.passed_out.len() < EXCHANGE_SIZE {
            return;
        }
        let playing = partner_of(seat);
        for &c in &self.passed_out {
            self.players[playing].receive_card(c);
        }
        debug!(from = seat, to = playing, "cards passed");
        self.events.push(GameEvent::CardsPassed {
            from: seat,
            to: playing,
            cards: self.passed_out.clone(),
        });
        self.current = playing;
        self.set_phase(Phase::ExchangeBack);
    }

    fn legal_exchange_back(&self) -> Vec<Action> {
        self.hand_actions(ActionKind::PassBack)
    }

    fn act_exchange_back(&mut self, seat: Seat, card: Card) {
        self.players[seat].remove_card(card);
        self.passed_back.push(card);
        if self.passed_back.len() < EXCHANGE_SIZE {
            return;
        }
        let partner = partner_of(seat);
        for &c in &self.passed_back {
            self.players[partner].receive_card(c);
        }
        info!(seat, partner, "cards exchanged");
        self.events.push(GameEvent::CardsPassed {
            from: seat,
            to: partner,
            cards: self.passed_back.clone(),
        });
        self.current = seat;
        self.set_phase(Phase::Promote);
    }

    // ---- promote ----

    fn legal_promote(&self) -> Vec<Action> {
        self.value_actions(ActionKind::Promote)
    }

    fn act_promote(&mut self, seat: Seat, value: u32) {
        let raised = value > self.game_value;
        if raised {
            self.game_value = value;
            self.players[seat].bid = value;
        }
        info!(seat, game_value = self.game_value, raised, "game value fixed");
        self.events.push(GameEvent::GameValueSet { seat, value: self.game_value, raised });
        self.set_phase(Phase::Trick);
    }

    // ---- trump questions ----

    fn legal_ask(&self) -> Vec<Action> {
        let seat = self.current;
        let player = &self.players[seat];
        let ask = |q| Action::new(seat, ActionKind::Ask(q));
        let mut actions = Vec::new();
        if player.asking == AskLevel::Own {
            actions.extend(
                self.undeclared_suits()
                    .filter(|&s| contains_pair(&player.hand, s))
                    .map(|s| ask(Question::MyPair(s))),
            );
        }
        if player.asking <= AskLevel::Partner {
            actions.push(ask(Question::YourPair));
        }
        actions.extend(self.undeclared_suits().map(|s| ask(Question::OurHalf(s))));
        actions.extend(self.legal_trick());
        actions
    }

    fn act_ask(&mut self, seat: Seat, question: Question) {
        debug!(seat, question = %question, "question asked");
        self.events.push(GameEvent::asked(seat, question));
        let level = match question {
            Question::MyPair(suit) => {
                self.declare_trump(seat, suit);
                self.set_phase(Phase::Trick);
                return;
            }
            Question::YourPair => AskLevel::Partner,
            Question::OurHalf(_) => AskLevel::Half,
        };
        let player = &mut self.players[seat];
        player.asking = player.asking.max(level);
        self.pending_question = Some(question);
        self.current = partner_of(seat);
        self.set_phase(Phase::Answer);
    }

    fn legal_answer(&self) -> Vec<Action> {
        let seat = self.current;
        let hand = &self.players[seat].hand;
        let answers = match self.pending_question {
            Some(Question::YourPair) => {
                let pairs: Vec<Answer> = self
                    .undeclared_suits()
                    .filter(|&s| contains_pair(hand, s))
                    .map(Answer::MyPair)
                    .collect();
                if pairs.is_empty() {
                    vec![Answer::NoPair]
                } else {
                    pairs
                }
            }
            Some(Question::OurHalf(suit)) if contains_half(hand, suit) => {
                vec![Answer::OurHalf(suit)]
            }
            Some(Question::OurHalf(suit)) => vec![Answer::NoHalf(suit)],
            Some(Question::MyPair(_)) | None => Vec::new(),
        };
        answers.into_iter().map(|a| Action::new(seat, ActionKind::Answer(a))).collect()
    }

    fn act_answer(&mut self, seat: Seat, answer: Answer) {
        let asker = partner_of(seat);
        debug!(seat, answer = %answer, "question answered");
        self.events.push(GameEvent::answered(seat, answer));
        match answer {
            Answer::MyPair(suit) => self.declare_trump(seat, suit),
            Answer::OurHalf(suit) => {
                if contains_half(&self.players[asker].hand, suit) {
                    self.declare_trump(seat, suit);
                }
            }
            Answer::NoPair | Answer::NoHalf(_) => {}
        }
        self.pending_question = None;
        self.current = asker;
        self.set_phase(Phase::Trick);
    }

    fn declare_trump(&mut self, seat: Seat, suit: Suit) {
        let booked = self.players[seat].declare_trump_suit(suit, &self.rules.points);
        let bonus = if booked { self.rules.points.suit(suit) } else { 0 };
        self.trump = Some(suit);
        self.declared.push(suit);
        info!(seat, suit = %suit, bonus, "trump declared");
        self.events.push(GameEvent::TrumpDeclared { seat, suit, bonus });
    }

    // ---- tricks ----

    fn legal_trick(&self) -> Vec<Action> {
        let seat = self.current;
        legal_follow(
            &self.current_trick.cards(),
            &self.players[seat].hand,
            self.trump,
            self.is_first_trick(),
        )
        .into_iter()
        .map(|c| Action::new(seat, ActionKind::Play(c)))
        .collect()
    }

    fn act_trick(&mut self, seat: Seat, card: Card) {
        self.set_phase(Phase::Trick);
        self.players[seat].remove_card(card);
        self.current_trick.push(seat, card);
        self.events.push(GameEvent::CardPlayed { seat, card });
        self.current = next_of(seat);
        if !self.current_trick.is_complete() {
            return;
        }

        let trick = std::mem::take(&mut self.current_trick);
        let Some(winner) = trick.winner(self.trump) else {
            unreachable!("a complete trick always has a winner");
        };
        let number = self.tricks.len() + 1;
        let is_last = number == TRICKS_PER_HAND;
        let before = self.players[winner].points_made;
        self.players[winner].win_trick(trick.clone(), is_last, &self.rules.points);
        let points = self.players[winner].points_made - before;
        self.tricks.push(trick);
        self.current = winner;
        info!(number, winner, points, "trick resolved");
        self.events.push(GameEvent::TrickResolved { number, winner, points });

        if is_last {
            self.finish();
        } else {
            self.set_phase(Phase::Ask);
        }
    }

    fn finish(&mut self) {
        let result = evaluate(&self.players, self.playing_player, self.game_value);
        info!(
            outcome = ?result.outcome,
            party_points = ?result.party_points,
            game_value = result.game_value,
            "hand finished"
        );
        self.set_phase(Phase::Done);
        self.events.push(GameEvent::HandFinished { result: result.clone() });
        self.result = Some(result);
    }
}
