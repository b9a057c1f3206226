//! Game controller
//!
//! Runs `Toss -> Turn(Human) <-> Turn(Bot) -> Over`. The controller owns both seats,
//! the letter the next singer must start with, and the turn history. Scores and the
//! bot's loss ledger are only changed from here.

mod deal;
mod error;
mod toss;

pub use deal::{deal_lyrics, partition};
pub use error::GameError;
pub use toss::Coin;

use crate::console::{Console, Event};
use crate::core::{Lyric, Outcome, Scoreboard, Seat};
use crate::players::{Bot, Human, Participant};
use rand::Rng;
use tracing::{debug, info, warn};

/// Where the game is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Toss,
    Turn(Seat),
    Over,
}

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub seat: Seat,
    /// Letter required when the turn started
    pub required: Option<char>,
    pub passed: bool,
    pub lyric: Lyric,
}

impl TurnRecord {
    #[inline]
    #[must_use]
    pub const fn chain_letter(&self) -> char {
        self.lyric.last_letter()
    }
}

/// A single game session
pub struct Game {
    seats: [Box<dyn Participant>; 2],
    phase: Phase,
    required: Option<char>,
    scoreboard: Scoreboard,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Seat `human` at 0 and `bot` at 1, waiting for the toss
    #[must_use]
    pub fn new(human: Box<dyn Participant>, bot: Box<dyn Participant>) -> Self {
        Self {
            seats: [human, bot],
            phase: Phase::Toss,
            required: None,
            scoreboard: Scoreboard::default(),
            history: Vec::new(),
        }
    }

    /// Deal `corpus` between an interactive [`Human`] and the [`Bot`]
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCorpus` if the corpus can't give both seats a lyric.
    pub fn deal<R: Rng + ?Sized>(
        corpus: Vec<Lyric>,
        human_name: &str,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let (human, bot) = deal_lyrics(corpus, rng)?;
        Ok(Self::new(
            Box::new(Human::new(human, human_name)),
            Box::new(Bot::new(bot)),
        ))
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &dyn Participant {
        self.seats[seat.index()].as_ref()
    }

    fn participant_mut(&mut self, seat: Seat) -> &mut dyn Participant {
        self.seats[seat.index()].as_mut()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Letter the next singer must start with; `None` means anything goes
    #[must_use]
    pub const fn required(&self) -> Option<char> {
        self.required
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.scoreboard.get(seat)
    }

    #[must_use]
    pub const fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Final result, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        (self.phase == Phase::Over).then(|| self.scoreboard().outcome())
    }

    fn someone_is_out(&self) -> bool {
        self.seats.iter().any(|seat| !seat.has_lyrics())
    }

    /// Skip the toss and hand the first turn to `first`
    ///
    /// Does nothing once the game has started.
    pub fn begin(&mut self, first: Seat) {
        if self.phase != Phase::Toss {
            return;
        }
        self.phase = if self.someone_is_out() {
            Phase::Over
        } else {
            Phase::Turn(first)
        };
        info!(first = %first, "game started");
    }

    /// Toss the coin against the human's `call`
    ///
    /// A matching call lets the human sing first; a missing or wrong call hands the
    /// first turn to the bot. Returns the coin and who starts.
    pub fn toss<R: Rng + ?Sized>(&mut self, call: Option<Coin>, rng: &mut R) -> (Coin, Seat) {
        let coin = Coin::flip(rng);
        let first = if call == Some(coin) {
            Seat::Human
        } else {
            Seat::Bot
        };
        debug!(call = ?call, coin = %coin, "coin tossed");
        self.begin(first);
        (coin, first)
    }

    /// Play the current participant's turn and apply its consequences
    ///
    /// A pass gives the other seat one point once the turn is over. When the human
    /// passed, the letter they couldn't answer also goes into the bot's ledger.
    ///
    /// # Errors
    ///
    /// `NotStarted` before the toss, `GameOver` after the end, `EmptyInventory` if
    /// the current seat has nothing left, plus any input error from the turn itself.
    pub fn play_turn(&mut self, console: &mut dyn Console) -> Result<TurnRecord, GameError> {
        let seat = match self.phase {
            Phase::Toss => return Err(GameError::NotStarted),
            Phase::Over => return Err(GameError::GameOver),
            Phase::Turn(seat) => seat,
        };

        let required = self.required;
        let player = self.participant_mut(seat);
        if !player.has_lyrics() {
            return Err(GameError::EmptyInventory {
                name: player.name().to_string(),
            });
        }
        let turn = player.play(required, console)?;

        let next = seat.other();
        if turn.passed {
            if next == Seat::Bot
                && let Some(letter) = required
            {
                self.participant_mut(Seat::Bot).record_opponent_pass(letter);
            }
            self.scoreboard.award(next);
        }

        self.required = Some(turn.chain_letter());
        let record = TurnRecord {
            seat,
            required,
            passed: turn.passed,
            lyric: turn.lyric,
        };
        debug!(
            turn = self.history.len() + 1,
            seat = %seat,
            required = ?required,
            passed = record.passed,
            chain = %record.chain_letter(),
            "turn complete"
        );
        self.history.push(record.clone());

        self.phase = if self.someone_is_out() {
            Phase::Over
        } else {
            Phase::Turn(next)
        };

        Ok(record)
    }

    /// Run the game to the end, tossing first if needed
    ///
    /// The toss call is read from `console`. Returns the final scoreboard.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error from a turn, or `InputClosed` if the toss call
    /// never arrives.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        console: &mut dyn Console,
        rng: &mut R,
    ) -> Result<Scoreboard, GameError> {
        if self.phase == Phase::Toss {
            console.announce(&Event::TossCall {
                name: self.participant(Seat::Human).name().to_string(),
            });
            let raw = console.read_line()?.ok_or(GameError::InputClosed)?;
            let call = Coin::parse(&raw);
            if call.is_none() {
                warn!(call = raw.as_str(), "unrecognised toss call, it loses");
            }
            let (coin, first) = self.toss(call, rng);
            console.announce(&Event::TossResult { call, coin, first });
        }

        while self.phase != Phase::Over {
            self.play_turn(console)?;
        }

        let scoreboard = self.scoreboard();
        info!(
            human = scoreboard.human,
            bot = scoreboard.bot,
            turns = self.history.len(),
            "game over"
        );
        console.announce(&Event::GameOver {
            human: self.participant(Seat::Human).name().to_string(),
            bot: self.participant(Seat::Bot).name().to_string(),
            scoreboard,
        });
        Ok(scoreboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Scripted, Silent};
    use crate::players::NaiveSinger;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lyrics(texts: &[&str]) -> Vec<Lyric> {
        texts.iter().map(|t| Lyric::new(*t).unwrap()).collect()
    }

    fn game(human: &[&str], bot: &[&str], inputs: &[&str]) -> (Game, Scripted) {
        let game = Game::new(
            Box::new(Human::new(lyrics(human), "anil")),
            Box::new(Bot::new(lyrics(bot))),
        );
        (game, Scripted::new(inputs.iter().copied()))
    }

    #[test]
    fn four_lyric_chain_ends_in_tie() {
        let (mut game, mut console) = game(
            &["Apple ends E", "Owl ends L"],
            &["Echo ends O", "Lion ends N"],
            &["1", "1"],
        );
        game.begin(Seat::Human);

        while game.phase() != Phase::Over {
            game.play_turn(&mut console).unwrap();
        }

        // The human runs out after "Owl ends L", which ends the game
        let sung: Vec<&str> = game.history().iter().map(|r| r.lyric.text()).collect();
        assert_eq!(sung, ["Apple ends E", "Echo ends O", "Owl ends L"]);
        let required: Vec<Option<char>> = game.history().iter().map(|r| r.required).collect();
        assert_eq!(required, [None, Some('e'), Some('o')]);
        assert_eq!(game.required(), Some('l'));
        assert_eq!(game.scoreboard(), Scoreboard::new(0, 0));
        assert_eq!(game.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn human_pass_scores_for_bot_and_feeds_ledger() {
        let (mut game, mut console) =
            game(&["Apple ends E", "Bell"], &["Eagle", "Oak"], &["-1", "1"]);
        game.begin(Seat::Human);
        game.required = Some('Z');

        let record = game.play_turn(&mut console).unwrap();

        assert!(record.passed);
        assert_eq!(record.required, Some('Z'));
        assert_eq!(record.lyric.text(), "Apple ends E");
        assert_eq!(game.scoreboard(), Scoreboard::new(0, 1));
        assert_eq!(game.score(Seat::Bot), 1);
        assert_eq!(game.participant(Seat::Bot).opponent_losses(), ['z']);
        assert_eq!(game.phase(), Phase::Turn(Seat::Bot));
        assert_eq!(game.required(), Some('e'));
    }

    #[test]
    fn ledger_letter_is_preferred_later() {
        let (mut game, mut console) = game(
            &["Quiet", "Tree", "Apple"],
            &["Emerald", "Eraz", "Yarn"],
            &["-1", "1"],
        );
        game.begin(Seat::Human);
        game.required = Some('z');

        // Human can't answer 'z', passes and sings "Apple"
        let record = game.play_turn(&mut console).unwrap();
        assert!(record.passed);
        assert_eq!(game.scoreboard(), Scoreboard::new(0, 1));

        // "Emerald" comes first, but "Eraz" ends on the letter the human missed
        let record = game.play_turn(&mut console).unwrap();
        assert_eq!(record.lyric.text(), "Eraz");
        assert!(!record.passed);
        assert_eq!(game.required(), Some('z'));
        assert_eq!(game.scoreboard(), Scoreboard::new(0, 1));
    }

    #[test]
    fn bot_pass_scores_for_human_without_ledger() {
        let (mut game, mut console) = game(&["Apple", "Quill"], &["Lion ends N", "Tulip"], &[]);
        game.begin(Seat::Bot);
        game.required = Some('x');

        let record = game.play_turn(&mut console).unwrap();

        assert!(record.passed);
        assert_eq!(record.lyric.text(), "Lion ends N");
        assert_eq!(game.scoreboard(), Scoreboard::new(1, 0));
        assert!(game.participant(Seat::Bot).opponent_losses().is_empty());
        assert_eq!(game.required(), Some('n'));
    }

    #[test]
    fn human_pass_when_unconstrained_leaves_ledger_alone() {
        let (mut game, mut console) = game(&["Apple", "Bell"], &["Eagle", "Emu"], &["-1", "1"]);
        game.begin(Seat::Human);

        let record = game.play_turn(&mut console).unwrap();

        assert!(record.passed);
        assert_eq!(record.required, None);
        assert_eq!(game.scoreboard(), Scoreboard::new(0, 1));
        assert!(game.participant(Seat::Bot).opponent_losses().is_empty());
    }

    #[test]
    fn turns_before_toss_are_rejected() {
        let (mut game, mut console) = game(&["Apple"], &["Echo"], &[]);
        assert!(matches!(
            game.play_turn(&mut console),
            Err(GameError::NotStarted)
        ));
    }

    #[test]
    fn turns_after_game_over_are_rejected() {
        let (mut game, mut console) = game(&["Apple ends E"], &["Echo", "Owl"], &["1"]);
        game.begin(Seat::Human);

        game.play_turn(&mut console).unwrap();

        assert_eq!(game.phase(), Phase::Over);
        assert!(matches!(
            game.play_turn(&mut console),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn begin_only_applies_once() {
        let (mut game, _) = game(&["Apple"], &["Echo"], &[]);
        game.begin(Seat::Bot);
        game.begin(Seat::Human);
        assert_eq!(game.phase(), Phase::Turn(Seat::Bot));
    }

    #[test]
    fn toss_picks_human_on_matching_call() {
        for seed in 0..10 {
            let (mut game, _) = game(&["Apple"], &["Echo"], &[]);
            let coin = Coin::flip(&mut StdRng::seed_from_u64(seed));

            let (tossed, first) = game.toss(Some(coin), &mut StdRng::seed_from_u64(seed));

            assert_eq!(tossed, coin);
            assert_eq!(first, Seat::Human);
            assert_eq!(game.phase(), Phase::Turn(Seat::Human));
        }
    }

    #[test]
    fn toss_without_call_goes_to_bot() {
        let (mut game, _) = game(&["Apple"], &["Echo"], &[]);
        let (_, first) = game.toss(None, &mut StdRng::seed_from_u64(1));
        assert_eq!(first, Seat::Bot);
    }

    #[test]
    fn run_reads_call_and_reports_both_scores() {
        let coin = Coin::flip(&mut StdRng::seed_from_u64(4));
        let call = coin.to_string();
        let (mut game, mut console) = game(
            &["Apple ends E", "Owl ends L"],
            &["Echo ends O", "Lion ends N"],
            &[call.as_str(), "1", "1"],
        );

        let scoreboard = game
            .run(&mut console, &mut StdRng::seed_from_u64(4))
            .unwrap();

        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(scoreboard, Scoreboard::new(0, 0));
        assert_eq!(console.remaining_inputs(), 0);
        assert!(matches!(console.events().first(), Some(Event::TossCall { .. })));
        assert_eq!(
            console.events()[1],
            Event::TossResult {
                call: Some(coin),
                coin,
                first: Seat::Human,
            }
        );
        assert!(matches!(
            console.events().last(),
            Some(Event::GameOver { scoreboard: s, .. }) if *s == scoreboard
        ));
    }

    #[test]
    fn run_without_toss_call_fails() {
        let (mut game, mut console) = game(&["Apple"], &["Echo"], &[]);
        let result = game.run(&mut console, &mut StdRng::seed_from_u64(4));
        assert!(matches!(result, Err(GameError::InputClosed)));
    }

    #[test]
    fn dealt_game_keeps_every_lyric() {
        let corpus = lyrics(&["Apple", "Echo", "Owl", "Lion", "Night", "Tide", "Eve"]);
        let game = Game::deal(corpus.clone(), "anil", &mut StdRng::seed_from_u64(8)).unwrap();

        let mut dealt: Vec<Lyric> = Seat::ALL
            .iter()
            .flat_map(|&seat| game.participant(seat).inventory().iter().cloned())
            .collect();
        dealt.sort();
        let mut expected = corpus;
        expected.sort();
        assert_eq!(dealt, expected);
        assert_eq!(game.participant(Seat::Human).name(), "Anil");
        assert_eq!(game.phase(), Phase::Toss);
    }

    #[test]
    fn automated_games_terminate_with_consistent_chain() {
        let corpus = lyrics(&[
            "Apple ends E",
            "Echo ends O",
            "Owl ends L",
            "Lion ends N",
            "Night falls T",
            "Tide turns E",
            "Eve is here",
            "Ocean blue",
            "Lanterns glow",
            "Nova",
            "Zenith",
            "Quartz",
        ]);
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (human, bot) = deal_lyrics(corpus.clone(), &mut rng).unwrap();
            let dealt = [human.clone(), bot.clone()];
            let mut game = Game::new(
                Box::new(NaiveSinger::new(human, seed)),
                Box::new(Bot::new(bot)),
            );
            let call = Coin::flip(&mut rng);
            game.toss(Some(call), &mut rng);

            let scoreboard = game.run(&mut Silent, &mut rng).unwrap();

            let history = game.history();
            assert!(history.len() <= corpus.len());
            for pair in history.windows(2) {
                assert_eq!(pair[1].required, Some(pair[0].chain_letter()));
                assert_ne!(pair[0].seat, pair[1].seat);
            }
            for record in history.iter().filter(|r| !r.passed) {
                assert!(record.lyric.starts_with_letter(record.required));
            }
            let passes = |seat: Seat| {
                history
                    .iter()
                    .filter(|r| r.passed && r.seat == seat)
                    .count()
            };
            assert_eq!(scoreboard.human as usize, passes(Seat::Bot));
            assert_eq!(scoreboard.bot as usize, passes(Seat::Human));
            assert!(Seat::ALL.iter().any(|&s| !game.participant(s).has_lyrics()));

            // What is left is still in dealt order, minus what was sung
            for seat in Seat::ALL {
                let mut initial = dealt[seat.index()].clone();
                initial.sort();
                let remaining = game.participant(seat).inventory().as_slice();
                let mut order = initial.iter();
                assert!(remaining.iter().all(|lyric| order.any(|l| l == lyric)));
                let sung = history.iter().filter(|r| r.seat == seat).count();
                assert_eq!(remaining.len() + sung, initial.len());
            }
        }
    }
}
