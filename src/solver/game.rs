//! The deduction loop
//!
//! A `Game` owns the secret, the guess history and the candidate space. Each
//! round it proposes a guess, scores it against the secret and drops every
//! candidate that would have scored differently.

use super::history::History;
use super::strategy::{FirstCandidate, Strategy};
use crate::core::{CandidateSpace, Code, ConfigError, GameConfig, Rules, Score};
use rand::Rng;
use tracing::{debug, error, info, instrument};

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// More than one candidate remains
    Active,
    /// One candidate remains but has not been guessed yet
    Solving,
    /// The secret has been guessed
    Solved,
}

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    #[display("Guess {_0} does not fit this game")]
    InvalidGuess(Code),

    #[display("No guess has been made yet")]
    NoGuess,

    #[display("Strategy returned no guess")]
    NoCandidate,

    #[display("The secret has already been guessed")]
    AlreadySolved,

    #[display("Invariant violation: no candidate is consistent with {guess} scoring {score}")]
    InvariantViolation { guess: Code, score: Score },
}

impl std::error::Error for GameError {}

/// A single Mastermind game from the codebreaker's side
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameConfig};
/// use mastermind_solver::solver::Game;
///
/// let config = GameConfig::default().with_secret(Code::parse("1335").unwrap());
/// let mut game = Game::new(&config, &mut rand::rng()).unwrap();
///
/// let guesses = game.play().unwrap();
/// assert_eq!(guesses, game.history().len());
/// assert_eq!(game.history().last().unwrap().guess(), game.secret());
/// ```
pub struct Game<S = FirstCandidate> {
    rules: Rules,
    secret: Code,
    history: History,
    candidates: CandidateSpace,
    strategy: S,
}

impl Game {
    /// Create a game that always guesses the first remaining candidate
    ///
    /// `rng` is only used when the configuration has no explicit secret.
    ///
    /// # Errors
    /// Returns `ConfigError` if the opening or secret does not fit the rules.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        Self::with_strategy(config, FirstCandidate, rng)
    }
}

impl<S: Strategy> Game<S> {
    /// Create a game using `strategy` to pick guesses after the opening
    ///
    /// # Errors
    /// Returns `ConfigError` if the opening or secret does not fit the rules.
    #[instrument(skip_all, fields(base = config.rules.base(), pegs = config.rules.pegs()))]
    pub fn with_strategy(
        config: &GameConfig,
        strategy: S,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let opening = config.resolve_opening()?;
        let candidates = CandidateSpace::new(&config.rules, &opening)?;

        let secret = match &config.secret {
            Some(secret) => secret.clone(),
            None => {
                // Valid rules never produce an empty space
                let index = rng.random_range(0..candidates.len());
                candidates.codes()[index].clone()
            }
        };

        debug!(candidates = candidates.len(), %opening, "game created");

        Ok(Self {
            rules: config.rules,
            secret,
            history: History::default(),
            candidates,
            strategy,
        })
    }

    /// Score `code` against the secret and append it to the history
    ///
    /// The candidate space is left untouched until `reduce` is called.
    ///
    /// # Errors
    /// Returns `GameError::AlreadySolved` once the secret has been guessed, and
    /// `GameError::InvalidGuess` if `code` has the wrong length or uses symbols
    /// outside the alphabet.
    pub fn guess(&mut self, code: &Code) -> Result<Score, GameError> {
        if self.state() == GameState::Solved {
            return Err(GameError::AlreadySolved);
        }

        let fits = code.pegs() == self.rules.pegs()
            && code.symbols().iter().all(|&s| usize::from(s) < self.rules.base());
        if !fits {
            return Err(GameError::InvalidGuess(code.clone()));
        }

        let score = Score::calculate(code, &self.secret);
        self.history.record(code.clone(), score);

        debug!(round = self.history.len(), guess = %code, %score, "guess scored");
        Ok(score)
    }

    /// Drop every candidate inconsistent with the most recent round
    ///
    /// Returns the new candidate count, which is never larger than before.
    ///
    /// # Errors
    /// Returns `GameError::NoGuess` before the first guess, and
    /// `GameError::InvariantViolation` if no candidate survives. A failed
    /// reduce leaves the candidate space as it was.
    pub fn reduce(&mut self) -> Result<usize, GameError> {
        let round = self.history.last().ok_or(GameError::NoGuess)?;

        let before = self.candidates.len();
        let Some(after) = self
            .candidates
            .try_retain_consistent(round.guess(), round.score())
        else {
            error!(guess = %round.guess(), score = %round.score(), "no candidate survives");
            return Err(GameError::InvariantViolation {
                guess: round.guess().clone(),
                score: round.score(),
            });
        };

        debug!(before, after, "reduced candidates");
        Ok(after)
    }

    /// The guess the loop would play next
    ///
    /// The opening is always played first; after that the strategy picks from
    /// the remaining candidates.
    #[must_use]
    pub fn next_guess(&self) -> Option<&Code> {
        if self.history.is_empty() || self.candidates.len() == 1 {
            self.candidates.first()
        } else {
            self.strategy.select_guess(self.candidates.codes())
        }
    }

    /// Play until the secret has been guessed
    ///
    /// Returns the total number of guesses, including any made before the
    /// call.
    ///
    /// # Errors
    /// Propagates `GameError::InvariantViolation` from `reduce`, and returns
    /// `GameError::NoCandidate` if the strategy yields no guess.
    pub fn play(&mut self) -> Result<usize, GameError> {
        while self.state() != GameState::Solved {
            let guess = self.next_guess().cloned().ok_or(GameError::NoCandidate)?;
            self.guess(&guess)?;
            self.reduce()?;
        }

        info!(guesses = self.history.len(), secret = %self.secret, "solved");
        Ok(self.history.len())
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        let solved = self
            .history
            .last()
            .is_some_and(|round| round.score().is_perfect(self.rules.pegs()));

        if solved {
            GameState::Solved
        } else if self.candidates.len() == 1 {
            GameState::Solving
        } else {
            GameState::Active
        }
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Current size of the candidate space
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSpace {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::MinimaxStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    fn game_with_secret(rules: Rules, secret: &str) -> Game {
        let config = GameConfig::new(rules).with_secret(code(secret));
        Game::new(&config, &mut StdRng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn classic_opening_scores_and_reduces() {
        let mut game = game_with_secret(Rules::default(), "1335");
        assert_eq!(game.candidate_count(), 1296);
        assert_eq!(game.next_guess(), Some(&code("1122")));

        let score = game.guess(&code("1122")).unwrap();
        assert_eq!(score, Score::new(1, 0));
        // Guessing alone leaves the space untouched
        assert_eq!(game.candidate_count(), 1296);

        let remaining = game.reduce().unwrap();
        assert!(remaining < 1296);
        assert!(game.candidates().contains(&code("1335")));
        assert!(game.candidates().codes().iter().all(|c| {
            Score::calculate(c, &code("1122")) == Score::new(1, 0)
        }));
    }

    #[test]
    fn two_by_two_game_takes_two_guesses() {
        let rules = Rules::new(2, 2, false).unwrap();
        let mut game = game_with_secret(rules, "01");
        assert_eq!(game.next_guess(), Some(&code("00")));

        assert_eq!(game.guess(&code("00")).unwrap(), Score::new(1, 0));
        assert_eq!(game.reduce().unwrap(), 2);
        assert_eq!(game.candidates().codes(), &[code("01"), code("10")]);
        assert_eq!(game.state(), GameState::Active);

        assert_eq!(game.guess(&code("01")).unwrap(), Score::new(2, 0));
        assert_eq!(game.state(), GameState::Solved);

        let mut fresh = game_with_secret(rules, "01");
        assert_eq!(fresh.play().unwrap(), 2);
    }

    #[test]
    fn singleton_space_starts_solving() {
        let rules = Rules::new(1, 3, false).unwrap();
        let mut game = game_with_secret(rules, "000");
        assert_eq!(game.state(), GameState::Solving);
        assert_eq!(game.play().unwrap(), 1);
        assert_eq!(game.state(), GameState::Solved);
    }

    #[test]
    fn play_on_solved_game_is_idempotent() {
        let mut game = game_with_secret(Rules::default(), "1122");
        assert_eq!(game.play().unwrap(), 1);
        assert_eq!(game.play().unwrap(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn play_terminates_for_every_secret_in_small_spaces() {
        for base in 1..=3 {
            for pegs in 1..=3 {
                let rules = Rules::new(base, pegs, false).unwrap();
                let space = crate::core::generate(&rules, &rules.default_opening()).unwrap();

                for secret in &space {
                    let config = GameConfig::new(rules).with_secret(secret.clone());
                    let mut game = Game::new(&config, &mut StdRng::seed_from_u64(1)).unwrap();

                    let guesses = game.play().unwrap();
                    assert!((1..=space.len()).contains(&guesses));
                    assert_eq!(game.history().last().unwrap().guess(), secret);
                    assert_eq!(game.candidates().codes(), std::slice::from_ref(secret));
                }
            }
        }
    }

    #[test]
    fn reduce_keeps_secret_and_never_grows() {
        let mut game = game_with_secret(Rules::default(), "4031");

        while game.state() != GameState::Solved {
            let before = game.candidate_count();
            let guess = game.next_guess().cloned().unwrap();
            game.guess(&guess).unwrap();
            let after = game.reduce().unwrap();

            assert!(after <= before);
            assert!(game.candidates().contains(&code("4031")));
        }
    }

    #[test]
    fn minimax_game_solves_classic_secrets() {
        for secret in ["0000", "1335", "5432", "2211"] {
            let config = GameConfig::default().with_secret(code(secret));
            let mut game =
                Game::with_strategy(&config, MinimaxStrategy, &mut StdRng::seed_from_u64(2))
                    .unwrap();

            let guesses = game.play().unwrap();
            assert!(guesses <= 7, "{secret} took {guesses} guesses");
            assert_eq!(game.history().last().unwrap().guess(), &code(secret));
        }
    }

    #[test]
    fn random_secret_is_reproducible() {
        let config = GameConfig::default();
        let a = Game::new(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Game::new(&config, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.secret(), b.secret());
        assert!(Rules::default().contains(a.secret()));
    }

    #[test]
    fn distinct_rules_draw_distinct_secrets() {
        let config = GameConfig::new(Rules::new(6, 4, true).unwrap());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut game = Game::new(&config, &mut rng).unwrap();
            assert!(game.secret().has_distinct_symbols());
            assert_eq!(game.candidate_count(), 360);
            game.play().unwrap();
        }
    }

    #[test]
    fn construction_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(0);

        let config = GameConfig::default().with_secret(code("123"));
        assert_eq!(
            Game::new(&config, &mut rng).err(),
            Some(ConfigError::InvalidSecret(code("123")))
        );

        let config = GameConfig::default().with_opening(code("9999"));
        assert_eq!(
            Game::new(&config, &mut rng).err(),
            Some(ConfigError::InvalidOpening(code("9999")))
        );
    }

    #[test]
    fn guess_rejects_wrong_shape() {
        let mut game = game_with_secret(Rules::default(), "1335");
        assert_eq!(
            game.guess(&code("12")),
            Err(GameError::InvalidGuess(code("12")))
        );
        assert_eq!(
            game.guess(&code("1239")),
            Err(GameError::InvalidGuess(code("1239")))
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn guess_after_solving_is_rejected() {
        let mut game = game_with_secret(Rules::default(), "1335");
        let guesses = game.play().unwrap();

        assert_eq!(
            game.guess(&code("0000")),
            Err(GameError::AlreadySolved)
        );
        assert_eq!(game.state(), GameState::Solved);
        assert_eq!(game.history().len(), guesses);
        assert_eq!(game.play().unwrap(), guesses);
    }

    #[test]
    fn reduce_reports_inconsistent_secret_and_keeps_space() {
        let rules = Rules::new(2, 2, false).unwrap();
        let mut game = game_with_secret(rules, "01");
        game.guess(&code("00")).unwrap();
        assert_eq!(game.reduce().unwrap(), 2);

        // 01 against 11 scores (1, 0), which neither 01 nor 10 can produce
        game.secret = code("11");
        assert_eq!(game.guess(&code("01")).unwrap(), Score::new(1, 0));
        assert_eq!(
            game.reduce(),
            Err(GameError::InvariantViolation {
                guess: code("01"),
                score: Score::new(1, 0),
            })
        );
        assert_eq!(game.candidates().codes(), &[code("01"), code("10")]);
    }

    #[test]
    fn reduce_before_guess_fails() {
        let mut game = game_with_secret(Rules::default(), "1335");
        assert_eq!(game.reduce(), Err(GameError::NoGuess));
    }

    #[test]
    fn external_guesses_still_converge() {
        let mut game = game_with_secret(Rules::default(), "2345");

        // A guess that is not the opening and not a candidate afterwards
        game.guess(&code("5555")).unwrap();
        game.reduce().unwrap();
        assert!(game.candidates().contains(&code("2345")));

        let total = game.play().unwrap();
        assert!(total >= 2);
        assert_eq!(game.history().as_slice()[0].guess(), &code("5555"));
    }
}
