//! The game's state machine: which screen is up, and how the current game is going.

use tracing::{debug, info};

use crate::{
    code::{self, Code, Guess, PegColor, Score, EMPTY_GUESS},
    constants::gameplay::{CODE_LENGTH, NB_TRIALS},
};

/// Which screen is showing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Screen {
    /// The title screen, with buttons for a new game and quitting.
    #[default]
    Home,
    /// How to play, with a button to start.
    Rules,
    /// The board, mid-game.
    Play,
    /// The board, with the "game over" banner on top.
    GameLost,
    /// The board, with the victory banner on top.
    GameWon,
}

/// One finished trial, as it's shown on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrialRow {
    pub guess: Code,
    pub score: Score,
}

/// What confirming a guess led to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Not right, but there are trials left.
    Next(Score),
    /// That was the secret.
    Won,
    /// Not right, and that was the last trial.
    Lost(Score),
}

/// Everything about the game that isn't how it looks.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    screen: Screen,
    secret: Option<Code>,
    guess: Guess,
    trial: usize,
    board: Vec<TrialRow>,
}

impl GameState {
    /// A fresh state, on the home screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The secret, if a game is in progress or just finished.
    pub fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    /// The guess being put together for the current trial.
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Which trial the player is on, starting from 0.
    pub fn trial(&self) -> usize {
        self.trial
    }

    /// Every trial finished so far this game, oldest first.
    pub fn board(&self) -> &[TrialRow] {
        &self.board
    }

    fn reset_game(&mut self) {
        self.guess = EMPTY_GUESS;
        self.trial = 0;
    }

    /// Show the rules. Any game in progress is abandoned.
    pub fn open_rules(&mut self) {
        debug!(from = ?self.screen, "opening rules");
        self.screen = Screen::Rules;
        self.secret = None;
        self.board.clear();
        self.reset_game();
    }

    /// Start a new game, trying to guess `secret`.
    pub fn start_game(&mut self, secret: Code) {
        debug!(from = ?self.screen, "starting game");
        self.screen = Screen::Play;
        self.secret = Some(secret);
        self.board.clear();
        self.reset_game();
    }

    /// Move the guess peg at `index` on to its next color. An unset peg becomes the first color.
    ///
    /// Does nothing unless a game is being played.
    pub fn cycle_peg(&mut self, index: usize) {
        if self.screen != Screen::Play || index >= CODE_LENGTH {
            return;
        }
        let peg = &mut self.guess[index];
        *peg = Some(peg.map_or(PegColor::FIRST, PegColor::next));
        debug!(index, color = ?peg.map(PegColor::index), "cycled peg");
    }

    /// Submit the current guess.
    ///
    /// Returns `None`, and changes nothing, if no game is being played or the guess still has unset pegs.
    /// Otherwise the guess is scored and recorded on the board, and the guess is cleared for the next trial.
    pub fn confirm(&mut self) -> Option<Outcome> {
        if self.screen != Screen::Play {
            return None;
        }
        let secret = self.secret?;
        let guess = code::complete(&self.guess)?;
        let score = code::score(&secret, &guess);
        self.board.push(TrialRow { guess, score });
        self.guess = EMPTY_GUESS;

        let outcome = if score.is_solved() {
            Outcome::Won
        } else if self.trial == NB_TRIALS - 1 {
            Outcome::Lost(score)
        } else {
            Outcome::Next(score)
        };
        match outcome {
            Outcome::Next(score) => {
                debug!(trial = self.trial, exact = score.exact, partial = score.partial, "scored guess");
                self.trial += 1;
            }
            Outcome::Won => {
                info!(trials = self.trial + 1, "code broken");
                self.screen = Screen::GameWon;
                self.reset_game();
            }
            Outcome::Lost(_) => {
                info!(secret = ?secret.map(PegColor::index), "out of trials");
                self.screen = Screen::GameLost;
                self.reset_game();
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn code(indices: [usize; CODE_LENGTH]) -> Code {
        indices.map(|i| PegColor::new(i).unwrap())
    }

    /// Click each peg enough times to land on the given colors.
    fn enter(state: &mut GameState, indices: [usize; CODE_LENGTH]) {
        for (index, color) in indices.into_iter().enumerate() {
            while state.guess()[index].map(PegColor::index) != Some(color) {
                state.cycle_peg(index);
            }
        }
    }

    fn playing(secret: [usize; CODE_LENGTH]) -> GameState {
        let mut state = GameState::new();
        state.open_rules();
        state.start_game(code(secret));
        state
    }

    #[test]
    fn starts_at_home() {
        let state = GameState::new();
        assert_eq!(state.screen(), Screen::Home);
        assert_eq!(state.trial(), 0);
        assert_eq!(state.secret(), None);
        assert_eq!(state.guess(), &EMPTY_GUESS);
    }

    #[test]
    fn pegs_cycle_through_every_color() {
        let mut state = playing([0, 0, 0, 0]);
        let mut seen = vec![];
        for _ in 0..5 {
            state.cycle_peg(1);
            seen.push(state.guess()[1].map(PegColor::index));
        }
        assert_eq!(seen, [Some(0), Some(1), Some(2), Some(3), Some(0)]);
        assert_eq!(state.guess()[0], None, "cycled the wrong peg");
    }

    #[test]
    fn pegs_only_cycle_while_playing() {
        let mut state = GameState::new();
        state.cycle_peg(0);
        assert_eq!(state.guess(), &EMPTY_GUESS);
    }

    #[test]
    fn incomplete_guess_is_ignored() {
        let mut state = playing([0, 1, 2, 3]);
        state.cycle_peg(0);
        state.cycle_peg(1);
        state.cycle_peg(3);
        let before = *state.guess();
        assert_eq!(state.confirm(), None);
        assert_eq!(state.trial(), 0);
        assert_eq!(state.guess(), &before);
        assert!(state.board().is_empty());
    }

    #[test]
    fn trials_count_up_to_a_loss() {
        let mut state = playing([0, 0, 0, 0]);
        for trial in 0..NB_TRIALS - 1 {
            assert_eq!(state.trial(), trial);
            enter(&mut state, [1, 1, 0, 1]);
            let expected = Score { exact: 1, partial: 0 };
            assert_eq!(state.confirm(), Some(Outcome::Next(expected)));
            assert_eq!(state.guess(), &EMPTY_GUESS, "guess wasn't cleared");
            assert_eq!(state.board().len(), state.trial());
        }
        assert_eq!(state.trial(), NB_TRIALS - 1);
        enter(&mut state, [1, 1, 1, 1]);
        assert!(matches!(state.confirm(), Some(Outcome::Lost(_))));
        assert_eq!(state.screen(), Screen::GameLost);
        assert_eq!(state.trial(), 0);
        assert_eq!(state.board().len(), NB_TRIALS);
        assert_eq!(state.confirm(), None, "confirmed after the game ended");
    }

    #[test]
    fn right_guess_wins() {
        let mut state = playing([3, 1, 0, 2]);
        enter(&mut state, [3, 1, 2, 0]);
        assert_eq!(state.confirm(), Some(Outcome::Next(Score { exact: 2, partial: 2 })));
        enter(&mut state, [3, 1, 0, 2]);
        assert_eq!(state.confirm(), Some(Outcome::Won));
        assert_eq!(state.screen(), Screen::GameWon);
        assert_eq!(state.guess(), &EMPTY_GUESS);
        assert!(state.board().last().unwrap().score.is_solved());
    }

    #[test]
    fn last_trial_can_still_win() {
        let mut state = playing([2, 2, 2, 2]);
        for _ in 0..NB_TRIALS - 1 {
            enter(&mut state, [0, 0, 0, 0]);
            state.confirm();
        }
        enter(&mut state, [2, 2, 2, 2]);
        assert_eq!(state.confirm(), Some(Outcome::Won));
    }

    #[test]
    fn new_games_start_clean() {
        let mut state = playing([0, 1, 2, 3]);
        enter(&mut state, [1, 1, 1, 1]);
        state.confirm();
        state.cycle_peg(2);

        state.open_rules();
        assert_eq!(state.screen(), Screen::Rules);
        assert_eq!(state.secret(), None);
        assert!(state.board().is_empty());

        state.start_game(code([3, 3, 3, 3]));
        assert_eq!(state.guess(), &EMPTY_GUESS);
        assert_eq!(state.trial(), 0);
        assert_eq!(state.secret(), Some(&code([3, 3, 3, 3])));
    }

    #[test]
    fn new_games_after_a_win_start_clean() {
        let mut state = playing([0, 1, 2, 3]);
        enter(&mut state, [0, 1, 2, 3]);
        state.confirm();
        state.open_rules();
        state.start_game(code([1, 1, 1, 1]));
        assert_eq!(state.screen(), Screen::Play);
        assert_eq!(state.guess(), &EMPTY_GUESS);
        assert_eq!(state.trial(), 0);
        assert!(state.board().is_empty());
    }
}
