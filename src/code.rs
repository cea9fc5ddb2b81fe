//! Secret codes: making them, and scoring guesses against them.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::gameplay::{CODE_LENGTH, NB_COLORS};

/// One of the [`NB_COLORS`] peg colors, identified by its index into the colors sheet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PegColor(u8);

impl PegColor {
    /// The color with this index, if there is one.
    pub const fn new(index: usize) -> Option<Self> {
        if index < NB_COLORS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The color after this one, wrapping around to the first.
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % NB_COLORS as u8)
    }

    /// The first color, which an unset peg becomes when clicked.
    pub const FIRST: PegColor = PegColor(0);
}

impl fmt::Display for PegColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete sequence of pegs: a secret, or a guess that's ready to be checked.
pub type Code = [PegColor; CODE_LENGTH];

/// The guess being built. `None` is a peg the player hasn't picked a color for yet.
pub type Guess = [Option<PegColor>; CODE_LENGTH];

/// A guess with every peg unset.
pub const EMPTY_GUESS: Guess = [None; CODE_LENGTH];

/// The guess as a [`Code`], if every peg has a color.
pub fn complete(guess: &Guess) -> Option<Code> {
    let mut res = [PegColor::FIRST; CODE_LENGTH];
    for (slot, peg) in res.iter_mut().zip(guess) {
        *slot = (*peg)?;
    }
    Some(res)
}

/// How close a guess came.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Score {
    /// Right color, right place.
    pub exact: usize,
    /// Right color, wrong place.
    pub partial: usize,
}

impl Score {
    /// Whether the guess was the secret.
    pub const fn is_solved(&self) -> bool {
        self.exact == CODE_LENGTH
    }
}

/// Score a guess the textbook way.
///
/// First every exact match is counted and taken out of play, on both sides. Then, among whatever's left, each guess
/// peg is matched to at most one secret peg of the same color. That makes the result independent of peg order:
/// shuffling both codes the same way gives the same score.
pub fn score<const N: usize>(secret: &[PegColor; N], guess: &[PegColor; N]) -> Score {
    let mut exact = 0;
    let mut secret_left = [0usize; NB_COLORS];
    let mut guess_left = [0usize; NB_COLORS];
    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            secret_left[s.index()] += 1;
            guess_left[g.index()] += 1;
        }
    }
    let partial = secret_left.iter().zip(&guess_left).map(|(s, g)| *s.min(g)).sum();
    Score { exact, partial }
}

/// Makes secret codes.
///
/// The generator is seeded once, when the maker is built, and every game draws from the same stream.
pub struct CodeMaker {
    rng: SmallRng,
}

impl CodeMaker {
    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::debug!(seed, "seeding code maker");
        Self::with_seed(seed)
    }

    /// Seed explicitly, e.g. for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// A fresh secret, each peg picked independently and uniformly.
    pub fn generate(&mut self) -> Code {
        let code = generate(&mut self.rng);
        tracing::debug!(secret = ?code.map(PegColor::index), "generated secret");
        code
    }
}

/// Fill `N` pegs independently and uniformly from all the colors.
pub fn generate<const N: usize>(rng: &mut impl Rng) -> [PegColor; N] {
    std::array::from_fn(|_| PegColor(rng.gen_range(0..NB_COLORS) as u8))
}

#[cfg(test)]
mod test {
    use super::*;

    fn code(indices: [usize; CODE_LENGTH]) -> Code {
        indices.map(|i| PegColor::new(i).unwrap())
    }

    macro_rules! scores {
        ( $( $name:ident: $secret:expr, $guess:expr => $exact:literal, $partial:literal );* $(;)? ) => { $(
            #[test]
            fn $name() {
                let res = score(&code($secret), &code($guess));
                assert_eq!(res, Score { exact: $exact, partial: $partial }, "{:?} vs {:?}", $secret, $guess);
            }
        )* };
    }

    scores! {
        swapped_pair: [0, 1, 2, 3], [1, 0, 2, 3] => 2, 2;
        repeated_secret_color: [0, 0, 1, 2], [0, 1, 0, 2] => 2, 2;
        identical: [3, 1, 1, 0], [3, 1, 1, 0] => 4, 0;
        nothing_in_common: [0, 0, 1, 1], [2, 3, 2, 3] => 0, 0;
        fully_rotated: [0, 1, 2, 3], [3, 0, 1, 2] => 0, 4;
        exact_beats_partial: [0, 1, 2, 3], [1, 1, 1, 1] => 1, 0;
        extra_guess_copies_dont_count: [0, 2, 2, 2], [1, 0, 0, 0] => 0, 1;
        extra_secret_copies_dont_count: [1, 0, 0, 0], [0, 2, 2, 2] => 0, 1;
        single_color: [2, 2, 2, 2], [2, 2, 2, 2] => 4, 0;
    }

    #[test]
    fn solved_iff_equal() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let secret: Code = generate(&mut rng);
            let guess: Code = generate(&mut rng);
            let res = score(&secret, &guess);
            assert!(res.exact + res.partial <= CODE_LENGTH, "{:?} too high", res);
            assert_eq!(res.is_solved(), secret == guess, "{:?} vs {:?}", secret, guess);
            assert!(score(&secret, &secret).is_solved());
        }
    }

    #[test]
    fn same_permutation_same_score() {
        let perms = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..200 {
            let secret: Code = generate(&mut rng);
            let guess: Code = generate(&mut rng);
            let expected = score(&secret, &guess);
            for p in perms {
                let s2 = p.map(|i| secret[i]);
                let g2 = p.map(|i| guess[i]);
                assert_eq!(score(&s2, &g2), expected, "permutation {:?} changed the score", p);
            }
        }
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(PegColor::new(NB_COLORS), None);
        let last = PegColor::new(NB_COLORS - 1).unwrap();
        assert_eq!(last.next(), PegColor::FIRST);
        assert_eq!(PegColor::FIRST.next().index(), 1);
    }

    #[test]
    fn complete_needs_every_peg() {
        assert_eq!(complete(&EMPTY_GUESS), None);
        let mut guess = [Some(PegColor::FIRST); CODE_LENGTH];
        assert_eq!(complete(&guess), Some([PegColor::FIRST; CODE_LENGTH]));
        guess[2] = None;
        assert_eq!(complete(&guess), None);
    }

    #[test]
    fn makers_are_reproducible() {
        let mut a = CodeMaker::with_seed(42);
        let mut b = CodeMaker::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn generation_uses_every_color() {
        let mut maker = CodeMaker::with_seed(3);
        let mut seen = [false; NB_COLORS];
        for _ in 0..100 {
            for peg in maker.generate() {
                seen[peg.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some color never came up: {:?}", seen);
    }
}
