//! Various constants, for use in various places. Mostly for rendering, but there are a few for the rules.

/// Constants with gameplay implications.
pub mod gameplay {
    /// How many guesses the player gets before the game is lost.
    pub const NB_TRIALS: usize = 10;
    /// How many pegs are in the secret, and in each guess.
    pub const CODE_LENGTH: usize = 4;
    /// How many distinct peg colors there are.
    pub const NB_COLORS: usize = 4;
}

/// Constants specifically relating to how things render.
pub mod graphics {
    use mastermind_iosys::{Rgb, XY};

    pub const WINDOW_TITLE: &str = "Mastermind";
    pub const WINDOW_SIZE: XY = XY(640, 640);

    /// Space between neighboring pegs.
    pub const PADDING: i32 = 5;
    /// Space between the board and the window edge, and between the two panes.
    pub const MARGIN: i32 = 25;
    pub const CIRCLE_RADIUS: i32 = 10;

    pub const BUTTON_WIDTH: u32 = 200;
    pub const BUTTON_HEIGHT: u32 = 50;
    pub const RULES_WIDTH: u32 = 500;
    pub const BANNER_SIZE: u32 = 400;

    /// Each swatch in the colors sheet is this many pixels square.
    pub const SWATCH_SIZE: u32 = 100;
    /// Pixels of this color in the colors sheet are see-through.
    pub const SWATCH_KEY: Rgb = Rgb(0x00, 0xFF, 0xFF);

    pub const MENU_BACKGROUND: Rgb = Rgb::BLACK;
    pub const BOARD_BACKGROUND: Rgb = Rgb::grey(0x80);
    pub const CIRCLE_PERIMETER: Rgb = Rgb::grey(0xFF);
    /// Feedback peg for a right color in the right place.
    pub const ENTIRELY_CORRECT: Rgb = Rgb::grey(0xFF);
    /// Feedback peg for a right color in the wrong place.
    pub const MID_CORRECT: Rgb = Rgb::grey(0x00);
}

/// Where things are loaded from.
pub mod assets {
    pub const DEFAULT_DIR: &str = "./assets";
    /// Overrides [`DEFAULT_DIR`].
    pub const DIR_ENV: &str = "MASTERMIND_ASSETS";
}
