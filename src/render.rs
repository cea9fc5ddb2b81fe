//! Draws whatever screen the [`GameState`] is on.
//!
//! Rendering is a pure function of the state: nothing is drawn incrementally, so a frame can be thrown away and
//! rebuilt at any time (e.g. when the window is uncovered) and come out identical.

use mastermind_iosys::Frame;

use crate::{
    assets::Textures,
    code::PegColor,
    constants::{
        gameplay::{CODE_LENGTH, NB_TRIALS},
        graphics::{
            BOARD_BACKGROUND, CIRCLE_PERIMETER, CIRCLE_RADIUS, ENTIRELY_CORRECT, MENU_BACKGROUND, MID_CORRECT,
        },
    },
    geometry::{draw_filled, draw_outline},
    layout::Layout,
    state::{GameState, Screen},
};

/// Draw the current screen onto `frame`, replacing whatever was there.
pub fn render(frame: &mut Frame, state: &GameState, layout: &Layout, textures: &Textures) {
    match state.screen() {
        Screen::Home => {
            frame.clear(MENU_BACKGROUND);
            frame.blit(&textures.new_game, None, layout.top_button());
            frame.blit(&textures.exit, None, layout.bottom_button());
        }
        Screen::Rules => {
            frame.clear(MENU_BACKGROUND);
            frame.blit(&textures.rules, None, layout.rules());
            frame.blit(&textures.load_game, None, layout.bottom_button());
        }
        Screen::Play => board(frame, state, layout, textures),
        Screen::GameLost => {
            board(frame, state, layout, textures);
            frame.blit(&textures.game_over, None, layout.banner());
        }
        Screen::GameWon => {
            board(frame, state, layout, textures);
            frame.blit(&textures.win, None, layout.banner());
        }
    }
}

fn peg(frame: &mut Frame, layout: &Layout, textures: &Textures, row: usize, index: usize, color: PegColor) {
    let dst = layout.peg_rect(row, Layout::slot_of(index));
    frame.blit(&textures.colors, Some(Layout::swatch(color.index())), dst);
}

fn board(frame: &mut Frame, state: &GameState, layout: &Layout, textures: &Textures) {
    frame.clear(BOARD_BACKGROUND);

    for row in 0..NB_TRIALS {
        for slot in 0..CODE_LENGTH {
            let (x, y) = layout.peg_center(row, slot);
            draw_outline(frame, x, y, CIRCLE_RADIUS, CIRCLE_PERIMETER);
            let (x, y) = layout.feedback_center(row, slot);
            draw_outline(frame, x, y, CIRCLE_RADIUS, CIRCLE_PERIMETER);
        }
    }

    for (trial, past) in state.board().iter().enumerate() {
        let row = Layout::row_of(trial);
        for (index, &color) in past.guess.iter().enumerate() {
            peg(frame, layout, textures, row, index, color);
        }
        // a solved row is covered by the victory banner; it gets no feedback
        if past.score.is_solved() {
            continue;
        }
        let feedback = std::iter::repeat(ENTIRELY_CORRECT)
            .take(past.score.exact)
            .chain(std::iter::repeat(MID_CORRECT).take(past.score.partial));
        for (i, color) in feedback.enumerate() {
            let (x, y) = layout.feedback_center(row, i);
            draw_filled(frame, x, y, CIRCLE_RADIUS, color);
        }
    }

    if state.screen() == Screen::Play {
        let row = Layout::row_of(state.trial());
        for (index, color) in state.guess().iter().enumerate() {
            if let Some(color) = *color {
                peg(frame, layout, textures, row, index, color);
            }
        }
    }

    frame.blit(&textures.new_game, None, layout.bottom_button());
}
