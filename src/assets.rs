//! The images the game is drawn with.

use std::path::{Path, PathBuf};

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use mastermind_iosys::{Sprite, XY};
use tracing::{debug, info, warn};

use crate::{
    constants::graphics::{SWATCH_KEY, SWATCH_SIZE},
    layout::Layout,
    Error, Result,
};

/// Every texture, decoded and ready to blit.
#[derive(Clone)]
pub struct Textures {
    pub exit: Sprite,
    pub new_game: Sprite,
    pub load_game: Sprite,
    pub game_over: Sprite,
    pub win: Sprite,
    pub rules: Sprite,
    /// A 2x2 sheet of peg colors. See [`Layout::swatch`].
    pub colors: Sprite,
}

impl Textures {
    /// Load everything from `dir`. Stops at the first image that can't be loaded.
    pub fn load(dir: &Path) -> Result<Self> {
        info!(dir = %dir.display(), "loading textures");
        let res = Self {
            exit: load(dir, "exit.png")?,
            new_game: load(dir, "new_game.png")?,
            load_game: load(dir, "load_game.png")?,
            game_over: load(dir, "game_over.png")?,
            win: load(dir, "win.png")?,
            rules: load(dir, "rules.png")?,
            colors: load(dir, "colors.png")?.with_color_key(SWATCH_KEY),
        };
        let sheet = Layout::swatch(3);
        if res.colors.size().x() < sheet.right() as usize || res.colors.size().y() < sheet.bottom() as usize {
            warn!(
                size = %res.colors.size(),
                "colors sheet is smaller than 2x2 swatches of {}px; some pegs will be blank",
                SWATCH_SIZE
            );
        }
        Ok(res)
    }
}

/// Flat-colored stand-ins for every texture, so tests can tell which one was drawn where.
#[cfg(test)]
pub(crate) mod plain {
    use mastermind_iosys::{Rgb, Sprite, XY};

    use super::Textures;
    use crate::layout::Layout;

    pub const EXIT: Rgb = Rgb(0xE0, 0x00, 0x00);
    pub const NEW_GAME: Rgb = Rgb(0x00, 0xE0, 0x00);
    pub const LOAD_GAME: Rgb = Rgb(0x00, 0x00, 0xE0);
    pub const GAME_OVER: Rgb = Rgb(0xE0, 0xE0, 0x00);
    pub const WIN: Rgb = Rgb(0x00, 0xE0, 0x70);
    pub const RULES: Rgb = Rgb(0xE0, 0x00, 0xE0);
    pub const SWATCHES: [Rgb; 4] = [Rgb(0x11, 0, 0), Rgb(0, 0x22, 0), Rgb(0, 0, 0x33), Rgb(0x44, 0x44, 0)];

    pub fn textures() -> Textures {
        let sheet = XY(200, 200);
        let mut rgba = Vec::with_capacity(sheet.area() * 4);
        for y in 0..sheet.y() as i32 {
            for x in 0..sheet.x() as i32 {
                let color = (0..SWATCHES.len())
                    .find(|&c| Layout::swatch(c).contains(x, y))
                    .map_or(Rgb::WHITE, |c| SWATCHES[c]);
                rgba.extend([color.0, color.1, color.2, 0xFF]);
            }
        }
        let solid = |color| Sprite::solid(XY(10, 10), color);
        Textures {
            exit: solid(EXIT),
            new_game: solid(NEW_GAME),
            load_game: solid(LOAD_GAME),
            game_over: solid(GAME_OVER),
            win: solid(WIN),
            rules: solid(RULES),
            colors: Sprite::from_rgba8(sheet, &rgba).unwrap(),
        }
    }
}

fn load(dir: &Path, name: &str) -> Result<Sprite> {
    let path = dir.join(name);
    let image = image::open(&path)
        .map_err(|source| Error::Asset { path: path.clone(), source })?
        .to_rgba8();
    let size = XY(image.width() as usize, image.height() as usize);
    debug!(path = %path.display(), %size, "decoded image");
    Sprite::from_rgba8(size, image.as_raw()).ok_or_else(|| mismatch(path))
}

fn mismatch(path: PathBuf) -> Error {
    let source = ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch));
    Error::Asset { path, source }
}
