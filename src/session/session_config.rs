/// How the board is drawn between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    #[default]
    Unicode,
    /// `P(w)` / `None` cells.
    Ascii,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Input that ends the session.
    pub quit_token: String,
    pub board_style: BoardStyle,
    pub show_board_after_move: bool,
    /// Writes one diagnostic line per processed move to the diagnostics sink.
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quit_token: "q".to_owned(),
            board_style: BoardStyle::Unicode,
            show_board_after_move: true,
            verbose: false,
        }
    }
}

impl SessionConfig {
    /// Applies `--ascii`, `--verbose`/`-v` and `--quiet-board` flags.
    pub fn from_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut config = Self::default();
        for arg in args {
            match arg {
                "--ascii" => config.board_style = BoardStyle::Ascii,
                "--verbose" | "-v" => config.verbose = true,
                "--quiet-board" => config.show_board_after_move = false,
                other => return Err(format!("Unknown option: {other}")),
            }
        }
        Ok(config)
    }
}
