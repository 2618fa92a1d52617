use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to fill the active row.
    Player,
    /// The active row is full and gets scored on the next tick.
    ValidateRow,
    /// A restart was requested; the next tick starts a new round.
    NewGame,
    CodeSolved,
    /// Every row was used without solving the code.
    GameOver,
}

impl GameState {
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Player)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::CodeSolved | Self::GameOver)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Player
    }
}

/// Where each round's hidden code comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum CodeSource {
    Random(ShufflePolicy),
    Fixed(HiddenCode),
}

impl Default for CodeSource {
    fn default() -> Self {
        Self::Random(ShufflePolicy::default())
    }
}

/// Owns one game: the hidden code, the board and the turn state machine.
///
/// The host calls [`BoardEngine::update`] once per frame; pointer handling feeds [`BoardEngine::place_pin`] and
/// [`BoardEngine::select_color`] in between.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: BoardConfig,
    source: CodeSource,
    rng: SmallRng,
    round: u32,
    board: Board,
    palette: Palette,
    code: HiddenCode,
    active_row: Option<Coord>,
    selected: Color,
    state: GameState,
}

impl BoardEngine {
    pub fn new(config: BoardConfig, source: CodeSource, seed: u64) -> Result<Self> {
        let config = BoardConfig::new(config.columns, config.rows, config.colors)?;
        if let CodeSource::Fixed(code) = &source {
            if !code.fits(config) {
                return Err(GameError::InvalidCode);
            }
        }

        let palette = Palette::new(config.colors);
        let mut engine = Self {
            config,
            source,
            rng: SmallRng::seed_from_u64(seed),
            round: 0,
            board: Board::new(config),
            selected: palette.first(),
            palette,
            code: HiddenCode::from_colors_unchecked(Default::default()),
            active_row: None,
            state: GameState::default(),
        };
        engine.start_round();
        Ok(engine)
    }

    pub fn random(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::new(config, CodeSource::default(), seed)
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The code being guessed. Front ends should only show it once the round is finished.
    pub fn code(&self) -> &HiddenCode {
        &self.code
    }

    pub fn active_row(&self) -> Option<Coord> {
        self.active_row
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    /// Number of rows validated so far this round.
    pub fn attempts(&self) -> Coord {
        match self.active_row {
            Some(row) => self.config.rows - 1 - row,
            None => self.config.rows,
        }
    }

    /// Whether a pin could currently go into `column` of the active row.
    pub fn can_place_at(&self, column: Coord) -> bool {
        match self.active_row {
            Some(row) if self.state.accepts_input() => {
                self.board.validate_coords((column, row)).is_ok()
                    && self.board.pin_at((column, row)).is_none()
            }
            _ => false,
        }
    }

    /// Advances the state machine by one tick.
    pub fn update(&mut self) {
        let next = self.next_state();
        if next != self.state {
            log::debug!("state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    /// Places the selected color into `column` of the active row.
    pub fn place_pin(&mut self, column: Coord) -> PlaceOutcome {
        match self.active_row {
            Some(row) => self.place((column, row), self.selected),
            None => PlaceOutcome::NoChange,
        }
    }

    /// Places `color` at `coords`. Only the active row accepts pins, and only while the player is on turn.
    pub fn place(&mut self, coords: Coord2, color: Color) -> PlaceOutcome {
        if !self.state.accepts_input() || self.active_row != Some(coords.1) {
            return PlaceOutcome::NoChange;
        }

        let outcome = self.board.place(coords, color);
        if outcome.has_update() {
            log::debug!("placed {:?} at {:?}", color, coords);
        }
        outcome
    }

    /// Selects palette entry `index`; returns whether the selection changed.
    pub fn select_color(&mut self, index: usize) -> bool {
        match self.palette.get(index) {
            Some(color) if color != self.selected => {
                log::debug!("selected color: {:?}", color);
                self.selected = color;
                true
            }
            _ => false,
        }
    }

    /// Asks for a fresh round; it starts on the next [`BoardEngine::update`].
    pub fn request_new_game(&mut self) {
        self.state = GameState::NewGame;
    }

    fn next_state(&mut self) -> GameState {
        use GameState::*;

        match self.state {
            Player => match self.active_row {
                Some(row) if self.board.is_row_full(row) => {
                    if row == 0 {
                        log::info!("last row submitted");
                    }
                    ValidateRow
                }
                _ => Player,
            },
            ValidateRow => self.validate_active_row(),
            NewGame => {
                self.start_round();
                Player
            }
            CodeSolved => CodeSolved,
            GameOver => GameOver,
        }
    }

    fn validate_active_row(&mut self) -> GameState {
        let Some(row) = self.active_row else {
            log::warn!("validation requested without an active row");
            return GameState::GameOver;
        };
        let Some(guess) = self.board.row_guess(row) else {
            log::warn!("validation requested for incomplete row {}", row);
            return GameState::Player;
        };

        let score = score_row(&self.code, &guess);
        self.board.set_feedback_row(row, &score.pins);
        self.active_row = row.checked_sub(1);
        log::debug!("row {} scored {:?}", row, score.pins);

        if score.is_solved() {
            log::info!("code solved in {} attempts", self.attempts());
            GameState::CodeSolved
        } else if self.active_row.is_none() {
            log::info!("board exhausted, game over");
            GameState::GameOver
        } else {
            GameState::Player
        }
    }

    fn start_round(&mut self) {
        self.round += 1;
        self.palette = Palette::new(self.config.colors);
        self.selected = self.palette.first();
        self.active_row = self.config.rows.checked_sub(1);
        self.state = GameState::Player;
        self.board = Board::new(self.config);
        self.code = match &self.source {
            CodeSource::Random(shuffle) => {
                RandomCodeGenerator::new(self.rng.next_u64(), *shuffle).generate(self.config)
            }
            CodeSource::Fixed(code) => FixedCodeGenerator::new(code.clone()).generate(self.config),
        };
        log::debug!("round {} started", self.round);
    }
}
