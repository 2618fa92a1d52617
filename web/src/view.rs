use mastermind_core::{BoardConfig, BoardEngine};

use crate::layout::{BoardLayout, Rect, Sprite};
use crate::renderer::{Cursor, Renderer};

/// Draws a [`BoardEngine`] and turns the pointer state of the frame into placements and palette selections.
///
/// Input is sampled, not edge-triggered: holding the button down while sweeping over cells places a pin in each
/// empty one, which is harmless since a filled cell is never overwritten.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoardView {
    layout: BoardLayout,
}

impl BoardView {
    pub(crate) fn new(config: BoardConfig) -> Self {
        Self {
            layout: BoardLayout::new(config),
        }
    }

    pub(crate) fn draw<R: Renderer>(
        &self,
        engine: &mut BoardEngine,
        renderer: &mut R,
        atlas: &R::Atlas,
    ) {
        renderer.set_pointer_cursor(Cursor::Default);

        self.draw_rows(engine, renderer, atlas);
        self.draw_palette(engine, renderer, atlas);

        if engine.is_finished() {
            self.draw_code(engine, renderer, atlas);
            self.draw_restart_button(engine, renderer, atlas);
        }
    }

    fn draw_rows<R: Renderer>(&self, engine: &mut BoardEngine, renderer: &mut R, atlas: &R::Atlas) {
        let (columns, rows) = engine.config().size();
        let pointer = (renderer.pointer_x(), renderer.pointer_y());
        let pressed = renderer.pointer_primary_pressed();

        for row in 0..rows {
            let (label, number) = self.layout.row_label(row);
            blit(renderer, atlas, number, label);
            blit(
                renderer,
                atlas,
                Sprite::FEEDBACK_FRAME,
                self.layout.feedback_frame(row),
            );
            blit(renderer, atlas, Sprite::ROW_FRAME, self.layout.row_frame(row));

            let is_active = engine.state().accepts_input() && engine.active_row() == Some(row);
            for column in 0..columns {
                let cell = self.layout.cell(column, row);
                let hovered = is_active && cell.contains(pointer.0, pointer.1);

                if hovered && engine.can_place_at(column) {
                    renderer.set_pointer_cursor(Cursor::Pointer);
                    if pressed {
                        engine.place_pin(column);
                    }
                }

                let sprite = match engine.board().pin_at((column, row)) {
                    Some(color) => Sprite::pin(Some(color)),
                    None if hovered => Sprite::pin(Some(engine.selected_color())),
                    None if is_active => Sprite::ACTIVE_SLOT,
                    None => Sprite::pin(None),
                };
                blit(renderer, atlas, sprite, cell);

                let feedback = engine.board().feedback_at((column, row));
                blit(
                    renderer,
                    atlas,
                    Sprite::feedback(feedback),
                    self.layout.feedback_pin(column, row),
                );
            }
        }

        for column in 0..columns {
            let (label, number) = self.layout.column_label(column);
            blit(renderer, atlas, number, label);
        }
    }

    fn draw_palette<R: Renderer>(
        &self,
        engine: &mut BoardEngine,
        renderer: &mut R,
        atlas: &R::Atlas,
    ) {
        let pointer = (renderer.pointer_x(), renderer.pointer_y());
        let pressed = renderer.pointer_primary_pressed();

        for index in 0..engine.palette().len() {
            let Some(color) = engine.palette().get(index) else {
                continue;
            };
            let swatch = self.layout.palette_swatch(index);

            if swatch.contains(pointer.0, pointer.1) {
                renderer.set_pointer_cursor(Cursor::Pointer);
                if pressed {
                    engine.select_color(index);
                }
            }

            let sprite = if engine.selected_color() == color {
                Sprite::pin_highlighted(color)
            } else {
                Sprite::pin(Some(color))
            };
            blit(renderer, atlas, sprite, swatch);
        }

        blit(
            renderer,
            atlas,
            Sprite::PALETTE_FRAME,
            self.layout.palette_frame(),
        );
    }

    fn draw_code<R: Renderer>(&self, engine: &BoardEngine, renderer: &mut R, atlas: &R::Atlas) {
        for (index, color) in engine.code().iter().enumerate() {
            blit(
                renderer,
                atlas,
                Sprite::pin(Some(color)),
                self.layout.code_pin(index),
            );
        }
    }

    fn draw_restart_button<R: Renderer>(
        &self,
        engine: &mut BoardEngine,
        renderer: &mut R,
        atlas: &R::Atlas,
    ) {
        let button = self.layout.restart_button();
        blit(renderer, atlas, Sprite::RESTART_BUTTON, button);

        if button.contains(renderer.pointer_x(), renderer.pointer_y()) {
            renderer.set_pointer_cursor(Cursor::Pointer);
            if renderer.pointer_primary_pressed() {
                log::debug!("restart requested after round {}", engine.round());
                engine.request_new_game();
            }
        }
    }
}

fn blit<R: Renderer>(renderer: &mut R, atlas: &R::Atlas, sprite: Sprite, dest: Rect) {
    renderer.draw_region(
        atlas,
        dest.x,
        dest.y,
        sprite.width,
        sprite.height,
        sprite.x,
        sprite.y,
    );
}

/// Number of regions a full board draw issues, excluding the end-of-round overlay.
#[cfg(test)]
fn board_draw_count(config: BoardConfig) -> usize {
    let (columns, rows, colors) = (
        usize::from(config.columns),
        usize::from(config.rows),
        usize::from(config.colors),
    );
    rows * (3 + columns * 2) + columns + colors + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_core::{CodeSource, Color, Coord, GameState, HiddenCode, PlaceOutcome};

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        pointer: (f64, f64),
        pressed: bool,
        cursor: Cursor,
        regions: Vec<(f64, f64, f64, f64, f64, f64)>,
    }

    impl RecordingRenderer {
        fn point_at(&mut self, rect: Rect, pressed: bool) {
            self.pointer = rect.center();
            self.pressed = pressed;
        }
    }

    impl Renderer for RecordingRenderer {
        type Atlas = ();

        fn draw_region(
            &mut self,
            _atlas: &(),
            dest_x: f64,
            dest_y: f64,
            width: f64,
            height: f64,
            source_x: f64,
            source_y: f64,
        ) {
            self.regions
                .push((dest_x, dest_y, width, height, source_x, source_y));
        }

        fn pointer_x(&self) -> f64 {
            self.pointer.0
        }

        fn pointer_y(&self) -> f64 {
            self.pointer.1
        }

        fn pointer_primary_pressed(&self) -> bool {
            self.pressed
        }

        fn set_pointer_cursor(&mut self, cursor: Cursor) {
            self.cursor = cursor;
        }
    }

    fn engine(ids: &[u8]) -> BoardEngine {
        let code = HiddenCode::from_ids(ids, BoardConfig::CLASSIC).unwrap();
        BoardEngine::new(BoardConfig::CLASSIC, CodeSource::Fixed(code), 0).unwrap()
    }

    fn layout() -> BoardLayout {
        BoardLayout::new(BoardConfig::CLASSIC)
    }

    fn solve(engine: &mut BoardEngine) {
        let code: Vec<Color> = engine.code().iter().collect();
        for (column, color) in code.into_iter().enumerate() {
            assert_eq!(
                engine.place((column as Coord, 11), color),
                PlaceOutcome::Placed
            );
        }
        engine.update();
        engine.update();
        assert_eq!(engine.state(), GameState::CodeSolved);
    }

    #[test]
    fn idle_pointer_draws_whole_board_without_changes() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let before = engine.board().clone();
        let mut renderer = RecordingRenderer::default();

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(
            renderer.regions.len(),
            board_draw_count(BoardConfig::CLASSIC)
        );
        assert_eq!(renderer.cursor, Cursor::Default);
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn pressing_an_active_cell_places_the_selected_color() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().cell(2, 11), true);

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.board().pin_at((2, 11)), Some(Color::new_unchecked(1)));
        assert_eq!(renderer.cursor, Cursor::Pointer);
    }

    #[test]
    fn hovering_shows_pointer_without_placing() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().cell(0, 11), false);

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.board().pin_at((0, 11)), None);
        assert_eq!(renderer.cursor, Cursor::Pointer);
    }

    #[test]
    fn frozen_rows_ignore_the_pointer() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let before = engine.board().clone();
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().cell(2, 5), true);

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.board(), &before);
        assert_eq!(renderer.cursor, Cursor::Default);
    }

    #[test]
    fn held_button_does_not_overwrite_a_filled_cell() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let view = BoardView::new(BoardConfig::CLASSIC);
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().cell(0, 11), true);
        view.draw(&mut engine, &mut renderer, &());

        engine.select_color(6);
        view.draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.board().pin_at((0, 11)), Some(Color::new_unchecked(1)));
        assert_eq!(renderer.cursor, Cursor::Default);
    }

    #[test]
    fn pressing_a_swatch_selects_it() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().palette_swatch(3), true);

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.selected_color(), Color::new_unchecked(4));
        assert_eq!(renderer.cursor, Cursor::Pointer);
    }

    #[test]
    fn finished_round_reveals_code_and_restarts() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        solve(&mut engine);
        let view = BoardView::new(BoardConfig::CLASSIC);
        let mut renderer = RecordingRenderer::default();

        view.draw(&mut engine, &mut renderer, &());
        let code_region = layout().code_pin(0);
        assert!(
            renderer
                .regions
                .iter()
                .any(|&(x, y, _, _, sx, _)| x == code_region.x && y == code_region.y && sx == 24.0)
        );
        assert_eq!(engine.state(), GameState::CodeSolved);

        renderer.point_at(layout().restart_button(), true);
        view.draw(&mut engine, &mut renderer, &());
        assert_eq!(engine.state(), GameState::NewGame);

        engine.update();
        assert_eq!(engine.state(), GameState::Player);
        assert_eq!(engine.round(), 2);
    }

    #[test]
    fn restart_button_is_hidden_during_play() {
        let mut engine = engine(&[3, 1, 4, 2, 5]);
        let mut renderer = RecordingRenderer::default();
        renderer.point_at(layout().restart_button(), true);

        BoardView::new(BoardConfig::CLASSIC).draw(&mut engine, &mut renderer, &());

        assert_eq!(engine.state(), GameState::Player);
        assert_eq!(renderer.cursor, Cursor::Default);
    }
}
