use crate::settings::{Settings, SettingsView};
use crate::utils::*;
use bitflags::bitflags;
use gloo::events::EventListener;
use nonoguramu_core as game;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

impl StorageKey for game::Board {
    const KEY: &'static str = "nonoguramu:game:v1";
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum CellMsg {
    Down((game::Coord, game::Coord), MouseButtons),
    Enter((game::Coord, game::Coord), MouseButtons),
    Up((game::Coord, game::Coord)),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    BoardPointerUp,
    SetCrossMode(bool),
    ToggleCrossMode,
    SetShowErrors(bool),
    Undo,
    Redo,
    Reset,
    NewPuzzle,
    ToggleSettings,
    UpdateSettings(Settings),
}

/// CSS classes for one cell: its mark, the transient drag highlight and the
/// cosmetic expectation hint the show-errors stylesheet keys off.
fn cell_classes(state: game::CellState, selecting: bool, expected: Option<bool>) -> Classes {
    use game::CellState::*;

    let mut class = match state {
        Empty => classes!(),
        Filled => classes!("on"),
        Crossed => classes!("off"),
    };
    match expected {
        Some(true) => class.push("expect-on"),
        Some(false) => class.push("expect-off"),
        None => {}
    }
    if selecting {
        class.push("selecting");
    }
    class
}

fn row_hint_text(runs: &[game::Run]) -> String {
    runs.iter()
        .map(|run| run.len.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A pointer release is either the end of a real drag or, when the gesture
/// never left the cell it was pressed in, a plain click on that cell.
fn resolve_pointer_up(
    board: &mut game::Board,
    pressed: Option<game::Coord2>,
    pos: game::Coord2,
) -> game::PlayOutcome {
    let outcome = board.end_drag();
    if outcome.has_update() {
        return outcome;
    }
    if pressed == Some(pos) {
        board
            .click_cell(pos)
            .unwrap_or(game::PlayOutcome::NoChange)
    } else {
        outcome
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    class: Classes,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        class,
        callback,
    } = props.clone();

    let onmousedown = {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Down((x, y), buttons));
            log::trace!("({}, {}) mouse down ({:?})", x, y, buttons);
        })
    };

    let onmouseenter = {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            callback.emit(CellMsg::Enter((x, y), buttons));
            log::trace!("({}, {}) mouse enter ({:?})", x, y, buttons);
        })
    };

    let onmouseup = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(CellMsg::Up((x, y)));
            log::trace!("({}, {}) mouse up", x, y);
        })
    };

    html! {
        <td {class} {onmousedown} {onmouseenter} {onmouseup}><div/></td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    pub seed: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: Settings,
    board: game::Board,
    show_errors: bool,
    settings_open: bool,
    pressed: Option<game::Coord2>,
    _key_listener: EventListener,
}

impl GameView {
    fn fresh_board(settings: &Settings, seed: u64) -> game::Board {
        let generator = game::RandomSolutionGenerator::new(seed);
        game::Board::from_generator(generator, settings.game_config())
            .expect("random generator respects the requested size")
    }

    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keyup", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "x" {
                link.send_message(Msg::ToggleCrossMode);
            }
        })
    }

    fn handle_cell_event(&mut self, msg: CellMsg) -> bool {
        match msg {
            CellMsg::Down(pos, buttons) => {
                if buttons == MouseButtons::LEFT {
                    self.board.begin_drag(Some(pos));
                    self.pressed = Some(pos);
                }
                false
            }
            CellMsg::Enter(pos, buttons) => {
                if buttons.contains(MouseButtons::LEFT) {
                    if let Err(err) = self.board.extend_drag(pos) {
                        log::warn!("drag extend rejected at {:?}: {}", pos, err);
                    }
                    true
                } else {
                    false
                }
            }
            CellMsg::Up(pos) => {
                let outcome = resolve_pointer_up(&mut self.board, self.pressed.take(), pos);
                if outcome.is_solved() {
                    log::info!("puzzle complete");
                }
                true
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: Settings = LocalOrDefault::local_or_default();
        let seed = ctx
            .props()
            .seed
            .as_deref()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(js_random_seed);
        let board = Option::<game::Board>::local_or_default()
            .unwrap_or_else(|| Self::fresh_board(&settings, seed));

        Self {
            settings,
            board,
            show_errors: false,
            settings_open: false,
            pressed: None,
            _key_listener: Self::create_key_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellEvent(cell_msg) => self.handle_cell_event(cell_msg),
            BoardPointerUp => {
                self.pressed = None;
                let _ = self.board.end_drag();
                true
            }
            SetCrossMode(cross_mode) => {
                self.board.set_cross_mode(cross_mode);
                true
            }
            ToggleCrossMode => {
                self.board.toggle_cross_mode();
                log::debug!("cross mode: {}", self.board.cross_mode());
                true
            }
            SetShowErrors(show_errors) => {
                self.show_errors = show_errors;
                true
            }
            Undo => self.board.undo().has_update(),
            Redo => self.board.redo().has_update(),
            Reset => {
                let _ = self.board.reset();
                true
            }
            NewPuzzle => {
                let seed = js_random_seed();
                log::debug!("new puzzle, seed: {}", seed);
                if self.settings.size == self.board.size() {
                    let generator = game::RandomSolutionGenerator::new(seed);
                    if let Err(err) = self.board.new_puzzle(generator) {
                        log::error!("failed to regenerate puzzle: {}", err);
                    }
                } else {
                    self.board = Self::fresh_board(&self.settings, seed);
                }
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                if !self.settings_open {
                    self.settings = LocalOrDefault::local_or_default();
                }
                true
            }
            UpdateSettings(settings) => {
                if self.settings != settings {
                    settings.local_save();
                    self.settings = settings;
                    true
                } else {
                    false
                }
            }
        };

        self.board.local_save();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (cols, rows) = self.board.size();
        let solved = self.board.is_solved();
        let cross_mode = self.board.cross_mode();

        let cb_button = |msg: Msg| {
            ctx.link().callback(move |e: MouseEvent| {
                e.stop_propagation();
                msg.clone()
            })
        };
        let cb_cross_mode = ctx.link().callback(|e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            SetCrossMode(input.checked())
        });
        let cb_show_errors = ctx.link().callback(|e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            SetShowErrors(input.checked())
        });

        let table_class = classes!(
            self.show_errors.then_some("show-errors"),
            solved.then_some("complete"),
        );

        html! {
            <div class="nonoguramu" onmouseup={ctx.link().callback(|_| BoardPointerUp)}>
                <small onclick={cb_button(ToggleSettings)}>{"···"}</small>
                <nav>
                    <button onclick={cb_button(NewPuzzle)}>{"New"}</button>
                    <button onclick={cb_button(Reset)}>{"Reset"}</button>
                    <button disabled={!self.board.can_undo()} onclick={cb_button(Undo)}>
                        {"Undo"}
                    </button>
                    <button disabled={!self.board.can_redo()} onclick={cb_button(Redo)}>
                        {"Redo"}
                    </button>
                    <label>
                        <input type="checkbox" name="x" checked={cross_mode} onchange={cb_cross_mode}/>
                        {"X mode"}
                    </label>
                    <label>
                        <input type="checkbox" name="errors" checked={self.show_errors} onchange={cb_show_errors}/>
                        {"Show errors"}
                    </label>
                </nav>
                <table class={table_class}>
                    <tr>
                        <th/>
                        {
                            for (0..cols).map(|x| html! {
                                <th class="col-header">
                                    {
                                        for self.board.col_hints(x).iter().map(|run| html! {
                                            <>{run.len}<br/></>
                                        })
                                    }
                                </th>
                            })
                        }
                    </tr>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                <th class="row-header">{row_hint_text(self.board.row_hints(y))}</th>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let class = cell_classes(
                                            self.board.state_at(pos),
                                            self.board.is_selecting(pos),
                                            self.board.expected_at(pos),
                                        );
                                        let callback = ctx.link().callback(Msg::CellEvent);
                                        html! {
                                            <CellView {x} {y} {class} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if solved {
                    <Modal>
                        <div class="complete-banner">{"Complete!"}</div>
                    </Modal>
                }
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_update={ctx.link().callback(UpdateSettings)}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_classes_map_state_selection_and_expectation() {
        use game::CellState::*;

        assert_eq!(cell_classes(Empty, false, None), classes!());
        assert_eq!(cell_classes(Filled, false, None), classes!("on"));
        assert_eq!(cell_classes(Crossed, false, None), classes!("off"));
        assert_eq!(
            cell_classes(Filled, true, Some(true)),
            classes!("on", "expect-on", "selecting")
        );
        assert_eq!(
            cell_classes(Empty, false, Some(false)),
            classes!("expect-off")
        );
    }

    #[test]
    fn row_hints_render_space_separated() {
        let runs = [
            game::Run { offset: 0, len: 2 },
            game::Run { offset: 3, len: 1 },
        ];
        assert_eq!(row_hint_text(&runs), "2 1");
        assert_eq!(row_hint_text(&[]), "");
    }

    #[test]
    fn release_in_the_pressed_cell_is_a_click() {
        let solution = game::Solution::from_filled_coords((2, 1), &[]).unwrap();
        let mut board = game::Board::new(solution);
        board.begin_drag(Some((0, 0)));

        let outcome = resolve_pointer_up(&mut board, Some((0, 0)), (0, 0));

        assert!(outcome.has_update());
        assert_eq!(board.state_at((0, 0)), game::CellState::Filled);
    }

    #[test]
    fn release_after_a_real_drag_does_not_also_click() {
        let solution = game::Solution::from_filled_coords((1, 3), &[]).unwrap();
        let mut board = game::Board::new(solution);
        board.begin_drag(Some((0, 0)));
        board.extend_drag((0, 1)).unwrap();
        board.extend_drag((0, 2)).unwrap();

        let outcome = resolve_pointer_up(&mut board, Some((0, 0)), (0, 2));

        assert!(outcome.has_update());
        // One drag command: a single undo reverts the whole gesture.
        assert_eq!(board.state_at((0, 2)), game::CellState::Filled);
        board.undo();
        assert_eq!(board.state_at((0, 0)), game::CellState::Empty);
        assert_eq!(board.state_at((0, 2)), game::CellState::Empty);
        assert!(!board.can_undo());
    }

    #[test]
    fn storage_key_uses_versioned_namespace() {
        assert_eq!(<game::Board as StorageKey>::KEY, "nonoguramu:game:v1");
    }
}
