use std::path::PathBuf;

use macroquad::prelude::*;

use crate::application::{Camera, Command, GameState, PatternSource};
use crate::domain::{TransformSpec, presets};
use crate::ui::{Button, CELL_SIZE, grid_area_width, grid_area_height};

/// A pattern following the cursor until it is clicked into place
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPlacement {
    pub path: PathBuf,
    pub spec: TransformSpec,
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag; `last` carries the drag between frames
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32), last: &mut Option<(f32, f32)>) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some((lx, ly)) = *last {
            camera.pan(mouse_pos.0 - lx, mouse_pos.1 - ly);
        }
        *last = Some(mouse_pos);
    } else {
        *last = None;
    }
}

/// Keyboard and grid clicks mapped to simulation commands
pub fn poll_commands(camera: &mut Camera, mouse_pos: (f32, f32), placing: bool) -> Vec<Command> {
    let bindings = [
        (KeyCode::N, Command::Advance),
        (KeyCode::A, Command::ToggleAutoplay),
        (KeyCode::Space, Command::ToggleAutoplay),
        (KeyCode::S, Command::PrintGrid),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Randomize),
        (KeyCode::Up, Command::SpeedUp),
        (KeyCode::Down, Command::SlowDown),
    ];
    let mut commands: Vec<Command> = bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset(grid_area_width(), grid_area_height());
    }

    if !placing && is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < grid_area_width() {
        commands.push(Command::Toggle(camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE)));
    }
    commands
}

/// Panel buttons, indexed as `ui::create_buttons` lays them out
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| match idx {
            0 => Some(Command::ToggleAutoplay),
            1 => Some(Command::Advance),
            2 => Some(Command::Clear),
            3 => Some(Command::Randomize),
            _ => None,
        })
        .collect()
}

/// Apply commands in order
pub fn apply_commands<S: PatternSource>(state: GameState<S>, commands: Vec<Command>) -> GameState<S> {
    commands.into_iter().fold(state, GameState::handle)
}

/// `P` picks the next preset; `Q` turns, `X`/`Y` mirror, `T` adds a
/// generation; Escape or right click cancels.
pub fn handle_placement_keys(pending: &mut Option<PendingPlacement>, preset_index: &mut usize) {
    if is_key_pressed(KeyCode::P) {
        let all = presets::all_patterns();
        if pending.is_some() {
            *preset_index = (*preset_index + 1) % all.len();
        }
        *pending = Some(PendingPlacement {
            path: PathBuf::from(all[*preset_index].file_name),
            spec: TransformSpec::IDENTITY,
        });
    }

    let Some(p) = pending.as_mut() else {
        return;
    };
    if is_key_pressed(KeyCode::Q) {
        p.spec.rotation = (p.spec.rotation + 1) % 4;
    }
    if is_key_pressed(KeyCode::X) {
        p.spec.mirror_x = !p.spec.mirror_x;
    }
    if is_key_pressed(KeyCode::Y) {
        p.spec.mirror_y = !p.spec.mirror_y;
    }
    if is_key_pressed(KeyCode::T) {
        p.spec.time += 1;
    }
    if is_key_pressed(KeyCode::Escape) || is_mouse_button_pressed(MouseButton::Right) {
        *pending = None;
    }
}
