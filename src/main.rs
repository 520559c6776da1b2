use macroquad::logging::error;
use macroquad::prelude::*;
use pattern_life::{
    application::{Camera, Config, FileSource, GameState, LayeredSource},
    domain::Diff,
    input::{self, PendingPlacement},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - Pattern Composer".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: pattern_life [--root DIR] [--max-depth N] [--speed GPS] [--parallel] [PATTERN [X Y]]...");
            return;
        }
    };

    let source = LayeredSource::new(FileSource::new(&config.pattern_root));
    let mut state = GameState::new(source, &config);
    let mut status: Option<String> = None;

    for placement in &config.placements {
        if let Err(e) = state.place_pattern(placement.origin, &placement.path, Default::default()) {
            status = Some(e.to_string());
        }
    }

    let mut camera = Camera::centered(ui::grid_area_width(), ui::grid_area_height());
    let mut pan_anchor = None;
    let mut pending: Option<PendingPlacement> = None;
    let mut preset_index = 0;
    // resolved ghost for the pending placement, rebuilt when it changes
    let mut preview: Option<(PendingPlacement, Diff)> = None;

    loop {
        let mouse_pos = mouse_position();
        let in_grid = mouse_pos.0 < ui::grid_area_width();

        input::handle_placement_keys(&mut pending, &mut preset_index);
        if pending.as_ref() != preview.as_ref().map(|(p, _)| p) {
            preview = pending.clone().and_then(|p| {
                match state.compositor.place(Default::default(), &p.path, p.spec) {
                    Ok(diff) => Some((p, diff)),
                    Err(e) => {
                        status = Some(e.to_string());
                        None
                    }
                }
            });
            if preview.is_none() {
                pending = None;
            }
        }

        // a click that places a pattern must not also toggle a cell
        let placing = pending.is_some();
        if let Some(p) = pending.clone() {
            if in_grid && is_mouse_button_pressed(MouseButton::Left) {
                let origin = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, ui::CELL_SIZE);
                status = state.place_pattern(origin, &p.path, p.spec).err().map(|e| e.to_string());
                pending = None;
            }
        }

        let buttons: Vec<_> = ui::create_buttons()
            .into_iter()
            .enumerate()
            .map(|(i, b)| b.with_active(i == 0 && state.is_running))
            .collect();
        let mut commands = input::process_button_clicks(&buttons, mouse_pos);
        commands.extend(input::poll_commands(&mut camera, mouse_pos, placing));
        state = input::apply_commands(state, commands);

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos, &mut pan_anchor);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &camera);
        if let (Some((_, ghost)), true) = (&preview, in_grid && pending.is_some()) {
            let origin = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, ui::CELL_SIZE);
            rendering::draw_pattern_preview(&ghost.clone().anchor_at(origin), &camera);
        }
        rendering::draw_controls(&state, &camera, &buttons, status.as_deref(), mouse_pos);

        next_frame().await;
    }
}
