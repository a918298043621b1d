use macroquad::prelude::*;

use crate::application::Simulation;

/// Process keyboard input functionally
pub fn process_keyboard(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Quit requested this frame
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
