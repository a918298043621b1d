use conway_life::{
    Board, LifeError, ScreenRenderer, Simulation, StopSignal, input, presets,
    rendering::{self, Renderer},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 832,
        window_resizable: true,
        ..Default::default()
    }
}

/// Build the starting board: a glider gun rotated to fire across the
/// board, plus a glider, a flipped glider and a blinker.
fn seed_board() -> Result<Board, LifeError> {
    let mut board = Board::new(100)?;

    board.insert(&presets::glider_gun().rotate(1)?, (12, 50))?;
    board.insert(&presets::glider(), (60, 70))?;
    board.insert(&presets::glider().flip_horizontal(), (75, 40))?;
    board.insert(&presets::blinker(), (70, 15))?;

    Ok(board)
}

#[macroquad::main(window_conf)]
async fn main() {
    let board = match seed_board() {
        Ok(board) => board,
        Err(e) => {
            error!("failed to seed board: {e}");
            return;
        }
    };

    let stop = StopSignal::new();
    let mut sim = Simulation::new(board).toggle_running();
    let mut renderer = ScreenRenderer::new();

    info!("starting with {} live cells", sim.board.population());

    loop {
        if input::quit_requested() {
            stop.set();
        }
        if stop.is_set() {
            break;
        }

        sim = input::process_keyboard(sim);
        sim = sim.tick(get_frame_time());

        if let Err(e) = renderer.frame(&sim.board) {
            error!("render failed: {e}");
            break;
        }
        rendering::draw_hud(&sim);

        next_frame().await;
    }
}
