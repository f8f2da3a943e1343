use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use cellular_automata::{
    Simulation, SimulationConfig, Viewport,
    input::{self, PatternCursor},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: 1000,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> SimulationConfig {
    let config = SimulationConfig::from_env();
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!(%err, "invalid configuration, using defaults");
            SimulationConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let mut sim = match Simulation::new(load_config()) {
        Ok(sim) => sim,
        Err(err) => {
            tracing::error!(%err, "could not start simulation");
            return;
        }
    };
    let mut cursor = PatternCursor::default();

    loop {
        let mouse_pos = mouse_position();
        let viewport = Viewport::fit(sim.grid().dimensions(), ui::grid_area_width(), ui::grid_area_height());
        let buttons = ui::create_buttons();

        // Input is queued before the tick so it never interleaves with a step
        let commands = input::poll(&viewport, &buttons, &mut cursor, sim.patterns().len(), mouse_pos);
        sim.extend(commands);
        sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&sim, &viewport);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
