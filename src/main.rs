use log::{info, warn};
use macroquad::prelude::*;
use bounded_life::{
    Camera, Config, GameState,
    rendering::{self, CellMaterials},
    ui::{self, TextField},
    input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// A running session together with its presentation-side state
struct Session {
    state: GameState,
    materials: CellMaterials,
    camera: Camera,
}

impl Session {
    fn new(state: GameState) -> Self {
        let materials = CellMaterials::from_grid(&state.grid);
        let camera = Camera::new(state.config.min_zoom, state.config.max_zoom);
        Self { state, materials, camera }
    }
}

/// Setup menu: returns a session once a valid grid size was submitted
fn run_setup(field: &mut TextField, error: &mut Option<String>, config: &Config, mouse_pos: (f32, f32)) -> Option<Session> {
    let (fx, fy) = ui::size_field_position();
    field.set_position(fx, fy);
    let start = ui::start_button();

    let submitted = field.update(mouse_pos) | start.is_clicked(mouse_pos);

    clear_background(BLACK);
    rendering::draw_setup_menu(field, &start, error.as_deref(), mouse_pos);

    if !submitted {
        return None;
    }
    match GameState::start(field.text(), config.clone()) {
        Ok(state) => Some(Session::new(state)),
        Err(err) => {
            warn!("rejected grid size: {err}");
            *error = Some(err.to_string());
            None
        }
    }
}

fn run_game(mut session: Session, rng: &mut impl ::rand::Rng, mouse_pos: (f32, f32)) -> Session {
    let dt = get_frame_time();
    let config = session.state.config.clone();

    let buttons: Vec<_> = ui::create_buttons(session.state.toggle_label())
        .into_iter()
        .map(|(button, action)| {
            let enabled = action != ui::GameAction::Step || !session.state.is_running;
            (button.enabled(enabled), action)
        })
        .collect();

    // Input first, then at most one generation, so a toggle never lands mid-step
    let mut state = input::process_button_clicks(session.state, &buttons, mouse_pos, &mut *rng, &mut session.materials);
    input::handle_zoom(&mut session.camera, config.zoom_speed);
    input::handle_pan(&mut session.camera, config.pan_speed, dt);
    input::handle_pick(&mut state, &session.camera, mouse_pos, &mut session.materials);
    state = input::process_keyboard_input(state, &mut session.camera, &mut *rng, &mut session.materials);
    state = state.tick(dt, &mut session.materials);
    session.state = state;

    clear_background(BLACK);
    rendering::draw_grid(&session.materials, &session.camera);
    let plain: Vec<_> = buttons.into_iter().map(|(button, _)| button).collect();
    rendering::draw_controls(&session.state, &session.camera, &plain, mouse_pos);

    session
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::from_env();
    info!("starting with {config:?}");

    let mut rng = ::rand::rng();
    let mut field = TextField::new(0.0, 0.0, ui::PANEL_WIDTH, "Grid Size", config.default_grid_size.to_string());
    let mut error: Option<String> = None;
    let mut session: Option<Session> = None;

    loop {
        let mouse_pos = mouse_position();

        session = match session.take() {
            Some(running) => Some(run_game(running, &mut rng, mouse_pos)),
            None => run_setup(&mut field, &mut error, &config, mouse_pos),
        };

        next_frame().await;
    }
}
