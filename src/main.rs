//! Plinko entry point
//!
//! Headless host: drops a batch of balls, drives the simulation at the fixed
//! tick rate and paints every frame into a recording canvas.
//!
//! Usage: `plinko [CONFIG.json] [BALLS]`

use plinko::PlinkoConfig;
use plinko::consts::TICK_HZ;
use plinko::renderer::{RecordingCanvas, RenderFrame, paint};
use plinko::sim::{GameState, SimRng, tick};

/// Ticks between automatic drops
const DROP_INTERVAL_TICKS: u64 = 12;
const DEFAULT_BALLS: u32 = 20;
/// Hard stop so a misconfigured board cannot spin forever (5 minutes of play)
const MAX_TICKS: u64 = 5 * 60 * TICK_HZ as u64;

/// Game instance holding all state
struct Game {
    state: GameState,
    rng: SimRng,
    canvas: RecordingCanvas,
    balls_to_drop: u32,
    commands_painted: usize,
}

impl Game {
    fn new(config: PlinkoConfig, balls_to_drop: u32) -> Result<Self, plinko::ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            rng: SimRng::from_os_rng(),
            canvas: RecordingCanvas::new(),
            balls_to_drop,
            commands_painted: 0,
        })
    }

    /// Run one host frame: maybe drop, tick, paint
    fn update(&mut self) {
        if self.balls_to_drop > 0 && self.state.time_ticks % DROP_INTERVAL_TICKS == 0 {
            self.state.request_drop(&mut self.rng);
            self.balls_to_drop -= 1;
        }

        for event in tick(&mut self.state, &mut self.rng) {
            log::info!(
                "Ball {} -> bucket {} ({}x), score {}",
                event.ball_id,
                event.bucket,
                event.multiplier,
                self.state.score.display()
            );
        }

        self.render();
    }

    fn render(&mut self) {
        self.canvas.clear();
        paint(&RenderFrame::capture(&self.state), &mut self.canvas);
        self.commands_painted += self.canvas.commands.len();
    }

    fn finished(&self) -> bool {
        self.balls_to_drop == 0 && self.state.is_idle()
    }
}

fn load_config(path: Option<&str>) -> PlinkoConfig {
    match path {
        Some(path) => match PlinkoConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config ({})", e);
                PlinkoConfig::default()
            }
        },
        None => PlinkoConfig::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("Plinko (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str));
    let balls = match args.get(2).map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid ball count {:?} ({}), dropping {}", args[2], e, DEFAULT_BALLS);
            DEFAULT_BALLS
        }
        None => DEFAULT_BALLS,
    };

    let mut game = match Game::new(config, balls) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    while !game.finished() && game.state.time_ticks < MAX_TICKS {
        game.update();
    }

    if !game.finished() {
        log::warn!("Stopped after {} ticks with balls still active", MAX_TICKS);
    }
    log::info!(
        "Session over: {} balls settled in {} ticks ({} draw commands)",
        game.state.score.settled(),
        game.state.time_ticks,
        game.commands_painted
    );
    println!("Score: {}", game.state.score.display());
}
