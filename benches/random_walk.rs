use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use splix_engine::{
    game::{Game, StepOutcome},
    types::{ActorId, Move, TickInstruments},
    GameError,
};

#[derive(Debug)]
struct Instruments {}

impl TickInstruments for Instruments {
    fn observe_tick(&self, _: std::time::Duration) {}
}

fn run_random_walk(rng: &mut SmallRng, instrument: Instruments, turns: u64) -> Result<(), GameError> {
    let settings = splix_engine::settings_fixture(include_str!("../fixtures/seeded_20x20.json"));
    let mut game = Game::from_settings(settings)?;
    let names = ["Player 1", "Player 2", "Player 3", "Player 4"];
    for name in names.iter() {
        game.register_actor(*name)?;
    }
    game.start()?;

    let mut respawns = 0;
    while game.turn() < turns {
        for idx in 0..names.len() {
            if let Some(mv) = Move::all().choose(rng) {
                game.set_direction(ActorId(idx as u8), *mv)?;
            }
        }
        let outcomes = game.tick_instrumented(&instrument)?;
        respawns += outcomes
            .iter()
            .filter(|o| **o == StepOutcome::Respawned)
            .count();
    }

    game.update_scoreboard();
    for line in game.scoreboard_lines() {
        println!("{}", line);
    }
    println!("respawns: {}", respawns);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let instrument = Instruments {};
    let mut rng = SmallRng::from_entropy();

    if let Err(e) = run_random_walk(&mut rng, instrument, 1_000) {
        eprintln!("random walk stopped: {}", e);
    }
}
