use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use getopts::Options;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use slide2048::{read_key, Game, GameError, Key, Phase, Screen, Status, BOARD_LEN, TARGET};

#[derive(Debug, PartialEq)]
struct Settings {
  seed: Option<u64>,
  target: u32,
  log: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
  Play(Settings),
  Help,
}

fn options() -> Options {
  let mut opts = Options::new();
  opts.optflag("h", "help", "Print this message.");
  opts.optopt("s", "seed", "Seed for tile placement. Random if not given.", "number");
  opts.optopt("t", "target", "Tile value that wins the game. Defaults to 2048.", "number");
  opts.optopt("l", "log", "Write a debug log to FILE. Filter with RUST_LOG.", "FILE");
  opts
}

fn usage(program: &str) -> String {
  options().usage(&format!("Usage: {} [options]\n\nKeys: arrows, wasd or hjkl to move; q to quit.", program))
}

fn parse_options(args: &[String]) -> Result<Command, GameError> {
  let matches = options().parse(args.iter().skip(1))?;

  if matches.opt_present("h") {
    return Ok(Command::Help);
  }
  if let Some(arg) = matches.free.first() {
    return Err(GameError::UnexpectedArgument { value: arg.clone() });
  }

  let seed = match matches.opt_str("s") {
    Some(s) => Some(s.parse::<u64>().map_err(|_| GameError::BadValue { option: "seed", value: s })?),
    None => None,
  };

  let target = match matches.opt_str("t") {
    Some(s) => match s.parse::<u32>() {
      Ok(t) if t >= 4 && t.is_power_of_two() => t,
      _ => return Err(GameError::BadValue { option: "target", value: s }),
    },
    None => TARGET,
  };

  Ok(Command::Play(Settings { seed, target, log: matches.opt_str("l") }))
}

fn init_logging(path: &str) -> Result<(), GameError> {
  let file = File::create(path)?;
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

fn play(settings: &Settings) -> Result<(), GameError> {
  let seed = settings.seed.unwrap_or_else(rand::random);
  let mut game = Game::new(BOARD_LEN, settings.target, ChaCha8Rng::seed_from_u64(seed));
  info!(seed, target = game.target(), "starting game");

  let io = getch::Getch::new()?;
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut screen = Screen::new();
  screen.clear(&mut out)?;

  let mut redraw = true;
  loop {
    let status = match game.phase() {
      Phase::Terminal(st) => st,
      Phase::AwaitingInput => Status::Continue,
    };
    if redraw {
      screen.draw(&mut out, &game.snapshot(), status)?;
    }

    let key = read_key(|| io.getch())?;
    if game.is_over() {
      break;
    }
    match key {
      Key::Quit => {
        info!(moves = game.moves(), "quit");
        break;
      }
      Key::Move(dir) => {
        redraw = game.play(dir).map_or(false, |r| r.changed || r.status.is_terminal());
      }
      Key::Other => redraw = false,
    }
  }

  writeln!(out, "Moves: {}  Max tile: {}", game.moves(), game.board().max_tile())?;
  Ok(())
}

fn main() {
  let args: Vec<String> = std::env::args().collect();
  let program = args.first().map(String::as_str).unwrap_or("slide2048");

  let settings = match parse_options(&args) {
    Ok(Command::Play(settings)) => settings,
    Ok(Command::Help) => {
      println!("{}", usage(program));
      return;
    }
    Err(err) => {
      eprintln!("{}\n\n{}", err, usage(program));
      std::process::exit(1);
    }
  };

  if let Some(path) = &settings.log {
    if let Err(err) = init_logging(path) {
      eprintln!("can't open log {}: {}", path, err);
      std::process::exit(1);
    }
  }

  if let Err(err) = play(&settings) {
    error!(%err, "game aborted");
    eprintln!("{}", err);
    std::process::exit(1);
  }
}
