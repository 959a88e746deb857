use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use imon_core::actions::{ActionOutcome, FoodKind, LightsOutcome};
use imon_core::battle::{AttackHeight, BattleResult, RoundOutcome};
use imon_core::config::Rules;
use imon_core::init_logging;
use imon_core::training::Guess;
use imon_io::JsonFileStore;
use imon_lib::app::render::status_block;
use imon_lib::{App, SessionOutcome};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Look after a tiny digital monster", long_about = None)]
struct Args {
    /// Rules file; missing files fall back to the built-in rules
    #[arg(short, long, default_value = "imon.toml")]
    config: PathBuf,

    /// Where the pet is saved
    #[arg(short, long, default_value = "imon_save.json")]
    save: PathBuf,

    /// Seed for reproducible training and battles
    #[arg(long)]
    seed: Option<u64>,

    /// Print the status as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show how the pet is doing
    Status,
    /// Hatch the egg
    Hatch,
    /// Give the pet something to eat
    Feed {
        #[arg(value_enum)]
        food: FoodArg,
    },
    /// Clean up after the pet
    Clean,
    /// Treat an injury
    Heal,
    /// Flip the lights
    Lights,
    /// Train with a sequence of high/low guesses
    Train {
        #[arg(value_enum, required = true)]
        guesses: Vec<GuessArg>,
    },
    /// Battle with a sequence of attack heights
    Battle {
        #[arg(value_enum, required = true)]
        moves: Vec<HeightArg>,
    },
    /// Redeem walked steps for bonus meals
    Bonus { steps: u64 },
    /// Start over with a new egg
    Restart,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FoodArg {
    Meat,
    Vitamin,
}

impl From<FoodArg> for FoodKind {
    fn from(arg: FoodArg) -> Self {
        match arg {
            FoodArg::Meat => FoodKind::Meat,
            FoodArg::Vitamin => FoodKind::Vitamin,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum GuessArg {
    High,
    Low,
}

impl From<GuessArg> for Guess {
    fn from(arg: GuessArg) -> Self {
        match arg {
            GuessArg::High => Guess::High,
            GuessArg::Low => Guess::Low,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HeightArg {
    High,
    Medium,
    Low,
}

impl From<HeightArg> for AttackHeight {
    fn from(arg: HeightArg) -> Self {
        match arg {
            HeightArg::High => AttackHeight::High,
            HeightArg::Medium => AttackHeight::Medium,
            HeightArg::Low => AttackHeight::Low,
        }
    }
}

fn report(outcome: ActionOutcome, done: &str, refused: &str) {
    match outcome {
        ActionOutcome::Applied => println!("{done}"),
        ActionOutcome::Refused => println!("{refused}"),
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let rules = Rules::load_or_default(&args.config)?;
    let store = JsonFileStore::new(&args.save).with_rules_fingerprint(rules.fingerprint());
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut app = App::open(rules, Box::new(store), seed, Utc::now())?;
    let now = Utc::now();

    match args.command.unwrap_or(Command::Status) {
        Command::Status => {
            app.tick(now)?;
        }
        Command::Hatch => report(app.hatch(now)?, "The egg cracks open!", "There is no egg to hatch."),
        Command::Feed { food } => report(
            app.feed(food.into(), now)?,
            "Munch munch.",
            "The pet can't eat right now.",
        ),
        Command::Clean => report(app.clean(now)?, "All clean.", "Nothing to clean."),
        Command::Heal => report(app.heal(now)?, "Patched up.", "Nothing to heal."),
        Command::Lights => match app.toggle_lights(now)? {
            LightsOutcome::Toggled => println!("Lights toggled."),
            LightsOutcome::ToggledDuringSleep => {
                println!("Lights toggled. The pet will settle in a moment.")
            }
            LightsOutcome::Blocked => println!("Nobody here needs the lights."),
        },
        Command::Train { guesses } => {
            let mut input = guesses.into_iter().map(Guess::from);
            match app.train(&mut input, now)? {
                SessionOutcome::Refused => println!("The pet can't train right now."),
                SessionOutcome::Cancelled => println!("Ran out of guesses; training abandoned."),
                SessionOutcome::Completed(training) => {
                    for round in &training.rounds {
                        println!(
                            "Round {}: number {} -> {}",
                            round.round,
                            round.number,
                            if round.won { "hit" } else { "miss" }
                        );
                    }
                    let verdict = if training.outcome.won { "passed" } else { "failed" };
                    println!("Training {verdict}.");
                }
            }
        }
        Command::Battle { moves } => {
            let mut input = moves.into_iter().map(AttackHeight::from);
            match app.battle(&mut input, now)? {
                SessionOutcome::Refused => println!("The pet can't battle right now."),
                SessionOutcome::Cancelled => println!("Ran out of moves; the battle was called off."),
                SessionOutcome::Completed(fight) => {
                    println!("A wild {} appears!", fight.opponent.species.display_name());
                    for round in &fight.rounds {
                        let what = match round.outcome {
                            RoundOutcome::PlayerHit => "you hit",
                            RoundOutcome::OpponentHit => "you got hit",
                            RoundOutcome::Clash => "clash",
                        };
                        println!(
                            "Round {}: {:?} vs {:?}, {what} ({} - {})",
                            round.round, round.player, round.opponent, round.player_hp, round.opponent_hp
                        );
                    }
                    match fight.result {
                        BattleResult::Win => println!("Victory!"),
                        BattleResult::Lose => println!("Defeat."),
                        BattleResult::Draw => println!("A draw."),
                    }
                }
            }
        }
        Command::Bonus { steps } => {
            let eaten = app.redeem_steps(steps, now)?;
            println!("{steps} steps earned {eaten} meal(s).");
        }
        Command::Restart => {
            app.restart(now)?;
            println!("A new egg appears.");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&app.status())?);
    } else {
        print!("{}", status_block(&app.status()));
    }
    Ok(())
}
