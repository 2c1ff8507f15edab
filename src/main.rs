//! Ringside - Entry Point
//!
//! Assembles the demo roster, wires up ability selection (interactive or
//! seeded-random), and drives a single duel to completion.

use std::io::{self, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use ringside::combatant::{FightStyle, FighterStatus};
use ringside::core::Result;
use ringside::duel::{AbilitySelector, Duel, DuelOutcome};
use ringside::effect::{Ability, Command, CompareOp, Condition, NumericValue, RingAction, Side};
use ringside::roster::Roster;

#[derive(Parser, Debug)]
#[command(name = "ringside")]
#[command(about = "Run a duel between two roster fighters")]
struct Args {
    /// First fighter's name
    #[arg(long, default_value = "Dart")]
    first: String,

    /// Second fighter's name
    #[arg(long, default_value = "Brick")]
    second: String,

    /// Maximum rounds before calling the duel undecided
    #[arg(long, default_value_t = 50)]
    max_rounds: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt for the first fighter's abilities on stdin
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// List the roster and exit
    #[arg(long)]
    list: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct DuelResult {
    outcome: DuelOutcome,
    winner: Option<String>,
    rounds: u32,
    first: FighterStatus,
    second: FighterStatus,
    seed: u64,
}

/// Picks a random ability each turn
struct RandomSelector {
    rng: StdRng,
}

impl AbilitySelector for RandomSelector {
    fn select(&mut self, _fighter: &str, abilities: &[&str]) -> usize {
        self.rng.gen_range(1..=abilities.len())
    }
}

/// Prompts on stdin; anything unparseable or out of range passes the turn
struct StdinSelector;

impl AbilitySelector for StdinSelector {
    fn select(&mut self, fighter: &str, abilities: &[&str]) -> usize {
        println!("{}, select ability:", fighter);
        for (i, name) in abilities.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return 0;
        }
        line.trim().parse().unwrap_or(0)
    }
}

/// Routes each fighter's turn to its own selector
struct SplitSelector<'a> {
    first_name: String,
    first: &'a mut dyn AbilitySelector,
    second: &'a mut dyn AbilitySelector,
}

impl AbilitySelector for SplitSelector<'_> {
    fn select(&mut self, fighter: &str, abilities: &[&str]) -> usize {
        if fighter == self.first_name {
            self.first.select(fighter, abilities)
        } else {
            self.second.select(fighter, abilities)
        }
    }
}

fn demo_roster() -> Result<Roster> {
    let mut roster = Roster::new();

    roster.register_fighter("Dart", FightStyle::Rushdown, 100.0)?;
    roster.register_fighter("Brick", FightStyle::Heavy, 160.0)?;
    roster.register_fighter("Wisp", FightStyle::Evasive, 90.0)?;
    roster.register_fighter("Anchor", FightStyle::Grappler, 150.0)?;

    roster.register_ability(Ability::new(
        "Jab",
        Command::Damage {
            target: Side::Opponent,
            amount: 12.0,
        },
    ))?;
    roster.register_ability(Ability::new(
        "Flurry",
        Command::Recurring {
            turns: 3,
            effect: Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 5.0,
            }),
        },
    ))?;
    roster.register_ability(Ability::new(
        "Finisher",
        // Big hit against a weakened opponent, light hit otherwise
        Command::Branch {
            condition: Condition::Numeric {
                left: NumericValue::Health(Side::Opponent),
                op: CompareOp::Lt,
                right: NumericValue::Constant(40.0),
            },
            then_branch: Some(Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 25.0,
            })),
            else_branch: Some(Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 8.0,
            })),
        },
    ))?;
    roster.register_ability(Ability::new(
        "Slam",
        Command::Damage {
            target: Side::Opponent,
            amount: 18.0,
        },
    ))?;
    roster.register_ability(Ability::new(
        "Brace",
        Command::Heal {
            target: Side::Actor,
            amount: 12.0,
        },
    ))?;
    roster.register_ability(Ability::new(
        "Ring Toss",
        // Throw the opponent out; they climb back in two of their turns later
        Command::Sequence(vec![
            Command::Ring {
                target: Side::Opponent,
                action: RingAction::Leave,
            },
            Command::Delayed {
                turns: 2,
                effect: Box::new(Command::Ring {
                    target: Side::Opponent,
                    action: RingAction::Enter,
                }),
            },
        ]),
    ))?;
    roster.register_ability(Ability::new(
        "Needle",
        Command::Damage {
            target: Side::Opponent,
            amount: 10.0,
        },
    ))?;
    roster.register_ability(Ability::new(
        "Choke",
        Command::Recurring {
            turns: 2,
            effect: Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 8.0,
            }),
        },
    ))?;

    roster.teach("Dart", "Jab")?;
    roster.teach("Dart", "Flurry")?;
    roster.teach("Dart", "Finisher")?;
    roster.teach("Brick", "Slam")?;
    roster.teach("Brick", "Brace")?;
    roster.teach("Brick", "Ring Toss")?;
    roster.teach("Wisp", "Needle")?;
    roster.teach("Wisp", "Flurry")?;
    roster.teach("Anchor", "Slam")?;
    roster.teach("Anchor", "Choke")?;
    roster.teach("Anchor", "Ring Toss")?;

    Ok(roster)
}

fn print_status(status: &FighterStatus) {
    println!(
        "  {} [{}] HP: {:.0}{}",
        status.name,
        status.style,
        status.current_health,
        if status.in_ring { "" } else { " (out of ring)" }
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ringside=info")),
        )
        .init();

    let args = Args::parse();
    let roster = demo_roster()?;

    if args.list {
        println!("=== Roster ===");
        for f in roster.fighters() {
            println!(
                "{} ({}, HP: {:.0}, abilities: {})",
                f.name,
                f.style,
                f.max_health,
                f.abilities.len()
            );
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| rand::random());
    tracing::info!(seed, "ringside starting");

    let first = roster.spawn(&args.first)?;
    let second = roster.spawn(&args.second)?;
    let text = args.format != "json";

    if text {
        println!("=== DUEL START ===");
        println!("{} VS {}\n", first.name, second.name);
    }

    let mut duel = Duel::new(first, second);

    let mut random_one = RandomSelector {
        rng: StdRng::seed_from_u64(seed),
    };
    let mut random_two = RandomSelector {
        rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
    };
    let mut stdin = StdinSelector;

    let mut selector = SplitSelector {
        first_name: args.first.clone(),
        first: if args.interactive {
            &mut stdin
        } else {
            &mut random_one
        },
        second: &mut random_two,
    };

    while duel.outcome == DuelOutcome::Undecided && duel.round <= args.max_rounds {
        let round = duel.round;
        duel.step_turn(&mut selector);
        if text {
            println!("--- Round {} ---", round);
            for status in duel.status() {
                print_status(&status);
            }
        }
    }

    if text {
        println!("\n=== DUEL END ===");
        match duel.winner() {
            Some(winner) => println!("{} WINS!", winner.name),
            None if duel.outcome == DuelOutcome::Draw => println!("Double knockout - draw!"),
            None => println!("No decision after {} rounds.", args.max_rounds),
        }
    } else {
        let [first_status, second_status] = duel.status();
        let result = DuelResult {
            outcome: duel.outcome,
            winner: duel.winner().map(|f| f.name.clone()),
            rounds: duel.round,
            first: first_status,
            second: second_status,
            seed,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
