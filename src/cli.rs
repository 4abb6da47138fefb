use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twentyfour::solver::EPSILON;
use twentyfour::utils::{format_value, strip_outer_parens};
use twentyfour::{
    Card, DEFAULT_TARGET, ExpressionSolver, SolverConfig, SurveyConfig, Term, Verdict,
    check_answer, deal_with_rng, parse_cards, survey,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Combine every card with + - * / to reach the target
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Solve the 24-point card game, or deal a hand and play it")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Target value the expression must reach
    #[arg(
        short,
        long,
        global = true,
        allow_negative_numbers = true,
        default_value_t = DEFAULT_TARGET
    )]
    pub target: f64,

    /// Absolute tolerance when comparing against the target
    #[arg(long, global = true, default_value_t = EPSILON)]
    pub tolerance: f64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, global = true, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal a random hand and show its solution
    Deal {
        /// Number of cards to deal
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=6))]
        cards: u8,
        /// Seed for a reproducible deal
        #[arg(short, long)]
        seed: Option<u64>,
        /// Do not show the value next to A, J, Q and K
        #[arg(long)]
        no_hints: bool,
        /// Only say whether the hand can be solved
        #[arg(long)]
        hide: bool,
    },
    /// Find an expression for the given cards (A, 2-10, J, Q, K or numbers)
    Solve {
        #[arg(required = true, allow_negative_numbers = true)]
        cards: Vec<String>,
    },
    /// Check your own expression for a hand
    Check {
        /// The hand, e.g. "3 3 8 8"
        #[arg(short, long, allow_hyphen_values = true)]
        cards: String,
        /// Your answer, e.g. "8 / (3 - 8 / 3)"
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Deal many hands and count how many can be solved
    Survey {
        /// Number of cards per hand
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=6))]
        cards: u8,
        /// Number of hands to deal
        #[arg(long, default_value_t = 1000)]
        hands: usize,
        /// Seed for a reproducible survey
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub target: f64,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Validate parsed arguments and turn them into configuration
pub fn into_config(args: CliArgs) -> Result<CliConfig> {
    ensure!(args.target.is_finite(), "Target must be a finite number");
    ensure!(
        args.tolerance.is_finite() && args.tolerance > 0.0,
        "Tolerance must be a positive number"
    );

    Ok(CliConfig {
        command: args.command,
        target: args.target,
        solver: SolverConfig {
            tolerance: args.tolerance,
        },
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    into_config(CliArgs::parse())
}

/// Send library logs to stderr, without timestamps, at `level` and above
pub fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .context("Logger was already initialized")
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One line showing the hand, with values for letter ranks when `hints` is set.
pub fn render_hand(hand: &[Card], hints: bool) -> String {
    hand.iter()
        .map(|card| if hints { card.hint() } else { card.display() })
        .collect::<Vec<_>>()
        .join("  ")
}

/// The solver result as shown to a player.
pub fn render_solution(solution: Option<&str>, target: f64) -> String {
    match solution {
        Some(expr) => format!("{} = {}", strip_outer_parens(expr), format_value(target)),
        None => "No solution.".to_string(),
    }
}

fn read_hand(text: &str) -> Result<Vec<Term>> {
    let terms = parse_cards(text)
        .context("Invalid cards; use numbers or the letters A, J, Q, K")?;
    let Some(terms) = terms else {
        bail!("No cards given");
    };
    ensure!(terms.len() >= 2, "Enter at least two cards");
    Ok(terms)
}

fn run_deal(
    config: &CliConfig,
    cards: u8,
    seed: Option<u64>,
    hints: bool,
    hide: bool,
) -> Result<()> {
    let hand = deal_with_rng(usize::from(cards), &mut rng_from(seed))?;
    println!("{}", render_hand(&hand, hints));

    let terms: Vec<Term> = hand.iter().map(Term::from).collect();
    let solution = ExpressionSolver::with_config(config.solver).solve(&terms, config.target);

    if hide {
        match solution {
            Some(_) => println!("This hand can make {}.", format_value(config.target)),
            None => println!("No solution."),
        }
    } else {
        println!("{}", render_solution(solution.as_deref(), config.target));
    }
    Ok(())
}

fn run_solve(config: &CliConfig, cards: &[String]) -> Result<()> {
    let terms = read_hand(&cards.join(" "))?;
    info!(
        "Solving [{}] for {}",
        terms
            .iter()
            .map(Term::expression)
            .collect::<Vec<_>>()
            .join(", "),
        config.target
    );

    let start = Instant::now();
    let solution = ExpressionSolver::with_config(config.solver).solve(&terms, config.target);
    info!("Search took {:.4}s", start.elapsed().as_secs_f64());

    if solution.is_none() {
        warn!("No matching expression found");
    }
    println!("{}", render_solution(solution.as_deref(), config.target));
    Ok(())
}

fn run_check(config: &CliConfig, cards: &str, expression: &str) -> Result<()> {
    let terms = read_hand(cards)?;
    let verdict = check_answer(&terms, expression, config.target, &config.solver)
        .with_context(|| format!("Could not evaluate '{}'", expression))?;

    match verdict {
        Verdict::Correct => println!("Correct!"),
        Verdict::WrongValue { value } => println!(
            "Not quite: {} = {}, not {}",
            expression.trim(),
            format_value(value),
            format_value(config.target)
        ),
        Verdict::WrongCards { expected, found } => println!(
            "Use each card exactly once: hand is [{}], answer uses [{}]",
            expected.iter().map(|v| format_value(*v)).collect::<Vec<_>>().join(", "),
            found.iter().map(|v| format_value(*v)).collect::<Vec<_>>().join(", ")
        ),
    }
    Ok(())
}

fn run_survey(config: &CliConfig, cards: u8, hands: usize, seed: Option<u64>) -> Result<()> {
    let survey_config = SurveyConfig {
        num_cards: usize::from(cards),
        hands,
        target: config.target,
        solver: config.solver,
    };
    let report = survey(&survey_config, &mut rng_from(seed))?;
    println!(
        "{} of {} hands can make {} ({:.1}%)",
        report.solvable,
        report.hands,
        format_value(config.target),
        report.ratio() * 100.0
    );
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(config.log_level.clone().into())?;

    match &config.command {
        Command::Deal {
            cards,
            seed,
            no_hints,
            hide,
        } => run_deal(&config, *cards, *seed, !no_hints, *hide),
        Command::Solve { cards } => run_solve(&config, cards),
        Command::Check { cards, expression } => run_check(&config, cards, expression),
        Command::Survey { cards, hands, seed } => run_survey(&config, *cards, *hands, *seed),
    }
}
