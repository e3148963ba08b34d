//! Arkham - Call of Cthulhu 7e investigator generator.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arkham_domain::game_systems::coc7e::Difficulty;
use arkham_domain::{AgeBracket, GenerationRequest};
use arkham_engine::infrastructure::export::render_text;
use arkham_engine::infrastructure::importers::RuleTableLoader;
use arkham_engine::infrastructure::settings::EngineSettings;
use arkham_engine::use_cases::skills::CheckOptions;
use arkham_engine::App;

#[derive(Debug, Parser)]
#[command(name = "arkham", version, about = "Call of Cthulhu 7e investigator generator")]
struct Cli {
    /// Seed for a reproducible run (overrides ARKHAM_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Rule table directory (overrides ARKHAM_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Save directory (overrides ARKHAM_SAVE_DIR)
    #[arg(long, global = true)]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Roll a new investigator
    Generate {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        player: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        /// Exact age (15-89); wins over --age-bracket
        #[arg(long)]
        age: Option<u32>,
        /// One of 15-19, 20-39, 40-49, 50-59, 60-69, 70-79, 80-89
        #[arg(long)]
        age_bracket: Option<AgeBracket>,
        #[arg(long)]
        occupation: Option<String>,
        /// File name in the save directory (default: <name>_<timestamp>)
        #[arg(long, short)]
        output: Option<String>,
        /// Print only, do not save
        #[arg(long)]
        no_save: bool,
    },
    /// Print a saved sheet
    Show { path: PathBuf },
    /// Export a saved sheet as text
    Export {
        path: PathBuf,
        /// Text file to write (default: beside the save, .txt)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Roll the insanity bout a saved sheet is due
    Insanity { path: PathBuf },
    /// Attempt recovery from the current insanity
    Recover { path: PathBuf },
    /// Roll a skill or characteristic check
    Check {
        path: PathBuf,
        /// Skill (侦查, 射击（手枪）) or characteristic (力量, POW)
        target: String,
        /// regular | hard | extreme
        #[arg(long, default_value = "regular")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 0)]
        bonus: u32,
        #[arg(long, default_value_t = 0)]
        penalty: u32,
        /// Push the roll once if it fails
        #[arg(long)]
        push: bool,
    },
    /// Lose sanity; a large enough loss rolls an insanity bout
    Sanity { path: PathBuf, amount: i32 },
    /// List the loaded occupations
    Occupations {
        /// Include the occupation skill lists
        #[arg(long, short)]
        verbose: bool,
    },
    /// List the language families
    Languages,
    /// List saved sheets
    List,
    /// Write the built-in rule tables into the data directory for editing
    InitData,
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arkham_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = EngineSettings::from_env()
        .context("Invalid environment configuration")?
        .with_seed(cli.seed);
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(dir) = cli.save_dir {
        settings.save_dir = dir;
    }
    tracing::debug!(?settings, "Settings loaded");

    if let Command::InitData = cli.command {
        let written = RuleTableLoader::new(&settings.data_dir).write_defaults()?;
        for path in written {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let app = App::from_settings(&settings);
    let use_cases = &app.use_cases;

    match cli.command {
        Command::Generate {
            name,
            player,
            gender,
            age,
            age_bracket,
            occupation,
            output,
            no_save,
        } => {
            let request = GenerationRequest {
                name,
                player,
                gender,
                age,
                age_bracket,
                occupation,
            };
            let generated = if no_save {
                use_cases.generation.generate(&request)?
            } else {
                use_cases
                    .generation
                    .generate_and_save(&request, output.as_deref())?
            };
            println!("{}", render_text(&generated.investigator));
            let summary = &generated.summary;
            let unspent = summary.occupation_allocation.unspent()
                + summary.interest_allocation.unspent();
            if unspent > 0 {
                println!("\n未分配技能点: {unspent}");
            }
            if let Some(path) = generated.path {
                println!("\n已保存: {}", path.display());
            }
        }
        Command::Show { path } => {
            println!("{}", use_cases.sheet.render(&path)?);
        }
        Command::Export { path, output } => {
            let written = use_cases.sheet.export(&path, output.as_deref())?;
            println!("已导出: {}", written.display());
        }
        Command::Insanity { path } => {
            let (report, saved) = use_cases.insanity.apply_saved(&path)?;
            println!("{}", report.message);
            if let Some(bout) = &report.bout {
                println!("{}: {}", bout.entry.name, bout.entry.description);
            }
            if let Some(phobia) = &report.phobia {
                println!("恐惧症 {}: {}", phobia.name, phobia.description);
            }
            if let Some(mania) = &report.mania {
                println!("躁狂症 {}: {}", mania.name, mania.description);
            }
            println!("已保存: {}", saved.display());
        }
        Command::Recover { path } => {
            let (outcome, saved) = use_cases.insanity.recover_saved(&path)?;
            match outcome.roll {
                Some(roll) => println!("{} (意志检定 {roll})", outcome.message),
                None => println!("{}", outcome.message),
            }
            println!("已保存: {}", saved.display());
        }
        Command::Check {
            path,
            target,
            difficulty,
            bonus,
            penalty,
            push,
        } => {
            let investigator = use_cases.sheet.load(&path)?;
            let options = CheckOptions {
                difficulty,
                bonus_dice: bonus,
                penalty_dice: penalty,
                push,
            };
            let report = use_cases.skills.check(&investigator, &target, options)?;
            let first = &report.first;
            println!(
                "{} {}: 掷骰 {:?} -> {} ({})",
                report.target, report.value, first.rolls, first.roll, first.level
            );
            if let Some(pushed) = &report.pushed {
                println!("孤注一掷: 掷骰 {} ({})", pushed.roll, pushed.level);
            }
            let verdict = if report.outcome().passed { "通过" } else { "未通过" };
            println!("结果: {verdict}");
        }
        Command::Sanity { path, amount } => {
            let (outcome, saved) = use_cases.insanity.lose_sanity_saved(&path, amount)?;
            println!(
                "理智值: {} -> {} (损失 {})",
                outcome.loss.previous,
                outcome.loss.current,
                outcome.loss.lost()
            );
            if let Some(report) = &outcome.report {
                println!("{}", report.message);
            }
            println!("已保存: {}", saved.display());
        }
        Command::Occupations { verbose } => {
            for occupation in use_cases.generation.occupations() {
                let credit = occupation.credit_rating();
                println!(
                    "{} 信用评级 {}-{} 技能点 {}",
                    occupation.name(),
                    credit.min,
                    credit.max,
                    occupation.skill_points()
                );
                if verbose {
                    let skills: Vec<String> = occupation
                        .skill_entries()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    println!("  {}", skills.join("、"));
                }
            }
        }
        Command::Languages => {
            for (family, languages) in use_cases.skills.language_families() {
                println!("{family}: {}", languages.join("、"));
            }
        }
        Command::List => {
            for path in use_cases.sheet.list()? {
                println!("{}", path.display());
            }
        }
        Command::InitData => {}
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
