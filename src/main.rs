use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::Serialize;

use follow_circles::social::circles::{circles, CircleMethod};
use follow_circles::social::error::Result;
use follow_circles::social::export::to_dot;
use follow_circles::social::recommend::{explain, recommend_all, recommend_with_depth};
use follow_circles::social::report;
use follow_circles::social::settings::Settings;
use follow_circles::social::snapshot::Snapshot;
use follow_circles::social::utils::get_pb;
use follow_circles::time_it;

/// Follow graph queries: followings, friend recommendations and circles.
#[derive(Debug, Parser)]
#[command(name = "follow-circles", version)]
struct Cli {
    /// RON snapshot holding `users` and `follows`.
    snapshot: PathBuf,

    /// Settings file; defaults to ./follow-circles.ron when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as RON instead of text.
    #[arg(long)]
    ron: bool,

    /// Suppress timings and progress bars.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Users the given user follows.
    Following { user: String },
    /// Friend recommendations for one user.
    Recommend {
        user: String,
        #[arg(long)]
        depth: Option<usize>,
        /// Show which source produced each recommendation.
        #[arg(long)]
        explain: bool,
    },
    /// Friend recommendations for every user in the snapshot.
    RecommendAll {
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Partition every user into circles.
    Circles {
        #[arg(long, value_enum)]
        method: Option<CircleMethod>,
    },
    /// Graphviz DOT of the follow graph.
    Dot {
        #[arg(long)]
        undirected: bool,
    },
}

fn emit<T: Serialize>(as_ron: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if as_ron {
        println!("{}", to_string_pretty(value, PrettyConfig::default())?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();
    let quiet = cli.quiet;

    let settings = Settings::discover(cli.config.as_deref())?;

    let snapshot = time_it!(quiet = quiet; at once | "loading snapshot" =>
        Snapshot::load(&cli.snapshot)?
    );

    let relation = time_it!(quiet = quiet; at once | "building relation" =>
        snapshot.to_relation()
    );

    match cli.command {
        Command::Following { user } => {
            let followings = relation.followings_of(&user);
            emit(cli.ron, &followings, || report::following(followings))?;
        }
        Command::Recommend {
            user,
            depth,
            explain: false,
        } => {
            let depth = depth.unwrap_or(settings.depth);
            let recommended = time_it!(quiet = quiet; "recommending" =>
                recommend_with_depth(&relation, &user, depth)
            );
            emit(cli.ron, &recommended, || report::recommendations(&recommended))?;
        }
        Command::Recommend {
            user,
            depth,
            explain: true,
        } => {
            let depth = depth.unwrap_or(settings.depth);
            let explained = time_it!(quiet = quiet; "recommending" =>
                explain(&relation, &user, depth)
            );
            emit(cli.ron, &explained, || report::explained(&explained))?;
        }
        Command::RecommendAll { depth } => {
            let depth = depth.unwrap_or(settings.depth);
            let users = snapshot.all_users();
            let pb = get_pb(
                users.len() as u64,
                "Recommending",
                settings.progress && !quiet,
            );
            let all = time_it!(quiet = quiet; at once | "recommending for everyone" =>
                recommend_all(&relation, &users, depth, pb)
            );
            emit(cli.ron, &all, || report::all_recommendations(&all))?;
        }
        Command::Circles { method } => {
            let method = method.unwrap_or(settings.method);
            let users = snapshot.all_users();
            let found = time_it!(quiet = quiet; "generating circles" =>
                circles(&relation, &users, method)
            );
            emit(cli.ron, &found, || report::circles(&found))?;
        }
        Command::Dot { undirected } => {
            println!("{}", to_dot(&relation, undirected));
        }
    }

    if !quiet {
        eprintln!("Total run time => {:?}", start.elapsed());
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
