use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pokego::app::{self, Request};
use pokego::assets::{AssetStore, DirStore, EmbeddedStore};
use pokego::config::{self, Settings};
use pokego::generation::GenerationIndex;
use pokego::language::Language;
use pokego::roster::Roster;

#[derive(Parser, Debug)]
#[command(name = "pokego")]
#[command(about = "Print a random colored pokemon to the terminal")]
struct Args {
    /// Do not display pokemon name
    #[arg(long)]
    no_title: bool,

    /// Show the shiny version of a pokemon instead
    #[arg(short, long)]
    shiny: bool,

    /// Generation number, range ("1-3") or list ("1,4,7")
    #[arg(short, long, default_value = "1-8")]
    generation: String,

    /// Language to print the pokemon name in, one of (english, french, japanese, chinese)
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Show this pokemon instead of a random one
    #[arg(short, long)]
    name: Option<String>,

    /// Random seed (uses random seed if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Read assets from this directory instead of the embedded bundle (overrides POKEGO_ASSETS)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// List every pokemon instead of drawing one
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = Args::parse();
    config::init_logging();

    if let Err(err) = run(args) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::resolve(args.assets);
    let store: Box<dyn AssetStore> = match &settings.assets_root {
        Some(root) => {
            log::debug!("asset root: {}", root.display());
            Box::new(DirStore::new(root))
        }
        None => {
            let embedded = EmbeddedStore::new();
            log::debug!("embedded bundle: {} files", embedded.len());
            Box::new(embedded)
        }
    };
    let roster = Roster::load(store.as_ref())?;
    let index = GenerationIndex::standard();
    if let Some(missing) = app::uncovered(&roster, &index) {
        log::warn!("roster has {} entries; numbers {} cannot be drawn", roster.len(), missing);
    }

    let language = Language::from_code(&args.language);
    if language.is_none() {
        log::debug!("unsupported language '{}', names will be empty", args.language);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        app::list(&roster, language, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| rand::random());
    log::debug!("seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let request = Request {
        generation: args.generation,
        shiny: args.shiny,
        show_title: !args.no_title,
        language,
        name: args.name,
    };

    let selection = app::run(&request, &roster, &index, store.as_ref(), &mut rng, &mut out)?;
    out.flush()?;
    log::debug!(
        "drew #{} {} ({}): {:?}",
        selection.number,
        selection.identifier,
        selection.variant,
        selection.outcome
    );

    Ok(())
}
