//! Command-line host for `folio_core`.
//!
//! # Responsibility
//! - Load a JSON catalog and print the filtered listing for given flags.
//! - Print facet options offered by listing controls.
//! - Read and update the persisted theme preference.

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::db::open_db;
use folio_core::{
    format_display_date, init_logging, Catalog, ContentItem, DateRange, FilterState,
    PreferenceStore, RangeFilter, Selection, Sort, SortDirection, SortKey, SqlitePreferenceStore,
    TagMatch, Theme,
};
use log::error;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio listing and preference tool")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value_t = folio_core::default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "FOLIO_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter and sort a catalog
    List(ListArgs),
    /// Print categories, tags and industries found in a catalog
    Facets {
        #[arg(long, env = "FOLIO_CATALOG")]
        catalog: PathBuf,
    },
    /// Show or change the theme preference
    Theme {
        #[arg(long, env = "FOLIO_DB")]
        db: PathBuf,
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Toggle,
    Set { theme: ThemeArg },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long, env = "FOLIO_CATALOG")]
    catalog: PathBuf,
    /// Case-insensitive text matched against title, excerpt and tags
    #[arg(long, default_value = "")]
    query: String,
    /// Category label, or `all`
    #[arg(long, default_value = "all")]
    category: String,
    /// Required tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Match any selected tag instead of all of them
    #[arg(long)]
    any_tag: bool,
    /// completed|in-progress|planned|all
    #[arg(long, default_value = "all")]
    status: String,
    /// beginner|intermediate|advanced|all
    #[arg(long, default_value = "all")]
    difficulty: String,
    #[arg(long, default_value = "all")]
    industry: String,
    #[arg(long)]
    featured: bool,
    #[arg(long)]
    team_min: Option<u32>,
    #[arg(long)]
    team_max: Option<u32>,
    /// Earliest date, YYYY-MM-DD
    #[arg(long)]
    from: Option<String>,
    /// Latest date, YYYY-MM-DD
    #[arg(long)]
    to: Option<String>,
    #[arg(long, value_enum)]
    sort: Option<SortArg>,
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    order: OrderArg,
    /// Print matching items as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Title,
    Date,
    Difficulty,
    Performance,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OrderArg {
    Asc,
    #[default]
    Desc,
}

impl ListArgs {
    fn filter_state(&self) -> Result<FilterState, Box<dyn Error>> {
        let sort = self.sort.map(|key| {
            let key = match key {
                SortArg::Title => SortKey::Title,
                SortArg::Date => SortKey::Date,
                SortArg::Difficulty => SortKey::Difficulty,
                SortArg::Performance => SortKey::Performance,
            };
            let direction = match self.order {
                OrderArg::Asc => SortDirection::Ascending,
                OrderArg::Desc => SortDirection::Descending,
            };
            Sort::new(key, direction)
        });

        Ok(FilterState {
            query: self.query.clone(),
            category: Selection::label(&self.category),
            tags: self.tags.clone(),
            tag_match: if self.any_tag {
                TagMatch::Any
            } else {
                TagMatch::All
            },
            status: Selection::parse(&self.status)?,
            difficulty: Selection::parse(&self.difficulty)?,
            industry: Selection::label(&self.industry),
            featured_only: self.featured,
            team_size: RangeFilter::new(self.team_min, self.team_max),
            date_range: DateRange::new(self.from.clone(), self.to.clone()),
            sort,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("folio: logging disabled: {err}");
        }
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::List(args) => {
            let state = args.filter_state()?;
            let catalog = Catalog::load_json(&args.catalog)?;
            let items = folio_core::filter_and_sort(catalog.items(), &state);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("No items found.");
            } else {
                for item in items {
                    println!("{}", render_row(item));
                }
            }
        }
        Command::Facets { catalog } => {
            let catalog = Catalog::load_json(&catalog)?;
            let options = catalog.facet_options();
            println!("categories: {}", catalog.category_choices().join(", "));
            println!("tags: {}", options.tags.join(", "));
            println!("industries: {}", options.industries.join(", "));
        }
        Command::Theme { db, action } => {
            let conn = open_db(&db)?;
            let store = SqlitePreferenceStore::try_new(&conn)?;
            let theme = match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => store.load_theme()?,
                ThemeAction::Toggle => store.toggle_theme()?,
                ThemeAction::Set { theme } => {
                    let theme = Theme::from(theme);
                    store.save_theme(theme)?;
                    theme
                }
            };
            println!("{theme}");
        }
    }
    Ok(())
}

fn render_row(item: &ContentItem) -> String {
    let date = item
        .parsed_date()
        .map(format_display_date)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        item.id,
        item.title,
        item.category,
        date,
        item.tags.join(", ")
    )
}
