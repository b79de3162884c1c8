use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use edueasy::cli::{
    handle_advise_command, handle_budget_command, handle_calc_command, handle_chat_command,
    handle_history_command, handle_learn_command, handle_loan_command, handle_report_command,
    handle_settings_command, BudgetCommands, CalcArgs, LearnCommands, LoanCommands,
    ReportCommands, SettingsCommands,
};
use edueasy::config::{EduEasyPaths, Settings};
use edueasy::storage::Storage;

#[derive(Parser)]
#[command(
    name = "edueasy",
    version,
    about = "Student loan and budget tracker",
    long_about = "EduEasy tracks student loans, expenses and savings goals, shows how \
                  much of each day's income is left after loan payments, and asks an \
                  AI advisor for a second opinion."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan management commands
    #[command(subcommand)]
    Loan(LoanCommands),

    /// Expenses and savings goals
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Dashboard, daily analysis and usage reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Monthly payment, total paid and interest for a loan
    Calc(CalcArgs),

    /// Ask the AI advisor to analyze your loans
    Advise,

    /// Chat with the support assistant
    Chat {
        /// Send a single message instead of starting a session
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Financial literacy quizzes and badges
    #[command(subcommand)]
    Learn(LearnCommands),

    /// View or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show recent activity: loans, budget, settings and badges
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize data files and seed the starter loans
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "edueasy=debug" } else { "edueasy=warn" };
    let filter = EnvFilter::try_from_env("EDUEASY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = EduEasyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    let installed_at = storage.install.installed_at()?;

    match cli.command {
        Some(Commands::Loan(cmd)) => handle_loan_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, installed_at, cmd)?
        }
        Some(Commands::Calc(args)) => handle_calc_command(&settings, args)?,
        Some(Commands::Advise) => handle_advise_command(&storage, &settings)?,
        Some(Commands::Chat { message }) => handle_chat_command(&storage, &settings, message)?,
        Some(Commands::Learn(cmd)) => handle_learn_command(&storage, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, &mut settings, cmd)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, &settings, limit)?,
        Some(Commands::Init) => {
            println!("Initializing EduEasy at: {}", paths.base_dir().display());
            let seeded = storage.seed_if_empty()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if seeded > 0 {
                println!();
                println!("Starter loans have been created:");
                for loan in storage.loans.get_all()? {
                    println!("  - {} ({})", loan.title, loan.category);
                }
            }
            println!();
            println!("Run 'edueasy report dashboard' to see your overview.");
        }
        Some(Commands::Config) => {
            println!("EduEasy Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Activity log:    {}", paths.audit_log().display());
            println!("Installed:       {}", installed_at.format("%Y-%m-%d"));
            println!(
                "Initialized:     {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            print!("{}", edueasy::cli::settings::format_settings(&settings));
        }
        None => {
            println!("EduEasy - student loan and budget tracker");
            println!();
            println!("Run 'edueasy --help' for usage information.");
            println!("Run 'edueasy init' to get started.");
        }
    }

    Ok(())
}
