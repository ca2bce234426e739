//! Command-line interface definition.

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

/// Commune - administrative terminal for a municipality's school system
#[derive(Parser, Debug)]
#[command(name = "commune")]
#[command(version)]
#[command(about = "Browse, filter, and export the municipality's school records", long_about = None)]
pub struct Cli {
    /// Role of the signed-in user
    #[arg(long, global = true, default_value = "admin")]
    pub role: String,

    /// Display name of the signed-in user
    #[arg(long, global = true, default_value = "Stjórnandi")]
    pub user: String,

    /// UI language (is or en); overrides and persists the saved preference
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Act as an unauthenticated visitor
    #[arg(long, global = true)]
    pub anonymous: bool,

    /// Directory of JSON record sets (built-in sample data otherwise)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the navigation menu as filtered for the role
    Nav,

    /// Render a page: /, /skolar, /nemendur, /adstandendur, /starfsmenn,
    /// /vinnuskyrslur, /astundun
    Page {
        /// Route path, e.g. /nemendur
        route: String,

        #[command(flatten)]
        table: TableArgs,

        /// List a filter's option domain instead of the table
        #[arg(long, value_name = "KEY")]
        options: Option<String>,

        /// Students page residency tab: allir, heima, i_odru, ur_odru
        #[arg(long)]
        tab: Option<String>,

        /// Work-report column groups (comma-separated ids)
        #[arg(long)]
        groups: Option<String>,

        /// Select a row by id (repeatable; work reports)
        #[arg(long, value_name = "ID")]
        select: Vec<String>,

        /// Select every visible row (work reports)
        #[arg(long)]
        select_all: bool,

        /// Narrow attendance to one school
        #[arg(long)]
        school: Option<String>,

        /// Show only flagged attendance records
        #[arg(long)]
        flagged: bool,
    },

    /// Export a page's visible rows to a file
    Export {
        /// Route path, e.g. /nemendur
        route: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Work-report column groups (comma-separated ids)
        #[arg(long)]
        groups: Option<String>,

        /// Export only these row ids (repeatable; work reports)
        #[arg(long, value_name = "ID")]
        select: Vec<String>,
    },

    /// Preview recipients and mock-send a mass mail
    Mail {
        /// Recipient kind
        #[arg(long, value_enum)]
        to: MailTarget,

        /// School to address (repeatable; required to match anyone)
        #[arg(long)]
        school: Vec<String>,

        /// Student year to address (repeatable; empty means all years)
        #[arg(long)]
        year: Vec<i64>,

        /// Subject line
        #[arg(long, default_value = "")]
        subject: String,

        /// Message body
        #[arg(long, default_value = "")]
        body: String,

        /// Attachment name to carry along (repeatable)
        #[arg(long, value_name = "NAME")]
        attach: Vec<String>,
    },

    /// Publish and list news articles
    News {
        #[command(subcommand)]
        command: NewsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum NewsCommand {
    /// Publish an article into the demo feed
    Publish {
        /// Article title
        #[arg(long)]
        title: String,

        /// Article body
        #[arg(long, default_value = "")]
        body: String,

        /// First day the article is shown (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last day the article is shown (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Limit the audience to these schools (repeatable; all otherwise)
        #[arg(long)]
        school: Vec<String>,
    },

    /// List the articles visible on a date
    List {
        /// Date to evaluate validity windows on (YYYY-MM-DD; today otherwise)
        #[arg(long)]
        date: Option<String>,

        /// Show only articles addressed to this school
        #[arg(long)]
        school: Option<String>,
    },
}

/// Table flags shared by page rendering and export.
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Search string matched against every column
    #[arg(long)]
    pub search: Option<String>,

    /// Exact-match filter as KEY=VALUE (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Sort by this column key
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Csv,
    Xls,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MailTarget {
    /// Staff of the selected schools
    Staff,
    /// Guardians of matched students
    Guardians,
    /// Adult students
    Students,
}
