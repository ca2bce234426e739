//! The commune terminal: the page layer over `commune-lib`.

mod args;
mod config;
mod data;
mod flows;
mod pages;
mod render;

use std::fs;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use commune_lib::access::AccessGate;
use commune_lib::access::AccessPolicy;
use commune_lib::access::PageDecision;
use commune_lib::access::User;
use commune_lib::access::default_nav;
use commune_lib::export;
use commune_lib::i18n::I18n;
use commune_lib::model::Record;
use commune_lib::model::Value;
use commune_lib::table::FilterSpec;
use commune_lib::table::TableState;
use commune_lib::table::compute_visible;
use commune_lib::table::filter_options;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::args::Cli;
use crate::args::Command;
use crate::args::ExportFormat;
use crate::args::TableArgs;
use crate::data::DataSet;
use crate::pages::Page;
use crate::pages::PageOptions;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Villa: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create("commune-cli.log").context("creating log file")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .context("initializing logger")?;

    let language = config::resolve_language(cli.lang.as_deref());
    let i18n = I18n::new(language);

    let dataset = match &cli.data {
        Some(dir) => DataSet::load(dir)?,
        None => DataSet::sample(),
    };

    let user = (!cli.anonymous).then(|| User::new(&cli.user, &cli.role));
    let gate = AccessGate::new(AccessPolicy::municipal());

    match cli.command {
        Command::Nav => {
            let role = user.as_ref().map(|u| u.role.as_str()).unwrap_or("");
            for item in gate.filter_nav(&default_nav(), role) {
                println!("{}  {}", item.route, i18n.t(&item.label_key));
            }
            Ok(())
        }
        Command::Page {
            route,
            table,
            options,
            tab,
            groups,
            select,
            select_all,
            school,
            flagged,
        } => {
            guard(&gate, user.as_ref(), &route, &i18n)?;
            if route == "/" {
                print!("{}", pages::overview::render(&dataset, &i18n));
                return Ok(());
            }

            let page_options = PageOptions {
                tab,
                groups,
                school,
                flagged,
            };
            let page = build_page(&route, &dataset, &i18n, &page_options)?;

            if let Some(key) = options {
                return print_filter_options(&page, &key);
            }

            let mut state = table_state(&page, &table);
            for id in select {
                state.toggle_select_one(id);
            }
            let visible = compute_visible(&page.records, &page.columns, &state);
            if select_all {
                state.toggle_select_all(&visible);
            }

            print!("{}", render::heading(page.title_key, page.description_key, &i18n));
            println!();
            print!(
                "{}",
                render::table(&page.columns, &visible, page.records.len(), &state, &i18n)
            );
            if let Some(summary) = &page.summary {
                println!();
                print!("{summary}");
            }
            Ok(())
        }
        Command::Export {
            route,
            format,
            out,
            table,
            groups,
            select,
        } => {
            guard(&gate, user.as_ref(), &route, &i18n)?;
            let page_options = PageOptions {
                groups,
                ..PageOptions::default()
            };
            let page = build_page(&route, &dataset, &i18n, &page_options)?;

            let state = table_state(&page, &table);
            let mut visible = compute_visible(&page.records, &page.columns, &state);
            // An explicit row selection exports only those rows.
            if !select.is_empty() {
                visible.retain(|r| select.iter().any(|id| id == r.id()));
            }

            write_export(&out, format, &visible, &page)?;
            println!(
                "{}: {} ({} {})",
                i18n.t("common.flyjaUt"),
                out.display(),
                visible.len(),
                i18n.t("common.faerslur")
            );
            Ok(())
        }
        Command::Mail {
            to,
            school,
            year,
            subject,
            body,
            attach,
        } => {
            guard(&gate, user.as_ref(), "/postur", &i18n)?;
            flows::mail(&dataset, &i18n, to, school, year, subject, body, attach)
        }
        Command::News { command } => {
            guard(&gate, user.as_ref(), "/frettir", &i18n)?;
            flows::news(&i18n, command)
        }
    }
}

/// Applies the gate's page decision, turning denials into errors the page
/// layer presents.
fn guard(gate: &AccessGate, user: Option<&User>, route: &str, i18n: &I18n) -> Result<()> {
    match gate.guard_page(user, route, None) {
        PageDecision::Allow => Ok(()),
        PageDecision::RedirectToLogin => bail!("{}", i18n.t("auth.login")),
        PageDecision::Forbidden => {
            bail!("{}. {}", i18n.t("auth.accessDenied"), i18n.t("auth.noPermission"))
        }
    }
}

fn build_page(
    route: &str,
    dataset: &DataSet,
    i18n: &I18n,
    options: &PageOptions,
) -> Result<Page> {
    pages::build(route, dataset, i18n, options)
        .with_context(|| format!("no page at route '{route}'"))
}

/// Builds table state from the shared table flags.
fn table_state(page: &Page, args: &TableArgs) -> TableState {
    let mut state = if page.selectable {
        TableState::with_selection()
    } else {
        TableState::new()
    };

    if let Some(search) = &args.search {
        state.set_search(search);
    }
    for entry in &args.filters {
        match entry.split_once('=') {
            Some((key, value)) => state.set_filter(key, parse_value(value)),
            None => log::warn!("ignoring malformed filter '{entry}' (expected KEY=VALUE)"),
        }
    }
    if let Some(key) = &args.sort {
        state.toggle_sort(&page.columns, key);
        if args.desc {
            state.toggle_sort(&page.columns, key);
        }
    }
    state
}

/// Interprets filter text the way record fields are typed: whole numbers
/// and decimals as numbers, `true`/`false` as booleans, anything else as
/// a string.
fn parse_value(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

fn print_filter_options(page: &Page, key: &str) -> Result<()> {
    let spec = page
        .filters
        .iter()
        .find(|f| f.key == key)
        .cloned()
        .unwrap_or_else(|| FilterSpec::new(key, key));

    println!("{}:", spec.label);
    for option in filter_options(&page.records, &spec) {
        println!("  {}", option.display());
    }
    Ok(())
}

fn write_export(
    out: &Path,
    format: ExportFormat,
    visible: &[&Record],
    page: &Page,
) -> Result<()> {
    let document = match format {
        ExportFormat::Csv => export::write_csv(visible, &page.columns),
        ExportFormat::Xls => export::write_excel(visible, &page.columns),
    };
    fs::write(out, document).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_typing() {
        assert_eq!(parse_value("2012"), Value::Int(2012));
        assert_eq!(parse_value("87.5"), Value::Float(87.5));
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("Austurskóli"), Value::String("Austurskóli".into()));
    }

    #[test]
    fn test_desc_flag_flips_direction() {
        let page = pages::build(
            "/skolar",
            &DataSet::sample(),
            &I18n::default(),
            &PageOptions::default(),
        )
        .unwrap();

        let args = TableArgs {
            sort: Some("nafn".into()),
            desc: true,
            ..TableArgs::default()
        };
        let state = table_state(&page, &args);
        let sort = state.sort.unwrap();
        assert_eq!(sort.key, "nafn");
        assert_eq!(sort.direction, commune_lib::table::Direction::Desc);
    }
}
