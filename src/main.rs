use anyhow::{anyhow, Context, Result};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{debug, warn};

use admin_table::config::config::Config;
use admin_table::data::loaders::load_records;
use admin_table::display::{render_to_string, DisplayOptions};
use admin_table::export::DataExporter;
use admin_table::logging;
use admin_table::notify::{ConsoleNotifier, Notifier};
use admin_table::view::{
    ColumnDescriptor, FilterDescriptor, SortDirection, TableOptions, TableView,
};
use admin_table::Record;

#[derive(Debug, Default)]
struct CliArgs {
    file: Option<PathBuf>,
    columns: Option<Vec<String>>,
    key: Option<String>,
    search: Option<String>,
    filters: Vec<(String, String)>,
    sort: Option<(String, SortDirection)>,
    page: Option<usize>,
    page_size: Option<usize>,
    no_paginate: bool,
    badges: Vec<String>,
    export: Option<PathBuf>,
    no_color: bool,
    generate_config: bool,
    help: bool,
}

fn print_help() {
    println!("admin-table - search, filter, sort and page through JSON/CSV records");
    println!();
    println!("Usage: admin-table [OPTIONS] <FILE.json|FILE.csv>");
    println!();
    println!("Options:");
    println!("  --columns a,b,c       Columns to show (default: every field)");
    println!("  --key FIELD           Field identifying each row (default: id)");
    println!("  --search TEXT         Free-text search across the shown columns");
    println!("  --filter FIELD=VALUE  Keep rows whose FIELD equals VALUE (repeatable)");
    println!("  --sort FIELD[:desc]   Sort by FIELD, ascending unless :desc");
    println!("  --page N              Page to show (default: 1)");
    println!("  --page-size N         Rows per page (default from config)");
    println!("  --no-paginate         Show every matching row");
    println!("  --badge FIELD         Render FIELD as a coloured status badge (repeatable)");
    println!("  --export PATH         Export the matching rows to PATH (.csv or .json)");
    println!("  --no-color            Disable colours");
    println!("  --generate-config     Write a commented default config file and exit");
    println!("  -h, --help            Show this help");
}

fn next_value<'a, I: Iterator<Item = &'a String>>(iter: &mut I, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_number(value: &str, flag: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .with_context(|| format!("{} expects a number, got {:?}", flag, value))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--generate-config" => cli.generate_config = true,
            "--no-paginate" => cli.no_paginate = true,
            "--no-color" => cli.no_color = true,
            "--columns" => {
                let value = next_value(&mut iter, arg)?;
                cli.columns = Some(
                    value
                        .split(',')
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty())
                        .collect(),
                );
            }
            "--key" => cli.key = Some(next_value(&mut iter, arg)?),
            "--search" => cli.search = Some(next_value(&mut iter, arg)?),
            "--filter" => {
                let value = next_value(&mut iter, arg)?;
                let (field, wanted) = value
                    .split_once('=')
                    .ok_or_else(|| anyhow!("--filter expects FIELD=VALUE, got {:?}", value))?;
                cli.filters
                    .push((field.trim().to_string(), wanted.trim().to_string()));
            }
            "--sort" => {
                let value = next_value(&mut iter, arg)?;
                let (field, direction) = match value.rsplit_once(':') {
                    Some((field, "desc")) => (field, SortDirection::Descending),
                    Some((field, "asc")) => (field, SortDirection::Ascending),
                    _ => (value.as_str(), SortDirection::Ascending),
                };
                cli.sort = Some((field.to_string(), direction));
            }
            "--page" => cli.page = Some(parse_number(&next_value(&mut iter, arg)?, arg)?),
            "--page-size" => {
                cli.page_size = Some(parse_number(&next_value(&mut iter, arg)?, arg)?)
            }
            "--badge" => cli.badges.push(next_value(&mut iter, arg)?),
            "--export" => cli.export = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            flag if flag.starts_with("--") => return Err(anyhow!("Unknown option: {}", flag)),
            file => {
                if cli.file.is_some() {
                    return Err(anyhow!("Only one data file may be given"));
                }
                cli.file = Some(PathBuf::from(file));
            }
        }
    }

    Ok(cli)
}

/// Every field seen across the records, in name order
fn all_fields(records: &[Record]) -> Vec<String> {
    let fields: BTreeSet<&str> = records.iter().flat_map(|r| r.field_names()).collect();
    fields.into_iter().map(|f| f.to_string()).collect()
}

fn build_columns(fields: &[String], badges: &[String]) -> Vec<ColumnDescriptor> {
    fields
        .iter()
        .map(|field| {
            let column = ColumnDescriptor::new(field.clone(), field.clone());
            if badges.contains(field) {
                column.with_status_badge()
            } else {
                column
            }
        })
        .collect()
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    if cli.help {
        print_help();
        return Ok(());
    }

    if cli.generate_config {
        let path = Config::get_config_path()?;
        Config::generate_default(&path)?;
        println!("Configuration file created at: {:?}", path);
        return Ok(());
    }

    let config = Config::load()?;
    logging::init_tracing(&config.logging.level);
    debug!("CLI arguments: {:?}", cli);

    let file = cli
        .file
        .clone()
        .ok_or_else(|| anyhow!("No data file given (see --help)"))?;
    let records = load_records(&file)?;

    let fields = cli.columns.clone().unwrap_or_else(|| all_fields(&records));
    if fields.is_empty() {
        return Err(anyhow!("No columns to show: {:?} has no fields", file));
    }
    let columns = build_columns(&fields, &cli.badges);

    let filter_options: Vec<FilterDescriptor> = cli
        .filters
        .iter()
        .map(|(field, _)| FilterDescriptor::from_distinct_values(field, field, &records))
        .collect();

    let mut options = TableOptions::from_config(&config.table).with_filter_options(filter_options);
    if let Some(page_size) = cli.page_size {
        options.page_size = page_size;
    }
    if cli.no_paginate {
        options.paginate = false;
    }

    let use_color = config.display.use_color && !cli.no_color;
    let notifier = ConsoleNotifier::new(use_color);

    let key_field = cli.key.clone().unwrap_or_else(|| "id".to_string());
    let export_outcome: Rc<RefCell<Option<Result<String>>>> = Rc::new(RefCell::new(None));

    let mut view = TableView::new(columns.clone(), records, move |r: &Record| {
        r.text(&key_field).unwrap_or_default()
    })
    .with_options(options)
    .with_placeholder(config.display.placeholder.clone());

    if let Some(path) = cli.export.clone() {
        let outcome = export_outcome.clone();
        view = view.with_export(move |rows| {
            *outcome.borrow_mut() = Some(DataExporter::export_to_file(&path, &columns, rows));
        });
    }

    if let Some(search) = &cli.search {
        view.set_search_text(search);
    }
    for (field, value) in &cli.filters {
        view.set_filter(field, value);
    }
    if let Some((field, direction)) = &cli.sort {
        view.sort_by(field, *direction);
    }
    if let Some(page) = cli.page {
        view.set_page(page);
    }

    let display = DisplayOptions {
        use_color,
        show_summary: config.display.show_summary,
    };
    println!("{}", render_to_string(&view.render(), display));

    if cli.export.is_some() {
        if !view.export() {
            warn!("Export is disabled in the config file");
            notifier.notify("Export skipped", "exporting is disabled in the config file");
        }
        if let Some(outcome) = export_outcome.borrow_mut().take() {
            notifier.notify("Export complete", &outcome?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
