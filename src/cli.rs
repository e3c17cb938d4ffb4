// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};

use crate::{
    absences,
    config::{consts::DEFAULT_ROOT, options::{AppOptions, ImportLayout}},
    confirm::{Always, Confirm, Outcome},
    import,
    suggest,
    Workspace,
};

#[derive(Parser, Debug)]
#[command(name = "attendance-cli")]
#[command(version)]
#[command(about = "Mark classroom attendance and build frequency reports", long_about = None)]
pub struct Cli {
    /// Working directory holding rosters/ and reports/
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List sections and their roster sizes
    Sections,

    /// Show, add or remove a section roster
    #[command(subcommand)]
    Roster(RosterCmd),

    /// List saved attendance dates for a section
    Reports { section: String },

    /// Mark students present for a date and save the record
    Mark(MarkArgs),

    /// Write reports/<section>/frequency_report.csv
    Frequency { section: String },

    /// Rank a section's roster against a (partial) name
    Suggest {
        section: String,
        query: String,
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Build rosters from an HTML class list
    ImportHtml(ImportArgs),

    /// Summarize an absences.csv file (DATE,NAME,NAME,...)
    Absences {
        input: PathBuf,
        #[arg(short, long, default_value = "absences_report.txt")]
        output: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum RosterCmd {
    /// Print a roster in file order
    Show { section: String },
    /// Copy names (one per line) from FILE into a new section roster
    Add { file: PathBuf, section: String },
    /// Delete a section roster
    Remove { section: String },
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    pub section: String,

    /// MM-DD-YYYY, not in the future
    pub date: String,

    /// Name to mark present ("Last, First"); repeatable
    #[arg(short, long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Name to un-mark; repeatable (useful with --edit)
    #[arg(short, long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,

    /// Start from the saved record for DATE instead of an empty list
    #[arg(short, long)]
    pub edit: bool,

    /// Also read names from FILE, one per line
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    pub html: PathBuf,

    /// identifier=Section Name lines
    #[arg(long, value_name = "FILE")]
    pub map: PathBuf,

    #[arg(long, value_name = "COL")]
    pub first_col: Option<usize>,
    #[arg(long, value_name = "COL")]
    pub last_col: Option<usize>,
    #[arg(long, value_name = "COL")]
    pub section_col: Option<usize>,

    /// Print what would be written without touching rosters/
    #[arg(long)]
    pub dry_run: bool,
}

/// Asks on the terminal; anything but y/yes is a no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, title: &str, question: &str) -> bool {
        eprint!("{title}: {question} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = s!();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

pub fn run() -> eyre::Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> eyre::Result<()> {
    let options = AppOptions::with_root(&cli.root);
    let mut ws = Workspace::from_options(&options);

    let mut yes = Always(true);
    let mut ask = StdinConfirm;
    let confirm: &mut dyn Confirm = if cli.yes { &mut yes } else { &mut ask };

    logf!("CLI: {:?}", cli.command);

    match cli.command {
        Command::Sections => {
            for (section, names) in ws.rosters.load_sections()? {
                println!("{section}\t{}", names.len());
            }
        }

        Command::Roster(RosterCmd::Show { section }) => {
            for name in ws.rosters.read_roster(&section)? {
                println!("{name}");
            }
        }
        Command::Roster(RosterCmd::Add { file, section }) => {
            let names = ws.rosters.add_roster(&file, &section)?;
            println!("Added {} ({} students)", section.trim(), names.len());
        }
        Command::Roster(RosterCmd::Remove { section }) => {
            match ws.rosters.remove_roster(&section, confirm)? {
                Outcome::Done(()) => println!("Removed {}", section.trim()),
                Outcome::Declined => println!("Nothing removed"),
            }
        }

        Command::Reports { section } => {
            for date in ws.session.list_reports(&section)? {
                println!("{date}");
            }
        }

        Command::Mark(args) => mark(&mut ws, args, confirm)?,

        Command::Frequency { section } => {
            match ws.frequency().export(&section, confirm)? {
                Outcome::Done((path, report)) => {
                    println!(
                        "Wrote {} ({} students, {} records)",
                        path.display(),
                        report.rows.len(),
                        report.records
                    );
                    if !report.unmatched.is_empty() {
                        eprintln!("Not on roster (left out): {}", report.unmatched.join("; "));
                    }
                }
                Outcome::Declined => println!("Nothing written"),
            }
        }

        Command::Suggest { section, query, limit } => {
            let roster = ws.rosters.read_roster(&section)?;
            for name in suggest::suggest(&query, &roster, limit) {
                println!("{name}");
            }
        }

        Command::ImportHtml(args) => import_html(&ws, args, options.import)?,

        Command::Absences { input, output } => {
            let report = absences::run(&input, &output)?;
            println!("Wrote {} ({} students)", output.display(), report.students.len());
        }
    }

    Ok(())
}

fn mark(ws: &mut Workspace, args: MarkArgs, confirm: &mut dyn Confirm) -> eyre::Result<()> {
    let section = args.section.trim();
    let roster = ws.rosters.read_roster(section)?;

    if args.edit && !ws.session.load(section, &args.date)? {
        eyre::bail!("No saved record for {section} on {}", args.date.trim());
    }

    let mut names = args.names;
    if let Some(path) = &args.from {
        names.extend(crate::file::read_lines(path).wrap_err("reading --from")?);
    }

    for name in &names {
        if !roster.iter().any(|r| r == name.trim()) {
            let hint = suggest::suggest(name, &roster, 1);
            match hint.first() {
                Some(h) => eprintln!("Warning: {name:?} is not on the roster (closest: {h})"),
                None => eprintln!("Warning: {name:?} is not on the roster"),
            }
        }
        ws.session.add(section, name);
    }
    for name in &args.remove {
        ws.session.remove(section, name.trim());
    }

    let count = ws.session.entries(section).len();
    match ws.session.save(section, &args.date, confirm)? {
        Outcome::Done(path) => println!("Saved {count} name(s) to {}", path.display()),
        Outcome::Declined => println!("Nothing saved"),
    }
    Ok(())
}

fn import_html(ws: &Workspace, args: ImportArgs, defaults: ImportLayout) -> eyre::Result<()> {
    let layout = ImportLayout {
        first_col: args.first_col.unwrap_or(defaults.first_col),
        last_col: args.last_col.unwrap_or(defaults.last_col),
        section_col: args.section_col.unwrap_or(defaults.section_col),
    };
    let html = std::fs::read_to_string(&args.html)
        .wrap_err_with(|| format!("reading {}", args.html.display()))?;
    let map = import::load_section_map(&args.map)?;

    let summary = import::import_html(&html, &map, layout);
    for id in &summary.unmapped {
        eprintln!("Warning: no section mapped for {id:?}");
    }

    for (section, names) in &summary.sections {
        println!("{section}\t{}", names.len());
    }
    if args.dry_run {
        return Ok(());
    }
    let written = import::write_rosters(&ws.rosters, &summary.sections)?;
    println!("Wrote {written} roster(s) to {}", ws.paths().roster_dir().display());
    Ok(())
}
