extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate shlex;
extern crate spielplan;

use std::env;
use std::io::{self, BufReader, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use spielplan::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> SpielplanOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("spq")));
    args.extend(
        env::var("SPIELPLAN_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    SpielplanOptions::parse_from(args).build()
}

fn load_roster(opts: &SpielplanOptions) -> Result<Roster> {
    let roster = match &opts.input {
        Some(path) => Roster::from_path(path).wrap_err_with(|| format!("reading {}", path.display()))?,
        None => Roster::from_reader(BufReader::new(io::stdin().lock())).wrap_err("reading roster from stdin")?,
    };
    Ok(roster)
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    debug!("options: {opts:?}");

    let roster = load_roster(&opts)?;
    let mut stdout = BufWriter::new(io::stdout().lock());

    //------------------------------------------------------------------------------
    let exit_code = if opts.officials {
        officials(&mut stdout, &opts, &roster)?
    } else if let Some(query) = opts.team_query() {
        teams(&mut stdout, &opts, &roster, &query)?
    } else if !opts.schedule.is_empty() {
        schedule(&mut stdout, &opts, &roster)?
    } else {
        listing(&mut stdout, &opts, &roster)?
    };

    stdout.flush()?;
    Ok(exit_code)
}

//------------------------------------------------------------------------------
fn officials(out: &mut impl Write, opts: &SpielplanOptions, roster: &Roster) -> Result<i32> {
    let officials = roster.officials();
    if opts.json {
        serde_json::to_writer(&mut *out, &officials)?;
        writeln!(out)?;
    } else {
        for name in &officials {
            writeln!(out, "{name}")?;
        }
    }
    Ok(if officials.is_empty() { 1 } else { 0 })
}

fn teams(out: &mut impl Write, opts: &SpielplanOptions, roster: &Roster, query: &Query) -> Result<i32> {
    let directory = TeamDirectory::from_matches(roster);
    let lookup = directory.filter(query);
    if lookup == DirectoryLookup::AwaitingQuery {
        eprintln!("enter a team name or league to look up");
        return Ok(0);
    }

    if opts.json {
        serde_json::to_writer(&mut *out, lookup.entries())?;
        writeln!(out)?;
    } else {
        for entry in lookup.entries() {
            writeln!(out, "{entry}")?;
        }
    }

    if lookup.is_no_match() {
        eprintln!("no teams found for \"{query}\"");
        return Ok(1);
    }
    Ok(0)
}

fn schedule(out: &mut impl Write, opts: &SpielplanOptions, roster: &Roster) -> Result<i32> {
    let entries = project(roster, &opts.schedule, opts.reference_instant());

    if opts.json {
        let export = ScheduleExport::new(&opts.schedule, &entries);
        serde_json::to_writer(&mut *out, &export)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}\t{}\t{}\t{}", entry.when, entry.teams, entry.league, entry.involved)?;
        }
    }

    if entries.is_empty() {
        eprintln!("no upcoming matches for {}", opts.schedule.join(", "));
        return Ok(1);
    }
    Ok(0)
}

fn listing(out: &mut impl Write, opts: &SpielplanOptions, roster: &Roster) -> Result<i32> {
    let state = opts.view_state();
    let listing = view(roster, &state);
    eprintln!("{}", listing.outcome.describe(state.query()));

    if opts.report {
        let request = ReportRequest::new(listing.ids());
        writeln!(out, "{}", request.to_json()?)?;
        if let Some(name) = request.download_name(roster) {
            eprintln!("reports will be delivered as {name}");
        }
    } else if opts.json {
        serde_json::to_writer(&mut *out, &listing.matches)?;
        writeln!(out)?;
    } else {
        let mark = |record: &Match, field: MatchField| {
            Highlighted::field(record, field, state.query()).annotate(&opts.highlight_open, &opts.highlight_close)
        };
        for record in &listing.matches {
            let group = mark(record, MatchField::Group);
            let league = if group.is_empty() {
                mark(record, MatchField::League)
            } else {
                format!("{} - {group}", mark(record, MatchField::League))
            };
            writeln!(
                out,
                "{}\t{} {}\t{} vs {}\t{}\t{}",
                record.id,
                mark(record, MatchField::Day),
                mark(record, MatchField::StartTime),
                mark(record, MatchField::Team1),
                mark(record, MatchField::Team2),
                league,
                mark(record, MatchField::Referee),
            )?;
        }
    }

    Ok(if listing.outcome == ViewOutcome::NoMatches { 1 } else { 0 })
}
