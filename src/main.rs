//! Interactive front end.
//!
//! A plain stdin/stdout prompt loop around the library: `add` new
//! offerings (persisted to the store file), `plan` a schedule through
//! accept/reject prompts, `list` the catalog. Logging goes to stderr so
//! prompts stay clean.

use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use classpick::{build_schedule, Catalog, Decision, DecisionSource, Offering};

#[derive(Parser)]
#[command(name = "classpick")]
#[command(about = "Interactive weekly class schedule builder", long_about = None)]
struct Args {
    /// Course catalog file
    #[arg(long, default_value = "courses.txt")]
    store: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut catalog = classpick::store::load_catalog(&args.store)
        .with_context(|| format!("failed to load catalog from {}", args.store.display()))?;
    println!(
        "Loaded {} offering(s) in {} category(ies) from {}",
        catalog.offering_count(),
        catalog.category_count(),
        args.store.display()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(line) = prompt(&mut lines, "classpick> ")? else {
            break;
        };
        match line.as_str() {
            "add" => {
                if let Err(e) = add_offering(&mut catalog, &args.store, &mut lines) {
                    println!("error: {e:#}");
                }
            }
            "plan" => {
                // Reload so a run always sees everything persisted so far.
                catalog = classpick::store::load_catalog(&args.store)?;
                plan(&catalog, &mut lines)?;
            }
            "list" => list(&catalog),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command {other:?} (try: add, plan, list, quit)"),
        }
    }

    Ok(())
}

/// Prints `label`, reads one trimmed line. `None` means stdin was closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}

/// Handles `add`: prompts for the offering, persists it, then keeps it in
/// memory. Any parse failure abandons this add without touching state.
fn add_offering(
    catalog: &mut Catalog,
    store: &Path,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    let Some(category) = prompt(lines, "Category: ")? else {
        bail!("input closed");
    };
    if category.is_empty() {
        bail!("category must not be empty");
    }
    let Some(number) = prompt(lines, "Course number: ")? else {
        bail!("input closed");
    };
    let Some(spec) = prompt(
        lines,
        "Days and times (e.g. MWF, 8:00am-9:00am, TTH, 1:00pm-2:00pm): ",
    )?
    else {
        bail!("input closed");
    };

    let offering = parse_offering(&number, &spec)?;
    classpick::store::append_offering(store, &category, &offering)
        .with_context(|| format!("failed to append to {}", store.display()))?;
    println!("Added {} to {category}", offering.number);
    catalog.add_offering(category, offering);
    Ok(())
}

/// Parses the comma-separated days-and-times line: alternating day-code
/// and `start-end` items.
fn parse_offering(number: &str, spec: &str) -> anyhow::Result<Offering> {
    let items: Vec<&str> = spec.split(',').map(str::trim).collect();
    if items.len() % 2 != 0 {
        bail!("expected alternating day and time items, got {} item(s)", items.len());
    }

    let mut offering = Offering::new(number)?;
    for pair in items.chunks(2) {
        let (days, times) = (pair[0], pair[1]);
        let Some((start, end)) = times.split_once('-') else {
            bail!("time range {times:?} must look like 8:00am-9:00am");
        };
        offering.add_meeting(days, start.trim().parse()?, end.trim().parse()?)?;
    }
    Ok(offering)
}

/// Handles `plan`: runs the selection walk with stdin prompts and prints
/// the result.
fn plan(
    catalog: &Catalog,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    if catalog.is_empty() {
        println!("Catalog is empty; add some courses first.");
        return Ok(());
    }

    let mut decider = PromptDecider { lines };
    let schedule = build_schedule(catalog, &mut decider);

    if schedule.is_empty() {
        println!("No courses accepted.");
    } else {
        println!("Your schedule:");
        print!("{schedule}");
    }
    Ok(())
}

fn list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    for (category, offerings) in catalog.iter() {
        println!("{category}:");
        for offering in offerings {
            println!("  Course {}:", offering.number);
            for meeting in &offering.meetings {
                println!("    {meeting}");
            }
        }
    }
}

/// Decision source backed by stdin prompts.
struct PromptDecider<'a, I> {
    lines: &'a mut I,
}

impl<I> DecisionSource for PromptDecider<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn decide(&mut self, category: &str, offering: &Offering) -> Decision {
        println!("Accept {category} course {}?", offering.number);
        for meeting in &offering.meetings {
            println!("  {meeting}");
        }
        loop {
            match prompt(&mut *self.lines, "[y]es / [n]o / [q]uit (default yes) > ") {
                Ok(Some(answer)) => match answer.to_ascii_lowercase().as_str() {
                    "" | "y" | "yes" => return Decision::Accept,
                    "n" | "no" => return Decision::Reject,
                    "q" | "quit" => return Decision::Abort,
                    other => println!("unrecognized answer {other:?}"),
                },
                // Closed or failed stdin ends the run with what we have.
                Ok(None) | Err(_) => return Decision::Abort,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offering_multiple_meetings() {
        let o = parse_offering("101", "MWF, 8:00am-9:00am, TTH, 1:00pm-2:00pm").unwrap();
        assert_eq!(o.meetings.len(), 2);
        assert_eq!(o.meetings[0].days, "MWF");
        assert_eq!(o.meetings[1].to_string(), "TTH 1:00PM-2:00PM");
    }

    #[test]
    fn test_parse_offering_rejects_odd_items() {
        assert!(parse_offering("101", "MWF, 8:00am-9:00am, TTH").is_err());
    }

    #[test]
    fn test_parse_offering_rejects_missing_dash() {
        assert!(parse_offering("101", "MWF, 8:00am 9:00am").is_err());
    }

    #[test]
    fn test_parse_offering_rejects_bad_times() {
        assert!(parse_offering("101", "MWF, 8:00-9:00").is_err());
    }
}
