#[macro_use] extern crate clap;
extern crate colored;
extern crate env_logger;
extern crate libfunctional;
#[macro_use] extern crate log;
extern crate thiserror;

mod assert;
mod collector;
mod demonstration;
mod exercise;
mod failure;
mod lessons;
mod runner;
mod solutions;
mod test_case;
mod test_group;
mod workbook;

use colored::*;
use log::LevelFilter;
use std::process;
use self::collector::collect_test_groups;
use self::runner::{exit_status, run_quietly, Summary};
use self::solutions::Solutions;
use self::workbook::{Learner, Workbook};

fn main() {
    let matches = clap_app!(workshop =>
        (version: crate_version!())
        (about: "Functional programming workshop")
        (@arg SOLUTIONS: -s --solutions "Runs the exercises against the reference solutions")
        (@arg GROUP: -g --group +takes_value "Only runs the named test group")
        (@arg VERBOSE: -v ... "Sets the level of logging verbosity")
    ).get_matches();

    init_logging(matches.occurrences_of("VERBOSE"));

    let test_groups = collect_test_groups(matches.value_of("GROUP"));
    let workbook: Box<dyn Workbook> = if matches.is_present("SOLUTIONS") {
        info!("using the reference solutions");
        Box::new(Solutions)
    } else {
        Box::new(Learner)
    };

    if test_groups.is_empty() {
        println!("{}", format!("No test group named `{}`", matches.value_of("GROUP").unwrap_or("")).red().bold());
    } else {
        println!("{}", "Running the functional programming workshop...".blue().bold());
        println!("");
    }
    let summary = run_quietly(&test_groups, workbook.as_ref());
    if !test_groups.is_empty() {
        report(&summary);
    }

    process::exit(exit_status(&test_groups, &summary));
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn report(summary: &Summary) {
    let mut current_group = "";
    for outcome in summary.outcomes() {
        if outcome.group != current_group {
            current_group = outcome.group.as_str();
            println!("{}", current_group.bold());
        }
        match outcome.result {
            Ok(()) => println!("  {} {}", "✓".green(), outcome.case),
            Err(ref failure) => {
                println!("  {} {}", "✗".red(), outcome.case.red());
                println!("      {}", failure);
            },
        }
    }
    println!("");

    let failures = summary.failures();
    if failures.is_empty() {
        println!("{}", format!("{} tests passed!", summary.passed()).green().bold());
    } else {
        println!("{}", format!("{} passed, {} failed:", summary.passed(), failures.len()).red().bold());
        for failure in failures {
            println!("\t{}", format!("{} > {}", failure.group, failure.case).red());
        }
        let undefined = summary.undefined().len();
        if undefined > 0 {
            println!("");
            println!("{}", format!("{} exercises still have undefined blanks to fill in.", undefined).yellow());
        }
    }
    println!("");
}
