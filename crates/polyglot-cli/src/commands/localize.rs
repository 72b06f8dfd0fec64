//! Implementation of the `polyglot localize` command.

use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::Args;
use miette::Result;
use polyglot::Localizable;

use super::LoadPathArgs;

/// Arguments for the localize command.
#[derive(Debug, Args)]
#[command(group = clap::ArgGroup::new("value").required(true).args(["date", "time", "number"]))]
pub struct LocalizeArgs {
    /// Locale to format for
    #[arg(long, short = 'l', default_value = "en")]
    pub locale: String,

    /// A calendar date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// A point in time (RFC 3339, e.g. 1970-01-01T00:00:00+00:00)
    #[arg(long)]
    pub time: Option<DateTime<FixedOffset>>,

    /// A number
    #[arg(long, allow_negative_numbers = true)]
    pub number: Option<f64>,

    /// Named format under date.formats or time.formats
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    #[command(flatten)]
    pub load: LoadPathArgs,
}

impl LocalizeArgs {
    /// The value to format. Whole numbers localize as integers.
    fn value(&self) -> Option<Localizable> {
        if let Some(date) = self.date {
            return Some(date.into());
        }
        if let Some(time) = self.time {
            return Some(time.into());
        }
        self.number.map(|n| {
            if n.fract() == 0.0 && n.abs() < 9.0e15 {
                Localizable::Integer(n as i64)
            } else {
                Localizable::Float(n)
            }
        })
    }
}

/// Run the localize command.
pub fn run_localize(args: LocalizeArgs) -> Result<i32> {
    let Some(value) = args.value() else {
        return Ok(exitcode::USAGE);
    };
    let backend = args.load.load()?;
    match backend.localize(&args.locale, value, args.format.as_deref()) {
        Ok(text) => {
            println!("{}", text);
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(exitcode::DATAERR)
        }
    }
}
