// Command-line argument interpretation
use crate::model::{ArgError, ChargingDuration, Zone};
use chrono::NaiveDate;
use tracing::debug;

pub const USAGE: &str = "Usage:\n\
    --zone SE1/SE2/SE3/SE4\n\
    --date YYYY-MM-DD\n\
    --sorted prints a sorted list\n\
    --charging 2h/4h/8h/";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub zone: Option<Zone>,
    pub date: Option<NaiveDate>,
    pub charging: Option<ChargingDuration>,
    pub sorted: bool,
}

/// Outcome of scanning the arguments: everything accepted before the first
/// error, how often `--help` was seen, and that error if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    pub options: CliOptions,
    pub help_count: usize,
    pub error: Option<ArgError>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportMode {
    Charging(ChargingDuration),
    Sorted,
    Summary,
}

impl CliOptions {
    /// Charging beats sorted; otherwise the min/max/average summary.
    pub fn mode(&self) -> ReportMode {
        match (self.charging, self.sorted) {
            (Some(duration), _) => ReportMode::Charging(duration),
            (None, true) => ReportMode::Sorted,
            (None, false) => ReportMode::Summary,
        }
    }
}

/// Scans `args` (without the program name), stopping at the first bad argument.
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedArgs::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        debug!("Handling argument: {}", arg);
        let step = match arg {
            "--zone" => next_value(&mut iter, arg)
                .and_then(|v| v.parse::<Zone>())
                .map(|zone| parsed.options.zone = Some(zone)),
            "--date" => next_value(&mut iter, arg)
                .and_then(|v| parse_date(&v))
                .map(|date| parsed.options.date = Some(date)),
            "--charging" => next_value(&mut iter, arg)
                .and_then(|v| v.parse::<ChargingDuration>())
                .map(|duration| parsed.options.charging = Some(duration)),
            "--sorted" => {
                parsed.options.sorted = true;
                Ok(())
            }
            "--help" => {
                parsed.help_count += 1;
                Ok(())
            }
            other => Err(ArgError::UnknownArgument(other.to_string())),
        };

        if let Err(e) = step {
            parsed.error = Some(e);
            break;
        }
    }

    parsed
}

/// Zone to use plus the lines to print before the report: usage once per
/// `--help`, the argument error, and usage again when no zone was accepted.
pub fn resolve(parsed: &ParsedArgs) -> (Zone, Vec<String>) {
    let mut lines = vec![USAGE.to_string(); parsed.help_count];
    if let Some(e) = &parsed.error {
        lines.push(e.to_string());
    }
    let zone = match parsed.options.zone {
        Some(zone) => zone,
        None => {
            lines.push(USAGE.to_string());
            Zone::default()
        }
    };
    (zone, lines)
}

fn next_value<I, S>(iter: &mut I, flag: &str) -> Result<String, ArgError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    iter.next()
        .map(|v| v.as_ref().trim().to_string())
        .ok_or_else(|| ArgError::MissingValue(flag.to_string()))
}

/// Accepts exactly `NNNN-NN-NN` naming a real calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ArgError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ArgError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ArgError::InvalidDate(value.to_string()))
}
