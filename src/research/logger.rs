use colored::Colorize;

use crate::{
    error::Result,
    Booster,
    WeakLearner,
    RoundRecord,
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str =
    "Round,Accepted,ErrorRate,CombCoef,LearnerError,CommitteeError,Time\n";


/// Implementing this trait allows you to use `Logger` to
/// log algorithm's behavor.
pub trait Research {
    /// The combined hypothesis type.
    type Current;


    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Current;


    /// Returns the summary of the latest round, if any.
    fn last_record(&self) -> Option<RoundRecord>;
}


/// Struct `Logger` runs a boosting algorithm round by round,
/// prints the progress,
/// and writes the per-round history to a CSV file.
///
/// # Example
/// ```no_run
/// use regboosts::prelude::*;
/// use regboosts::research::Logger;
///
/// # fn main() -> regboosts::Result<()> {
/// # let sample = Sample::from_rows(vec![vec![1.0, 2.0]], vec![3.0])?;
/// let weak_learner = PolynomialRegressionBuilder::new(&sample)
///     .subset_size(4)
///     .build()?;
/// let booster = RegBoost::init(sample)
///     .policy(Policy::threshold(0.19, 2));
///
/// let mut logger = Logger::new(booster, weak_learner)
///     .print_every(10)
///     .time_limit_as_secs(60);
/// let f = logger.run("history.csv")?;
/// # Ok(())
/// # }
/// ```
pub struct Logger<B, W> {
    booster: B,
    weak_learner: W,
    time_limit: u128,
    round: usize,
}


impl<B, W> Logger<B, W> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self {
            booster,
            weak_learner,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    /// Returns the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Returns the booster, consuming `self`.
    pub fn into_booster(self) -> B {
        self.booster
    }
}


impl<H, B, W> Logger<B, W>
    where B: Booster<H> + Research,
          W: WeakLearner<Hypothesis = H>,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "ERROR".bold().blue(),
            "COMB.".bold().magenta(),
            "LEARNER".bold().green(),
            "COMMITTEE".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "RATE".bold().blue(),
            "COEF.".bold().magenta(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<<B as Booster<H>>::Output>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;


        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }


        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter)?;

            time_acc += now.elapsed().as_millis();


            // The final call of `boost` may stop without training.
            let record = self.booster.last_record()
                .filter(|record| record.round == iter);
            if let Some(record) = record {
                let coef = record.comb_coef
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                let line = format!(
                    "{},{},{},{coef},{},{},{time_acc}\n",
                    record.round,
                    record.accepted,
                    record.error_rate,
                    record.learner_error,
                    record.committee_error,
                );
                file.write_all(line.as_bytes())?;
            }


            if time_acc > self.time_limit {
                if verbose {
                    print_row("[TLE]".bold().bright_red(), iter, record, time_acc);
                }
                tracing::warn!(round = iter, "time limit exceeded");
                break;
            }

            if verbose && iter % self.round == 0 {
                print_row("[LOG]".bold().magenta(), iter, record, time_acc);
            }

            if flow.is_break() {
                if verbose {
                    let last = self.booster.last_record();
                    print_row("[FIN]".bold().bright_green(), iter, last, time_acc);
                }
                break;
            }
        }

        Ok(self.booster.postprocess())
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn print_row(
    tag: colored::ColoredString,
    iter: usize,
    record: Option<RoundRecord>,
    time_acc: u128,
)
{
    let (rate, coef, learner, committee) = match record {
        Some(r) => (
            r.error_rate,
            r.comb_coef.unwrap_or(f64::NAN),
            r.learner_error,
            r.committee_error,
        ),
        None => (f64::NAN, f64::NAN, f64::NAN, f64::NAN),
    };
    println!(
        "{} {}\t{}\t{}\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", iter).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", rate).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", coef).magenta(),
        format!("{:>WIDTH$.PREC_WIDTH$}", learner).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", committee).yellow(),
        time_format(time_acc).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
