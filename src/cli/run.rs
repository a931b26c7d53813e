use crate::cli::args;
use crate::core::aggregate::aggregate;
use crate::core::ecdf::sample;
use crate::core::error::EcdfError;
use crate::report::ecdf_txt;
use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

pub fn entry() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err.downcast_ref::<EcdfError>().map_or(1, EcdfError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let t0 = Instant::now();

    let argv = env::args_os()
        .map(|a| {
            a.into_string()
                .map_err(|a| EcdfError::invalid(format!("argument is not valid UTF-8: {:?}", a)))
        })
        .collect::<Result<Vec<String>, EcdfError>>()?;

    let cli = stage("parse", || args::parse(&argv))?;
    let means = stage("aggregate", || aggregate(&cli.school, &cli.files))?;
    let ecdf = stage("sample", || sample(&means))?;
    let report = stage("format", || ecdf_txt::render(&cli.school, &ecdf))?;

    let mut out = io::stdout().lock();
    out.write_all(report.as_bytes())
        .and_then(|_| out.flush())
        .context("failed to write report to stdout")?;

    debug!("stage=total time={}", fmt_dur(t0.elapsed()));
    Ok(())
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn stage<T, F>(name: &str, f: F) -> Result<T, EcdfError>
where
    F: FnOnce() -> Result<T, EcdfError>,
{
    let t = Instant::now();
    let res = f();
    debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
    res
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
