use simplelog::*;
use std::fs::{self, File, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// Directory the log file lives in: ~/.local/share/cubeturner-midi/logs
pub fn log_dir() -> Result<PathBuf, Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("cubeturner-midi")
        .join("logs"))
}

fn open_log_file() -> Result<File, Error> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))
}

/// Logs debug and up to the log file; with `verbose`, info and up also go to stderr.
///
/// Without a usable log file only the terminal logger (if any) is installed.
pub fn init_logger(verbose: bool) -> Result<(), Error> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let file_error = match open_log_file() {
        Ok(log_file) => {
            loggers.push(WriteLogger::new(
                LevelFilter::Debug,
                Config::default(),
                log_file,
            ));
            None
        }
        Err(e) => Some(e),
    };

    CombinedLogger::init(loggers).map_err(|e| Error::new(ErrorKind::Other, e))?;

    if let Some(e) = file_error {
        log::warn!("Log file unavailable, logging to terminal only: {}", e);
    }
    Ok(())
}
