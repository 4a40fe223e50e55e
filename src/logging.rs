//! File logging.
//!
//! The terminal belongs to the game while it runs, so log output goes to a
//! file in the platform data directory instead of stderr.

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use directories::ProjectDirs;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

/// Path of the log file, creating its directory if needed.
pub fn log_file_path() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;

    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(LOG_FILE_NAME))
}

pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global file logger. Returns the log file path.
pub fn init_logging(verbose: bool) -> io::Result<PathBuf> {
    let path = log_file_path()?;
    let file = File::create(&path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level_filter(verbose), config, file)
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(path)
}
