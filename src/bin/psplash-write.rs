// src/bin/psplash-write.rs

//! Sends one command to a running splash: `psplash-write "PROGRESS 40"`.

use psplash::config::CONFIG;

use log::debug;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::OpenOptionsExt;

const EXIT_FAILURE: i32 = -1;

fn run(args: &[OsString]) -> i32 {
    let [message] = args else {
        eprintln!("Wrong number of arguments");
        return EXIT_FAILURE;
    };

    let path = CONFIG.channel.fifo_path();
    // No splash running is not worth a message during boot.
    let mut fifo = match OpenOptions::new()
        .write(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(&path)
    {
        Ok(fifo) => fifo,
        Err(e) => {
            debug!("psplash-write: cannot open {}: {}", path.display(), e);
            return EXIT_FAILURE;
        }
    };

    let mut payload = message.as_bytes().to_vec();
    payload.push(0);
    match fifo.write(&payload) {
        Ok(written) if written == payload.len() => 0,
        Ok(written) => {
            eprintln!(
                "psplash-write: short write to {} ({} of {} bytes)",
                path.display(),
                written,
                payload.len()
            );
            EXIT_FAILURE
        }
        Err(e) => {
            eprintln!("psplash-write: write to {} failed: {}", path.display(), e);
            EXIT_FAILURE
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    std::process::exit(run(&args));
}
