// tests/signals.rs

//! Termination signals against the real fifo channel. Handler installation
//! and the shutdown flag are process-wide, so this lives in its own test
//! binary with a single test.

use nix::sys::pthread::{pthread_kill, pthread_self};
use nix::sys::signal::Signal;
use psplash::fifo::{Fifo, FifoChannel};
use psplash::protocol::{CommandChannel, Readiness};
use psplash::signals;
use std::time::{Duration, Instant};

#[test]
fn it_should_not_lose_a_signal_raised_before_the_wait() {
    let dir = std::env::temp_dir().join(format!("psplash-signals-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("psplash_fifo");
    let _fifo = Fifo::create(&path).unwrap();
    let mut channel = FifoChannel::open(&path).unwrap();

    signals::install_shutdown_handlers().unwrap();

    // Delivered outside the wait, the signal must stay pending rather than
    // run the handler, exactly as when it races the flag check.
    pthread_kill(pthread_self(), Signal::SIGTERM).unwrap();
    assert!(!signals::shutdown_requested());

    let started = Instant::now();
    assert_eq!(channel.wait(None).unwrap(), Readiness::Interrupted);
    assert!(signals::shutdown_requested());
    assert!(started.elapsed() < Duration::from_secs(5));

    // With the flag already raised the wait returns without polling.
    assert_eq!(
        channel.wait(Some(Duration::from_secs(30))).unwrap(),
        Readiness::Interrupted
    );
}
