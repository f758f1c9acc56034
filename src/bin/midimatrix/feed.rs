//! Feed - stands in for the serial port
//!
//! A background thread produces MIDI bytes and pushes them into a ring
//! buffer; the UI thread drains the other end once per loop iteration.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    thread,
    time::Duration,
};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::{info, warn};
use rtrb::Producer;

use crate::demo::DemoPerformance;

/// 31,250 baud, 10 bits per byte on the wire
const WIRE_BYTES_PER_SEC: u64 = 3_125;

/// Bytes read from a file per paced chunk
const CHUNK: usize = 32;

/// Where the bytes come from
pub enum Feed {
    /// Built-in performance
    Demo,
    /// Raw byte stream replayed at MIDI wire speed
    File(BufReader<File>),
    /// Whatever is piped in, as fast as it arrives
    Stdin,
}

impl Feed {
    /// Open `path` for replay, `-` meaning stdin
    pub fn open(path: &Path) -> EyreResult<Self> {
        if path == Path::new("-") {
            return Ok(Feed::Stdin);
        }

        let file = File::open(path)
            .wrap_err_with(|| format!("failed to open MIDI input {}", path.display()))?;
        Ok(Feed::File(BufReader::new(file)))
    }

    /// Start the producer thread. It stops once the consumer goes away.
    pub fn spawn(self, tx: Producer<u8>) -> EyreResult<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("midi-feed".into())
            .spawn(move || self.run(tx))
            .wrap_err("failed to spawn feed thread")
    }

    fn run(self, mut tx: Producer<u8>) {
        let result = match self {
            Feed::Demo => {
                play_demo(&mut tx);
                Ok(())
            }
            Feed::File(reader) => {
                let pause = Duration::from_micros(CHUNK as u64 * 1_000_000 / WIRE_BYTES_PER_SEC);
                pump(reader, &mut tx, Some(pause))
            }
            Feed::Stdin => pump(io::stdin().lock(), &mut tx, None),
        };

        match result {
            Ok(()) => info!("input finished"),
            Err(err) => warn!("input error: {err}"),
        }
    }
}

fn play_demo(tx: &mut Producer<u8>) {
    let mut demo = DemoPerformance::new();
    let mut bytes = Vec::with_capacity(64);

    while !tx.is_abandoned() {
        bytes.clear();
        demo.step(&mut bytes);
        if !push_all(tx, &bytes) {
            return;
        }
        thread::sleep(DemoPerformance::STEP);
    }
}

fn pump(mut reader: impl Read, tx: &mut Producer<u8>, pause: Option<Duration>) -> io::Result<()> {
    let mut buf = [0u8; CHUNK];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 || !push_all(tx, &buf[..n]) {
            return Ok(());
        }
        if let Some(pause) = pause {
            thread::sleep(pause);
        }
    }
}

/// Push every byte, waiting for room. Returns `false` once the UI is gone.
fn push_all(tx: &mut Producer<u8>, bytes: &[u8]) -> bool {
    for &byte in bytes {
        while tx.push(byte).is_err() {
            if tx.is_abandoned() {
                return false;
            }
            thread::sleep(Duration::from_millis(1));
        }
    }
    true
}
