//! Row-band worker pool for parallel kernel application.
//!
//! The output rows are split into contiguous bands. Each scoped worker
//! receives [`BandTask`]s over a crossbeam channel, computes the band into
//! its own buffer, and sends it back. The caller copies every band into
//! the output grid, so no worker ever aliases another's rows.

use crate::accumulate::Accumulator;
use crate::stencil::convolve_band;
use conv3_core::{EdgeBehavior, Grid, GridError, Kernel3};
use crossbeam_channel::{Receiver, Sender};
use log::trace;
use std::ops::Range;
use std::thread;

/// A band of output rows dispatched to a worker.
struct BandTask {
    index: usize,
    rows: Range<usize>,
}

/// A worker's reply for one band.
struct BandResult<T> {
    index: usize,
    result: Result<Vec<T>, GridError>,
}

/// Split `rows` into at most `parts` contiguous, non-empty bands.
pub(crate) fn split_bands(rows: Range<usize>, parts: usize) -> Vec<Range<usize>> {
    let len = rows.len();
    let parts = parts.clamp(1, len.max(1));
    let base = len / parts;
    let extra = len % parts;
    let mut bands = Vec::with_capacity(parts);
    let mut start = rows.start;
    for i in 0..parts {
        let size = base + usize::from(i < extra);
        if size == 0 {
            break;
        }
        bands.push(start..start + size);
        start += size;
    }
    bands
}

fn worker_loop<A: Accumulator>(
    task_rx: Receiver<BandTask>,
    reply_tx: Sender<BandResult<A::Output>>,
    input: &Grid<i32>,
    kernel: &Kernel3,
    edge: EdgeBehavior,
    acc: &A,
) {
    let cols = input.cols();
    while let Ok(task) = task_rx.recv() {
        trace!("band {} rows {:?}", task.index, task.rows);
        let mut buf = vec![A::Output::default(); task.rows.len() * cols];
        let result =
            convolve_band(input, kernel, edge, acc, task.rows, &mut buf).map(|()| buf);
        if reply_tx
            .send(BandResult {
                index: task.index,
                result,
            })
            .is_err()
        {
            break;
        }
    }
    // Channel closed; worker exits.
}

/// Compute `rows` of the output on `workers` scoped threads.
///
/// `out` is the full output buffer. On overflow the error from the
/// lowest-numbered failing band is returned.
pub(crate) fn convolve_parallel<A: Accumulator>(
    input: &Grid<i32>,
    kernel: &Kernel3,
    edge: EdgeBehavior,
    acc: &A,
    rows: Range<usize>,
    workers: usize,
    out: &mut [A::Output],
) -> Result<(), GridError> {
    let cols = input.cols();
    let bands = split_bands(rows, workers);
    let band_count = bands.len();

    let (task_tx, task_rx) = crossbeam_channel::bounded::<BandTask>(band_count);
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<BandResult<A::Output>>();

    let mut replies: Vec<Option<Result<Vec<A::Output>, GridError>>> =
        (0..band_count).map(|_| None).collect();

    let joined = thread::scope(|s| {
        let handles: Vec<_> = (0..band_count)
            .map(|_| {
                let task_rx = task_rx.clone();
                let reply_tx = reply_tx.clone();
                s.spawn(move || worker_loop(task_rx, reply_tx, input, kernel, edge, acc))
            })
            .collect();
        drop(task_rx);
        drop(reply_tx);

        for (index, band) in bands.iter().enumerate() {
            if task_tx
                .send(BandTask {
                    index,
                    rows: band.clone(),
                })
                .is_err()
            {
                break;
            }
        }
        drop(task_tx);

        for _ in 0..band_count {
            match reply_rx.recv() {
                Ok(reply) => replies[reply.index] = Some(reply.result),
                Err(_) => break,
            }
        }

        handles
            .into_iter()
            .map(|h| h.join())
            .filter(Result::is_err)
            .count()
    });

    if joined > 0 {
        return Err(GridError::WorkerFailed {
            reason: format!("{joined} worker thread(s) panicked"),
        });
    }

    for (band, reply) in bands.iter().zip(replies) {
        let buf = reply.ok_or_else(|| GridError::WorkerFailed {
            reason: format!("no result for rows {band:?}"),
        })??;
        let start = band.start * cols;
        out[start..start + buf.len()].copy_from_slice(&buf);
    }
    Ok(())
}
