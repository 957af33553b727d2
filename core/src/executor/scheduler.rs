use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, Semaphore};

use crate::error::TaskError;

use super::context::RunContext;
use super::types::{ParallelOptions, StopFlag, TaskFailures};

/// Run every task concurrently and collect the failures by task index.
///
/// # Arguments
///
/// * `ctx` - Context handed to each task; a task that finds it already done
///   before starting reports the context error instead of running
/// * `opts` - Concurrency budget (0 = unlimited) and stop-on-error switch
/// * `tasks` - Work items; the iteration order assigns indexes `0..N`
///
/// # Returns
///
/// Map of index -> failure for tasks that returned an error, panicked, or saw
/// a cancelled context. Succeeded tasks have no entry. With `stop_on_error`,
/// tasks that had not started when the first failure happened are dropped
/// without an entry.
pub async fn run_parallel<I, F, Fut>(
    ctx: &RunContext,
    opts: ParallelOptions,
    tasks: I,
) -> TaskFailures
where
    I: IntoIterator<Item = F>,
    F: FnOnce(RunContext) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let tasks: Vec<F> = tasks.into_iter().collect();
    let total = tasks.len();
    let mut failures = TaskFailures::new();

    if total == 0 {
        return failures;
    }

    tracing::debug!(
        target: "sift.parallel",
        stage = "run.start",
        total,
        concurrency = opts.concurrency,
        stop_on_error = opts.stop_on_error
    );

    let sem = opts.limit_for(total).map(|n| Arc::new(Semaphore::new(n)));
    let stop = Arc::new(StopFlag::new());
    // Sized to the batch so a finishing task never waits on the coordinator.
    let (tx, mut rx) = mpsc::channel::<(usize, TaskError)>(total);
    let mut submitted = 0usize;

    for (index, f) in tasks.into_iter().enumerate() {
        if opts.stop_on_error && stop.is_set() {
            break;
        }

        let permit = match &sem {
            Some(sem) => match Arc::clone(sem).acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(_) => break,
            },
            None => None,
        };

        // The slot may have been freed by the task that tripped the flag.
        if opts.stop_on_error && stop.is_set() {
            break;
        }

        let ctx = ctx.clone();
        let stop = Arc::clone(&stop);
        let tx = tx.clone();
        tokio::spawn(async move {
            let _permit = permit;
            if let Some(err) = run_one(index, f, ctx, &stop, opts.stop_on_error).await {
                let _ = tx.send((index, err)).await;
            }
        });
        submitted += 1;
    }

    // Every spawned task holds a sender; the channel closes once the last one
    // finishes, whether it reported or skipped.
    drop(tx);
    while let Some((index, err)) = rx.recv().await {
        failures.insert(index, err);
    }

    tracing::debug!(
        target: "sift.parallel",
        stage = "run.end",
        total,
        submitted,
        failed = failures.len()
    );

    failures
}

/// Per-object form of [`run_parallel`]: `f` is called once per item, the
/// item's position being its index.
pub async fn run_parallel_for_each<T, I, F, Fut>(
    ctx: &RunContext,
    opts: ParallelOptions,
    items: I,
    f: F,
) -> TaskFailures
where
    T: Send + 'static,
    I: IntoIterator<Item = T>,
    F: Fn(RunContext, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let f = Arc::new(f);
    let tasks: Vec<_> = items
        .into_iter()
        .map(|item| {
            let f = Arc::clone(&f);
            move |ctx: RunContext| f(ctx, item)
        })
        .collect();

    run_parallel(ctx, opts, tasks).await
}

/// Run with stop-on-error and report only the failure with the lowest index.
pub async fn run_all<I, F, Fut>(
    ctx: &RunContext,
    concurrency: usize,
    tasks: I,
) -> Result<(), TaskError>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(RunContext) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let opts = ParallelOptions::unlimited()
        .with_concurrency(concurrency)
        .stop_on_error(true);
    first_failure(run_parallel(ctx, opts, tasks).await)
}

pub async fn run_all_for_each<T, I, F, Fut>(
    ctx: &RunContext,
    concurrency: usize,
    items: I,
    f: F,
) -> Result<(), TaskError>
where
    T: Send + 'static,
    I: IntoIterator<Item = T>,
    F: Fn(RunContext, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let opts = ParallelOptions::unlimited()
        .with_concurrency(concurrency)
        .stop_on_error(true);
    first_failure(run_parallel_for_each(ctx, opts, items, f).await)
}

fn first_failure(failures: TaskFailures) -> Result<(), TaskError> {
    match failures.into_iter().min_by_key(|(index, _)| *index) {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}

async fn run_one<F, Fut>(
    index: usize,
    f: F,
    ctx: RunContext,
    stop: &StopFlag,
    stop_on_error: bool,
) -> Option<TaskError>
where
    F: FnOnce(RunContext) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    if stop_on_error && stop.is_set() {
        tracing::trace!(target: "sift.parallel", stage = "task.skip", index);
        return None;
    }

    let err = match ctx.err() {
        Some(err) => {
            tracing::trace!(
                target: "sift.parallel",
                stage = "task.cancelled",
                index,
                error = %err
            );
            TaskError::Cancelled(err)
        }
        None => {
            // Calling `f` inside the async block keeps a panic in its
            // synchronous prologue within the unwind boundary too.
            let outcome = AssertUnwindSafe(async move { f(ctx).await })
                .catch_unwind()
                .await;
            match outcome {
                Ok(Ok(())) => return None,
                Ok(Err(err)) => TaskError::Failed(err),
                Err(payload) => TaskError::Panicked(panic_message(&*payload)),
            }
        }
    };

    if stop_on_error && stop.trip() {
        tracing::debug!(target: "sift.parallel", stage = "run.stop", index);
    }

    Some(err)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
