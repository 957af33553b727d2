//! Fan a batch of checks out over a bounded runner and print the failures.

use std::time::Duration;

use anyhow::{bail, Result};
use sift_core::api::{load_from_str, run_parallel_for_each, ParallelOptions, RunContext};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("sift.parallel=debug")
        .init();

    let cfg = load_from_str(
        r#"
[parallel]
concurrency = 2
"#,
    )?;
    let opts = ParallelOptions::from(&cfg.parallel);
    let ctx = RunContext::new().with_timeout(Duration::from_secs(5));

    let hosts = vec!["alpha", "beta", "gamma", "delta"];
    let failures = run_parallel_for_each(&ctx, opts, hosts.clone(), |_ctx, host| async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if host.starts_with('g') {
            bail!("{host}: unreachable");
        }
        Ok(())
    })
    .await;

    let mut indexes: Vec<_> = failures.keys().copied().collect();
    indexes.sort();
    for index in indexes {
        println!("{} -> {}", hosts[index], failures[&index]);
    }
    Ok(())
}
