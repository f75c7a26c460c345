//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest requires tokio. Futures that need
//! tokio are handed to a shared runtime and awaited from GPUI tasks.

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Global tokio runtime instance, `None` if it failed to start
static TOKIO_RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();

fn get_runtime() -> Result<&'static Runtime> {
    TOKIO_RUNTIME
        .get_or_init(|| match Runtime::new() {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create tokio runtime");
                None
            }
        })
        .as_ref()
        .ok_or_else(|| Error::Invalid {
            message: "tokio runtime unavailable".to_string(),
        })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// ```ignore
/// let body = run_in_tokio(async move { reqwest::get(url).await?.text().await }).await?;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Invalid {
            message: format!("tokio task cancelled: {e}"),
        }),
    }
}

/// Block on a future synchronously (startup and tests only)
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_in_tokio_returns_value() {
        let value = block_on(async { run_in_tokio(async { 21 * 2 }).await })
            .expect("runtime")
            .expect("task");
        assert_eq!(value, 42);
    }

    #[test]
    fn tokio_timers_are_available() {
        let done = block_on(async {
            run_in_tokio(async {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                true
            })
            .await
        })
        .expect("runtime")
        .expect("task");
        assert!(done);
    }
}
