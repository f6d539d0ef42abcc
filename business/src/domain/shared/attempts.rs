use std::future::Future;

/// Errors that tell a fallback sequence whether the next attempt is still worth making.
pub trait Recoverable {
    fn is_recoverable(&self) -> bool;
}

/// Runs an ordered list of attempts and stops at the first one that yields a value.
///
/// Attempts are evaluated lazily, one at a time, in the order given:
/// - `Ok(Some(value))` short-circuits and returns the attempt with its value
/// - `Ok(None)` means "nothing found", the next attempt is tried
/// - `Err(e)` moves on when `e` is recoverable, otherwise it is returned as is
///
/// Returns `Ok(None)` when every attempt came back empty or with a recoverable error.
pub async fn first_success<A, T, E, F, Fut>(
    attempts: impl IntoIterator<Item = A>,
    mut run: F,
) -> Result<Option<(A, T)>, E>
where
    E: Recoverable,
    F: FnMut(&A) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    for attempt in attempts {
        match run(&attempt).await {
            Ok(Some(value)) => return Ok(Some((attempt, value))),
            Ok(None) => continue,
            Err(err) if err.is_recoverable() => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(None)
}
