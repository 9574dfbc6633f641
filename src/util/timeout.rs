//! Request deadline helper.

use std::future::Future;
use std::time::Duration;

use crate::auth::AuthError;

/// Bound an authorize round-trip (send plus body read) by `deadline`.
///
/// Works for any error type that can carry [`AuthError::Timeout`], so crate-level
/// callers holding an [`EcobeeError`](crate::error::EcobeeError) can use it too.
pub async fn with_timeout<T, E>(
    deadline: Duration,
    future: impl Future<Output = Result<T, E>>,
) -> Result<T, E>
where
    E: From<AuthError>,
{
    tokio::time::timeout(deadline, future).await.unwrap_or_else(|_| {
        let millis = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
        Err(AuthError::Timeout(millis).into())
    })
}
