use futures_util::future::join_all;
use poise::serenity_prelude::{Http, User, UserId};
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Run one lookup per id concurrently and keep the ones that succeeded.
pub async fn join_keyed<T, E, F, Fut>(
    ids: impl IntoIterator<Item = UserId>,
    fetch: F,
) -> HashMap<UserId, T>
where
    F: Fn(UserId) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let lookups = ids.into_iter().map(|id| {
        let lookup = fetch(id);
        async move { (id, lookup.await) }
    });

    join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(value) => Some((id, value)),
            Err(e) => {
                warn!("Could not resolve user {}: {}", id, e);
                None
            }
        })
        .collect()
}

/// Fetch several Discord users at once, keyed by id.
pub async fn fetch_users_by_id(
    http: &Http,
    ids: impl IntoIterator<Item = UserId>,
) -> HashMap<UserId, User> {
    join_keyed(ids, |id| http.get_user(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn lookups_run_concurrently_and_failures_are_dropped() {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        let resolved = join_keyed((1..=4).map(UserId::new), |id| {
            let in_flight = &in_flight;
            let peak = &peak;
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                if id.get() == 3 {
                    Err("unknown user")
                } else {
                    Ok(format!("user{}", id.get()))
                }
            }
        })
        .await;

        assert_eq!(peak.load(Ordering::SeqCst), 4);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[&UserId::new(1)], "user1");
        assert!(!resolved.contains_key(&UserId::new(3)));
    }
}
