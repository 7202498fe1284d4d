// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wait until a remote resource reaches a state, or disappears.
//!
//! Many IBM Cloud resources are provisioned and deleted asynchronously. The
//! service accepts the request, and the resource moves through a number of
//! states (e.g. `create_pending`, `provisioned`) before it is ready to use.
//! Deleted resources eventually return `404 Not Found`.
//!
//! [wait_for] repeatedly fetches the state of a resource until it matches a
//! [DesiredState], using a fixed interval between attempts and a bounded
//! number of attempts. The result is a [PollOutcome].
//!
//! # Example
//! ```
//! # use ibm_cloud_poller::*;
//! # tokio_test::block_on(async {
//! let target = PollTarget::new(
//!     "gateway-123",
//!     fetch_fn(|_id: String| async {
//!         Ok::<_, gax::error::Error>(Observation::Present("provisioned".to_string()))
//!     }),
//! );
//! let outcome = wait_for(
//!     target,
//!     DesiredState::State("provisioned".to_string()),
//!     PollConfig::default(),
//! )
//! .await?;
//! assert!(outcome.is_reached());
//! # Ok::<(), gax::error::Error>(()) });
//! ```

use gax::Result;
use gax::error::Error;
use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

mod details;

/// The interval between attempts in [PollConfig::default()].
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// The number of attempts after the first one in [PollConfig::default()].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 24;

/// The result of a single fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation<S> {
    /// The resource exists and is in the given state.
    Present(S),
    /// The service reports the resource does not exist.
    Absent,
}

impl<S> Observation<S> {
    /// The observed state, if the resource exists.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::Present(s) => Some(s),
            Self::Absent => None,
        }
    }

    /// Returns true if the resource was not found.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// The condition that ends a wait.
#[derive(Clone, Debug, PartialEq)]
pub enum DesiredState<S> {
    /// Wait until the resource is in this state.
    State(S),
    /// Wait until the resource no longer exists.
    Absent,
}

/// The final disposition of a wait.
#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome<S> {
    /// The resource reached the desired state.
    Reached(S),
    /// The resource no longer exists, and the wait was for its absence.
    NotFound,
    /// The desired state was not observed before the attempts ran out. This
    /// includes the last observation.
    TimedOut(Observation<S>),
}

impl<S> PollOutcome<S> {
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }

    /// Converts a timed out wait into an error.
    ///
    /// Returns the reached state, `None` if the resource is gone, or an error
    /// where [Error::is_exhausted] is `true`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_poller::{Observation, PollOutcome};
    /// let outcome = PollOutcome::TimedOut(Observation::Present("create_pending"));
    /// let err = outcome.into_result().unwrap_err();
    /// assert!(err.is_exhausted(), "{err:?}");
    /// ```
    pub fn into_result(self) -> Result<Option<S>>
    where
        S: std::fmt::Debug,
    {
        match self {
            Self::Reached(s) => Ok(Some(s)),
            Self::NotFound => Ok(None),
            Self::TimedOut(last) => Err(Error::exhausted(format!(
                "the desired state was not reached, last observation: {last:?}"
            ))),
        }
    }
}

/// Controls the cadence and the budget of a wait.
///
/// The wait performs one fetch, plus at most `max_attempts` additional fetches,
/// each preceded by a sleep of `interval`. There is no backoff and no jitter.
///
/// # Example
/// ```
/// # use ibm_cloud_poller::PollConfig;
/// # use std::time::Duration;
/// let config = PollConfig::default()
///     .with_interval(Duration::from_secs(10))
///     .with_max_attempts(6);
/// assert_eq!(config.interval(), Duration::from_secs(10));
/// assert_eq!(config.max_attempts(), 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PollConfig {
    interval: Duration,
    max_attempts: u32,
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    pub fn with_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.interval = v.into();
        self
    }

    pub fn with_max_attempts(mut self, v: u32) -> Self {
        self.max_attempts = v;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The number of attempts after the initial fetch.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Fetches the current state of a resource.
///
/// Implementations return [Observation::Absent] when the service reports the
/// resource does not exist. Any other failure is returned as an error, and
/// ends the wait.
pub trait FetchState: Send + Sync {
    /// The type used to represent the resource state.
    type State: PartialEq + std::fmt::Debug + Send;

    /// Fetch the state of the resource identified by `id`.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Observation<Self::State>>> + Send;
}

/// A [FetchState] implemented by a closure, see [fetch_fn].
pub struct FetchFn<F, S> {
    inner: F,
    state: PhantomData<fn() -> S>,
}

/// Creates a [FetchState] from a closure.
///
/// The closure receives the resource id.
pub fn fetch_fn<F, Fut, S>(f: F) -> FetchFn<F, S>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Observation<S>>> + Send,
    S: PartialEq + std::fmt::Debug + Send,
{
    FetchFn {
        inner: f,
        state: PhantomData,
    }
}

impl<F, Fut, S> FetchState for FetchFn<F, S>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Observation<S>>> + Send,
    S: PartialEq + std::fmt::Debug + Send,
{
    type State = S;

    fn fetch(&self, id: &str) -> impl Future<Output = Result<Observation<S>>> + Send {
        (self.inner)(id.to_string())
    }
}

/// The resource observed by a wait.
///
/// Targets are created for each wait, and consumed by it.
pub struct PollTarget<F> {
    id: String,
    fetcher: F,
}

impl<F> PollTarget<F>
where
    F: FetchState,
{
    pub fn new<T: Into<String>>(id: T, fetcher: F) -> Self {
        Self {
            id: id.into(),
            fetcher,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    async fn fetch(&self) -> Result<Observation<F::State>> {
        self.fetcher.fetch(&self.id).await
    }
}

impl<F> std::fmt::Debug for PollTarget<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollTarget")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Waits until `target` reaches `desired`, or the attempts in `config` are
/// exhausted.
///
/// The resource state is fetched immediately. If it does not match, the
/// function sleeps for [PollConfig::interval] and fetches again, up to
/// [PollConfig::max_attempts] more times. There is no sleep after the last
/// attempt.
///
/// Fetch errors are not retried, they are returned immediately. Waiting for a
/// named state when the resource is absent continues polling.
pub async fn wait_for<F>(
    target: PollTarget<F>,
    desired: DesiredState<F::State>,
    config: PollConfig,
) -> Result<PollOutcome<F::State>>
where
    F: FetchState,
{
    let sleep = async |d| tokio::time::sleep(d).await;
    wait_loop(target, desired, config, None, sleep).await
}

/// Like [wait_for], but stops early if `cancel` is cancelled.
///
/// The token is checked before each fetch and before each sleep. A sleep in
/// progress is interrupted. A cancelled wait returns an error where
/// [Error::is_cancelled] is `true`.
pub async fn wait_for_with_cancellation<F>(
    target: PollTarget<F>,
    desired: DesiredState<F::State>,
    config: PollConfig,
    cancel: CancellationToken,
) -> Result<PollOutcome<F::State>>
where
    F: FetchState,
{
    let sleep = async |d| tokio::time::sleep(d).await;
    wait_loop(target, desired, config, Some(cancel), sleep).await
}

async fn wait_loop<F, S>(
    target: PollTarget<F>,
    desired: DesiredState<F::State>,
    config: PollConfig,
    cancel: Option<CancellationToken>,
    sleep: S,
) -> Result<PollOutcome<F::State>>
where
    F: FetchState,
    S: AsyncFn(Duration) -> () + Send,
{
    let mut attempt_count = 0_u32;
    loop {
        if details::is_cancelled(cancel.as_ref()) {
            return Err(details::cancelled(target.id(), attempt_count));
        }
        tracing::debug!(id = target.id(), attempt_count, "fetching resource state");
        let observation = target.fetch().await?;
        let last = match details::handle_observation(&desired, observation) {
            details::Decision::Reached(state) => {
                tracing::info!(id = target.id(), attempt_count, ?state, "desired state reached");
                return Ok(PollOutcome::Reached(state));
            }
            details::Decision::NotFound => {
                tracing::info!(id = target.id(), attempt_count, "resource not found");
                return Ok(PollOutcome::NotFound);
            }
            details::Decision::Continue(last) => last,
        };
        if attempt_count >= config.max_attempts() {
            tracing::warn!(
                id = target.id(),
                attempt_count,
                ?last,
                ?desired,
                "timed out waiting for resource"
            );
            return Ok(PollOutcome::TimedOut(last));
        }
        attempt_count += 1;
        tracing::debug!(
            id = target.id(),
            ?last,
            interval = ?config.interval(),
            "desired state not reached"
        );
        match cancel.as_ref() {
            None => sleep(config.interval()).await,
            Some(token) => {
                if token.is_cancelled() {
                    return Err(details::cancelled(target.id(), attempt_count));
                }
                tokio::select! {
                    _ = token.cancelled() => {
                        return Err(details::cancelled(target.id(), attempt_count));
                    }
                    _ = sleep(config.interval()) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    const CREATE_PENDING: &str = "create_pending";
    const PROVISIONED: &str = "provisioned";

    fn present(s: &str) -> Result<Observation<String>> {
        Ok(Observation::Present(s.to_string()))
    }

    fn absent() -> Result<Observation<String>> {
        Ok(Observation::Absent)
    }

    fn transport_error() -> Result<Observation<String>> {
        Err(Error::io("connection reset"))
    }

    fn provisioned() -> DesiredState<String> {
        DesiredState::State(PROVISIONED.to_string())
    }

    // Configure `fetch` to return the responses in order, once each.
    fn expect_fetches(
        fetch: &mut MockFetch,
        seq: &mut mockall::Sequence,
        responses: Vec<Result<Observation<String>>>,
    ) {
        for r in responses {
            let mut r = Some(r);
            fetch
                .expect_fetch()
                .once()
                .in_sequence(seq)
                .withf(|id| id == "gw-123")
                .returning(move |_| {
                    let r = r.take().unwrap();
                    Box::pin(async move { r })
                });
        }
    }

    fn expect_sleeps(sleep: &mut MockSleep, count: usize, interval: Duration) {
        sleep
            .expect_sleep()
            .times(count)
            .withf(move |d| d == &interval)
            .returning(|_| Box::pin(async {}));
    }

    #[tokio::test]
    async fn reached_after_three_fetches() -> TestResult {
        let config = PollConfig::default();
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(
            &mut fetch,
            &mut seq,
            vec![present(CREATE_PENDING), present(CREATE_PENDING), present(PROVISIONED)],
        );
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, 2, Duration::from_secs(5));

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome = wait_loop(target, provisioned(), config, None, sleep).await?;
        assert_eq!(outcome, PollOutcome::Reached(PROVISIONED.to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn reached_on_first_fetch_does_not_sleep() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(&mut fetch, &mut seq, vec![present(PROVISIONED)]);
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome = wait_loop(target, provisioned(), PollConfig::default(), None, sleep).await?;
        assert!(outcome.is_reached(), "{outcome:?}");
        Ok(())
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(3)]
    #[test_case(24)]
    #[tokio::test]
    async fn timed_out_after_all_attempts(max_attempts: u32) -> TestResult {
        let interval = Duration::from_millis(100);
        let config = PollConfig::new(interval, max_attempts);
        let mut fetch = MockFetch::new();
        fetch
            .expect_fetch()
            .times(max_attempts as usize + 1)
            .returning(|_| Box::pin(async { present(CREATE_PENDING) }));
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, max_attempts as usize, interval);

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome = wait_loop(target, provisioned(), config, None, sleep).await?;
        assert_eq!(
            outcome,
            PollOutcome::TimedOut(Observation::Present(CREATE_PENDING.to_string()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn absent_never_happens() -> TestResult {
        let mut fetch = MockFetch::new();
        fetch
            .expect_fetch()
            .times(25)
            .returning(|_| Box::pin(async { present(PROVISIONED) }));
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, 24, DEFAULT_INTERVAL);

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome =
            wait_loop(target, DesiredState::Absent, PollConfig::default(), None, sleep).await?;
        assert!(outcome.is_timed_out(), "{outcome:?}");
        Ok(())
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(5)]
    #[tokio::test]
    async fn absent_stops_at_first_not_found(k: usize) -> TestResult {
        let mut responses: Vec<_> = (1..k).map(|_| present("delete_pending")).collect();
        responses.push(absent());
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(&mut fetch, &mut seq, responses);
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, k - 1, DEFAULT_INTERVAL);

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome =
            wait_loop(target, DesiredState::Absent, PollConfig::default(), None, sleep).await?;
        assert_eq!(outcome, PollOutcome::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn absent_while_waiting_for_state_continues() -> TestResult {
        let config = PollConfig::default().with_max_attempts(2);
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(&mut fetch, &mut seq, vec![absent(), absent(), absent()]);
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, 2, DEFAULT_INTERVAL);

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let outcome = wait_loop(target, provisioned(), config, None, sleep).await?;
        assert_eq!(outcome, PollOutcome::TimedOut(Observation::Absent));
        Ok(())
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(3)]
    #[tokio::test]
    async fn transport_error_is_not_retried(failing_attempt: usize) -> TestResult {
        let mut responses: Vec<_> = (0..failing_attempt)
            .map(|_| present(CREATE_PENDING))
            .collect();
        responses.push(transport_error());
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(&mut fetch, &mut seq, responses);
        let mut sleep = MockSleep::new();
        expect_sleeps(&mut sleep, failing_attempt, DEFAULT_INTERVAL);

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let err = wait_loop(target, provisioned(), PollConfig::default(), None, sleep)
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_before_first_fetch() -> TestResult {
        let mut fetch = MockFetch::new();
        fetch.expect_fetch().never();
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();
        let token = CancellationToken::new();
        token.cancel();

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let err = wait_loop(target, provisioned(), PollConfig::default(), Some(token), sleep)
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_during_sleep() -> TestResult {
        let token = CancellationToken::new();
        let mut seq = mockall::Sequence::new();
        let mut fetch = MockFetch::new();
        expect_fetches(&mut fetch, &mut seq, vec![present(CREATE_PENDING)]);
        let mut sleep = MockSleep::new();
        let cancel = token.clone();
        sleep.expect_sleep().once().returning(move |_| {
            cancel.cancel();
            Box::pin(std::future::pending())
        });

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let err = wait_loop(target, provisioned(), PollConfig::default(), Some(token), sleep)
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_after_fetch() -> TestResult {
        let token = CancellationToken::new();
        let mut fetch = MockFetch::new();
        let cancel = token.clone();
        fetch.expect_fetch().once().returning(move |_| {
            cancel.cancel();
            Box::pin(async { present(CREATE_PENDING) })
        });
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();

        let target = PollTarget::new("gw-123", fetch);
        let sleep = async move |d| sleep.sleep(d).await;
        let err = wait_loop(target, provisioned(), PollConfig::default(), Some(token), sleep)
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[test]
    fn poll_config_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(config.max_attempts(), 24);
    }

    #[test]
    fn outcome_predicates() {
        let reached = PollOutcome::Reached(PROVISIONED);
        assert!(reached.is_reached(), "{reached:?}");
        assert!(!reached.is_not_found(), "{reached:?}");
        assert!(!reached.is_timed_out(), "{reached:?}");

        let not_found = PollOutcome::<&str>::NotFound;
        assert!(not_found.is_not_found(), "{not_found:?}");

        let timed_out = PollOutcome::TimedOut(Observation::<&str>::Absent);
        assert!(timed_out.is_timed_out(), "{timed_out:?}");
    }

    #[test]
    fn outcome_into_result() -> TestResult {
        assert_eq!(
            PollOutcome::Reached(PROVISIONED).into_result()?,
            Some(PROVISIONED)
        );
        assert_eq!(PollOutcome::<&str>::NotFound.into_result()?, None);
        let err = PollOutcome::TimedOut(Observation::Present(CREATE_PENDING))
            .into_result()
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(err.to_string().contains(CREATE_PENDING), "{err}");
        Ok(())
    }

    #[test]
    fn observation_accessors() {
        let o = Observation::Present(PROVISIONED);
        assert_eq!(o.state(), Some(&PROVISIONED));
        assert!(!o.is_absent(), "{o:?}");
        let o = Observation::<&str>::Absent;
        assert_eq!(o.state(), None);
        assert!(o.is_absent(), "{o:?}");
    }

    #[tokio::test]
    async fn fetch_fn_receives_id() -> TestResult {
        let fetcher = fetch_fn(|id: String| async move {
            assert_eq!(id, "gw-123");
            present(PROVISIONED)
        });
        let target = PollTarget::new("gw-123", fetcher);
        assert_eq!(target.id(), "gw-123");
        let got = target.fetch().await?;
        assert_eq!(got, Observation::Present(PROVISIONED.to_string()));
        Ok(())
    }

    mockall::mock! {
        Fetch {}
        impl FetchState for Fetch {
            type State = String;
            fn fetch(&self, id: &str) -> impl Future<Output = Result<Observation<String>>> + Send;
        }
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }
}
