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

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use ibm_cloud_poller::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::Instant;
    use tokio_util::sync::CancellationToken;

    type Responses = Arc<Mutex<VecDeque<gax::Result<Observation<String>>>>>;

    // A fake service returning canned responses, and counting the fetches.
    fn fake_service(
        responses: Vec<gax::Result<Observation<String>>>,
    ) -> (Responses, Arc<Mutex<u32>>) {
        (
            Arc::new(Mutex::new(responses.into_iter().collect())),
            Arc::new(Mutex::new(0)),
        )
    }

    fn target(
        responses: Responses,
        count: Arc<Mutex<u32>>,
    ) -> PollTarget<impl FetchState<State = String>> {
        PollTarget::new(
            "gw-123",
            fetch_fn(move |id: String| {
                assert_eq!(id, "gw-123");
                *count.lock().unwrap() += 1;
                let next = responses
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Ok(Observation::Present("create_pending".to_string())));
                async move { next }
            }),
        )
    }

    fn present(s: &str) -> gax::Result<Observation<String>> {
        Ok(Observation::Present(s.to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn provisioned_after_two_intervals() -> anyhow::Result<()> {
        let (responses, count) = fake_service(vec![
            present("create_pending"),
            present("create_pending"),
            present("provisioned"),
        ]);
        let start = Instant::now();
        let outcome = wait_for(
            target(responses, count.clone()),
            DesiredState::State("provisioned".to_string()),
            PollConfig::default(),
        )
        .await?;
        assert_eq!(outcome, PollOutcome::Reached("provisioned".to_string()));
        assert_eq!(*count.lock().unwrap(), 3);
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(10) && elapsed < Duration::from_secs(11),
            "{elapsed:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_never_sleeps_after_last_attempt() -> anyhow::Result<()> {
        let (responses, count) = fake_service(vec![]);
        let start = Instant::now();
        let config = PollConfig::default()
            .with_interval(Duration::from_secs(2))
            .with_max_attempts(4);
        let outcome = wait_for(
            target(responses, count.clone()),
            DesiredState::State("provisioned".to_string()),
            config,
        )
        .await?;
        assert!(outcome.is_timed_out(), "{outcome:?}");
        assert_eq!(*count.lock().unwrap(), 5);
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(8) && elapsed < Duration::from_secs(9),
            "{elapsed:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deleted_gateway() -> anyhow::Result<()> {
        let (responses, count) = fake_service(vec![
            present("delete_pending"),
            Ok(Observation::Absent),
        ]);
        let outcome = wait_for(
            target(responses, count.clone()),
            DesiredState::Absent,
            PollConfig::default(),
        )
        .await?;
        assert!(outcome.is_not_found(), "{outcome:?}");
        assert_eq!(outcome.into_result()?, None);
        assert_eq!(*count.lock().unwrap(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn transport_error() -> anyhow::Result<()> {
        let (responses, count) = fake_service(vec![
            present("create_pending"),
            Err(Error::io("connection refused")),
        ]);
        let err = wait_for(
            target(responses, count.clone()),
            DesiredState::State("provisioned".to_string()),
            PollConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert_eq!(*count.lock().unwrap(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_while_sleeping() -> anyhow::Result<()> {
        let (responses, count) = fake_service(vec![]);
        let token = CancellationToken::new();
        let canceller = {
            let token = token.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(7)).await;
                token.cancel();
            })
        };
        let start = Instant::now();
        let err = wait_for_with_cancellation(
            target(responses, count.clone()),
            DesiredState::State("provisioned".to_string()),
            PollConfig::default(),
            token,
        )
        .await
        .unwrap_err();
        canceller.await?;
        assert!(err.is_cancelled(), "{err:?}");
        assert_eq!(*count.lock().unwrap(), 2);
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(7) && elapsed < Duration::from_secs(8),
            "{elapsed:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn not_cancelled() -> anyhow::Result<()> {
        let (responses, count) =
            fake_service(vec![present("create_pending"), present("provisioned")]);
        let outcome = wait_for_with_cancellation(
            target(responses, count.clone()),
            DesiredState::State("provisioned".to_string()),
            PollConfig::default(),
            CancellationToken::new(),
        )
        .await?;
        assert_eq!(outcome.into_result()?, Some("provisioned".to_string()));
        assert_eq!(*count.lock().unwrap(), 2);
        Ok(())
    }
}
