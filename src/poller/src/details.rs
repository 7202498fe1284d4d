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

//! Simplifies the implementation of the wait loop.

use super::{DesiredState, Observation};
use gax::error::Error;
use tokio_util::sync::CancellationToken;

/// What the wait loop does after each fetch.
#[derive(Debug, PartialEq)]
pub(crate) enum Decision<S> {
    /// Stop, the resource is in the desired state.
    Reached(S),
    /// Stop, the resource is gone and that is what we wanted.
    NotFound,
    /// Keep polling. Carries the observation in case this is the last attempt.
    Continue(Observation<S>),
}

pub(crate) fn handle_observation<S>(
    desired: &DesiredState<S>,
    observation: Observation<S>,
) -> Decision<S>
where
    S: PartialEq,
{
    match (desired, observation) {
        (DesiredState::State(want), Observation::Present(got)) if &got == want => {
            Decision::Reached(got)
        }
        (DesiredState::Absent, Observation::Absent) => Decision::NotFound,
        (_, observation) => Decision::Continue(observation),
    }
}

pub(crate) fn is_cancelled(cancel: Option<&CancellationToken>) -> bool {
    cancel.is_some_and(CancellationToken::is_cancelled)
}

pub(crate) fn cancelled(id: &str, attempt_count: u32) -> Error {
    tracing::info!(id, attempt_count, "wait cancelled");
    Error::cancelled(format!(
        "wait for resource {id} cancelled after {attempt_count} additional attempts"
    ))
}
