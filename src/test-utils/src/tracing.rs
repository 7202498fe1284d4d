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
use tracing_subscriber::filter::LevelFilter;

/// Enables tracing for the integration tests.
///
/// The `log-integration-tests` feature raises the level to `DEBUG` for the
/// client libraries. Otherwise only warnings are shown.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_env_filter(env_filter())
        .finish();

    ::tracing::subscriber::set_default(subscriber)
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level().into())
        .from_env_lossy()
}

fn default_level() -> LevelFilter {
    #[cfg(feature = "log-integration-tests")]
    let level = LevelFilter::DEBUG;
    #[cfg(not(feature = "log-integration-tests"))]
    let level = LevelFilter::WARN;
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_default() {
        let _guard = enable_tracing();
        let default = ::tracing::Dispatch::default();
        assert!(
            default.is::<tracing_subscriber::FmtSubscriber<
                tracing_subscriber::fmt::format::DefaultFields,
                tracing_subscriber::fmt::format::Format,
                tracing_subscriber::EnvFilter,
            >>(),
            "{default:?}"
        );
    }

    #[test]
    fn level() {
        #[cfg(feature = "log-integration-tests")]
        assert_eq!(default_level(), LevelFilter::DEBUG);
        #[cfg(not(feature = "log-integration-tests"))]
        assert_eq!(default_level(), LevelFilter::WARN);
    }
}
