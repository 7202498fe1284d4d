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
#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    use ibm_cloud_test_utils::tracing::enable_tracing;
    use test_case::test_case;

    fn builder() -> directlink::builder::direct_link::ClientBuilder {
        integration_tests::builder()
            .expect("DIRECTLINK_BEARER_TOKEN is set for the integration tests")
    }

    #[test_case(builder(); "default")]
    #[test_case(builder().with_tracing().with_user_agent("rust-sdk-integration-tests"); "with tracing and user agent")]
    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_dedicated_gateway(
        builder: directlink::builder::direct_link::ClientBuilder,
    ) -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        integration_tests::gateways::dedicated(builder)
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_virtual_connections() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        integration_tests::virtual_connections::run(builder())
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_offerings() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        integration_tests::offerings::run(builder())
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_ports() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        integration_tests::ports::run(builder())
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_connect_gateway() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        integration_tests::ports::connect_gateway(builder())
            .await
            .map_err(integration_tests::report_error)
    }
}
