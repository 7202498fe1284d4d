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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a page of results returned by a List RPC.
///
/// IBM Cloud services paginate collections using a `start` token. Each page
/// includes a `next` link with the token for the following page, the last
/// page omits it.
pub trait PageableResponse {
    /// The token to fetch the next page, `None` on the last page.
    fn next_page_token(&self) -> Option<String>;
}

/// An adapter that converts paginated List RPCs into a [futures::Stream] of
/// pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

enum PageState {
    Fetch(Option<String>),
    Done,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token (if any) and a
    /// function to fetch each page.
    pub fn new<F>(
        seed_token: Option<String>,
        execute: impl Fn(Option<String>) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(PageState::Fetch(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    PageState::Fetch(token) => token,
                    PageState::Done => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = match page.next_page_token() {
                            Some(t) if !t.is_empty() => PageState::Fetch(Some(t)),
                            _ => PageState::Done,
                        };
                        Some((Ok(page), next))
                    }
                    Err(e) => Some((Err(e), PageState::Done)),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
