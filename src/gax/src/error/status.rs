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

use serde::{Deserialize, Serialize};

/// The error document returned by IBM Cloud services.
///
/// IBM Cloud services report errors using a common JSON document:
///
/// ```json
/// {
///   "errors": [{ "code": "not_found", "message": "Gateway not found", "more_info": "..." }],
///   "trace": "2f8e1a4c-...",
///   "status_code": 404
/// }
/// ```
///
/// The `trace` field identifies the request in the service logs, and is
/// useful when contacting IBM Cloud support.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Status {
    /// The HTTP status code, as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// The request trace id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    /// The list of problems detected by the service.
    pub errors: Vec<ErrorDetail>,
}

impl Status {
    /// Sets the value of [status_code][Status::status_code].
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.status_code = Some(v.into());
        self
    }

    /// Sets the value of [trace][Status::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the value of [errors][Status::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorDetail>,
    {
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// The code of the first reported problem, if any.
    pub fn code(&self) -> Option<&str> {
        self.errors.first().map(|e| e.code.as_str())
    }

    /// The message of the first reported problem, if any.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

/// A single problem reported in a [Status].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// A snake case string succinctly identifying the problem.
    pub code: String,

    /// An explanation of the problem.
    pub message: String,

    /// A link to documentation about the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,

    /// The request field, header, or parameter that caused the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ErrorTarget>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [code][ErrorDetail::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [more_info][ErrorDetail::more_info].
    pub fn set_more_info<T: Into<String>>(mut self, v: T) -> Self {
        self.more_info = Some(v.into());
        self
    }

    /// Sets the value of [target][ErrorDetail::target].
    pub fn set_target<T: Into<ErrorTarget>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }
}

/// Identifies the part of the request that caused a problem.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorTarget {
    /// The name of the problematic field, header, or parameter.
    pub name: String,

    /// One of `field`, `header`, or `parameter`.
    #[serde(rename = "type")]
    pub r#type: String,
}

impl ErrorTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ErrorTarget::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [r#type][ErrorTarget::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = crate::error::Error;

    /// Parses an error document.
    ///
    /// Payloads without any reported problems are not error documents, even
    /// if they are valid JSON objects.
    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let status = serde_json::from_slice::<Status>(value).map_err(Self::Error::deser)?;
        if status.errors.is_empty() {
            return Err(Self::Error::deser("the payload has no `errors` field"));
        }
        Ok(status)
    }
}
