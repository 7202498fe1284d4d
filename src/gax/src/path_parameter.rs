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

//! Handling of missing path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. The request builders hold them as plain strings, which may be
//! left empty by the application. The client libraries return an error,
//! before making any request, when the parameter is missing.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Returns `value` if it is not empty, and a binding error otherwise.
pub fn required<'a>(name: &str, value: &'a str) -> crate::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let inner = e.source().and_then(|e| e.downcast_ref::<super::Error>());
        assert!(
            matches!(inner, Some(Error::MissingRequiredParameter(s)) if s == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required_present() -> crate::Result<()> {
        let got = required("gateway_id", "gw-123")?;
        assert_eq!(got, "gw-123");
        Ok(())
    }

    #[test]
    fn required_empty() {
        let got = required("gateway_id", "");
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{got:?}");
    }
}
