//! Wire codec: query-string encoding and response-body decoding.
//!
//! Two decode conventions exist side by side. The legacy v2 interface wraps
//! every successful payload in an `{"ok": true, "result": ...}` envelope;
//! the v3 interface returns the payload directly. [`decode`] is the single
//! entry point, parameterized by [`Envelope`].

use serde::de::DeserializeOwned;

use crate::error::Error;

/// An ordered set of query parameters.
///
/// Order is preserved so that list-valued filters join in caller order.
pub type Query = Vec<(&'static str, String)>;

/// Append a parameter unconditionally. Defaults (`limit`, `offset`, `sort`)
/// go through here so the remote service always observes them explicitly.
pub(crate) fn push(query: &mut Query, key: &'static str, value: impl ToString) {
    query.push((key, value.to_string()));
}

/// Append an optional filter, omitting it entirely when unset.
pub(crate) fn push_opt(query: &mut Query, key: &'static str, value: Option<impl ToString>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}

/// Append a list-valued filter as one comma-joined parameter, in input
/// order. An empty list omits the parameter entirely. This joining is part
/// of the remote service's wire contract, not a convenience.
pub(crate) fn push_list<T: ToString>(query: &mut Query, key: &'static str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined = values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(",");
    query.push((key, joined));
}

/// Which response convention a body follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Envelope {
    /// v2: `{"ok": true, "result": <payload>}` on success,
    /// `{"ok": false, "error": ..., "code": ...}` on failure.
    V2,
    /// v3: the payload is the whole body.
    None,
}

/// Decode a response body into `T`.
///
/// `what` names the target type and is carried into [`Error::Decode`] so a
/// schema drift between client and service is diagnosable from the error
/// alone. Envelope problems (missing `ok`/`result`, `ok: false`) are
/// protocol errors, distinct from decode errors: the former means the
/// remote call itself failed, the latter that we got a 200 but couldn't
/// make sense of the payload.
pub(crate) fn decode<T: DeserializeOwned>(
    body: &str,
    envelope: Envelope,
    what: &'static str,
) -> Result<T, Error> {
    match envelope {
        Envelope::None => serde_json::from_str(body).map_err(|source| Error::Decode { what, source }),
        Envelope::V2 => {
            let value: serde_json::Value =
                serde_json::from_str(body).map_err(|source| Error::Decode { what, source })?;

            let Some(object) = value.as_object() else {
                return Err(Error::Envelope("response body is not a JSON object".into()));
            };

            match object.get("ok").and_then(serde_json::Value::as_bool) {
                Some(true) => {}
                Some(false) => {
                    let message = object
                        .get("error")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or("unspecified error")
                        .to_string();
                    let code = object.get("code").and_then(serde_json::Value::as_i64);
                    return Err(Error::Api { code, message });
                }
                None => {
                    return Err(Error::Envelope(
                        "missing or non-boolean 'ok' field".into(),
                    ));
                }
            }

            let Some(result) = object.get("result") else {
                return Err(Error::Envelope("'ok' is true but 'result' is absent".into()));
            };

            serde_json::from_value(result.clone()).map_err(|source| Error::Decode { what, source })
        }
    }
}
