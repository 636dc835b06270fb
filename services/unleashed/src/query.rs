// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Build a form-urlencoded query string, skipping `None` values.
///
/// Spaces become `+`. The result has no leading `?` and is exactly the
/// string that gets signed and sent.
///
/// ```
/// use opsign_unleashed::build_query;
///
/// let query = build_query([
///     ("pageSize", Some("200")),
///     ("productCode", Some("ABC 123")),
///     ("modifiedSince", None),
/// ]);
/// assert_eq!(query, "pageSize=200&productCode=ABC+123");
/// ```
pub fn build_query<K, V>(params: impl IntoIterator<Item = (K, Option<V>)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        if let Some(v) = v {
            serializer.append_pair(k.as_ref(), v.as_ref());
        }
    }
    serializer.finish()
}
