// Copyright 2025 sssh contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SSH client-config document engine: parse, query, mutate, sort.

mod classify;
mod document;
mod error;
mod mutate;
mod query;
mod record;
mod sort;
mod store;
mod validate;

pub use classify::{classify, LineKind};
pub use document::{ConfigDocument, Entry, UNGROUPED};
pub use error::ConfigError;
pub use mutate::{HostDraft, HostUpdate, PortForward};
pub use query::{find, list_group, list_grouped, DisplayRow, FindKind};
pub use record::{DirectiveKey, HostRecord};
pub use sort::sorted_document;
pub use store::ConfigStore;
pub use validate::{validate_ip, validate_port, validate_short_name};
