// Copyright 2025 John Brosnihan
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
//! Error types
//!
//! All fallible operations live at the edges of the simulation: building a
//! world and inserting particles. A running step has no error path.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised when input would break the solver's geometric invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A radius, position or container extent that the solver cannot work with
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A configuration value outside its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidGeometry("radius must be > 0, got -1".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid geometry"));
        assert!(msg.contains("radius"));

        let err = SimError::InvalidConfig("substep_count must be >= 1".to_string());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
