// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Auxiliary-space accounting for preprocessing tables.

/// A preprocessing table whose auxiliary space can be reported.
pub trait TableFootprint {
    /// Number of entries in the table.
    fn entries(&self) -> usize;

    /// Size of one entry in bytes.
    fn entry_size(&self) -> usize;

    /// Total auxiliary space in bytes (`entries * entry_size`).
    fn bytes(&self) -> usize {
        self.entries() * self.entry_size()
    }
}
