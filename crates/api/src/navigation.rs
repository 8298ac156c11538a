// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The path of the bookings list.
pub const BOOKINGS_PATH: &str = "/bookings";

/// Moves the user between pages.
pub trait Navigator: Send + Sync {
    /// Opens a page.
    fn push(&self, path: &str);

    /// Returns to the previous page.
    fn back(&self);
}
