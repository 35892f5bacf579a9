// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Counter View
//!
//! _A counter widget for the browser._
//!
//! The view shows a `Counter` heading, a `Current Count: <value>` line, and three
//! buttons: `Increment`, `Decrement` and `Reset`. The count starts at `0` every time
//! the view is mounted.
//!
//! ### Running in the browser
//!
//! ```no_run
//! fn main() {
//!     counter_view::start();
//! }
//! ```
//!
//! [`start`] mounts the view in the document `body`. Each button click applies a
//! [`Control`] to the [`Count`] and renders the view again. Only the text of the value
//! line is touched in the DOM, and only when the value changed.
//!
//! ### Testing without a browser
//!
//! The [`screen`] module mounts the same view headlessly and exposes it by visible text:
//!
//! ```
//! use counter_view::screen::Screen;
//!
//! let mut screen = Screen::mount();
//!
//! screen.click("Decrement")?;
//!
//! assert!(screen.get_by_text("Current Count: -1").is_ok());
//! # Ok::<(), counter_view::screen::QueryError>(())
//! ```
//!
//! To run the demo you'll need [`trunk`](https://trunkrs.dev/) and the Wasm target:
//! ```sh
//! rustup target add wasm32-unknown-unknown
//! cd demos/counter
//! trunk serve
//! ```

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod count;
pub mod diff;
pub mod dom;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod view;

mod internal;

pub use count::{Control, Count};
pub use runtime::{start, try_start, unmount, MountError};

use dom::Mountable;

/// Trait that describes types that can be rendered in the DOM.
pub trait View {
    /// The product should contain a DOM reference to this View and
    /// any data it needs to update itself.
    type Product: Mountable;

    /// Build a product that can be mounted in the DOM from this type.
    fn build(self) -> Self::Product;

    /// Update the product and apply changes to the DOM if necessary.
    fn update(self, p: &mut Self::Product);
}
