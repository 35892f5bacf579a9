// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-threaded runtime owning the mounted Counter View and its state.

use std::cell::Cell;
use std::ops::Deref;

use log::{debug, error, info};
use thiserror::Error;

use crate::count::{Control, Count};
use crate::dom::Mountable;
use crate::view::CounterView;
use crate::View;

/// Describes whether or not a view should be rendered after state changes.
pub trait ShouldRender: 'static {
    fn should_render(self) -> bool;

    fn then(self) -> Then;
}

/// Closures without return type always update their view.
impl ShouldRender for () {
    fn should_render(self) -> bool {
        true
    }

    fn then(self) -> Then {
        Then::Render
    }
}

/// An enum that implements the [`ShouldRender`] trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Then {
    /// This is a silent update
    Stop,
    /// Render the view after this update
    Render,
}

impl ShouldRender for Then {
    fn should_render(self) -> bool {
        match self {
            Then::Stop => false,
            Then::Render => true,
        }
    }

    fn then(self) -> Then {
        self
    }
}

/// State owned by a mounted view. Created on mount, dropped on unmount.
pub struct Hook<S> {
    inner: S,
}

impl<S> Deref for Hook<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.inner
    }
}

impl<S> Hook<S> {
    pub fn new(inner: S) -> Self {
        Hook { inner }
    }

    /// Get the value of state if state implements `Copy`. This is equivalent to writing
    /// `**hook` but conveys intent better.
    pub fn get(&self) -> S
    where
        S: Copy,
    {
        self.inner
    }

    /// Mutate the state, returning whether the owning view should render.
    ///
    /// ```
    /// # use counter_view::runtime::{Hook, Then};
    /// let mut count = Hook::new(0_i32);
    ///
    /// // closures without a return type always render
    /// assert!(count.update(|count| *count += 1));
    ///
    /// // only render on change
    /// assert!(!count.update(|count| {
    ///     if *count < 1 {
    ///         *count += 1;
    ///         Then::Render
    ///     } else {
    ///         Then::Stop
    ///     }
    /// }));
    ///
    /// assert_eq!(count.get(), 1);
    /// ```
    pub fn update<F, O>(&mut self, mutator: F) -> bool
    where
        F: FnOnce(&mut S) -> O,
        O: ShouldRender,
    {
        mutator(&mut self.inner).should_render()
    }
}

/// Transition handler shared by every backend of the Counter View.
///
/// Transitions that leave the value unchanged (`Reset` at zero) are silent.
pub fn handle(count: &mut Count, control: Control) -> Then {
    let next = count.apply(control);

    debug!("{control:?}: {count} -> {next}");

    if next == *count {
        Then::Stop
    } else {
        *count = next;
        Then::Render
    }
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("document has no `body`")]
    NoBody,
}

trait Runtime {
    fn trigger(&mut self, control: Control);

    fn unmount(&self);
}

struct RuntimeData<P> {
    state: Hook<Count>,
    product: P,
}

impl<P> Runtime for RuntimeData<P>
where
    P: Mountable,
    CounterView: View<Product = P>,
{
    fn trigger(&mut self, control: Control) {
        if self.state.update(|count| handle(count, control)) {
            CounterView::new(self.state.get()).update(&mut self.product);
        }
    }

    fn unmount(&self) {
        self.product.unmount();
    }
}

thread_local! {
    static RUNTIME: Cell<Option<Box<dyn Runtime>>> = const { Cell::new(None) };
}

/// Mount the Counter View in the document `body`.
///
/// Calling this while a Counter View is already mounted does nothing.
/// Mount failures are logged rather than propagated.
pub fn start() {
    if let Err(err) = try_start() {
        error!("failed to mount the counter: {err}");
    }
}

/// Same as [`start`], but returns mount failures to the caller.
pub fn try_start() -> Result<(), MountError> {
    init_panic_hook();

    let runtime = RUNTIME.take();
    let mounted = runtime.is_some();

    RUNTIME.set(runtime);

    if mounted {
        return Ok(());
    }

    let body = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?
        .body()
        .ok_or(MountError::NoBody)?;

    let state = Hook::new(Count::new());
    let product = CounterView::new(state.get()).build();

    product.append_to(&body);

    RUNTIME.set(Some(Box::new(RuntimeData { state, product })));

    info!("counter mounted");

    Ok(())
}

/// Remove the mounted Counter View from the document and drop its state.
/// A following [`start`] mounts a fresh view showing `0`.
pub fn unmount() {
    if let Some(runtime) = RUNTIME.take() {
        runtime.unmount();

        info!("counter unmounted");
    }
}

/// Dispatch an activated control into the mounted view.
pub(crate) fn trigger(control: Control) {
    let runtime = RUNTIME.take();

    debug_assert!(runtime.is_some(), "Cyclical update detected");

    if let Some(mut runtime) = runtime {
        runtime.trigger(control);

        RUNTIME.set(Some(runtime));
    }
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    {
        static HOOK: std::sync::Once = std::sync::Once::new();

        HOOK.call_once(|| std::panic::set_hook(Box::new(console_error_panic_hook::hook)));
    }
}
