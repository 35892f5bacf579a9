// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Headless rendering for tests
//!
//! [`Screen`] mounts the Counter View without a browser. It runs the same transition
//! handler and the same [`render`](crate::render::render) function as the DOM backend,
//! and exposes the view the way a user sees it: by visible text.
//!
//! ```
//! use counter_view::screen::Screen;
//!
//! let mut screen = Screen::mount();
//!
//! screen.click("Increment")?;
//! screen.click("Increment")?;
//! screen.click("Reset")?;
//!
//! assert!(screen.get_by_text("Current Count: 0").is_ok());
//! # Ok::<(), counter_view::screen::QueryError>(())
//! ```

use std::fmt::{self, Display};

use log::info;
use thiserror::Error;

use crate::count::Count;
use crate::diff::Diff;
use crate::render::{render, value_line, Element, Layout, VALUE_LINE};
use crate::runtime::{handle, Hook};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element with the text: {0}")]
    NotFound(String),
    #[error("found {1} elements with the text: {0}")]
    Multiple(String, usize),
    #[error("element with the text {0:?} is not a control")]
    NotAControl(String),
}

/// A mounted, headless Counter View.
pub struct Screen {
    state: Hook<Count>,
    layout: Layout,
    memo: Count,
    renders: usize,
}

impl Screen {
    /// Mount a fresh Counter View. The count always starts at `0`.
    pub fn mount() -> Self {
        let state = Hook::new(Count::new());
        let layout = render(state.get());

        info!("counter mounted on screen");

        Screen {
            memo: state.get().into_memo(),
            state,
            layout,
            renders: 1,
        }
    }

    /// Find the only element whose visible text is exactly `text`.
    pub fn get_by_text(&self, text: &str) -> Result<&Element, QueryError> {
        let mut found = self.layout.iter().filter(|el| el.text() == text);

        match (found.next(), found.count()) {
            (Some(element), 0) => Ok(element),
            (Some(_), more) => Err(QueryError::Multiple(text.into(), more + 1)),
            (None, _) => Err(QueryError::NotFound(text.into())),
        }
    }

    /// Like [`get_by_text`](Screen::get_by_text), but absent elements are not an error.
    pub fn query_by_text(&self, text: &str) -> Option<&Element> {
        self.get_by_text(text).ok()
    }

    /// Activate the control labeled `label` and re-render if the state changed.
    pub fn click(&mut self, label: &str) -> Result<(), QueryError> {
        let control = self
            .get_by_text(label)?
            .control()
            .ok_or_else(|| QueryError::NotAControl(label.into()))?;

        if self.state.update(|count| handle(count, control)) {
            self.rerender();
        }

        Ok(())
    }

    fn rerender(&mut self) {
        let count = self.state.get();

        if count.diff(&mut self.memo) {
            self.layout[VALUE_LINE] = Element::Text(value_line(count));
        }

        self.renders += 1;
    }

    pub fn count(&self) -> Count {
        self.state.get()
    }

    /// Number of renders since mount, including the initial one.
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn elements(&self) -> &[Element] {
        &self.layout
    }

    /// Discard the view along with its state.
    pub fn unmount(self) {
        info!("counter unmounted from screen at {}", self.state.get());
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for element in &self.layout {
            writeln!(f, "{element}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::Control;

    #[test]
    fn renders_the_counter() {
        let screen = Screen::mount();

        assert_eq!(screen.get_by_text("Counter"), Ok(&Element::Heading("Counter")));
        assert!(screen.get_by_text("Current Count: 0").is_ok());
    }

    #[test]
    fn increments_the_counter() {
        let mut screen = Screen::mount();

        screen.click("Increment").unwrap();

        assert!(screen.get_by_text("Current Count: 1").is_ok());
        assert_eq!(screen.query_by_text("Current Count: 0"), None);
    }

    #[test]
    fn decrements_the_counter() {
        let mut screen = Screen::mount();

        screen.click("Decrement").unwrap();

        assert!(screen.get_by_text("Current Count: -1").is_ok());
    }

    #[test]
    fn resets_the_counter() {
        let mut screen = Screen::mount();

        screen.click("Increment").unwrap();
        screen.click("Increment").unwrap();
        screen.click("Reset").unwrap();

        assert!(screen.get_by_text("Current Count: 0").is_ok());
    }

    #[test]
    fn display_matches_folded_controls() {
        use Control::*;

        let mut screen = Screen::mount();
        let controls = [Decrement, Decrement, Increment, Reset, Increment, Increment, Increment];

        for (n, control) in controls.iter().enumerate() {
            screen.click(control.label()).unwrap();

            let expected = Count::fold(controls[..=n].iter().copied());

            assert_eq!(screen.count(), expected);
            assert!(screen.get_by_text(&format!("Current Count: {expected}")).is_ok());
        }
    }

    #[test]
    fn reset_twice_is_reset_once() {
        let mut screen = Screen::mount();

        screen.click("Decrement").unwrap();
        screen.click("Reset").unwrap();

        let renders = screen.renders();

        screen.click("Reset").unwrap();

        assert!(screen.get_by_text("Current Count: 0").is_ok());
        assert_eq!(screen.renders(), renders);
    }

    #[test]
    fn increment_and_decrement_return_to_zero() {
        let mut screen = Screen::mount();

        screen.click("Increment").unwrap();
        screen.click("Decrement").unwrap();
        assert!(screen.get_by_text("Current Count: 0").is_ok());

        screen.click("Decrement").unwrap();
        screen.click("Increment").unwrap();
        assert!(screen.get_by_text("Current Count: 0").is_ok());
    }

    #[test]
    fn renders_after_each_mutation() {
        let mut screen = Screen::mount();

        assert_eq!(screen.renders(), 1);

        screen.click("Increment").unwrap();
        screen.click("Decrement").unwrap();

        assert_eq!(screen.renders(), 3);
    }

    #[test]
    fn controls_are_always_present() {
        let mut screen = Screen::mount();

        for label in ["Decrement", "Decrement", "Reset", "Increment"] {
            screen.click(label).unwrap();

            for control in Control::ALL {
                assert_eq!(
                    screen.get_by_text(control.label()).map(Element::control),
                    Ok(Some(control))
                );
            }
        }
    }

    #[test]
    fn query_errors() {
        let mut screen = Screen::mount();

        assert_eq!(
            screen.get_by_text("Current Count: 1"),
            Err(QueryError::NotFound("Current Count: 1".into()))
        );
        assert_eq!(
            screen.click("Counter"),
            Err(QueryError::NotAControl("Counter".into()))
        );
        assert_eq!(
            screen.click("Multiply"),
            Err(QueryError::NotFound("Multiply".into()))
        );
        assert_eq!(screen.count(), Count::new());
    }

    #[test]
    fn remount_starts_from_zero() {
        let mut screen = Screen::mount();

        screen.click("Increment").unwrap();
        screen.unmount();

        let screen = Screen::mount();

        assert_eq!(screen.count(), Count::new());
        assert!(screen.get_by_text("Current Count: 0").is_ok());
    }

    #[test]
    fn display_lists_visible_text() {
        let mut screen = Screen::mount();

        screen.click("Decrement").unwrap();

        assert_eq!(
            screen.to_string(),
            "Counter\nCurrent Count: -1\nIncrement\nDecrement\nReset\n"
        );
        assert_eq!(screen.elements().len(), 5);
    }
}
