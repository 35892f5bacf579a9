// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The render function of the Counter View.
//!
//! Both the DOM backend and the headless [`Screen`](crate::screen::Screen) draw from
//! [`render`], so the visible text is identical in the browser and in tests.

use std::fmt::{self, Display};

use crate::count::{Control, Count};

/// Fixed heading text.
pub const TITLE: &str = "Counter";

/// Text preceding the value on the value line.
pub const VALUE_PREFIX: &str = "Current Count: ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// `<h1>`
    Heading(&'static str),
    /// `<p>`
    Text(String),
    /// `<button>`, always enabled.
    Button(Control),
}

impl Element {
    pub fn text(&self) -> &str {
        match self {
            Element::Heading(text) => text,
            Element::Text(text) => text.as_str(),
            Element::Button(control) => control.label(),
        }
    }

    pub fn control(&self) -> Option<Control> {
        match self {
            Element::Button(control) => Some(*control),
            _ => None,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Heading, value line and the three buttons, in document order.
pub type Layout = [Element; 5];

/// Index of the value line within a [`Layout`].
pub const VALUE_LINE: usize = 1;

pub fn value_line(count: Count) -> String {
    let mut buf = itoa::Buffer::new();
    let value = buf.format(count.get());

    let mut line = String::with_capacity(VALUE_PREFIX.len() + value.len());

    line.push_str(VALUE_PREFIX);
    line.push_str(value);
    line
}

pub fn render(count: Count) -> Layout {
    let [increment, decrement, reset] = Control::ALL;

    [
        Element::Heading(TITLE),
        Element::Text(value_line(count)),
        Element::Button(increment),
        Element::Button(decrement),
        Element::Button(reset),
    ]
}
