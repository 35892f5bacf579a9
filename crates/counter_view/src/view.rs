// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Counter View rendered into the DOM.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Event, Node};

use crate::count::{Control, Count};
use crate::diff::Diff;
use crate::dom::Mountable;
use crate::render::{render, value_line, Element, VALUE_LINE};
use crate::{internal, runtime, View};

/// Transient description of the Counter View for a given count.
pub struct CounterView {
    count: Count,
}

impl CounterView {
    pub const fn new(count: Count) -> Self {
        CounterView { count }
    }
}

/// Mounted Counter View: the root `<div>`, the value line, and the button listeners.
pub struct CounterProduct {
    root: Node,
    value: Node,
    memo: Count,
    _listeners: Vec<Listener>,
}

struct Listener {
    _closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(node: &Node, control: Control) -> Self {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| runtime::trigger(control));

        internal::listen(node, "click", closure.as_ref());

        Listener { _closure: closure }
    }
}

fn tag(element: &Element) -> &'static str {
    match element {
        Element::Heading(_) => "h1",
        Element::Text(_) => "p",
        Element::Button(_) => "button",
    }
}

impl View for CounterView {
    type Product = CounterProduct;

    fn build(self) -> CounterProduct {
        let layout = render(self.count);
        let root = internal::element("div", "");
        let nodes = layout
            .each_ref()
            .map(|element| internal::element(tag(element), element.text()));

        let mut listeners = Vec::with_capacity(Control::ALL.len());

        for (element, node) in layout.iter().zip(&nodes) {
            if let Some(control) = element.control() {
                listeners.push(Listener::new(node, control));
            }

            internal::obj(&root).append(node);
        }

        CounterProduct {
            root,
            value: nodes[VALUE_LINE].clone(),
            memo: self.count.into_memo(),
            _listeners: listeners,
        }
    }

    fn update(self, p: &mut CounterProduct) {
        if self.count.diff(&mut p.memo) {
            internal::obj(&p.value).set_text(&value_line(self.count));
        }
    }
}

impl Mountable for CounterProduct {
    fn js(&self) -> &JsValue {
        &self.root
    }
}
