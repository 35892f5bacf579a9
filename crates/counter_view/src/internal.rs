// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript glue used by the DOM backend.

use wasm_bindgen::prelude::*;
use web_sys::Node;

#[wasm_bindgen]
extern "C" {
    pub(crate) type UnsafeNode;

    #[wasm_bindgen(method, js_name = "remove")]
    pub(crate) fn unmount(this: &UnsafeNode);
    #[wasm_bindgen(method, js_name = "appendChild")]
    pub(crate) fn append(this: &UnsafeNode, child: &JsValue);
    #[wasm_bindgen(method, setter, js_name = "textContent")]
    pub(crate) fn set_text(this: &UnsafeNode, t: &str);
}

pub(crate) fn obj(node: &JsValue) -> &UnsafeNode {
    node.unchecked_ref()
}

#[wasm_bindgen(inline_js = "
export function createElement(tag, text) {
    let e = document.createElement(tag);
    if (text) e.textContent = text;
    return e;
}

export function listen(node, event, handler) {
    node.addEventListener(event, handler);
}
")]
extern "C" {
    #[wasm_bindgen(js_name = "createElement")]
    pub(crate) fn element(tag: &str, text: &str) -> Node;
    #[wasm_bindgen(js_name = "listen")]
    pub(crate) fn listen(node: &Node, event: &str, handler: &JsValue);
}
