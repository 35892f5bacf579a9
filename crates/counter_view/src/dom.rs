// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for mounting products in the DOM

use wasm_bindgen::JsValue;

use crate::internal;

/// A type that holds a reference to a DOM node it owns.
pub trait Mountable: 'static {
    fn js(&self) -> &JsValue;

    /// Append this node to the end of `parent`.
    fn append_to(&self, parent: &JsValue) {
        internal::obj(parent).append(self.js());
    }

    /// Remove this node from the document.
    fn unmount(&self) {
        internal::obj(self.js()).unmount();
    }
}
