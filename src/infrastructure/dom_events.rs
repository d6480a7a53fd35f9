use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::application::click_outside::PointerDownSource;
use crate::domain::logging::{LogComponent, get_logger};

const POINTER_DOWN: &str = "mousedown";

/// Document-level pointer-down listener that ignores events whose target
/// lies inside the element returned by `region`.
pub struct DocumentPointerDown {
    region: Rc<dyn Fn() -> Option<Element>>,
}

impl DocumentPointerDown {
    pub fn new(region: impl Fn() -> Option<Element> + 'static) -> Self {
        Self { region: Rc::new(region) }
    }
}

impl PointerDownSource for DocumentPointerDown {
    /// `None` when there is no document to listen on.
    type Handle = Option<EventListener>;

    fn attach(&self, on_outside: Rc<dyn Fn()>) -> Option<EventListener> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            get_logger().warn(LogComponent::Infrastructure("DomEvents"), "no document, pointer-down listener skipped");
            return None;
        };

        let region = self.region.clone();
        let listener = EventListener::new_with_options(&document, POINTER_DOWN, EventListenerOptions::default(), move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = match (region(), target) {
                (Some(element), Some(node)) => element.contains(Some(&node)),
                _ => false,
            };
            if !inside {
                // The close action usually drops this very listener; it must
                // not run while the listener's closure is still on the stack.
                let on_outside = on_outside.clone();
                wasm_bindgen_futures::spawn_local(async move { on_outside() });
            }
        });
        Some(listener)
    }

    fn detach(&self, handle: Option<EventListener>) {
        drop(handle);
    }
}
