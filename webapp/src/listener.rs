use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use common::error::PageError;

use crate::dom::js_error;

// an attached dom event listener
//
// the closure has to outlive its registration, so the two are owned together and
// dropping the guard detaches the listener before the closure is freed
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        mut callback: F,
    ) -> Result<Self, PageError>
    where
        F: FnMut(&Event) + 'static,
    {
        let callback = Closure::wrap(
            Box::new(move |event: Event| callback(&event)) as Box<dyn FnMut(Event)>
        );

        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener", err))?;

        Ok(EventListener {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

// one-shot listener with no guard
//
// the browser drops the registration after the first event and the closure frees itself
// once it has run, so there is nothing left to detach
pub fn listen_once<F>(
    target: &EventTarget,
    event_type: &str,
    callback: F,
) -> Result<(), PageError>
where
    F: FnOnce(&Event) + 'static,
{
    let callback = Closure::once_into_js(move |event: Event| callback(&event));

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|err| js_error("addEventListener", err))
}
