//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::InputTracker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Route document key events into the tracker
pub fn install_key_listeners(
    document: &Document,
    tracker: Rc<RefCell<InputTracker>>,
) -> Result<(), JsValue> {
    {
        let tracker = tracker.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            tracker.borrow_mut().key_down(&get_key_from_event(&event));
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            tracker.borrow_mut().key_up(&get_key_from_event(&event));
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
