use crate::dom;
use crate::input::MouseState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer on `window`; the canvas itself sits behind page content.
pub fn wire_pointer_handlers(mouse: Rc<RefCell<MouseState>>) {
    let m = mouse.clone();
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let mut ms = m.borrow_mut();
        ms.client_x = ev.client_x() as f32;
        ms.client_y = ev.client_y() as f32;
        ms.inside = true;
    });

    let m = mouse.clone();
    dom::add_window_listener("pointerdown", move |_: web::PointerEvent| {
        m.borrow_mut().down = true;
    });

    let m = mouse.clone();
    dom::add_window_listener("pointerup", move |_: web::PointerEvent| {
        m.borrow_mut().down = false;
    });

    // Leaving <html> means the pointer left the page.
    let m = mouse;
    if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
        let closure = Closure::wrap(Box::new(move |_: web::PointerEvent| {
            let mut ms = m.borrow_mut();
            ms.inside = false;
            ms.down = false;
        }) as Box<dyn FnMut(_)>);
        _ = root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
