//! Browser binding for [`ClickDispatcher`].
use std::rc::Rc;

use tracing::error;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event};

use crate::{
    dispatch::{ClickDispatcher, NavTarget},
    error::NavigateError,
};

impl NavTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(&format!("data-{name}"))
    }

    fn closest(&self, class: &str) -> Option<Self> {
        Element::closest(self, &format!(".{class}")).ok().flatten()
    }
}

/// Registers one click listener on `container` that feeds every click to `dispatcher`.
/// The listener lives as long as the page does.
pub fn add_handler_click(
    container: &Element,
    dispatcher: Rc<ClickDispatcher>,
) -> Result<(), NavigateError> {
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if let Err(e) = dispatcher.handle_click(&target) {
            error!("Pagination click failed {e}");
        }
    }) as Box<dyn FnMut(Event)>);
    container
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| NavigateError::Js(format!("{e:?}")))?;
    on_click.forget();
    Ok(())
}
