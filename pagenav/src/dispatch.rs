use std::{cell::RefCell, rc::Rc};

use tracing::{debug, warn};

use crate::error::NavigateError;

pub const GOTO_ATTRIBUTE: &str = "goto";

/// The element surface the dispatcher needs from whatever hosts the markup.
pub trait NavTarget: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
    /// Value of `data-{name}`
    fn data_attribute(&self, name: &str) -> Option<String>;

    /// Nearest ancestor carrying `class`, starting at `self`
    fn closest(&self, class: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.has_class(class) {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }
}

/// Parses a `data-goto` value into a 1-based page number
pub fn parse_goto(value: &str) -> Result<u32, NavigateError> {
    let page = value
        .trim()
        .parse::<u32>()
        .map_err(|source| NavigateError::InvalidGoto {
            value: value.to_string(),
            source,
        })?;
    if page == 0 {
        return Err(NavigateError::ZeroPage);
    }
    Ok(page)
}

type Handler = Rc<dyn Fn(u32)>;

/// Routes clicks inside a pagination container to a navigation handler.
/// One dispatcher serves every button ever rendered into the container.
pub struct ClickDispatcher {
    button_class: String,
    handler: RefCell<Option<Handler>>,
}

impl ClickDispatcher {
    pub fn new(button_class: impl Into<String>) -> Self {
        Self {
            button_class: button_class.into(),
            handler: RefCell::new(None),
        }
    }

    pub fn button_class(&self) -> &str {
        &self.button_class
    }

    /// Replaces any previously registered handler
    pub fn on_navigate(&self, handler: impl Fn(u32) + 'static) {
        *self.handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Handles a click that originated at `target`.
    ///
    /// Returns `Ok(None)` when the click did not land on a navigation button,
    /// and the page passed to the handler otherwise. Buttons with a missing
    /// or malformed `goto` are rejected without calling the handler.
    pub fn handle_click<E: NavTarget>(&self, target: &E) -> Result<Option<u32>, NavigateError> {
        let Some(button) = target.closest(&self.button_class) else {
            return Ok(None);
        };
        let goto = button
            .data_attribute(GOTO_ATTRIBUTE)
            .ok_or(NavigateError::MissingGoto)?;
        let page = parse_goto(&goto).inspect_err(|e| warn!("Ignoring pagination click: {e}"))?;
        // clone out so the handler may re-register itself
        let handler = self.handler.borrow().clone();
        match handler {
            Some(handler) => {
                debug!("navigating to page {page}");
                handler(page);
            }
            None => debug!("pagination click for page {page} with no handler registered"),
        }
        Ok(Some(page))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{controls::Control, tree::Node};

    fn recording_dispatcher() -> (ClickDispatcher, Rc<RefCell<Vec<u32>>>) {
        let dispatcher = ClickDispatcher::new("btn--inline");
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        dispatcher.on_navigate(move |page| sink.borrow_mut().push(page));
        (dispatcher, calls)
    }

    #[test]
    fn test_parse_goto() {
        assert_eq!(parse_goto("3"), Ok(3));
        assert_eq!(parse_goto(" 12 "), Ok(12));
        assert_eq!(parse_goto("0"), Err(NavigateError::ZeroPage));
        assert!(matches!(
            parse_goto("NaN"),
            Err(NavigateError::InvalidGoto { .. })
        ));
        assert!(matches!(
            parse_goto("-1"),
            Err(NavigateError::InvalidGoto { .. })
        ));
    }

    #[test]
    fn test_click_on_button_invokes_handler_once() {
        let (dispatcher, calls) = recording_dispatcher();
        let container = Node::new("div").with_class("pagination");
        let button = Node::from_control(&Control::next(2), "btn--inline").child_of(&container);

        assert_eq!(dispatcher.handle_click(&button), Ok(Some(2)));
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_click_on_nested_span_bubbles_to_button() {
        let (dispatcher, calls) = recording_dispatcher();
        let container = Node::new("div").with_class("pagination");
        let button = Node::from_control(&Control::previous(4), "btn--inline").child_of(&container);
        let span = Node::new("span").child_of(&button);

        assert_eq!(dispatcher.handle_click(&span), Ok(Some(4)));
        assert_eq!(*calls.borrow(), vec![4]);
    }

    #[test]
    fn test_click_outside_button_is_ignored() {
        let (dispatcher, calls) = recording_dispatcher();
        let container = Node::new("div").with_class("pagination");
        let stray = Node::new("span").with_data("goto", "3").child_of(&container);

        assert_eq!(dispatcher.handle_click(&container), Ok(None));
        assert_eq!(dispatcher.handle_click(&stray), Ok(None));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_malformed_goto_is_rejected() {
        let (dispatcher, calls) = recording_dispatcher();
        let missing = Node::new("button").with_class("btn--inline");
        let garbage = Node::new("button")
            .with_class("btn--inline")
            .with_data("goto", "next");

        assert_eq!(
            dispatcher.handle_click(&missing),
            Err(NavigateError::MissingGoto)
        );
        assert!(matches!(
            dispatcher.handle_click(&garbage),
            Err(NavigateError::InvalidGoto { .. })
        ));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_repeated_clicks_are_not_debounced() {
        let (dispatcher, calls) = recording_dispatcher();
        let button = Node::from_control(&Control::next(2), "btn--inline");
        for _ in 0..3 {
            dispatcher.handle_click(&button).unwrap();
        }
        assert_eq!(*calls.borrow(), vec![2, 2, 2]);
    }

    #[test]
    fn test_handler_replacement() {
        let dispatcher = ClickDispatcher::new("btn--inline");
        let button = Node::from_control(&Control::next(7), "btn--inline");
        // no handler yet, still reports the page
        assert_eq!(dispatcher.handle_click(&button), Ok(Some(7)));

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let f = first.clone();
        dispatcher.on_navigate(move |page| f.set(page));
        let s = second.clone();
        dispatcher.on_navigate(move |page| s.set(page));
        dispatcher.handle_click(&button).unwrap();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 7);
    }
}
