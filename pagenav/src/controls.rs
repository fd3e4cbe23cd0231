use std::fmt::Display;

use crate::state::PageState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Symbol id inside the icon sprite sheet
    pub fn icon(&self) -> &'static str {
        match self {
            Direction::Previous => "icon-arrow-left",
            Direction::Next => "icon-arrow-right",
        }
    }

    pub fn modifier_class(&self) -> &'static str {
        match self {
            Direction::Previous => "pagination__btn--prev",
            Direction::Next => "pagination__btn--next",
        }
    }
}

/// A single previous/next button pointing at `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub direction: Direction,
    pub target: u32,
}

impl Control {
    pub fn previous(target: u32) -> Self {
        Self {
            direction: Direction::Previous,
            target,
        }
    }

    pub fn next(target: u32) -> Self {
        Self {
            direction: Direction::Next,
            target,
        }
    }

    pub fn label(&self) -> Label {
        Label(self.target)
    }
}

/// Display text for a control, `Page {n}`
#[derive(Debug, Clone, Copy)]
pub struct Label(u32);

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {}", self.0)
    }
}

/// Which controls are valid for a given page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControls {
    None,
    Next(Control),
    Previous(Control),
    Both { previous: Control, next: Control },
}

impl PageControls {
    pub fn for_state<T>(state: &PageState<'_, T>) -> Self {
        Self::for_page(state.page(), state.total_pages())
    }

    pub fn for_page(page: u32, total_pages: u32) -> Self {
        if total_pages <= 1 {
            return PageControls::None;
        }
        if page == 1 {
            PageControls::Next(Control::next(page + 1))
        } else if page == total_pages {
            PageControls::Previous(Control::previous(page - 1))
        } else if page < total_pages {
            PageControls::Both {
                previous: Control::previous(page - 1),
                next: Control::next(page + 1),
            }
        } else {
            // stale page past the end of a shrunk result set
            PageControls::None
        }
    }

    /// Controls in display order, previous first
    pub fn iter(&self) -> impl Iterator<Item = Control> {
        let (previous, next) = match *self {
            PageControls::None => (None, None),
            PageControls::Next(next) => (None, Some(next)),
            PageControls::Previous(previous) => (Some(previous), None),
            PageControls::Both { previous, next } => (Some(previous), Some(next)),
        };
        previous.into_iter().chain(next)
    }

    pub fn len(&self) -> usize {
        match self {
            PageControls::None => 0,
            PageControls::Next(_) | PageControls::Previous(_) => 1,
            PageControls::Both { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PageControls::None)
    }
}
