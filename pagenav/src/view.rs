use maud::{html, Markup, Render};

use crate::{
    config::PaginationConfig,
    controls::{Control, Direction, PageControls},
    state::PageState,
};

/// Previous/next page buttons for a result set.
/// Every button carries `data-goto` with its target page so a single
/// delegated listener on the container can route clicks.
pub struct PaginationView<'a, T> {
    state: PageState<'a, T>,
    config: &'a PaginationConfig,
}

impl<'a, T> PaginationView<'a, T> {
    pub fn new(state: PageState<'a, T>, config: &'a PaginationConfig) -> Self {
        Self { state, config }
    }

    pub fn controls(&self) -> PageControls {
        PageControls::for_state(&self.state)
    }

    fn render_control(&self, control: Control) -> Markup {
        let config = self.config;
        let field = config.form_field.as_deref();
        let icon = html! {
            svg class="search__icon" {
                use href={ (config.icons_href) "#" (control.direction.icon()) } {}
            }
        };
        html! {
            button data-goto=(control.target)
                class={ (config.button_class) " " (control.direction.modifier_class()) }
                type=[field.map(|_| "submit")]
                name=[field]
                value=[field.map(|_| control.target)] {
                @match control.direction {
                    Direction::Previous => {
                        (icon)
                        span { (control.label()) }
                    }
                    Direction::Next => {
                        span { (control.label()) }
                        (icon)
                    }
                }
            }
        }
    }
}

impl<T> Render for PaginationView<'_, T> {
    fn render(&self) -> Markup {
        html! {
            @for control in self.controls().iter() {
                (self.render_control(control))
            }
        }
    }
}
