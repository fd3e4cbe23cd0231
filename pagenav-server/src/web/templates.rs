use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render, DOCTYPE};
use pagenav::{PageState, PaginationConfig, PaginationView};

use super::SearchResult;

pub trait Page {
    fn get_name(&self) -> String;
    fn draw_body(&self) -> Markup;
}

pub struct RenderPage<T: Page>(pub(crate) T);

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().0).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        html! {
          (DOCTYPE)
          html {
            head {
              title { (self.0.get_name()) }
              meta charset="utf-8";
              meta name="viewport" content="width=device-width, initial-scale=1.0";
            }
            body {
              (self.0.draw_body())
            }
          }
        }
    }
}

pub(crate) struct SearchPage<'a> {
    pub(crate) state: PageState<'a, SearchResult>,
    pub(crate) config: &'a PaginationConfig,
}

impl Page for SearchPage<'_> {
    fn get_name(&self) -> String {
        format!("Search results - page {}", self.state.page())
    }

    fn draw_body(&self) -> Markup {
        let total_pages = self.state.total_pages().max(1);
        html! {
          h1 { "Search results" }
          ul class="results" {
            @for result in self.state.current_slice() {
              li class="preview" {
                span class="preview__title" { (result.title) }
                " "
                span class="preview__publisher" { (result.publisher) }
              }
            }
          }
          form method="get" action="/" class="pagination" {
            (PaginationView::new(self.state, self.config))
          }
          p class="pagination__summary" {
            "Page " (self.state.page()) " of " (total_pages)
          }
        }
    }
}
