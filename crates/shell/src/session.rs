//! Interactive session: wires parsed commands to the pipeline and renderer.

use shopfront_catalog::{CartStore, CatalogPipeline, DispatchOutcome, Notification, RenderMode};

use crate::input::{ShellCommand, USAGE, parse_line};
use crate::render;

/// Result of handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session<C> {
    pipeline: CatalogPipeline<C>,
}

impl<C> Session<C>
where
    C: CartStore,
{
    pub fn new(pipeline: CatalogPipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &CatalogPipeline<C> {
        &self.pipeline
    }

    /// Banner: load failure notice, categories, first page and cart badge.
    pub fn welcome(&self) -> String {
        let mut out = String::new();
        if self.pipeline.load_error().is_some() {
            out.push_str(&render::render_notification(&Notification::error(
                "Could not load products",
            )));
        }
        out.push_str(&render::render_categories(self.pipeline.categories()));
        out.push_str(&render::render_view(&self.pipeline.render(RenderMode::Replace)));
        out.push_str(&render::render_badge(self.pipeline.cart_badge()));
        out
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_line(line) {
            Ok(None) => Step::Continue(String::new()),
            Ok(Some(command)) => self.handle(command),
            Err(err) => Step::Continue(format!("{err}\n")),
        }
    }

    pub fn handle(&mut self, command: ShellCommand) -> Step {
        let output = match command {
            ShellCommand::Quit => return Step::Quit,
            ShellCommand::Help => format!("{USAGE}\n"),
            ShellCommand::Categories => render::render_categories(self.pipeline.categories()),
            ShellCommand::Cart => render::render_badge(self.pipeline.cart_badge()),
            ShellCommand::Catalog(command) => match self.pipeline.dispatch(command) {
                Ok(DispatchOutcome::Render(view)) => render::render_view(&view),
                Ok(DispatchOutcome::CartUpdated {
                    badge,
                    notification,
                }) => {
                    let mut out = render::render_notification(&notification);
                    out.push_str(&render::render_badge(badge));
                    out
                }
                Err(err) => {
                    tracing::error!(%err, "failed to update cart");
                    render::render_notification(&Notification::error("Could not add item to cart"))
                }
            },
        };
        Step::Continue(output)
    }
}
