//! Line-oriented command parsing.
//!
//! ```text
//! filter [cat=<label>]... [from=<n>] [to=<n>] [discount]
//! sort <price_asc|price_desc|rating|...>
//! more
//! add <id>
//! categories | cart | help | quit
//! ```
//!
//! Labels containing spaces can be quoted: `cat="Home & Garden"`.

use thiserror::Error;

use shopfront_catalog::{CatalogCommand, FilterForm, SortMode};
use shopfront_core::{DomainError, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Catalog(CatalogCommand),
    Categories,
    Cart,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command {0:?}; type `help` for usage")]
    UnknownCommand(String),

    #[error("unknown filter option {0:?}")]
    UnknownFilterOption(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    InvalidProductId(#[from] DomainError),
}

pub const USAGE: &str = "\
commands:
  filter [cat=<label>]... [from=<price>] [to=<price>] [discount]
  sort <price_asc|price_desc|rating>
  more
  add <product id>
  categories
  cart
  help
  quit";

/// Parse one input line; blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, InputError> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "filter" => ShellCommand::Catalog(CatalogCommand::SubmitFilters(parse_filter(args)?)),
        "sort" => {
            let mode = args.first().ok_or(InputError::MissingArgument("sort"))?;
            let mode: SortMode = match mode.parse() {
                Ok(mode) => mode,
                Err(never) => match never {},
            };
            ShellCommand::Catalog(CatalogCommand::ChangeSort(mode))
        }
        "more" => ShellCommand::Catalog(CatalogCommand::LoadMore),
        "add" => {
            let id = args.first().ok_or(InputError::MissingArgument("add"))?;
            ShellCommand::Catalog(CatalogCommand::AddToCart(id.parse::<ProductId>()?))
        }
        "categories" => ShellCommand::Categories,
        "cart" => ShellCommand::Cart,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(InputError::UnknownCommand(head.clone())),
    };

    Ok(Some(command))
}

fn parse_filter(args: &[String]) -> Result<FilterForm, InputError> {
    let mut form = FilterForm::default();

    for arg in args {
        match arg.split_once('=') {
            Some(("cat", label)) => form.categories.push(label.to_string()),
            Some(("from", value)) => form.price_from = value.to_string(),
            Some(("to", value)) => form.price_to = value.to_string(),
            None if arg == "discount" => form.discount = true,
            _ => return Err(InputError::UnknownFilterOption(arg.clone())),
        }
    }

    Ok(form)
}

/// Split on whitespace, keeping double-quoted runs together (quotes dropped).
fn tokenize(line: &str) -> Result<Vec<String>, InputError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(core::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(InputError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}
