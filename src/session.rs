pub mod controller;
pub mod factory;

use std::fmt;
use std::fmt::{Display, Formatter};

// MenuSelection is the token read from the selection prompt
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuSelection {
    AddBook,
    RemoveBook,
    SearchBook,
    ListBooks,
    Exit,
    Unknown,
}

impl From<String> for MenuSelection {
    fn from(s: String) -> Self {
        match s.as_str() {
            "1" => MenuSelection::AddBook,
            "2" => MenuSelection::RemoveBook,
            "3" => MenuSelection::SearchBook,
            "4" => MenuSelection::ListBooks,
            "5" => MenuSelection::Exit,
            _ => MenuSelection::Unknown,
        }
    }
}

impl Display for MenuSelection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuSelection::AddBook => write!(f, "AddBook"),
            MenuSelection::RemoveBook => write!(f, "RemoveBook"),
            MenuSelection::SearchBook => write!(f, "SearchBook"),
            MenuSelection::ListBooks => write!(f, "ListBooks"),
            MenuSelection::Exit => write!(f, "Exit"),
            MenuSelection::Unknown => write!(f, "Unknown"),
        }
    }
}
