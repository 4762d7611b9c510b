use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::log::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{io_to_session_error, SessionError};
use crate::session::MenuSelection;

// Session translates menu selections read from the reader into catalog
// commands and reports outcomes on the writer. One instance drives the whole
// process lifetime.
pub(crate) struct Session<R, W> {
    catalog_service: Arc<dyn CatalogService>,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            catalog_service,
            reader,
            writer,
        }
    }

    pub(crate) async fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.render_menu()?;
            let choice = match self.read_line()? {
                Some(line) => line,
                // closed input ends the session like an explicit exit
                None => return Ok(()),
            };
            let selection = MenuSelection::from(choice);
            debug!("dispatching {}", selection);
            match selection {
                MenuSelection::AddBook => self.add_book_menu().await?,
                MenuSelection::RemoveBook => self.remove_book_menu().await?,
                MenuSelection::SearchBook => self.search_book_menu().await?,
                MenuSelection::ListBooks => self.list_books_menu().await?,
                MenuSelection::Exit => return Ok(()),
                MenuSelection::Unknown => {
                    self.write_line("Invalid selection. Try again.")?;
                }
            }
        }
    }

    async fn add_book_menu(&mut self) -> Result<(), SessionError> {
        let kind = self.prompt("Enter book type (1 for Book, 2 for EBook): ")?;
        let title = self.prompt("Title: ")?;
        let author = self.prompt("Author: ")?;
        let isbn = self.prompt("ISBN: ")?;
        let available = self.prompt("Available (true/false): ")?;
        // any type token other than "2" selects the base kind
        let file_size = if kind == "2" {
            Some(self.prompt("File Size (MB): ")?)
        } else {
            None
        };
        let req = AddBookCommandRequest::parse(title.as_str(), author.as_str(), isbn.as_str(),
                                               available.as_str(), file_size.as_deref())?;
        let _ = AddBookCommand::new(self.catalog_service.clone()).execute(req).await?;
        self.write_line("Book added successfully.")
    }

    async fn remove_book_menu(&mut self) -> Result<(), SessionError> {
        let isbn = self.prompt("Enter ISBN of the book to remove: ")?;
        // removal of an unknown isbn is a silent no-op, reported the same way
        let _ = RemoveBookCommand::new(self.catalog_service.clone())
            .execute(RemoveBookCommandRequest::new(isbn)).await?;
        self.write_line("Book removed successfully.")
    }

    async fn search_book_menu(&mut self) -> Result<(), SessionError> {
        let title = self.prompt("Enter the title of the book to search: ")?;
        let res = SearchBookCommand::new(self.catalog_service.clone())
            .execute(SearchBookCommandRequest::new(title)).await?;
        match res.book {
            Some(book) => self.write_line(format!("Book found: {}", book).as_str()),
            None => self.write_line("Book not found."),
        }
    }

    async fn list_books_menu(&mut self) -> Result<(), SessionError> {
        let res = ListBooksCommand::new(self.catalog_service.clone())
            .execute(ListBooksCommandRequest::new()).await?;
        for book in res.books {
            self.write_line(book.to_string().as_str())?;
        }
        Ok(())
    }

    fn render_menu(&mut self) -> Result<(), SessionError> {
        self.write_line("\nLibrary Menu:")?;
        self.write_line("1. Add Book")?;
        self.write_line("2. Remove Book")?;
        self.write_line("3. Search Book")?;
        self.write_line("4. List Books")?;
        self.write_line("5. Exit")?;
        self.write_prompt("Select an option: ")
    }

    fn prompt(&mut self, label: &str) -> Result<String, SessionError> {
        self.write_prompt(label)?;
        match self.read_line()? {
            Some(line) => Ok(line),
            None => Err(io_to_session_error(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof, "input closed mid prompt"))),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).map_err(io_to_session_error)?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", text).map_err(io_to_session_error)
    }

    fn write_prompt(&mut self, label: &str) -> Result<(), SessionError> {
        write!(self.writer, "{}", label).map_err(io_to_session_error)?;
        self.writer.flush().map_err(io_to_session_error)
    }
}
