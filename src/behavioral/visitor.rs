//! Visitor: new operations over media items without touching the item types.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Visitor {
    fn visit_book(&self, book: &Book) -> String;
    fn visit_movie(&self, movie: &Movie) -> String;
}

pub trait Media {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Media for Book {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_book(self)
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub director: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
        }
    }
}

impl Media for Movie {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_movie(self)
    }
}

pub struct ShortSummaryVisitor;

impl Visitor for ShortSummaryVisitor {
    fn visit_book(&self, book: &Book) -> String {
        format!("Book: {} by {}", book.title, book.author)
    }

    fn visit_movie(&self, movie: &Movie) -> String {
        format!("Movie: {} directed by {}", movie.title, movie.director)
    }
}

pub struct LongSummaryVisitor;

impl Visitor for LongSummaryVisitor {
    fn visit_book(&self, book: &Book) -> String {
        format!(
            "Book: {} by {}. This is a great book about {}.",
            book.title, book.author, book.title
        )
    }

    fn visit_movie(&self, movie: &Movie) -> String {
        format!(
            "Movie: {} directed by {}. This is a great movie about {}.",
            movie.title, movie.director, movie.title
        )
    }
}

pub struct VisitorPattern;

impl Pattern for VisitorPattern {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn title(&self) -> &'static str {
        "Visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Short and long summary visitors walk books and movies"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let media: Vec<Box<dyn Media>> = vec![
            Box::new(Book::new("The Catcher in the Rye", "J.D. Salinger")),
            Box::new(Movie::new("The Godfather", "Francis Ford Coppola")),
        ];
        let visitors: [&dyn Visitor; 2] = [&ShortSummaryVisitor, &LongSummaryVisitor];

        for item in &media {
            for visitor in visitors {
                writeln!(out, "{}", item.accept(visitor))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A visitor that computes instead of printing.
    struct TitleLength;

    impl Visitor for TitleLength {
        fn visit_book(&self, book: &Book) -> String {
            book.title.len().to_string()
        }

        fn visit_movie(&self, movie: &Movie) -> String {
            movie.title.len().to_string()
        }
    }

    #[test]
    fn test_new_operation_without_changing_media() {
        let movie = Movie::new("Heat", "Michael Mann");
        assert_eq!(movie.accept(&TitleLength), "4");
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        VisitorPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Book: The Catcher in the Rye by J.D. Salinger\n\
             Book: The Catcher in the Rye by J.D. Salinger. This is a great book about The Catcher in the Rye.\n\
             Movie: The Godfather directed by Francis Ford Coppola\n\
             Movie: The Godfather directed by Francis Ford Coppola. This is a great movie about The Godfather.\n"
        );
    }
}
