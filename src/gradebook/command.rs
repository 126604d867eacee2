//! Token reader and command keywords for the record store
//!
//! The input is one flat whitespace-delimited token stream, not a
//! line-oriented format: a command keyword is followed by its fixed-arity
//! arguments, and handlers pull arguments off the same reader the dispatcher
//! pulls keywords from. A handler that bails out early leaves its unread
//! arguments in the stream, where the dispatcher skips them as unrecognized
//! keywords.

use super::errors::{InputError, Result};

/// All recognized command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    AddStudent,
    AddExam,
    AddGrade,
    UpdateExam,
    UpdateGrade,
    SearchStudent,
    SearchGrade,
    DeleteStudent,
    ListAllStudents,
    End,
}

impl Keyword {
    /// Map a token to its keyword, or `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Keyword> {
        match token {
            "ADD_STUDENT" => Some(Keyword::AddStudent),
            "ADD_EXAM" => Some(Keyword::AddExam),
            "ADD_GRADE" => Some(Keyword::AddGrade),
            "UPDATE_EXAM" => Some(Keyword::UpdateExam),
            "UPDATE_GRADE" => Some(Keyword::UpdateGrade),
            "SEARCH_STUDENT" => Some(Keyword::SearchStudent),
            "SEARCH_GRADE" => Some(Keyword::SearchGrade),
            "DELETE_STUDENT" => Some(Keyword::DeleteStudent),
            "LIST_ALL_STUDENTS" => Some(Keyword::ListAllStudents),
            "END" => Some(Keyword::End),
            _ => None,
        }
    }
}

/// Cursor over the whitespace-delimited token stream.
pub struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenReader {
            tokens: input.split_whitespace(),
        }
    }

    /// Next token, or `None` at end of stream. Used by the dispatcher, for
    /// which running out of input simply ends the run.
    pub fn next_keyword_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    /// Next token as a command argument; end of stream here is an error.
    pub fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or(InputError::UnexpectedEnd { expected })
    }

    /// Next token parsed as an integer argument.
    pub fn next_i32(&mut self, expected: &'static str) -> Result<i32> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            expected,
            token: token.to_string(),
        })
    }
}
