//! 按空白分隔的 token 流，记录每个 token 所在行。

use std::str::FromStr;

use super::error::ParseError;

pub(crate) struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self { tokens, pos: 0 }
    }

    /// 下一个 token 的行号（输入结束时取最后一行）
    pub(crate) fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |(l, _)| *l)
    }

    pub(crate) fn word(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        let line = self.line();
        let (_, tok) = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(ParseError::UnexpectedEof { line, what })?;
        self.pos += 1;
        Ok(tok)
    }

    pub(crate) fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T, ParseError> {
        let line = self.line();
        let tok = self.word(what)?;
        tok.parse().map_err(|_| ParseError::InvalidNumber {
            line,
            what,
            token: tok.to_string(),
        })
    }

    /// 确认没有多余的 token
    pub(crate) fn finish(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            Some((line, tok)) => Err(ParseError::Trailing {
                line: *line,
                token: tok.to_string(),
            }),
            None => Ok(()),
        }
    }
}
