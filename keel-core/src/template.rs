use crate::{Dictionary, Error, FilterValue, Result, SqlBuffer};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// SQL function template with positional placeholders: `LTRIM({0})`, `({0} || {1})`.
///
/// The text is not validated when created, a malformed template or a placeholder without a
/// matching operand fails when the template is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(Cow<'static, str>);

enum Piece<'a> {
    Text(&'a str),
    Placeholder(usize),
}

impl Template {
    pub const fn new_static(source: &'static str) -> Self {
        Self(Cow::Borrowed(source))
    }

    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    fn pieces(&self) -> Result<Vec<Piece<'_>>> {
        let source = self.source();
        let mut pieces = Vec::new();
        let mut rest = source;
        while let Some(open) = rest.find('{') {
            if open > 0 {
                pieces.push(Piece::Text(&rest[..open]));
            }
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                return Err(Error::msg(format!(
                    "Unterminated placeholder in template `{}`",
                    source
                )));
            };
            let index = after[..close].trim().parse::<usize>().map_err(|_| {
                Error::msg(format!(
                    "Invalid placeholder `{{{}}}` in template `{}`",
                    &after[..close],
                    source
                ))
            })?;
            pieces.push(Piece::Placeholder(index));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            pieces.push(Piece::Text(rest));
        }
        Ok(pieces)
    }

    /// Highest placeholder index referenced plus one.
    pub fn arity(&self) -> Result<usize> {
        Ok(self
            .pieces()?
            .iter()
            .filter_map(|p| match p {
                Piece::Placeholder(i) => Some(i + 1),
                Piece::Text(..) => None,
            })
            .max()
            .unwrap_or(0))
    }

    /// Substitute the operands into the template and append the result.
    ///
    /// The buffer is left untouched when the template cannot be written.
    pub fn write(
        &self,
        dictionary: &dyn Dictionary,
        out: &mut SqlBuffer,
        args: &[&dyn FilterValue],
    ) -> Result<()> {
        let arity = self.arity()?;
        if arity > args.len() {
            return Err(Error::msg(format!(
                "Template `{}` references placeholder {{{}}} but only {} operand(s) were supplied",
                self.source(),
                arity - 1,
                args.len()
            )));
        }
        for piece in self.pieces()? {
            match piece {
                Piece::Text(text) => {
                    out.append(text);
                }
                Piece::Placeholder(i) => {
                    out.append_operand(dictionary, args[i]);
                }
            }
        }
        Ok(())
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Template {
    fn from(value: &'static str) -> Self {
        Template::new_static(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::new(value)
    }
}
