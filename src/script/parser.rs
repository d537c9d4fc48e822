use std::collections::VecDeque;

use arrayc_core::{Pointer, Value};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::{Op, Script, ScriptError, Span, Spanned};

#[derive(Parser)]
#[grammar = "script/ops.pest"]
struct OpsParser;

/// Parses a `;`-separated operation script.
pub fn parse(source: &str) -> Result<Script, ScriptError> {
    let mut pairs = OpsParser::parse(Rule::script, source).map_err(convert_pest_error)?;
    let Some(script) = pairs.next() else {
        return Ok(Script::default());
    };

    let ops = script
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::op)
        .map(parse_op)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Script { ops })
}

/// Parses a comma-separated list of literals, e.g. the initial contents of an
/// array.
pub fn parse_values(source: &str) -> Result<Vec<Spanned<Value>>, ScriptError> {
    let mut pairs = OpsParser::parse(Rule::values, source).map_err(convert_pest_error)?;
    let Some(values) = pairs.next() else {
        return Ok(Vec::new());
    };

    values
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| {
            let span = Span::from(pair.as_span());
            match parse_argument(pair)? {
                Argument::Literal(node) => Ok(Spanned { node, span }),
                Argument::Word(word) => Err(ScriptError::syntax(
                    format!("expected a literal, found `{word}`"),
                    span,
                )),
            }
        })
        .collect()
}

fn convert_pest_error(error: pest::error::Error<Rule>) -> ScriptError {
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };
    let error = error.renamed_rules(|rule| {
        match rule {
            Rule::EOI => "end of input",
            Rule::op => "operation",
            Rule::word => "name",
            Rule::boolean => "boolean",
            Rule::null => "null",
            Rule::pointer => "pointer",
            Rule::float => "float",
            Rule::integer => "integer",
            Rule::string => "string",
            Rule::bytes => "bytes",
            _ => "token",
        }
        .to_string()
    });
    ScriptError::syntax(error.variant.message().into_owned(), span)
}

enum Argument {
    Literal(Value),
    Word(String),
}

fn parse_argument(pair: Pair<'_, Rule>) -> Result<Argument, ScriptError> {
    let span = Span::from(pair.as_span());
    let text = pair.as_str();
    let invalid =
        |what: &str| ScriptError::syntax(format!("invalid {what} literal `{text}`"), span.clone());

    let value = match pair.as_rule() {
        Rule::word => return Ok(Argument::Word(text.to_string())),
        Rule::boolean => Value::Bool(text == "true"),
        Rule::null => Value::Pointer(Pointer::NULL),
        Rule::pointer => usize::from_str_radix(&text[2..], 16)
            .map(|addr| Value::Pointer(Pointer(addr)))
            .map_err(|_| invalid("pointer"))?,
        Rule::integer => text.parse().map(Value::Int).map_err(|_| invalid("integer"))?,
        Rule::float => text.parse().map(Value::Float).map_err(|_| invalid("float"))?,
        Rule::string => {
            let bytes = unescape(&text[1..text.len() - 1]).ok_or_else(|| invalid("string"))?;
            let text = String::from_utf8(bytes).map_err(|_| invalid("string"))?;
            Value::Text(text)
        }
        Rule::bytes => {
            let bytes = unescape(&text[2..text.len() - 1]).ok_or_else(|| invalid("bytes"))?;
            Value::Bytes(bytes)
        }
        _ => {
            return Err(ScriptError::syntax(
                format!("unexpected `{text}`"),
                span.clone(),
            ));
        }
    };
    Ok(Argument::Literal(value))
}

/// Resolves `\"`, `\\`, `\n`, `\t`, `\r`, `\0` and `\xHH`.
fn unescape(body: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let byte = match chars.next()? {
            '"' => b'"',
            '\\' => b'\\',
            'n' => b'\n',
            't' => b'\t',
            'r' => b'\r',
            '0' => 0,
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                u8::from_str_radix(&hex, 16).ok()?
            }
            _ => return None,
        };
        out.push(byte);
    }
    Some(out)
}

fn parse_op(pair: Pair<'_, Rule>) -> Result<Spanned<Op>, ScriptError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let Some(name) = inner.next() else {
        return Err(ScriptError::syntax("expected an operation", span));
    };
    let name_span = Span::from(name.as_span());
    let name = name.as_str();

    let items = inner
        .map(|pair| {
            let span = Span::from(pair.as_span());
            parse_argument(pair).map(|node| Spanned { node, span })
        })
        .collect::<Result<VecDeque<_>, _>>()?;
    let mut args = Args {
        op: name,
        span: span.clone(),
        items,
    };

    let node = match name {
        "get" => Op::Get(args.index()?),
        "set" => Op::Set(args.index()?, args.value()?),
        "del" => Op::Del(args.index()?),
        "count" => Op::Count(args.value()?),
        "find" => Op::Find {
            value: args.value()?,
            start: args.position()?,
            stop: args.position()?,
        },
        "pop" => Op::Pop(args.index()?),
        "remove" => Op::Remove(args.value()?),
        "reverse" => Op::Reverse,
        "sort" => Op::Sort {
            descending: args.direction()?,
        },
        "clear" => Op::Clear,
        "expand" => Op::Expand(args.extra()?),
        "update" => Op::Update(args.rest()?),
        "setitems" => Op::SetItems(args.rest()?),
        "len" => Op::Len,
        "show" => Op::Show,
        "repr" => Op::Repr,
        other => {
            return Err(ScriptError::syntax(
                format!("unknown operation `{other}`"),
                name_span,
            ));
        }
    };
    args.finish()?;

    Ok(Spanned { node, span })
}

/// The arguments of one operation, consumed front to back.
struct Args<'a> {
    op: &'a str,
    span: Span,
    items: VecDeque<Spanned<Argument>>,
}

impl Args<'_> {
    fn missing(&self, what: &str) -> ScriptError {
        ScriptError::syntax(format!("`{}` expects {what}", self.op), self.span.clone())
    }

    fn value(&mut self) -> Result<Value, ScriptError> {
        match self.items.pop_front() {
            Some(Spanned {
                node: Argument::Literal(value),
                ..
            }) => Ok(value),
            Some(Spanned {
                node: Argument::Word(word),
                span,
            }) => Err(ScriptError::syntax(
                format!("expected a literal, found `{word}`"),
                span,
            )),
            None => Err(self.missing("a value")),
        }
    }

    fn integer(&mut self, what: &str) -> Result<Option<i64>, ScriptError> {
        let Some(item) = self.items.pop_front() else {
            return Ok(None);
        };
        match item.node {
            Argument::Literal(Value::Int(n)) => Ok(Some(n)),
            _ => Err(ScriptError::syntax(format!("expected {what}"), item.span)),
        }
    }

    fn index(&mut self) -> Result<isize, ScriptError> {
        let span = self.items.front().map(|item| item.span.clone());
        match self.integer("an integer index")? {
            Some(n) => isize::try_from(n)
                .map_err(|_| ScriptError::syntax("index out of range", span.unwrap_or_default())),
            None => Err(self.missing("an index")),
        }
    }

    fn position(&mut self) -> Result<Option<usize>, ScriptError> {
        let span = self.items.front().map(|item| item.span.clone());
        self.integer("a non-negative position")?
            .map(|n| {
                usize::try_from(n).map_err(|_| {
                    ScriptError::syntax(
                        "expected a non-negative position",
                        span.unwrap_or_default(),
                    )
                })
            })
            .transpose()
    }

    fn extra(&mut self) -> Result<Option<isize>, ScriptError> {
        let span = self.items.front().map(|item| item.span.clone());
        self.integer("an extra length")?
            .map(|n| {
                isize::try_from(n).map_err(|_| {
                    ScriptError::syntax("extra length out of range", span.unwrap_or_default())
                })
            })
            .transpose()
    }

    fn direction(&mut self) -> Result<bool, ScriptError> {
        let Some(item) = self.items.pop_front() else {
            return Ok(false);
        };
        match &item.node {
            Argument::Word(word) if word == "asc" => Ok(false),
            Argument::Word(word) if word == "desc" => Ok(true),
            _ => Err(ScriptError::syntax("expected `asc` or `desc`", item.span)),
        }
    }

    fn rest(&mut self) -> Result<Vec<Value>, ScriptError> {
        let mut values = Vec::with_capacity(self.items.len());
        while !self.items.is_empty() {
            values.push(self.value()?);
        }
        Ok(values)
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.items.pop_front() {
            Some(extra) => Err(ScriptError::syntax(
                format!("too many arguments for `{}`", self.op),
                extra.span,
            )),
            None => Ok(()),
        }
    }
}
