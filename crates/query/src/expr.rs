//! Query expressions
//!
//! A [`Query`] is an immutable tree. Leaves are [`Query::Void`] (no code
//! points), [`Query::Universe`] (all code points), and property predicates.
//! Inner nodes apply an [`Operator`] to their children. Nothing touches a
//! database until [`Query::materialize`].

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};
use tracing::debug;
use ucdb_core::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, CodePointSet, EastAsianWidth, Error,
    GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, IndicSyllabicCategory, Predicate,
    Result, Script,
};

use crate::source::PropertySource;

/// Set operator of an application node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Intersection
    And,
    /// Union
    Or,
    /// Difference, left to right
    Sub,
    /// Complement, unary
    Invert,
}

impl Operator {
    /// Infix or prefix token for display
    pub fn token(self) -> &'static str {
        match self {
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Sub => "-",
            Operator::Invert => "~",
        }
    }

    /// Check whether the operator takes exactly one argument
    pub fn is_unary(self) -> bool {
        self == Operator::Invert
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Query expression over property predicates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// Matches nothing
    Void,
    /// Matches every code point
    Universe,
    /// Matches the code points satisfying a predicate
    Prop(Predicate),
    /// Operator applied to sub-expressions
    App(Operator, Vec<Query>),
}

// ============================================================================
// Builders
// ============================================================================

/// Intersection of the arguments
pub fn and_of<I>(args: I) -> Query
where
    I: IntoIterator,
    I::Item: Into<Query>,
{
    Query::App(Operator::And, args.into_iter().map(Into::into).collect())
}

/// Union of the arguments
pub fn or_of<I>(args: I) -> Query
where
    I: IntoIterator,
    I::Item: Into<Query>,
{
    Query::App(Operator::Or, args.into_iter().map(Into::into).collect())
}

/// First argument minus all others
pub fn sub_of<I>(args: I) -> Query
where
    I: IntoIterator,
    I::Item: Into<Query>,
{
    Query::App(Operator::Sub, args.into_iter().map(Into::into).collect())
}

/// Complement of the argument
pub fn not_of(arg: impl Into<Query>) -> Query {
    Query::App(Operator::Invert, vec![arg.into()])
}

impl Query {
    /// Check whether this node applies the operator
    pub fn applies(&self, op: Operator) -> bool {
        matches!(self, Query::App(actual, _) if *actual == op)
    }

    /// Sub-expressions; empty for leaves
    pub fn args(&self) -> &[Query] {
        match self {
            Query::App(_, args) => args,
            _ => &[],
        }
    }

    // ========================================================================
    // Simplification
    // ========================================================================

    /// One normalization pass, bottom-up
    ///
    /// Flattens nested applications of the same operator, drops duplicate
    /// and identity arguments, resolves absorbing arguments, collapses
    /// single-argument applications, and cancels double negation. The result
    /// matches the same code points as `self`.
    pub fn simplify(&self) -> Query {
        match self {
            Query::Void | Query::Universe | Query::Prop(_) => self.clone(),
            Query::App(Operator::Invert, args) => match args.as_slice() {
                [Query::App(Operator::Invert, inner)] if inner.len() == 1 => inner[0].simplify(),
                [arg] => not_of(arg.simplify()),
                _ => self.clone(),
            },
            Query::App(Operator::Sub, args) => simplify_difference(args, self),
            Query::App(op, args) => simplify_lattice(*op, args),
        }
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Evaluate the query against a property source
    ///
    /// Complements are taken over the full code point range, so a query
    /// that is just [`Query::Universe`] or an inversion yields sets of about
    /// 1.1 million code points. They are stored as ranges all the same.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` for an application without arguments or an
    /// inversion with more than one, and any error the source reports.
    pub fn materialize<S>(&self, source: &S) -> Result<CodePointSet>
    where
        S: PropertySource + ?Sized,
    {
        let set = self.evaluate(source)?;
        debug!(target: "ucdb::query", query = %self, count = set.len(), "Materialized query");
        Ok(set)
    }

    fn evaluate<S>(&self, source: &S) -> Result<CodePointSet>
    where
        S: PropertySource + ?Sized,
    {
        match self {
            Query::Void => Ok(CodePointSet::new()),
            Query::Universe => Ok(CodePointSet::all()),
            Query::Prop(predicate) => source.codepoints_of(*predicate),
            Query::App(Operator::Invert, args) => match args.as_slice() {
                [arg] => Ok(arg.evaluate(source)?.complement()),
                _ => Err(Error::InvalidOperation(format!(
                    "~ takes one argument but has {}",
                    args.len()
                ))),
            },
            Query::App(op, args) => {
                let (first, rest) = args.split_first().ok_or_else(|| {
                    Error::InvalidOperation(format!("{op} requires at least one argument"))
                })?;
                let mut total = first.evaluate(source)?;
                for arg in rest {
                    let next = arg.evaluate(source)?;
                    total = match op {
                        Operator::And => total.intersection(&next),
                        Operator::Or => total.union(&next),
                        _ => total.difference(&next),
                    };
                }
                Ok(total)
            }
        }
    }
}

fn push_unique(args: &mut Vec<Query>, arg: Query) {
    if !args.contains(&arg) {
        args.push(arg);
    }
}

fn collapse(op: Operator, mut args: Vec<Query>) -> Query {
    if args.len() == 1 {
        args.swap_remove(0)
    } else {
        Query::App(op, args)
    }
}

/// Simplify a union or intersection
fn simplify_lattice(op: Operator, args: &[Query]) -> Query {
    let (identity, absorbing) = match op {
        Operator::And => (Query::Universe, Query::Void),
        _ => (Query::Void, Query::Universe),
    };

    let mut flat = Vec::with_capacity(args.len());
    for arg in args.iter().map(Query::simplify) {
        match arg {
            Query::App(nested, inner) if nested == op => {
                for arg in inner {
                    push_unique(&mut flat, arg);
                }
            }
            arg => push_unique(&mut flat, arg),
        }
    }

    if flat.contains(&absorbing) {
        return absorbing;
    }
    flat.retain(|arg| *arg != identity);
    if flat.is_empty() {
        return identity;
    }
    collapse(op, flat)
}

/// Simplify a difference; only the minuend flattens
fn simplify_difference(args: &[Query], original: &Query) -> Query {
    let mut args = args.iter().map(Query::simplify);
    let Some(first) = args.next() else {
        return original.clone();
    };

    let mut flat = match first {
        Query::App(Operator::Sub, inner) => inner,
        Query::Void => return Query::Void,
        first => vec![first],
    };
    for arg in args {
        match arg {
            Query::Void => {}
            Query::Universe => return Query::Void,
            arg => flat.push(arg),
        }
    }
    collapse(Operator::Sub, flat)
}

// ============================================================================
// Display
// ============================================================================

struct Grouped<'a>(&'a Query, bool);

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Void => f.write_str("⊥"),
            Query::Universe => f.write_str("⊤"),
            Query::Prop(predicate) => write!(f, "{predicate}"),
            Query::App(Operator::Invert, args) => {
                for arg in args {
                    let grouped = matches!(arg, Query::App(op, _) if !op.is_unary());
                    write!(f, "~{}", Grouped(arg, grouped))?;
                }
                Ok(())
            }
            Query::App(op, args) => {
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, " {op} ")?;
                    }
                    let grouped = match op {
                        Operator::And => arg.applies(Operator::Or) || arg.applies(Operator::Sub),
                        Operator::Or => arg.applies(Operator::Sub),
                        _ => matches!(arg, Query::App(inner, _) if !inner.is_unary()),
                    };
                    write!(f, "{}", Grouped(arg, grouped))?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Conversions and operator sugar
// ============================================================================

impl From<Predicate> for Query {
    fn from(predicate: Predicate) -> Self {
        Query::Prop(predicate)
    }
}

macro_rules! query_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Query {
                fn from(value: $ty) -> Self {
                    Query::Prop(Predicate::from(value))
                }
            }
        )*
    };
}

query_from! {
    BinaryProperty,
    Age,
    Block,
    CanonicalCombiningClass,
    EastAsianWidth,
    GeneralCategory,
    GraphemeClusterBreak,
    IndicConjunctBreak,
    IndicSyllabicCategory,
    Script,
}

impl<R: Into<Query>> BitAnd<R> for Query {
    type Output = Query;

    fn bitand(self, rhs: R) -> Query {
        and_of([self, rhs.into()])
    }
}

impl<R: Into<Query>> BitOr<R> for Query {
    type Output = Query;

    fn bitor(self, rhs: R) -> Query {
        or_of([self, rhs.into()])
    }
}

impl<R: Into<Query>> Sub<R> for Query {
    type Output = Query;

    fn sub(self, rhs: R) -> Query {
        sub_of([self, rhs.into()])
    }
}

impl Not for Query {
    type Output = Query;

    fn not(self) -> Query {
        not_of(self)
    }
}
