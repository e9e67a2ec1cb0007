//! Operation descriptors.
//!
//! A descriptor is the unit of the catalog: one operator or function with
//! its display form, ordered parameter slots, produced type category,
//! attached cross-parameter rules, and a sampling-priority tier.
//! Construction is the only mutating phase; once registered a descriptor
//! never changes.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use opdiff_error::{CatalogError, Result};
use opdiff_types::{ArgumentProfile, TypeCategory};

use crate::param::NumericParam;
use crate::rule::CrossParamRule;

/// How an operation is written in generated SQL.
///
/// A sum type rather than a trait hierarchy: the generator pattern-matches
/// display rendering without virtual dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationForm {
    /// Infix/prefix pattern with one `$` placeholder per required operand,
    /// e.g. `"$ + $"` or `"~$"`.
    Operator { pattern: String },
    /// Named function call, e.g. `"ROUND"`.
    Function { name: String },
}

impl OperationForm {
    /// The pattern or function name, whichever this form carries.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Operator { pattern } => pattern,
            Self::Function { name } => name,
        }
    }
}

impl fmt::Display for OperationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Sampling-priority tier of an operation.
///
/// Relevance guides how much generation effort an operation deserves and
/// nothing else: legality checks must never read it. `Low` is reserved for
/// operations whose behaviour is secondary or redundant with another entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    /// Default tier.
    #[default]
    High,
    /// Secondary or redundant operations.
    Low,
}

impl Relevance {
    /// Stable lowercase name used in serialized catalogs and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable metadata record for one operator or function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    form: OperationForm,
    params: Vec<NumericParam>,
    returns: TypeCategory,
    rules: BTreeSet<CrossParamRule>,
    relevance: Relevance,
}

impl OperationDescriptor {
    /// Build an operator descriptor from a `$`-placeholder pattern.
    ///
    /// Fails fast when the pattern is empty, when no parameters are
    /// declared, when a required slot follows an optional one, or when the
    /// `$` count disagrees with the number of required slots.
    pub fn operator(
        pattern: &str,
        params: Vec<NumericParam>,
        returns: TypeCategory,
    ) -> Result<Self> {
        let form = OperationForm::Operator {
            pattern: pattern.to_owned(),
        };
        validate(&form, &params)?;
        Ok(Self {
            form,
            params,
            returns,
            rules: BTreeSet::new(),
            relevance: Relevance::default(),
        })
    }

    /// Build a function descriptor from a call name.
    ///
    /// Fails fast when the name is empty, when no parameters are declared,
    /// or when a required slot follows an optional one.
    pub fn function(
        name: &str,
        params: Vec<NumericParam>,
        returns: TypeCategory,
    ) -> Result<Self> {
        let form = OperationForm::Function {
            name: name.to_owned(),
        };
        validate(&form, &params)?;
        Ok(Self {
            form,
            params,
            returns,
            rules: BTreeSet::new(),
            relevance: Relevance::default(),
        })
    }

    /// Attach a cross-parameter rule. Idempotent for a given rule.
    #[must_use]
    pub fn with_rule(mut self, rule: CrossParamRule) -> Self {
        self.rules.insert(rule);
        self
    }

    /// Override the sampling tier.
    #[must_use]
    pub fn with_relevance(mut self, relevance: Relevance) -> Self {
        self.relevance = relevance;
        self
    }

    /// The display form.
    #[must_use]
    pub fn form(&self) -> &OperationForm {
        &self.form
    }

    /// The pattern or function name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.form.display_name()
    }

    /// Ordered parameter slots.
    #[must_use]
    pub fn params(&self) -> &[NumericParam] {
        &self.params
    }

    /// Number of non-optional slots.
    #[must_use]
    pub fn required_params(&self) -> usize {
        self.params.iter().filter(|p| !p.is_optional()).count()
    }

    /// The type category this operation produces.
    #[must_use]
    pub fn returns(&self) -> TypeCategory {
        self.returns
    }

    /// Attached cross-parameter rules.
    #[must_use]
    pub fn rules(&self) -> &BTreeSet<CrossParamRule> {
        &self.rules
    }

    /// Sampling tier.
    #[must_use]
    pub fn relevance(&self) -> Relevance {
        self.relevance
    }

    /// Substitute rendered operand strings into the display form.
    ///
    /// Operators replace their `$` placeholders in order (placeholders
    /// without a supplied operand are left verbatim); functions emit a
    /// call with the supplied operands comma-joined.
    #[must_use]
    pub fn render(&self, args: &[String]) -> String {
        match &self.form {
            OperationForm::Operator { pattern } => {
                let mut out = String::with_capacity(pattern.len() + args.len() * 8);
                let mut next = 0usize;
                for ch in pattern.chars() {
                    if ch == '$' {
                        match args.get(next) {
                            Some(arg) => out.push_str(arg),
                            None => out.push(ch),
                        }
                        next += 1;
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
            OperationForm::Function { name } => format!("{name}({})", args.join(", ")),
        }
    }

    /// Whether the fully specified assignment is legal for this operation.
    ///
    /// Every slot check runs first (a missing required argument or a slot
    /// violation rejects immediately), then every attached rule examines
    /// the whole vector. More supplied arguments than declared slots is an
    /// illegal combination, not an error. Pure and total.
    #[must_use]
    pub fn accepts_combination(&self, args: &[Option<ArgumentProfile>]) -> bool {
        if args.len() > self.params.len() {
            return false;
        }
        for (idx, param) in self.params.iter().enumerate() {
            let candidate = args.get(idx).and_then(Option::as_ref);
            if !param.accepts(candidate) {
                return false;
            }
        }
        self.rules.iter().all(|rule| rule.permits(args))
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form)
    }
}

fn validate(form: &OperationForm, params: &[NumericParam]) -> Result<()> {
    if form.display_name().is_empty() {
        return Err(CatalogError::EmptyDisplayForm);
    }
    if params.is_empty() {
        return Err(CatalogError::NoParameters {
            operation: form.display_name().to_owned(),
        });
    }
    let mut seen_optional = false;
    for (position, param) in params.iter().enumerate() {
        if param.is_optional() {
            seen_optional = true;
        } else if seen_optional {
            return Err(CatalogError::RequiredAfterOptional {
                operation: form.display_name().to_owned(),
                position,
            });
        }
    }
    if let OperationForm::Operator { pattern } = form {
        let placeholders = pattern.matches('$').count();
        let required = params.iter().filter(|p| !p.is_optional()).count();
        if placeholders != required {
            return Err(CatalogError::PlaceholderMismatch {
                pattern: pattern.clone(),
                placeholders,
                required,
            });
        }
    }
    Ok(())
}
